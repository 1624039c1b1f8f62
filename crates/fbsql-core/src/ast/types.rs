//! SQL data type definitions.

use core::fmt;

/// SQL data types.
///
/// [`DataType::to_sql`] gives the standard spelling; a dialect may spell a
/// type differently through [`crate::dialect::Dialect::data_type`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DataType {
    // Integer types
    /// 1-byte integer.
    TinyInt,
    /// 2-byte integer.
    SmallInt,
    /// 4-byte integer.
    Integer,
    /// 8-byte integer.
    LongInt,

    // Floating point
    /// Single precision float.
    Real,
    /// Float with optional binary precision.
    Float(Option<u32>),
    /// Double precision float.
    Double,
    /// Decimal with precision and scale.
    Decimal {
        /// Total number of digits.
        precision: Option<u16>,
        /// Number of digits after decimal point.
        scale: Option<u16>,
    },
    /// Numeric with precision and scale.
    Numeric {
        /// Total number of digits.
        precision: Option<u16>,
        /// Number of digits after decimal point.
        scale: Option<u16>,
    },

    // String types
    /// Fixed-length character string.
    Char(Option<u32>),
    /// Variable-length character string.
    VarChar(u32),
    /// Character large object.
    Clob,

    // Binary types
    /// Binary large object.
    Blob,
    /// Fixed-length bit string, length in bits.
    Bit(u32),
    /// Variable-length bit string, maximum length in bits.
    BitVarying(u32),

    // Date/time types
    /// Date.
    Date,
    /// Time of day.
    Time,
    /// Timestamp.
    Timestamp,

    // Boolean
    /// Boolean.
    Boolean,

    /// Type spelled verbatim.
    Custom(String),
}

impl DataType {
    /// Returns the standard SQL spelling of the data type.
    #[must_use]
    pub fn to_sql(&self) -> String {
        match self {
            Self::TinyInt => String::from("TINYINT"),
            Self::SmallInt => String::from("SMALLINT"),
            Self::Integer => String::from("INTEGER"),
            Self::LongInt => String::from("BIGINT"),
            Self::Real => String::from("REAL"),
            Self::Float(precision) => match precision {
                Some(p) => format!("FLOAT({p})"),
                None => String::from("FLOAT"),
            },
            Self::Double => String::from("DOUBLE PRECISION"),
            Self::Decimal { precision, scale } => numeric("DECIMAL", *precision, *scale),
            Self::Numeric { precision, scale } => numeric("NUMERIC", *precision, *scale),
            Self::Char(len) => match len {
                Some(n) => format!("CHAR({n})"),
                None => String::from("CHAR"),
            },
            Self::VarChar(n) => format!("VARCHAR({n})"),
            Self::Clob => String::from("CLOB"),
            Self::Blob => String::from("BLOB"),
            Self::Bit(n) => format!("BIT({n})"),
            Self::BitVarying(n) => format!("BIT VARYING({n})"),
            Self::Date => String::from("DATE"),
            Self::Time => String::from("TIME"),
            Self::Timestamp => String::from("TIMESTAMP"),
            Self::Boolean => String::from("BOOLEAN"),
            Self::Custom(name) => name.clone(),
        }
    }
}

fn numeric(keyword: &str, precision: Option<u16>, scale: Option<u16>) -> String {
    match (precision, scale) {
        (Some(p), Some(s)) => format!("{keyword}({p}, {s})"),
        (Some(p), None) => format!("{keyword}({p})"),
        _ => String::from(keyword),
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_type_to_sql() {
        assert_eq!(DataType::Integer.to_sql(), "INTEGER");
        assert_eq!(DataType::VarChar(255).to_sql(), "VARCHAR(255)");
        assert_eq!(DataType::BitVarying(128).to_sql(), "BIT VARYING(128)");
        assert_eq!(
            DataType::Decimal {
                precision: Some(10),
                scale: Some(2)
            }
            .to_sql(),
            "DECIMAL(10, 2)"
        );
        assert_eq!(DataType::Custom(String::from("INTERVAL")).to_string(), "INTERVAL");
    }
}

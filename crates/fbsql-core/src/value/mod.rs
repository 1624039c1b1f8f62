//! The database value model.
//!
//! Every value crossing the driver boundary is a [`Value`], a closed tagged
//! union. Native Rust types move in and out of it through the
//! [`ValueConvertible`] trait; no coercion happens anywhere else.

mod blob;
mod convert;
mod format;
mod json;

use core::fmt;
use core::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};

pub use blob::{Blob, BlobSource};
pub use convert::{Bit96, ValueConvertible};
pub use format::ValueFormat;
pub use json::Json;

/// A database value.
///
/// Equality and hashing are structural on the tag and the payload. An
/// `Integer(1)` is never equal to a `Float(1.0)` or a `Boolean(true)`;
/// floats compare by bit pattern.
#[derive(Debug, Clone)]
pub enum Value {
    /// SQL NULL.
    Null,
    /// 64-bit signed integer.
    Integer(i64),
    /// 64-bit float.
    Float(f64),
    /// Boolean.
    Boolean(bool),
    /// Character data.
    Text(String),
    /// Opaque binary large object.
    Blob(Blob),
    /// Fixed or varying length bit string, stored as whole bytes.
    Bits(Vec<u8>),
    /// Point in time. The time zone is a rendering concern only.
    Timestamp(DateTime<Utc>),
}

/// The tag of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// See [`Value::Null`].
    Null,
    /// See [`Value::Integer`].
    Integer,
    /// See [`Value::Float`].
    Float,
    /// See [`Value::Boolean`].
    Boolean,
    /// See [`Value::Text`].
    Text,
    /// See [`Value::Blob`].
    Blob,
    /// See [`Value::Bits`].
    Bits,
    /// See [`Value::Timestamp`].
    Timestamp,
}

impl ValueKind {
    /// Returns the lowercase name of the tag.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::Text => "text",
            Self::Blob => "blob",
            Self::Bits => "bits",
            Self::Timestamp => "timestamp",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    /// Returns the tag of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Integer(_) => ValueKind::Integer,
            Self::Float(_) => ValueKind::Float,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Text(_) => ValueKind::Text,
            Self::Blob(_) => ValueKind::Blob,
            Self::Bits(_) => ValueKind::Bits,
            Self::Timestamp(_) => ValueKind::Timestamp,
        }
    }

    /// Returns true if this is SQL NULL.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the SQL representation for inline use (escaped), rendering
    /// timestamps in the zone of `format`.
    ///
    /// Used for logging at the driver boundary. Statements themselves always
    /// carry values as binds.
    #[must_use]
    pub fn render(&self, format: &ValueFormat) -> String {
        match self {
            Self::Null => String::from("NULL"),
            Self::Boolean(b) => {
                if *b {
                    String::from("TRUE")
                } else {
                    String::from("FALSE")
                }
            }
            Self::Integer(n) => format!("{n}"),
            Self::Float(f) => format!("{f}"),
            Self::Text(s) => {
                let escaped = s.replace('\'', "''");
                format!("'{escaped}'")
            }
            Self::Blob(blob) => blob.materialized().map_or_else(
                || format!("<blob {} bytes>", blob.len()),
                |data| format!("X'{}'", hex(data)),
            ),
            Self::Bits(bits) => format!("X'{}'", hex(bits)),
            Self::Timestamp(ts) => format!("TIMESTAMP '{}'", format.format_timestamp(ts)),
        }
    }
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{byte:02X}")).collect()
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Blob(a), Self::Blob(b)) => a == b,
            (Self::Bits(a), Self::Bits(b)) => a == b,
            (Self::Timestamp(a), Self::Timestamp(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind().hash(state);
        match self {
            Self::Null => {}
            Self::Integer(n) => n.hash(state),
            Self::Float(f) => f.to_bits().hash(state),
            Self::Boolean(b) => b.hash(state),
            Self::Text(s) => s.hash(state),
            Self::Blob(blob) => blob.hash(state),
            Self::Bits(bits) => bits.hash(state),
            Self::Timestamp(ts) => ts.hash(state),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&ValueFormat::default()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_equality_is_structural() {
        assert_eq!(Value::Integer(1), Value::Integer(1));
        assert_ne!(Value::Integer(1), Value::Float(1.0));
        assert_ne!(Value::Integer(1), Value::Boolean(true));
        assert_ne!(Value::Text(String::from("1")), Value::Integer(1));
        assert_ne!(Value::Bits(vec![1, 2]), Value::Blob(Blob::new(vec![1, 2])));
        assert_eq!(Value::Float(f64::NAN), Value::Float(f64::NAN));
    }

    #[test]
    fn test_hash_follows_equality() {
        let mut set = HashSet::new();
        set.insert(Value::Integer(7));
        set.insert(Value::Integer(7));
        set.insert(Value::Float(7.0));
        set.insert(Value::Text(String::from("7")));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_inline_rendering() {
        let format = ValueFormat::default();
        assert_eq!(Value::Null.render(&format), "NULL");
        assert_eq!(Value::Boolean(true).render(&format), "TRUE");
        assert_eq!(Value::Integer(-100).render(&format), "-100");
        assert_eq!(
            Value::Text(String::from("O'Brien")).render(&format),
            "'O''Brien'"
        );
        assert_eq!(
            Value::Bits(vec![0x94, 0x71, 0xF1]).render(&format),
            "X'9471F1'"
        );
        assert_eq!(
            Value::Blob(Blob::new(vec![0x48, 0x45])).render(&format),
            "X'4845'"
        );
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Value::Null.kind().to_string(), "null");
        assert_eq!(Value::Bits(vec![]).kind().to_string(), "bits");
        assert!(Value::Null.is_null());
        assert!(!Value::Integer(0).is_null());
    }
}

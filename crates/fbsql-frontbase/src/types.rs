//! Column types for Rust values stored in Frontbase.
//!
//! [`FrontbaseType`] gives the column type a Rust type is stored as, so a
//! table can be declared from the same types its rows decode into:
//!
//! ```rust
//! use fbsql_core::builder::create_table;
//! use fbsql_frontbase::{column, FrontbaseDialect};
//!
//! let statement = create_table("people")
//!     .column(column::<i64>("age"))
//!     .column(column::<Option<String>>("nickname"))
//!     .build();
//! let query = statement.to_sql(&FrontbaseDialect::new());
//! assert_eq!(
//!     query.sql,
//!     "CREATE TABLE \"people\" (\"age\" INTEGER NOT NULL, \
//!      \"nickname\" CHARACTER VARYING(1073741823)); SET UNIQUE=0 FOR \"people\""
//! );
//! ```

use bytes::Bytes;
use chrono::{DateTime, Utc};
use fbsql_core::ast::{ColumnDefinition, DataType};
use fbsql_core::Bit96;
use url::Url;
use uuid::Uuid;

/// Longest string a `CHARACTER VARYING` column is declared with.
pub const MAX_TEXT_LENGTH: u32 = 1_073_741_823;

/// A Rust type with a fixed Frontbase column type.
pub trait FrontbaseType {
    /// The column type.
    const DATA_TYPE: DataType;

    /// Whether the column accepts NULL.
    const NULLABLE: bool = false;
}

macro_rules! frontbase_type {
    ($data_type:expr => $($ty:ty),+ $(,)?) => {
        $(
            impl FrontbaseType for $ty {
                const DATA_TYPE: DataType = $data_type;
            }
        )+
    };
}

frontbase_type!(DataType::Integer => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, bool);
frontbase_type!(DataType::Real => f32, f64);
frontbase_type!(DataType::Timestamp => DateTime<Utc>);
frontbase_type!(DataType::BitVarying(128) => Uuid);
frontbase_type!(DataType::Bit(96) => Bit96);
frontbase_type!(DataType::Blob => Bytes);
frontbase_type!(DataType::VarChar(MAX_TEXT_LENGTH) => String, Url);

impl<T: FrontbaseType> FrontbaseType for Option<T> {
    const DATA_TYPE: DataType = T::DATA_TYPE;
    const NULLABLE: bool = true;
}

/// A column declared with the type `T` is stored as. Non-optional types
/// get `NOT NULL`.
#[must_use]
pub fn column<T: FrontbaseType>(name: impl Into<String>) -> ColumnDefinition {
    let column = ColumnDefinition::new(name, T::DATA_TYPE);
    if T::NULLABLE {
        column
    } else {
        column.not_null()
    }
}

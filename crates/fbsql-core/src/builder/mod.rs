//! Fluent statement builders.
//!
//! Builders use the typestate pattern so that incomplete statements do not
//! compile: a SELECT needs a projection, an INSERT needs a table and a row
//! source, an UPDATE needs a table and at least one assignment. Every
//! builder produces a [`Statement`] that renders through any dialect.
//!
//! # Example
//!
//! ```rust
//! use fbsql_core::builder::{col, Select};
//! use fbsql_core::dialect::GenericDialect;
//!
//! let query = Select::new()
//!     .columns(["id", "name"])
//!     .from("users")
//!     .where_clause(col("active").eq(true))
//!     .order_by("name")
//!     .limit(10)
//!     .build()
//!     .to_sql(&GenericDialect::new());
//!
//! assert_eq!(
//!     query.sql,
//!     r#"SELECT "id", "name" FROM "users" WHERE "active" = ? ORDER BY "name" ASC LIMIT 10"#
//! );
//! ```

mod ddl;
mod delete;
mod expr;
mod insert;
mod select;
mod update;

pub use ddl::{
    alter_table, bigint, blob, boolean, create_index, create_table, double, drop_index,
    drop_table, integer, longint, timestamp, varchar, AlterTableBuilder, CreateIndexBuilder,
    CreateTableBuilder, DropTableBuilder,
};
pub use delete::{Delete, SafeDelete, SafeDeleteWithWhere};
pub use expr::{bind, col, count_all, func, table_col};
pub use insert::Insert;
pub use select::Select;
pub use update::Update;

use crate::ast::Statement;
use crate::value::Value;

/// Wraps SQL text written by hand, with its binds.
///
/// The text is emitted verbatim, so placeholders must already be spelled
/// the way the target dialect expects.
#[must_use]
pub fn raw(sql: impl Into<String>, binds: impl IntoIterator<Item = Value>) -> Statement {
    Statement::Raw {
        sql: sql.into(),
        binds: binds.into_iter().collect(),
    }
}

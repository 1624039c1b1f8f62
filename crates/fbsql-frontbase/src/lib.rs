//! # fbsql-frontbase
//!
//! Frontbase support for `fbsql-core`.
//!
//! # How Frontbase differs from other dialects
//!
//! - **Pagination**: there is no `LIMIT`/`OFFSET`. Row windows are written
//!   `SELECT TOP(start, count) ...` right after the SELECT keyword.
//! - **No FROM-less SELECT**: a query over no table is spelled
//!   `VALUES (expr, ...)`.
//! - **Implicit unique counter**: every table gets a row counter backing
//!   `DEFAULT UNIQUE`. `CREATE TABLE` is followed by `SET UNIQUE=0 FOR t`
//!   so the counter starts at zero.
//! - **Generated keys**: `DEFAULT UNIQUE` for increasing keys,
//!   `DEFAULT NEW_UID` for 12-byte unique identifiers (`BIT(96)`).
//! - **No `IF EXISTS`**: the clause is silently left out of DDL.
//! - **Transactions**: there is no `BEGIN`. Turning auto-commit off opens
//!   a transaction, `COMMIT` or `ROLLBACK` ends it.
//! - **Types**: `LONGINT`, `CHARACTER VARYING(n)`, `BIT VARYING(n)`.
//!
//! ## Example
//!
//! ```rust
//! use fbsql_core::builder::{col, Select};
//! use fbsql_core::Value;
//! use fbsql_frontbase::FrontbaseDialect;
//!
//! let query = Select::new()
//!     .columns(["id", "name"])
//!     .from("users")
//!     .where_clause(col("active").eq(true))
//!     .limit(5)
//!     .build()
//!     .to_sql(&FrontbaseDialect::new());
//!
//! assert_eq!(
//!     query.sql,
//!     r#"SELECT TOP(0, 5) "id", "name" FROM "users" WHERE "active" = ?"#
//! );
//! assert_eq!(query.binds, vec![Value::Boolean(true)]);
//! ```

mod config;
mod dialect;
pub mod session;
pub mod types;

pub use config::{ConfigError, FrontbaseConfig, Storage};
pub use dialect::FrontbaseDialect;
pub use session::{AccessMode, IsolationLevel, LockingMode, SessionMode};
pub use types::{column, FrontbaseType};

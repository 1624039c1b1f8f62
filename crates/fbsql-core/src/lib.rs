//! # fbsql-core
//!
//! A typed SQL abstraction layer that sits between application code and a
//! database driver.
//!
//! This crate provides:
//! - A closed AST for SELECT, INSERT, UPDATE, DELETE and schema statements
//! - A dialect-aware serializer producing SQL text plus positional binds
//! - Typestate builders that refuse to build incomplete statements
//! - A tagged [`Value`] union with checked conversions to native types
//! - Row lookup and structured decoding, with table scoping for joins
//!
//! ## Building and rendering
//!
//! ```rust
//! use fbsql_core::builder::{col, Insert, Select};
//! use fbsql_core::dialect::GenericDialect;
//! use fbsql_core::Value;
//!
//! let dialect = GenericDialect::new();
//!
//! let insert = Insert::new()
//!     .into_table("notes")
//!     .columns(["pinned", "body"])
//!     .values([Value::Boolean(true), Value::Text(String::from("hello"))])
//!     .build()
//!     .to_sql(&dialect);
//! assert_eq!(insert.sql, r#"INSERT INTO "notes" ("pinned", "body") VALUES (?, ?)"#);
//! assert_eq!(
//!     insert.binds,
//!     vec![Value::Boolean(true), Value::Text(String::from("hello"))]
//! );
//!
//! let select = Select::new()
//!     .all()
//!     .from("notes")
//!     .where_clause(col("pinned").eq(true))
//!     .build()
//!     .to_sql(&dialect);
//! assert_eq!(select.sql, r#"SELECT * FROM "notes" WHERE "pinned" = ?"#);
//! ```
//!
//! ## SQL Injection Prevention
//!
//! Values never reach the SQL text. They travel in the bind list and the
//! text only holds placeholders:
//!
//! ```rust
//! use fbsql_core::builder::{col, Select};
//! use fbsql_core::dialect::GenericDialect;
//! use fbsql_core::Value;
//!
//! let user_input = "'; DROP TABLE users; --";
//! let query = Select::new()
//!     .columns(["id"])
//!     .from("users")
//!     .where_clause(col("name").eq(user_input))
//!     .build()
//!     .to_sql(&GenericDialect::new());
//!
//! assert_eq!(query.sql, r#"SELECT "id" FROM "users" WHERE "name" = ?"#);
//! assert_eq!(query.binds, vec![Value::Text(String::from(user_input))]);
//! ```
//!
//! ## Decoding rows
//!
//! ```rust
//! use fbsql_core::{Column, Row, Value};
//!
//! let row = Row::new()
//!     .with(Column::qualified("foo", "id"), Value::Text(String::from("foo")))
//!     .with(Column::qualified("bar", "id"), Value::Text(String::from("bar")));
//!
//! let foo: String = row.decode_column("id").unwrap();
//! assert_eq!(foo, "foo");
//! assert_eq!(
//!     row.first_value("id", Some("bar")),
//!     Some(&Value::Text(String::from("bar")))
//! );
//! ```

pub mod ast;
pub mod builder;
pub mod decode;
pub mod dialect;
pub mod error;
pub mod executor;
pub mod row;
pub mod serializer;
pub mod value;

pub use ast::{Expr, Statement};
pub use builder::{col, Delete, Insert, Select, Update};
pub use decode::{FromRow, RowDecoder};
pub use error::{ConversionError, DecodeError, Error, ExecutionError, Result};
pub use executor::{Executor, QueryExt, TransactionStatement};
pub use row::{Column, Row};
pub use serializer::SerializedQuery;
pub use value::{Bit96, Blob, BlobSource, Json, Value, ValueConvertible, ValueFormat, ValueKind};

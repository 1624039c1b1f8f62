//! Frontbase dialect implementation.

use fbsql_core::ast::{DataType, PrimaryKeyDefault};
use fbsql_core::dialect::{Dialect, PaginationStyle};
use fbsql_core::executor::TransactionStatement;

/// Frontbase dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct FrontbaseDialect;

impl FrontbaseDialect {
    /// Creates a new Frontbase dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for FrontbaseDialect {
    fn name(&self) -> &'static str {
        "frontbase"
    }

    fn supports_if_exists(&self) -> bool {
        false
    }

    fn pagination(&self) -> PaginationStyle {
        PaginationStyle::Top
    }

    fn supports_select_without_from(&self) -> bool {
        false
    }

    fn autoincrement_clause(&self) -> Option<&'static str> {
        Some("DEFAULT UNIQUE")
    }

    fn primary_key_default(&self, default: PrimaryKeyDefault) -> Option<String> {
        match default {
            PrimaryKeyDefault::RowId => None,
            PrimaryKeyDefault::AutoIncrement => self.autoincrement_clause().map(String::from),
            PrimaryKeyDefault::Uid => Some(String::from("DEFAULT NEW_UID")),
        }
    }

    // Every Frontbase table carries an implicit unique row counter.
    fn create_table_epilogue(&self, table: &str) -> Option<String> {
        Some(format!("SET UNIQUE=0 FOR {}", self.quote_identifier(table)))
    }

    fn data_type(&self, data_type: &DataType) -> String {
        match data_type {
            DataType::LongInt => String::from("LONGINT"),
            DataType::VarChar(n) => format!("CHARACTER VARYING({n})"),
            DataType::Char(Some(n)) => format!("CHARACTER({n})"),
            DataType::Char(None) => String::from("CHARACTER"),
            other => other.to_sql(),
        }
    }

    // Disabling auto-commit is what opens a transaction.
    fn transaction_statement(&self, statement: TransactionStatement) -> Option<&'static str> {
        match statement {
            TransactionStatement::Begin => None,
            TransactionStatement::Commit => Some("COMMIT"),
            TransactionStatement::Rollback => Some("ROLLBACK"),
        }
    }
}

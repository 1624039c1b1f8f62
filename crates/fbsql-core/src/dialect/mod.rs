//! SQL Dialect support.
//!
//! Different databases have slightly different SQL syntax. This module provides
//! a trait for dialect-specific behavior, consulted by the serializer at every
//! point where the output text depends on the target database.

mod generic;

pub use generic::GenericDialect;

use crate::ast::{DataType, PrimaryKeyDefault};
use crate::executor::TransactionStatement;

/// How row windows are expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationStyle {
    /// Trailing `LIMIT n OFFSET m`.
    LimitOffset,
    /// `TOP(start, count)` after the SELECT keyword. A missing offset is a
    /// zero start; a missing limit is a count of `i64::MAX`.
    Top,
}

/// Trait for SQL dialect-specific behavior.
pub trait Dialect {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns the identifier quote character (e.g., `"` for standard SQL, `` ` `` for MySQL).
    fn identifier_quote(&self) -> char {
        '"'
    }

    /// Returns the string literal quote character.
    fn literal_string_quote(&self) -> char {
        '\''
    }

    /// Returns the placeholder for the bind at `position` (1-based).
    fn parameter_placeholder(&self, position: usize) -> String {
        let _ = position;
        String::from("?")
    }

    /// Returns the spelling of a boolean literal.
    fn literal_boolean(&self, value: bool) -> &'static str {
        if value {
            "TRUE"
        } else {
            "FALSE"
        }
    }

    /// Returns whether `IF EXISTS` / `IF NOT EXISTS` may be rendered.
    fn supports_if_exists(&self) -> bool {
        true
    }

    /// Returns whether DROP TABLE accepts `RESTRICT` / `CASCADE`.
    fn supports_drop_behavior(&self) -> bool {
        true
    }

    /// Returns how LIMIT and OFFSET are rendered.
    fn pagination(&self) -> PaginationStyle {
        PaginationStyle::LimitOffset
    }

    /// Returns whether a SELECT may omit FROM. When it may not, a select
    /// without tables renders as `VALUES`.
    fn supports_select_without_from(&self) -> bool {
        true
    }

    /// Returns the column clause that makes a key auto-increment.
    fn autoincrement_clause(&self) -> Option<&'static str> {
        None
    }

    /// Returns the clause placed before `PRIMARY KEY` for a generated key.
    fn primary_key_default(&self, default: PrimaryKeyDefault) -> Option<String> {
        match default {
            PrimaryKeyDefault::AutoIncrement => self.autoincrement_clause().map(String::from),
            PrimaryKeyDefault::RowId | PrimaryKeyDefault::Uid => None,
        }
    }

    /// Returns a statement appended after CREATE TABLE, separated by `; `.
    fn create_table_epilogue(&self, table: &str) -> Option<String> {
        let _ = table;
        None
    }

    /// Returns the spelling of a column type.
    fn data_type(&self, data_type: &DataType) -> String {
        data_type.to_sql()
    }

    /// Returns the SQL for a transaction control statement, or `None` when
    /// the dialect has no such statement.
    fn transaction_statement(&self, statement: TransactionStatement) -> Option<&'static str> {
        Some(match statement {
            TransactionStatement::Begin => "BEGIN",
            TransactionStatement::Commit => "COMMIT",
            TransactionStatement::Rollback => "ROLLBACK",
        })
    }

    /// Quotes an identifier, doubling embedded quote characters.
    fn quote_identifier(&self, name: &str) -> String {
        quote_with(self.identifier_quote(), name)
    }

    /// Quotes a string literal, doubling embedded quote characters.
    fn quote_string(&self, value: &str) -> String {
        quote_with(self.literal_string_quote(), value)
    }
}

fn quote_with(quote: char, text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() + 2);
    escaped.push(quote);
    for c in text.chars() {
        if c == quote {
            escaped.push(quote);
        }
        escaped.push(c);
    }
    escaped.push(quote);
    escaped
}

//! DELETE statement builders using the typestate pattern.

use std::marker::PhantomData;

use crate::ast::{DeleteStatement, Expr, Statement};

// Typestate markers

/// Marker: No table specified yet.
pub struct NoTable;
/// Marker: Table has been specified.
pub struct HasTable;

/// A DELETE statement builder.
pub struct Delete<Table> {
    table: String,
    where_clause: Option<Expr>,
    _state: PhantomData<Table>,
}

impl Delete<NoTable> {
    /// Creates a new DELETE builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: String::new(),
            where_clause: None,
            _state: PhantomData,
        }
    }

    /// Specifies the table to delete from.
    #[must_use]
    pub fn from(self, table: &str) -> Delete<HasTable> {
        Delete {
            table: String::from(table),
            where_clause: self.where_clause,
            _state: PhantomData,
        }
    }
}

impl Default for Delete<NoTable> {
    fn default() -> Self {
        Self::new()
    }
}

impl Delete<HasTable> {
    /// Adds a WHERE clause.
    ///
    /// **Important**: DELETE without WHERE deletes all rows. Use
    /// [`SafeDelete`] to make the clause mandatory.
    #[must_use]
    pub fn where_clause(mut self, expr: Expr) -> Self {
        self.where_clause = Some(expr);
        self
    }

    /// Returns true if a WHERE clause is specified.
    #[must_use]
    pub const fn has_where_clause(&self) -> bool {
        self.where_clause.is_some()
    }

    /// Builds the statement.
    #[must_use]
    pub fn build(self) -> Statement {
        Statement::Delete(DeleteStatement {
            table: self.table,
            where_clause: self.where_clause,
        })
    }
}

/// A DELETE builder that requires a WHERE clause.
pub struct SafeDelete<Table> {
    inner: Delete<Table>,
}

impl SafeDelete<NoTable> {
    /// Creates a new safe DELETE builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Delete::new(),
        }
    }

    /// Specifies the table to delete from.
    #[must_use]
    pub fn from(self, table: &str) -> SafeDelete<HasTable> {
        SafeDelete {
            inner: self.inner.from(table),
        }
    }
}

impl Default for SafeDelete<NoTable> {
    fn default() -> Self {
        Self::new()
    }
}

/// A safe DELETE with its WHERE clause, ready to build.
pub struct SafeDeleteWithWhere {
    inner: Delete<HasTable>,
}

impl SafeDelete<HasTable> {
    /// Adds the WHERE clause.
    #[must_use]
    pub fn where_clause(self, expr: Expr) -> SafeDeleteWithWhere {
        SafeDeleteWithWhere {
            inner: self.inner.where_clause(expr),
        }
    }
}

impl SafeDeleteWithWhere {
    /// Builds the statement.
    #[must_use]
    pub fn build(self) -> Statement {
        self.inner.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::col;
    use crate::dialect::GenericDialect;

    #[test]
    fn test_simple_delete() {
        let query = Delete::new()
            .from("users")
            .where_clause(col("id").eq(1_i32))
            .build()
            .to_sql(&GenericDialect::new());

        assert_eq!(query.sql, "DELETE FROM \"users\" WHERE \"id\" = ?");
        assert_eq!(query.binds.len(), 1);
    }

    #[test]
    fn test_delete_all() {
        let builder = Delete::new().from("temp_data");
        assert!(!builder.has_where_clause());
        let query = builder.build().to_sql(&GenericDialect::new());
        assert_eq!(query.sql, "DELETE FROM \"temp_data\"");
        assert!(query.binds.is_empty());
    }

    #[test]
    fn test_safe_delete() {
        let query = SafeDelete::new()
            .from("orders")
            .where_clause(col("status").eq("cancelled").and(col("total").lt(0)))
            .build()
            .to_sql(&GenericDialect::new());

        assert_eq!(
            query.sql,
            "DELETE FROM \"orders\" WHERE \"status\" = ? AND \"total\" < ?"
        );
        assert_eq!(query.binds.len(), 2);
    }

    // This would fail to compile: SafeDelete without WHERE
    // #[test]
    // fn test_safe_delete_without_where_fails() {
    //     let _ = SafeDelete::new().from("users").build();
    // }
}

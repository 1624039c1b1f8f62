//! UPDATE statement builder using the typestate pattern.

use std::marker::PhantomData;

use crate::ast::{Expr, Statement, UpdateAssignment, UpdateStatement};

// Typestate markers

/// Marker: No table specified yet.
pub struct NoTable;
/// Marker: Table has been specified.
pub struct HasTable;
/// Marker: No SET clause specified yet.
pub struct NoSet;
/// Marker: SET clause has been specified.
pub struct HasSet;

/// An UPDATE statement builder.
pub struct Update<Table, Set> {
    table: String,
    assignments: Vec<UpdateAssignment>,
    where_clause: Option<Expr>,
    _state: PhantomData<(Table, Set)>,
}

impl Update<NoTable, NoSet> {
    /// Creates a new UPDATE builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: String::new(),
            assignments: vec![],
            where_clause: None,
            _state: PhantomData,
        }
    }
}

impl Default for Update<NoTable, NoSet> {
    fn default() -> Self {
        Self::new()
    }
}

// Transition: NoTable -> HasTable
impl<Set> Update<NoTable, Set> {
    /// Specifies the table to update.
    #[must_use]
    pub fn table(self, table: &str) -> Update<HasTable, Set> {
        Update {
            table: String::from(table),
            assignments: self.assignments,
            where_clause: self.where_clause,
            _state: PhantomData,
        }
    }
}

// Transition: NoSet -> HasSet
impl Update<HasTable, NoSet> {
    /// Adds the first SET assignment. Plain values become binds.
    #[must_use]
    pub fn set(self, column: &str, value: impl Into<Expr>) -> Update<HasTable, HasSet> {
        Update {
            table: self.table,
            assignments: vec![UpdateAssignment {
                column: String::from(column),
                value: value.into(),
            }],
            where_clause: self.where_clause,
            _state: PhantomData,
        }
    }
}

impl Update<HasTable, HasSet> {
    /// Adds another SET assignment.
    #[must_use]
    pub fn set(mut self, column: &str, value: impl Into<Expr>) -> Self {
        self.assignments.push(UpdateAssignment {
            column: String::from(column),
            value: value.into(),
        });
        self
    }

    /// Sets the WHERE clause.
    ///
    /// Without one the update touches every row.
    #[must_use]
    pub fn where_clause(mut self, expr: Expr) -> Self {
        self.where_clause = Some(expr);
        self
    }

    /// Builds the statement.
    #[must_use]
    pub fn build(self) -> Statement {
        Statement::Update(UpdateStatement {
            table: self.table,
            assignments: self.assignments,
            where_clause: self.where_clause,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::col;
    use crate::dialect::GenericDialect;
    use crate::value::Value;

    #[test]
    fn test_simple_update() {
        let query = Update::new()
            .table("users")
            .set("name", "Bob")
            .where_clause(col("id").eq(1))
            .build()
            .to_sql(&GenericDialect::new());

        assert_eq!(query.sql, "UPDATE \"users\" SET \"name\" = ? WHERE \"id\" = ?");
        assert_eq!(
            query.binds,
            vec![Value::Text(String::from("Bob")), Value::Integer(1)]
        );
    }

    #[test]
    fn test_update_with_expression() {
        let query = Update::new()
            .table("accounts")
            .set("balance", col("balance").add(10))
            .set("touched", true)
            .build()
            .to_sql(&GenericDialect::new());

        assert_eq!(
            query.sql,
            "UPDATE \"accounts\" SET \"balance\" = \"balance\" + ?, \"touched\" = ?"
        );
        assert_eq!(query.binds.len(), 2);
    }

    // This would fail to compile: UPDATE without SET
    // #[test]
    // fn test_update_without_set_fails() {
    //     let _ = Update::new().table("users").build();
    // }
}

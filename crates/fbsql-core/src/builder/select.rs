//! SELECT statement builder using the typestate pattern.
//!
//! A select with no table is a value construction: `SELECT 1 + 1` on
//! dialects that allow it, `VALUES (1 + 1)` on those that do not.

use std::marker::PhantomData;

use crate::ast::{
    Expr, JoinClause, JoinType, OrderBy, OrderDirection, SelectColumn, SelectStatement, Statement,
    TableRef,
};

// Typestate markers (zero-sized types)

/// Marker: No columns specified yet.
pub struct NoColumns;
/// Marker: Columns have been specified.
pub struct HasColumns;

/// A SELECT statement builder.
///
/// `build()` is only available once the projection has at least one entry.
pub struct Select<Cols> {
    query: SelectStatement,
    _state: PhantomData<Cols>,
}

impl Select<NoColumns> {
    /// Creates a new SELECT builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            query: SelectStatement::default(),
            _state: PhantomData,
        }
    }
}

impl Default for Select<NoColumns> {
    fn default() -> Self {
        Self::new()
    }
}

// Transition: any -> HasColumns
impl<Cols> Select<Cols> {
    fn project(mut self, column: SelectColumn) -> Select<HasColumns> {
        self.query.columns.push(column);
        Select {
            query: self.query,
            _state: PhantomData,
        }
    }

    /// Selects columns by name.
    #[must_use]
    pub fn columns<S: Into<String>>(self, names: impl IntoIterator<Item = S>) -> Select<HasColumns> {
        let mut query = self.query;
        query.columns.extend(
            names
                .into_iter()
                .map(|name| SelectColumn::new(Expr::column(name))),
        );
        Select {
            query,
            _state: PhantomData,
        }
    }

    /// Selects an expression.
    #[must_use]
    pub fn column(self, expr: Expr) -> Select<HasColumns> {
        self.project(SelectColumn::new(expr))
    }

    /// Selects an expression under an alias.
    #[must_use]
    pub fn column_as(self, expr: Expr, alias: &str) -> Select<HasColumns> {
        self.project(SelectColumn::with_alias(expr, alias))
    }

    /// Selects all columns (`*`).
    #[must_use]
    pub fn all(self) -> Select<HasColumns> {
        self.project(SelectColumn::All)
    }

    /// Selects all columns of one table (`t.*`).
    #[must_use]
    pub fn all_from(self, table: &str) -> Select<HasColumns> {
        self.project(SelectColumn::AllFrom(String::from(table)))
    }

    /// Sets DISTINCT.
    #[must_use]
    pub const fn distinct(mut self) -> Self {
        self.query.distinct = true;
        self
    }

    /// Adds a table to the FROM clause. Repeated calls list several tables.
    #[must_use]
    pub fn from(mut self, table: &str) -> Self {
        self.query.tables.push(TableRef::table(table));
        self
    }

    /// Adds an aliased table to the FROM clause.
    #[must_use]
    pub fn from_as(mut self, table: &str, alias: &str) -> Self {
        self.query.tables.push(TableRef::table(table).alias(alias));
        self
    }

    fn push_join(mut self, join_type: JoinType, table: TableRef, on: Expr) -> Self {
        self.query.joins.push(JoinClause {
            join_type,
            table,
            on,
        });
        self
    }

    /// Adds an INNER JOIN.
    #[must_use]
    pub fn join(self, table: impl Into<TableRef>, on: Expr) -> Self {
        self.push_join(JoinType::Inner, table.into(), on)
    }

    /// Adds a LEFT JOIN.
    #[must_use]
    pub fn left_join(self, table: impl Into<TableRef>, on: Expr) -> Self {
        self.push_join(JoinType::Left, table.into(), on)
    }

    /// Adds a RIGHT JOIN.
    #[must_use]
    pub fn right_join(self, table: impl Into<TableRef>, on: Expr) -> Self {
        self.push_join(JoinType::Right, table.into(), on)
    }

    /// Adds a FULL OUTER JOIN.
    #[must_use]
    pub fn full_join(self, table: impl Into<TableRef>, on: Expr) -> Self {
        self.push_join(JoinType::Full, table.into(), on)
    }

    /// Sets the WHERE clause, replacing any previous one.
    #[must_use]
    pub fn where_clause(mut self, expr: Expr) -> Self {
        self.query.where_clause = Some(expr);
        self
    }

    /// Adds GROUP BY columns.
    ///
    /// Ignored at render time when the projection contains a wildcard.
    #[must_use]
    pub fn group_by<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.query
            .group_by
            .extend(names.into_iter().map(Expr::column));
        self
    }

    /// Adds an ORDER BY column, ascending.
    #[must_use]
    pub fn order_by(self, name: &str) -> Self {
        self.order_by_expr(Expr::column(name), OrderDirection::Asc)
    }

    /// Adds an ORDER BY column, descending.
    #[must_use]
    pub fn order_by_desc(self, name: &str) -> Self {
        self.order_by_expr(Expr::column(name), OrderDirection::Desc)
    }

    /// Adds an ORDER BY expression.
    #[must_use]
    pub fn order_by_expr(mut self, expr: Expr, direction: OrderDirection) -> Self {
        self.query.order_by.push(OrderBy { expr, direction });
        self
    }

    /// Sets the maximum number of rows.
    #[must_use]
    pub const fn limit(mut self, n: u64) -> Self {
        self.query.limit = Some(n);
        self
    }

    /// Sets the number of rows to skip.
    #[must_use]
    pub const fn offset(mut self, n: u64) -> Self {
        self.query.offset = Some(n);
        self
    }
}

impl Select<HasColumns> {
    /// Returns the bare SELECT, for use as a subquery or INSERT source.
    #[must_use]
    pub fn build_select(self) -> SelectStatement {
        self.query
    }

    /// Builds the statement.
    #[must_use]
    pub fn build(self) -> Statement {
        Statement::Select(self.query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{col, count_all, table_col};
    use crate::dialect::GenericDialect;
    use crate::value::Value;

    #[test]
    fn test_simple_select() {
        let query = Select::new()
            .columns(["id", "name"])
            .from("users")
            .build()
            .to_sql(&GenericDialect::new());

        assert_eq!(query.sql, "SELECT \"id\", \"name\" FROM \"users\"");
        assert!(query.binds.is_empty());
    }

    #[test]
    fn test_select_all() {
        let query = Select::new()
            .all()
            .from("users")
            .build()
            .to_sql(&GenericDialect::new());
        assert_eq!(query.sql, "SELECT * FROM \"users\"");
    }

    #[test]
    fn test_select_with_where() {
        let query = Select::new()
            .columns(["id", "name"])
            .from("users")
            .where_clause(col("active").eq(true))
            .build()
            .to_sql(&GenericDialect::new());

        assert_eq!(
            query.sql,
            "SELECT \"id\", \"name\" FROM \"users\" WHERE \"active\" = ?"
        );
        assert_eq!(query.binds, vec![Value::Boolean(true)]);
    }

    #[test]
    fn test_select_with_join_and_grouping() {
        let query = Select::new()
            .column(table_col("u", "name"))
            .column_as(count_all(), "orders")
            .from_as("users", "u")
            .left_join(
                TableRef::table("orders").alias("o"),
                table_col("o", "user_id").eq(table_col("u", "id")),
            )
            .group_by(["name"])
            .order_by_desc("orders")
            .limit(10)
            .build()
            .to_sql(&GenericDialect::new());

        assert_eq!(
            query.sql,
            "SELECT \"u\".\"name\", COUNT(*) AS \"orders\" FROM \"users\" AS \"u\" \
             LEFT JOIN \"orders\" AS \"o\" ON \"o\".\"user_id\" = \"u\".\"id\" \
             GROUP BY \"name\" ORDER BY \"orders\" DESC LIMIT 10"
        );
    }

    #[test]
    fn test_subquery() {
        let banned = Select::new()
            .columns(["user_id"])
            .from("bans")
            .build_select();
        let query = Select::new()
            .columns(["id"])
            .from("users")
            .where_clause(col("id").in_subquery(banned).not())
            .build()
            .to_sql(&GenericDialect::new());

        assert_eq!(
            query.sql,
            "SELECT \"id\" FROM \"users\" WHERE NOT (\"id\" IN (SELECT \"user_id\" FROM \"bans\"))"
        );
    }

    // This would fail to compile: SELECT without columns
    // #[test]
    // fn test_select_without_columns_fails() {
    //     let _ = Select::new()
    //         .from("users")
    //         .build();  // Error: method `build` not found
    // }
}

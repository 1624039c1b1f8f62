//! INSERT statement builder using the typestate pattern.

use std::marker::PhantomData;

use crate::ast::{Expr, InsertSource, InsertStatement, SelectStatement, Statement};

// Typestate markers

/// Marker: No table specified yet.
pub struct NoTable;
/// Marker: Table has been specified.
pub struct HasTable;
/// Marker: No row source specified yet.
pub struct NoValues;
/// Marker: Literal rows have been specified.
pub struct HasValues;
/// Marker: A query supplies the rows.
pub struct HasQuery;

/// An INSERT statement builder.
pub struct Insert<Table, Values> {
    table: String,
    columns: Vec<String>,
    rows: Vec<Vec<Expr>>,
    query: Option<SelectStatement>,
    _state: PhantomData<(Table, Values)>,
}

impl Insert<NoTable, NoValues> {
    /// Creates a new INSERT builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: String::new(),
            columns: vec![],
            rows: vec![],
            query: None,
            _state: PhantomData,
        }
    }
}

impl Default for Insert<NoTable, NoValues> {
    fn default() -> Self {
        Self::new()
    }
}

fn row<T: Into<Expr>>(values: impl IntoIterator<Item = T>) -> Vec<Expr> {
    values.into_iter().map(Into::into).collect()
}

// Transition: NoTable -> HasTable
impl<Values> Insert<NoTable, Values> {
    /// Specifies the table to insert into.
    #[must_use]
    pub fn into_table(self, table: &str) -> Insert<HasTable, Values> {
        Insert {
            table: String::from(table),
            columns: self.columns,
            rows: self.rows,
            query: self.query,
            _state: PhantomData,
        }
    }
}

// Methods available after specifying table
impl<Values> Insert<HasTable, Values> {
    /// Specifies the columns to insert into.
    #[must_use]
    pub fn columns<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.columns = names.into_iter().map(Into::into).collect();
        self
    }
}

// Transition: NoValues -> HasValues | HasQuery
impl Insert<HasTable, NoValues> {
    /// Adds a row of values to insert. Plain values become binds.
    #[must_use]
    pub fn values<T: Into<Expr>>(
        self,
        values: impl IntoIterator<Item = T>,
    ) -> Insert<HasTable, HasValues> {
        Insert {
            table: self.table,
            columns: self.columns,
            rows: vec![row(values)],
            query: None,
            _state: PhantomData,
        }
    }

    /// Inserts the rows produced by a query.
    #[must_use]
    pub fn select(self, query: SelectStatement) -> Insert<HasTable, HasQuery> {
        Insert {
            table: self.table,
            columns: self.columns,
            rows: vec![],
            query: Some(query),
            _state: PhantomData,
        }
    }
}

impl Insert<HasTable, HasValues> {
    /// Adds another row of values.
    #[must_use]
    pub fn and_values<T: Into<Expr>>(mut self, values: impl IntoIterator<Item = T>) -> Self {
        self.rows.push(row(values));
        self
    }

    /// Builds the statement.
    #[must_use]
    pub fn build(self) -> Statement {
        Statement::Insert(InsertStatement {
            table: self.table,
            columns: self.columns,
            values: InsertSource::Values(self.rows),
        })
    }
}

impl Insert<HasTable, HasQuery> {
    /// Builds the statement.
    #[must_use]
    pub fn build(self) -> Statement {
        let values = match self.query {
            Some(query) => InsertSource::Query(Box::new(query)),
            None => InsertSource::Values(self.rows),
        };
        Statement::Insert(InsertStatement {
            table: self.table,
            columns: self.columns,
            values,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{col, Select};
    use crate::dialect::GenericDialect;
    use crate::value::Value;

    #[test]
    fn test_simple_insert() {
        let query = Insert::new()
            .into_table("users")
            .columns(["name", "email"])
            .values(["Alice", "alice@example.com"])
            .build()
            .to_sql(&GenericDialect::new());

        assert_eq!(
            query.sql,
            "INSERT INTO \"users\" (\"name\", \"email\") VALUES (?, ?)"
        );
        assert_eq!(query.binds.len(), 2);
    }

    #[test]
    fn test_insert_multiple_rows() {
        let query = Insert::new()
            .into_table("users")
            .columns(["name"])
            .values(["Alice"])
            .and_values(["Bob"])
            .and_values(["Charlie"])
            .build()
            .to_sql(&GenericDialect::new());

        assert_eq!(
            query.sql,
            "INSERT INTO \"users\" (\"name\") VALUES (?), (?), (?)"
        );
        assert_eq!(
            query.binds,
            vec![
                Value::Text(String::from("Alice")),
                Value::Text(String::from("Bob")),
                Value::Text(String::from("Charlie")),
            ]
        );
    }

    #[test]
    fn test_insert_mixed_values() {
        let query = Insert::new()
            .into_table("orders")
            .columns(["user_id", "amount", "note"])
            .values([Expr::from(1_i64), Expr::from(9.5), Expr::null()])
            .build()
            .to_sql(&GenericDialect::new());

        assert_eq!(
            query.sql,
            "INSERT INTO \"orders\" (\"user_id\", \"amount\", \"note\") VALUES (?, ?, NULL)"
        );
        assert_eq!(query.binds, vec![Value::Integer(1), Value::Float(9.5)]);
    }

    #[test]
    fn test_insert_from_select() {
        let source = Select::new()
            .columns(["name"])
            .from("staging")
            .where_clause(col("valid").eq(true))
            .build_select();
        let query = Insert::new()
            .into_table("users")
            .columns(["name"])
            .select(source)
            .build()
            .to_sql(&GenericDialect::new());

        assert_eq!(
            query.sql,
            "INSERT INTO \"users\" (\"name\") SELECT \"name\" FROM \"staging\" WHERE \"valid\" = ?"
        );
        assert_eq!(query.binds, vec![Value::Boolean(true)]);
    }

    #[test]
    fn test_insert_keeps_hostile_text_out_of_sql() {
        let malicious = "'; DROP TABLE users; --";
        let query = Insert::new()
            .into_table("users")
            .columns(["name"])
            .values([malicious])
            .build()
            .to_sql(&GenericDialect::new());

        assert_eq!(query.sql, "INSERT INTO \"users\" (\"name\") VALUES (?)");
        assert!(matches!(&query.binds[0], Value::Text(s) if s == malicious));
    }
}

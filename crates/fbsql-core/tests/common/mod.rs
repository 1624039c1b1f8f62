#![allow(dead_code)]

use std::collections::VecDeque;

use fbsql_core::dialect::Dialect;
use fbsql_core::error::ExecutionError;
use fbsql_core::executor::Executor;
use fbsql_core::{Column, Row, SerializedQuery, Statement, Value, ValueFormat};
use futures::stream::{self, BoxStream, StreamExt};

pub fn render(statement: &Statement, dialect: &dyn Dialect) -> SerializedQuery {
    statement.to_sql(dialect)
}

pub fn sql(statement: &Statement, dialect: &dyn Dialect) -> String {
    render(statement, dialect).sql
}

pub fn text(s: &str) -> Value {
    Value::Text(String::from(s))
}

/// Builds a row from `(table, column, value)` triples; an empty table
/// leaves the column untagged.
pub fn row(entries: &[(&str, &str, Value)]) -> Row {
    entries
        .iter()
        .map(|(table, name, value)| {
            let column = if table.is_empty() {
                Column::new(*name)
            } else {
                Column::qualified(*table, *name)
            };
            (column, value.clone())
        })
        .collect()
}

/// An in-memory executor that records every statement and answers with
/// scripted results, in order.
#[derive(Default)]
pub struct ScriptedExecutor {
    pub executed: Vec<(String, Vec<Value>)>,
    pub responses: VecDeque<Result<Vec<Row>, ExecutionError>>,
    pub auto_commit: bool,
    pub auto_commit_changes: Vec<bool>,
    pub format: ValueFormat,
}

impl ScriptedExecutor {
    pub fn new() -> Self {
        Self {
            auto_commit: true,
            ..Self::default()
        }
    }

    pub fn respond(mut self, rows: Vec<Row>) -> Self {
        self.responses.push_back(Ok(rows));
        self
    }

    pub fn fail(mut self, reason: &str) -> Self {
        self.responses
            .push_back(Err(ExecutionError::new(reason)));
        self
    }

    pub fn with_format(mut self, format: ValueFormat) -> Self {
        self.format = format;
        self
    }

    pub fn statements(&self) -> Vec<&str> {
        self.executed.iter().map(|(sql, _)| sql.as_str()).collect()
    }
}

impl Executor for ScriptedExecutor {
    fn execute(
        &mut self,
        sql: String,
        binds: Vec<Value>,
    ) -> BoxStream<'_, Result<Row, ExecutionError>> {
        self.executed.push((sql, binds));
        match self.responses.pop_front() {
            Some(Ok(rows)) => stream::iter(rows.into_iter().map(Ok)).boxed(),
            Some(Err(error)) => stream::once(async move { Err(error) }).boxed(),
            None => stream::empty().boxed(),
        }
    }

    fn auto_commit(&self) -> bool {
        self.auto_commit
    }

    fn set_auto_commit(&mut self, enabled: bool) -> Result<(), ExecutionError> {
        self.auto_commit = enabled;
        self.auto_commit_changes.push(enabled);
        Ok(())
    }

    fn value_format(&self) -> ValueFormat {
        self.format
    }
}

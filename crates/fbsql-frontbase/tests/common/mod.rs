#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Once;

use fbsql_core::error::ExecutionError;
use fbsql_core::executor::Executor;
use fbsql_core::{Row, SerializedQuery, Statement, Value};
use fbsql_frontbase::FrontbaseDialect;
use futures::stream::{self, BoxStream, StreamExt};

static TRACING: Once = Once::new();

/// Installs a test-friendly subscriber once per test binary.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

pub fn render(statement: &Statement) -> SerializedQuery {
    statement.to_sql(&FrontbaseDialect::new())
}

pub fn sql(statement: &Statement) -> String {
    render(statement).sql
}

/// Records statements and answers each with the next scripted row set.
#[derive(Default)]
pub struct RecordingExecutor {
    pub executed: Vec<String>,
    pub responses: VecDeque<Vec<Row>>,
    pub auto_commit: bool,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self {
            auto_commit: true,
            ..Self::default()
        }
    }

    pub fn respond(mut self, rows: Vec<Row>) -> Self {
        self.responses.push_back(rows);
        self
    }
}

impl Executor for RecordingExecutor {
    fn execute(
        &mut self,
        sql: String,
        _binds: Vec<Value>,
    ) -> BoxStream<'_, Result<Row, ExecutionError>> {
        self.executed.push(sql);
        let rows = self.responses.pop_front().unwrap_or_default();
        stream::iter(rows.into_iter().map(Ok)).boxed()
    }

    fn auto_commit(&self) -> bool {
        self.auto_commit
    }

    fn set_auto_commit(&mut self, enabled: bool) -> Result<(), ExecutionError> {
        self.auto_commit = enabled;
        Ok(())
    }
}

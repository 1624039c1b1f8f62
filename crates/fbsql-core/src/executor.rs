//! The boundary with the database driver.
//!
//! The core never opens connections. A driver implements [`Executor`]:
//! it receives SQL text with positional binds and streams back rows whose
//! values are already decoded into [`Value`]. Everything else here is
//! layered on top of that single call by [`QueryExt`].
//!
//! Transaction control has no AST node. It is a pair of plain statements
//! plus the executor's auto-commit flag, see [`QueryExt::transaction`].

use futures::future::BoxFuture;
use futures::stream::BoxStream;
use futures::{FutureExt, StreamExt, TryStreamExt};

use crate::ast::Statement;
use crate::decode::FromRow;
use crate::dialect::Dialect;
use crate::error::{Error, ExecutionError};
use crate::row::Row;
use crate::serializer::SerializedQuery;
use crate::value::{Value, ValueFormat};

/// Transaction control statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatement {
    /// Opens a transaction.
    Begin,
    /// Makes the transaction's changes permanent.
    Commit,
    /// Discards the transaction's changes.
    Rollback,
}

impl TransactionStatement {
    /// Returns the statement name, for logging.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Begin => "begin",
            Self::Commit => "commit",
            Self::Rollback => "rollback",
        }
    }
}

/// A connection able to execute SQL.
pub trait Executor: Send {
    /// Executes `sql` with `binds` and streams the resulting rows.
    ///
    /// Statements that produce no rows yield an empty stream. Any failure
    /// reported by the database surfaces as an item of the stream.
    fn execute(
        &mut self,
        sql: String,
        binds: Vec<Value>,
    ) -> BoxStream<'_, Result<Row, ExecutionError>>;

    /// Returns whether each statement commits on its own.
    fn auto_commit(&self) -> bool;

    /// Enables or disables auto-commit.
    ///
    /// # Errors
    ///
    /// Returns the driver's error if the mode cannot be changed.
    fn set_auto_commit(&mut self, enabled: bool) -> Result<(), ExecutionError>;

    /// Returns the format used to render inlined values and logged binds.
    fn value_format(&self) -> ValueFormat {
        ValueFormat::default()
    }
}

/// Renders binds the way they are logged: `[1, 'a', NULL]`.
#[must_use]
pub fn render_binds(binds: &[Value], format: &ValueFormat) -> String {
    let rendered: Vec<String> = binds.iter().map(|value| value.render(format)).collect();
    format!("[{}]", rendered.join(", "))
}

fn dispatch<E: Executor + ?Sized>(
    executor: &mut E,
    query: SerializedQuery,
) -> BoxStream<'_, Result<Row, ExecutionError>> {
    tracing::debug!(
        sql = %query.sql,
        binds = %render_binds(&query.binds, &executor.value_format()),
        "Executing statement"
    );
    executor.execute(query.sql, query.binds)
}

/// Statement-level helpers for every [`Executor`].
///
/// Each method renders the statement for `dialect` before the returned
/// future is first polled, so the dialect is not borrowed across awaits.
/// Inlined values are written with the executor's [`Executor::value_format`].
pub trait QueryExt: Executor {
    /// Streams the rows of a statement.
    fn stream(
        &mut self,
        statement: &Statement,
        dialect: &dyn Dialect,
    ) -> BoxStream<'_, Result<Row, ExecutionError>> {
        let query = statement.to_sql_with(dialect, self.value_format());
        dispatch(self, query)
    }

    /// Executes a statement, discarding any rows. Returns the number of
    /// rows the statement produced.
    fn run(
        &mut self,
        statement: &Statement,
        dialect: &dyn Dialect,
    ) -> BoxFuture<'_, Result<u64, ExecutionError>> {
        let query = statement.to_sql_with(dialect, self.value_format());
        async move {
            dispatch(self, query)
                .try_fold(0_u64, |count, _| async move { Ok(count + 1) })
                .await
        }
        .boxed()
    }

    /// Collects every row of a statement.
    fn fetch_all(
        &mut self,
        statement: &Statement,
        dialect: &dyn Dialect,
    ) -> BoxFuture<'_, Result<Vec<Row>, ExecutionError>> {
        let query = statement.to_sql_with(dialect, self.value_format());
        async move { dispatch(self, query).try_collect().await }.boxed()
    }

    /// Returns the first row of a statement, if any. Remaining rows are
    /// not read.
    fn fetch_optional(
        &mut self,
        statement: &Statement,
        dialect: &dyn Dialect,
    ) -> BoxFuture<'_, Result<Option<Row>, ExecutionError>> {
        let query = statement.to_sql_with(dialect, self.value_format());
        async move {
            let mut rows = dispatch(self, query);
            rows.next().await.transpose()
        }
        .boxed()
    }

    /// Collects every row of a statement, decoded as `T`.
    ///
    /// `table` scopes the lookups as in [`Row::decode`]. Decoding stops at
    /// the first row that fails.
    fn fetch_as<'a, T>(
        &'a mut self,
        statement: &Statement,
        dialect: &dyn Dialect,
        table: Option<&'a str>,
    ) -> BoxFuture<'a, Result<Vec<T>, Error>>
    where
        T: FromRow + Send + 'a,
    {
        let query = statement.to_sql_with(dialect, self.value_format());
        async move {
            let mut rows = dispatch(self, query);
            let mut decoded = Vec::new();
            while let Some(row) = rows.next().await {
                decoded.push(row?.decode::<T>(table)?);
            }
            Ok(decoded)
        }
        .boxed()
    }

    /// Issues a transaction control statement.
    ///
    /// Beginning disables auto-commit before the dialect's BEGIN statement,
    /// if it has one. Commit and rollback restore auto-commit afterwards.
    fn transaction(
        &mut self,
        statement: TransactionStatement,
        dialect: &dyn Dialect,
    ) -> BoxFuture<'_, Result<(), ExecutionError>> {
        let sql = dialect.transaction_statement(statement);
        async move {
            if statement == TransactionStatement::Begin {
                self.set_auto_commit(false)?;
            } else if statement == TransactionStatement::Rollback {
                tracing::warn!("Rolling back transaction");
            }
            if let Some(sql) = sql {
                let query = SerializedQuery {
                    sql: String::from(sql),
                    binds: Vec::new(),
                };
                dispatch(self, query).try_for_each(|_| async { Ok(()) }).await?;
            }
            if statement != TransactionStatement::Begin {
                self.set_auto_commit(true)?;
            }
            tracing::debug!(statement = statement.as_str(), "Transaction statement done");
            Ok(())
        }
        .boxed()
    }
}

impl<E: Executor + ?Sized> QueryExt for E {}

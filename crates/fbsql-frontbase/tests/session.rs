//! Frontbase sessions driven through the executor boundary.

mod common;

use common::{init_tracing, RecordingExecutor};
use fbsql_core::builder::{col, Select};
use fbsql_core::executor::{QueryExt, TransactionStatement};
use fbsql_core::{Column, Row, Value};
use fbsql_derive::FromRow;
use fbsql_frontbase::{FrontbaseConfig, FrontbaseDialect};

#[derive(Debug, PartialEq, FromRow)]
#[row(table = "foo")]
struct Foo {
    id: String,
}

#[derive(Debug, PartialEq, FromRow)]
#[row(table = "bar")]
struct Bar {
    id: String,
}

fn joined_row() -> Row {
    Row::new()
        .with(Column::qualified("foo", "id"), Value::Text(String::from("foo")))
        .with(Column::qualified("bar", "id"), Value::Text(String::from("bar")))
}

#[tokio::test]
async fn test_transaction_has_no_begin_statement() {
    init_tracing();
    let mut executor = RecordingExecutor::new();
    let dialect = FrontbaseDialect::new();

    executor
        .transaction(TransactionStatement::Begin, &dialect)
        .await
        .unwrap();
    assert!(executor.executed.is_empty());
    assert!(!executor.auto_commit);

    executor
        .transaction(TransactionStatement::Rollback, &dialect)
        .await
        .unwrap();
    assert_eq!(executor.executed, vec![String::from("ROLLBACK")]);
    assert!(executor.auto_commit);
}

#[tokio::test]
async fn test_session_setup_then_joined_decode() {
    init_tracing();
    let config = FrontbaseConfig::from_json(
        r#"{"database": "test", "host": "localhost", "username": "_system"}"#,
    )
    .unwrap();
    let dialect = FrontbaseDialect::new();
    let mut executor = RecordingExecutor::new()
        .respond(Vec::new())
        .respond(vec![joined_row()]);

    executor
        .run(&fbsql_core::builder::raw(config.session_sql(), []), &dialect)
        .await
        .unwrap();

    let statement = Select::new()
        .all()
        .from("foo")
        .join("bar", col("foo_id").eq(fbsql_core::builder::table_col("foo", "id")))
        .build();
    let rows = executor.fetch_all(&statement, &dialect).await.unwrap();

    assert_eq!(
        executor.executed,
        vec![
            String::from(
                "SET TRANSACTION ISOLATION LEVEL SERIALIZABLE, LOCKING PESSIMISTIC, READ WRITE;"
            ),
            String::from(
                "SELECT * FROM \"foo\" INNER JOIN \"bar\" ON \"foo_id\" = \"foo\".\"id\""
            ),
        ]
    );
    assert_eq!(
        rows[0].decode::<Foo>(None).unwrap(),
        Foo {
            id: String::from("foo")
        }
    );
    assert_eq!(
        rows[0].decode::<Bar>(None).unwrap(),
        Bar {
            id: String::from("bar")
        }
    );
}

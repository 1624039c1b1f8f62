//! Statements rendered for Frontbase.

mod common;

use common::{render, sql};
use fbsql_core::ast::{ColumnDefinition, DataType, ForeignKey, ForeignKeyAction, PrimaryKeyDefault};
use fbsql_core::builder::{
    alter_table, count_all, create_index, create_table, drop_table, func, integer, longint, raw,
    varchar, Delete, Insert, Select,
};
use fbsql_core::{col, Value};
use fbsql_frontbase::column;
use uuid::Uuid;

#[test]
fn test_select_without_table_becomes_values() {
    let statement = Select::new()
        .column(fbsql_core::ast::Expr::from(1_i64))
        .column_as(func::<fbsql_core::Expr>("server_name", []), "server")
        .build();
    let query = render(&statement);
    assert_eq!(query.sql, "VALUES (?, server_name)");
    assert_eq!(query.binds, vec![Value::Integer(1)]);
}

#[test]
fn test_top_pagination() {
    let limited = Select::new().all().from("foo").limit(5).build();
    assert_eq!(sql(&limited), "SELECT TOP(0, 5) * FROM \"foo\"");

    let offset = Select::new().all().from("foo").offset(10).build();
    assert_eq!(
        sql(&offset),
        "SELECT TOP(10, 9223372036854775807) * FROM \"foo\""
    );

    let window = Select::new()
        .distinct()
        .columns(["name"])
        .from("foo")
        .order_by("name")
        .offset(20)
        .limit(10)
        .build();
    assert_eq!(
        sql(&window),
        "SELECT DISTINCT TOP(20, 10) \"name\" FROM \"foo\" ORDER BY \"name\" ASC"
    );
}

#[test]
fn test_insert_binds_keep_order() {
    let statement = Insert::new()
        .into_table("foo")
        .columns(["flag", "greeting"])
        .values([Value::Boolean(true), Value::Text(String::from("hello"))])
        .build();
    let query = render(&statement);
    assert_eq!(
        query.sql,
        "INSERT INTO \"foo\" (\"flag\", \"greeting\") VALUES (?, ?)"
    );
    assert_eq!(
        query.binds,
        vec![Value::Boolean(true), Value::Text(String::from("hello"))]
    );
}

#[test]
fn test_create_table_disables_unique_counter() {
    let statement = create_table("foo")
        .if_not_exists()
        .column(longint("id").primary_key_with(PrimaryKeyDefault::AutoIncrement))
        .column(varchar("name", 1000))
        .build();
    let query = render(&statement);
    assert_eq!(
        query.sql,
        "CREATE TABLE \"foo\" (\"id\" LONGINT DEFAULT UNIQUE PRIMARY KEY, \
         \"name\" CHARACTER VARYING(1000)); SET UNIQUE=0 FOR \"foo\""
    );
    assert!(query.binds.is_empty());
}

#[test]
fn test_constraint_order_is_canonical() {
    let orders = [
        ["not_null", "primary_key", "default"],
        ["default", "primary_key", "not_null"],
        ["primary_key", "not_null", "default"],
    ];
    for order in orders {
        let mut definition = integer("id");
        for constraint in order {
            definition = match constraint {
                "not_null" => definition.not_null(),
                "primary_key" => definition.primary_key(),
                _ => definition.default(0_i64),
            };
        }
        let statement = create_table("t").column(definition).build();
        assert_eq!(
            sql(&statement),
            "CREATE TABLE \"t\" (\"id\" INTEGER DEFAULT 0 NOT NULL PRIMARY KEY); \
             SET UNIQUE=0 FOR \"t\"",
            "insertion order {order:?}"
        );
    }
}

#[test]
fn test_uid_keys_and_typed_columns() {
    let statement = create_table("documents")
        .column(
            ColumnDefinition::new("id", DataType::Bit(96))
                .primary_key_with(PrimaryKeyDefault::Uid),
        )
        .column(column::<Uuid>("token"))
        .column(column::<Option<String>>("title"))
        .column(column::<i64>("owner_id").references(
            ForeignKey::new("owners", ["id"]).on_delete(ForeignKeyAction::SetNull),
        ))
        .build();
    assert_eq!(
        sql(&statement),
        "CREATE TABLE \"documents\" (\
         \"id\" BIT(96) DEFAULT NEW_UID PRIMARY KEY, \
         \"token\" BIT VARYING(128) NOT NULL, \
         \"title\" CHARACTER VARYING(1073741823), \
         \"owner_id\" INTEGER NOT NULL REFERENCES \"owners\" (\"id\") ON DELETE SET NULL); \
         SET UNIQUE=0 FOR \"documents\""
    );
}

#[test]
fn test_drop_and_alter() {
    assert_eq!(
        sql(&drop_table("foo").if_exists().cascade().build()),
        "DROP TABLE \"foo\" CASCADE"
    );
    assert_eq!(
        sql(&alter_table("foo").add_column(longint("size").default(0_i64).not_null())),
        "ALTER TABLE \"foo\" ADD \"size\" LONGINT DEFAULT 0 NOT NULL"
    );
    assert_eq!(
        sql(&create_index("foo_name", "foo").columns(["name"]).build()),
        "CREATE INDEX \"foo_name\" ON \"foo\" (\"name\")"
    );
}

#[test]
fn test_count_and_raw() {
    let statement = Select::new()
        .column_as(count_all(), "n")
        .from("foo")
        .where_clause(col("name").like("a%"))
        .build();
    let query = render(&statement);
    assert_eq!(
        query.sql,
        "SELECT COUNT(*) AS \"n\" FROM \"foo\" WHERE \"name\" LIKE ?"
    );

    let query = render(&raw("VALUES server_name;", []));
    assert_eq!(query.sql, "VALUES server_name;");
    assert!(query.binds.is_empty());
}

#[test]
fn test_delete_renders_plainly() {
    let statement = Delete::new()
        .from("foo")
        .where_clause(col("id").eq(3_i64))
        .build();
    assert_eq!(sql(&statement), "DELETE FROM \"foo\" WHERE \"id\" = ?");
}

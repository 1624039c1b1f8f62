//! Tests for the `#[derive(FromRow)]` macro output.

mod common;

use common::{row, text};
use fbsql_core::decode::{FromRow, RowDecoder};
use fbsql_core::error::DecodeError;
use fbsql_core::{Json, Row, Value};
use fbsql_derive::FromRow;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// Test: two tables exposing the same column name
// =============================================================================

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

fn joined() -> Row {
    row(&[("foo", "id", text("foo")), ("bar", "id", text("bar"))])
}

#[test]
fn test_table_scope_comes_from_attribute() {
    assert_eq!(Foo::TABLE, Some("foo"));
    assert_eq!(Bar::TABLE, Some("bar"));
}

#[test]
fn test_each_table_decodes_its_own_column() {
    let row = joined();
    assert_eq!(
        row.decode::<Foo>(None).unwrap(),
        Foo {
            id: String::from("foo")
        }
    );
    assert_eq!(
        row.decode::<Bar>(None).unwrap(),
        Bar {
            id: String::from("bar")
        }
    );
}

#[test]
fn test_caller_scope_overrides_attribute() {
    let foo = joined().decode::<Foo>(Some("bar")).unwrap();
    assert_eq!(foo.id, "bar");
}

// =============================================================================
// Test: optional fields, renamed columns, skipped fields
// =============================================================================

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
struct Preferences {
    theme: String,
}

#[derive(Debug, FromRow)]
struct Account {
    id: i64,
    #[column(name = "display_name")]
    name: String,
    email: Option<String>,
    nickname: Option<String>,
    token: Option<Uuid>,
    prefs: Json<Preferences>,
    #[column(skip)]
    cached: Vec<u8>,
}

#[test]
fn test_optional_and_renamed_fields() {
    let row = row(&[
        ("", "id", Value::Integer(7)),
        ("", "display_name", text("Ada")),
        ("", "email", Value::Null),
        ("", "token", text("67e55044-10b1-426f-9247-bb680e5fe0c8")),
        ("", "prefs", text(r#"{"theme":"dark"}"#)),
    ]);
    let account = row.decode::<Account>(None).unwrap();
    assert_eq!(account.id, 7);
    assert_eq!(account.name, "Ada");
    assert_eq!(account.email, None);
    assert_eq!(account.nickname, None);
    assert!(account.token.is_some());
    assert_eq!(account.prefs.0.theme, "dark");
    assert!(account.cached.is_empty());
}

#[test]
fn test_missing_required_field_names_field_and_scope() {
    let row = row(&[("users", "id", Value::Integer(1))]);
    let err = row.decode::<Account>(Some("users")).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::FieldNotFound { ref field, ref table }
            if field == "display_name" && table.as_deref() == Some("users")
    ));
}

#[test]
fn test_conversion_failure_names_field() {
    let row = row(&[
        ("", "id", text("seven")),
        ("", "display_name", text("Ada")),
        ("", "prefs", text("{}")),
    ]);
    let err = row.decode::<Account>(None).unwrap_err();
    assert!(matches!(err, DecodeError::Field { ref field, .. } if field == "id"));
}

// =============================================================================
// Test: nested decoders
// =============================================================================

struct Pair {
    foo: Foo,
    bar: Bar,
}

impl FromRow for Pair {
    fn from_row(decoder: &RowDecoder<'_>) -> Result<Self, DecodeError> {
        let unscoped = RowDecoder::new(decoder.row());
        Ok(Self {
            foo: unscoped.decode()?,
            bar: unscoped.decode()?,
        })
    }
}

#[test]
fn test_nested_records_use_their_own_scope() {
    let pair = joined().decode::<Pair>(None).unwrap();
    assert_eq!(pair.foo.id, "foo");
    assert_eq!(pair.bar.id, "bar");
}

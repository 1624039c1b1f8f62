//! Invoicing schema on Frontbase.
//!
//! Declares the tables from Rust types, renders the statements an
//! application would send, and decodes a joined result row.
//!
//! Run with: cargo run --example invoicing

use fbsql_core::ast::{ForeignKey, ForeignKeyAction, PrimaryKeyDefault, Statement};
use fbsql_core::builder::{col, create_index, create_table, table_col, Insert, Select, Update};
use fbsql_core::{Column, Row, Value};
use fbsql_derive::FromRow;
use fbsql_frontbase::{column, FrontbaseDialect};

// =============================================================================
// Records
// =============================================================================

#[allow(dead_code)]
#[derive(Debug, FromRow)]
#[row(table = "companies")]
struct Company {
    id: i64,
    name: String,
    tax_id: Option<String>,
}

#[allow(dead_code)]
#[derive(Debug, FromRow)]
#[row(table = "invoices")]
struct Invoice {
    id: i64,
    #[column(name = "total_cents")]
    total: i64,
    paid: bool,
}

// =============================================================================
// Statements
// =============================================================================

fn schema() -> Vec<Statement> {
    vec![
        create_table("companies")
            .column(column::<i64>("id").primary_key_with(PrimaryKeyDefault::AutoIncrement))
            .column(column::<String>("name").unique())
            .column(column::<Option<String>>("tax_id"))
            .build(),
        create_table("invoices")
            .column(column::<i64>("id").primary_key_with(PrimaryKeyDefault::AutoIncrement))
            .column(column::<i64>("company_id").references(
                ForeignKey::new("companies", ["id"]).on_delete(ForeignKeyAction::Cascade),
            ))
            .column(column::<i64>("total_cents").default(0_i64))
            .column(column::<bool>("paid").default(false))
            .build(),
        create_index("invoices_company", "invoices")
            .columns(["company_id"])
            .build(),
    ]
}

fn queries() -> Vec<Statement> {
    vec![
        Insert::new()
            .into_table("companies")
            .columns(["name", "tax_id"])
            .values([Value::Text(String::from("Acme")), Value::Null])
            .build(),
        Select::new()
            .all()
            .from("companies")
            .join(
                "invoices",
                table_col("invoices", "company_id").eq(table_col("companies", "id")),
            )
            .where_clause(col("paid").eq(false))
            .order_by_desc("total_cents")
            .limit(20)
            .build(),
        Update::new()
            .table("invoices")
            .set("paid", true)
            .where_clause(col("id").eq(7_i64))
            .build(),
    ]
}

fn main() {
    let dialect = FrontbaseDialect::new();

    println!("-- schema");
    for statement in schema() {
        println!("{};", statement.to_sql(&dialect).sql);
    }

    println!("\n-- queries");
    for statement in queries() {
        let query = statement.to_sql(&dialect);
        println!("{}\n   binds: {:?}", query.sql, query.binds);
    }

    // Both tables expose an "id" column; each record reads its own.
    let row = Row::new()
        .with(Column::qualified("companies", "id"), Value::Integer(1))
        .with(Column::qualified("companies", "name"), Value::Text(String::from("Acme")))
        .with(Column::qualified("companies", "tax_id"), Value::Null)
        .with(Column::qualified("invoices", "id"), Value::Integer(7))
        .with(Column::qualified("invoices", "total_cents"), Value::Integer(12_500))
        .with(Column::qualified("invoices", "paid"), Value::Integer(0));

    println!("\n-- decoded");
    match (row.decode::<Company>(None), row.decode::<Invoice>(None)) {
        (Ok(company), Ok(invoice)) => println!("{company:?}\n{invoice:?}"),
        (Err(err), _) | (_, Err(err)) => eprintln!("decode failed: {err}"),
    }
}

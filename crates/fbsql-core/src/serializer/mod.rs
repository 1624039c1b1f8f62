//! Dialect-aware rendering of statements to SQL text and binds.
//!
//! Serialization is a single pass over the tree. Every bound value is
//! appended to the bind list at the moment its placeholder is written, so
//! the list always matches the placeholder order of the text.
//!
//! Schema statements are the exception: databases do not accept
//! placeholders in DDL, so values bound inside CREATE TABLE and ALTER TABLE
//! (column defaults, checks) are rendered inline as literals.
//!
//! ```rust
//! use fbsql_core::builder::{col, Select};
//! use fbsql_core::dialect::GenericDialect;
//! use fbsql_core::Value;
//!
//! let query = Select::new()
//!     .columns(["id", "name"])
//!     .from("users")
//!     .where_clause(col("active").eq(true))
//!     .build()
//!     .to_sql(&GenericDialect::new());
//!
//! assert_eq!(query.sql, r#"SELECT "id", "name" FROM "users" WHERE "active" = ?"#);
//! assert_eq!(query.binds, vec![Value::Boolean(true)]);
//! ```

mod ddl;
mod dml;
mod expr;

use crate::ast::Statement;
use crate::dialect::Dialect;
use crate::value::{Value, ValueFormat};

/// SQL text with its positional binds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializedQuery {
    /// The SQL text.
    pub sql: String,
    /// Bind values, in placeholder order.
    pub binds: Vec<Value>,
}

/// Trait for AST nodes that render to SQL.
pub trait SqlSerialize {
    /// Appends this node to the output.
    fn serialize(&self, out: &mut Serializer<'_>);
}

/// Output buffer shared by the nodes of one statement.
pub struct Serializer<'d> {
    dialect: &'d dyn Dialect,
    format: ValueFormat,
    inline_binds: bool,
    sql: String,
    binds: Vec<Value>,
}

impl<'d> Serializer<'d> {
    /// Creates an empty serializer for a dialect.
    #[must_use]
    pub fn new(dialect: &'d dyn Dialect) -> Self {
        Self::with_value_format(dialect, ValueFormat::default())
    }

    /// Creates an empty serializer that renders inlined values with `format`.
    #[must_use]
    pub fn with_value_format(dialect: &'d dyn Dialect, format: ValueFormat) -> Self {
        Self {
            dialect,
            format,
            inline_binds: false,
            sql: String::new(),
            binds: Vec::new(),
        }
    }

    /// Returns the target dialect.
    #[must_use]
    pub fn dialect(&self) -> &'d dyn Dialect {
        self.dialect
    }

    /// Appends raw SQL text.
    pub fn write(&mut self, sql: &str) {
        self.sql.push_str(sql);
    }

    /// Appends a quoted identifier.
    pub fn write_identifier(&mut self, name: &str) {
        let quoted = self.dialect.quote_identifier(name);
        self.sql.push_str(&quoted);
    }

    /// Appends a comma separated list of quoted identifiers.
    pub fn write_identifiers<S: AsRef<str>>(&mut self, names: &[S]) {
        for (i, name) in names.iter().enumerate() {
            if i > 0 {
                self.sql.push_str(", ");
            }
            self.write_identifier(name.as_ref());
        }
    }

    /// Records a bind and appends its placeholder. Inside [`Self::inlined`]
    /// the value is written as a literal instead.
    pub fn write_bind(&mut self, value: Value) {
        if self.inline_binds {
            let literal = value.render(&self.format);
            self.sql.push_str(&literal);
            return;
        }
        self.binds.push(value);
        let placeholder = self.dialect.parameter_placeholder(self.binds.len());
        self.sql.push_str(&placeholder);
    }

    /// Appends nodes joined by `separator`.
    pub fn write_separated<'a, T, I>(&mut self, items: I, separator: &str)
    where
        T: SqlSerialize + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                self.sql.push_str(separator);
            }
            item.serialize(self);
        }
    }

    /// Runs `f` with binds rendered inline.
    pub fn inlined(&mut self, f: impl FnOnce(&mut Self)) {
        let previous = std::mem::replace(&mut self.inline_binds, true);
        f(self);
        self.inline_binds = previous;
    }

    /// Consumes the serializer.
    #[must_use]
    pub fn finish(self) -> SerializedQuery {
        SerializedQuery {
            sql: self.sql,
            binds: self.binds,
        }
    }
}

impl SqlSerialize for Statement {
    fn serialize(&self, out: &mut Serializer<'_>) {
        match self {
            Self::Select(select) => select.serialize(out),
            Self::Insert(insert) => insert.serialize(out),
            Self::Update(update) => update.serialize(out),
            Self::Delete(delete) => delete.serialize(out),
            Self::CreateTable(create) => create.serialize(out),
            Self::AlterTable(alter) => alter.serialize(out),
            Self::DropTable(drop) => drop.serialize(out),
            Self::CreateIndex(create) => create.serialize(out),
            Self::DropIndex(drop) => drop.serialize(out),
            Self::Raw { sql, binds } => {
                out.write(sql);
                out.binds.clone_from(binds);
            }
        }
    }
}

/// Renders a statement for a dialect. Inlined values are written with
/// `format`.
#[must_use]
pub fn serialize(
    statement: &Statement,
    dialect: &dyn Dialect,
    format: ValueFormat,
) -> SerializedQuery {
    let mut out = Serializer::with_value_format(dialect, format);
    statement.serialize(&mut out);
    let query = out.finish();
    tracing::trace!(
        dialect = dialect.name(),
        kind = statement.kind(),
        sql = %query.sql,
        binds = query.binds.len(),
        "Serialized statement"
    );
    query
}

impl Statement {
    /// Renders this statement for a dialect, with timestamps inlined in UTC.
    #[must_use]
    pub fn to_sql(&self, dialect: &dyn Dialect) -> SerializedQuery {
        serialize(self, dialect, ValueFormat::default())
    }

    /// Renders this statement for a dialect, writing inlined values such
    /// as column defaults with `format`.
    #[must_use]
    pub fn to_sql_with(&self, dialect: &dyn Dialect, format: ValueFormat) -> SerializedQuery {
        serialize(self, dialect, format)
    }
}

//! Schema statement builders.
//!
//! `build()` on a [`CreateTableBuilder`] is only available after at least
//! one column has been added. Column helpers such as [`longint`] return a
//! [`ColumnDefinition`] whose constraint methods chain directly:
//!
//! ```rust
//! use fbsql_core::ast::PrimaryKeyDefault;
//! use fbsql_core::builder::{create_table, longint, varchar};
//!
//! let statement = create_table("users")
//!     .column(longint("id").primary_key_with(PrimaryKeyDefault::AutoIncrement))
//!     .column(varchar("name", 255).not_null())
//!     .unique(["name"])
//!     .build();
//! assert_eq!(statement.kind(), "CREATE TABLE");
//! ```

use std::marker::PhantomData;

use crate::ast::{
    AlterTable, AlterTableAction, ColumnDefinition, CreateIndex, CreateTable, DataType,
    DropBehavior, DropIndex, DropTable, Expr, ForeignKey, Statement, TableConstraint,
    TableConstraintKind,
};

// =============================================================================
// Column helpers
// =============================================================================

/// An `INTEGER` column.
#[must_use]
pub fn integer(name: impl Into<String>) -> ColumnDefinition {
    ColumnDefinition::new(name, DataType::Integer)
}

/// A 64-bit integer column.
#[must_use]
pub fn longint(name: impl Into<String>) -> ColumnDefinition {
    ColumnDefinition::new(name, DataType::LongInt)
}

/// Alias of [`longint`].
#[must_use]
pub fn bigint(name: impl Into<String>) -> ColumnDefinition {
    longint(name)
}

/// A `DOUBLE PRECISION` column.
#[must_use]
pub fn double(name: impl Into<String>) -> ColumnDefinition {
    ColumnDefinition::new(name, DataType::Double)
}

/// A variable length character column.
#[must_use]
pub fn varchar(name: impl Into<String>, len: u32) -> ColumnDefinition {
    ColumnDefinition::new(name, DataType::VarChar(len))
}

/// A `BOOLEAN` column.
#[must_use]
pub fn boolean(name: impl Into<String>) -> ColumnDefinition {
    ColumnDefinition::new(name, DataType::Boolean)
}

/// A `TIMESTAMP` column.
#[must_use]
pub fn timestamp(name: impl Into<String>) -> ColumnDefinition {
    ColumnDefinition::new(name, DataType::Timestamp)
}

/// A `BLOB` column.
#[must_use]
pub fn blob(name: impl Into<String>) -> ColumnDefinition {
    ColumnDefinition::new(name, DataType::Blob)
}

// =============================================================================
// CreateTableBuilder
// =============================================================================

/// Marker: table has no columns.
#[derive(Debug, Clone, Copy)]
pub struct NoColumns;

/// Marker: table has at least one column.
#[derive(Debug, Clone, Copy)]
pub struct HasColumns;

/// CREATE TABLE builder.
#[derive(Debug, Clone)]
pub struct CreateTableBuilder<Cols> {
    table: CreateTable,
    _state: PhantomData<Cols>,
}

/// Starts a CREATE TABLE statement.
#[must_use]
pub fn create_table(name: impl Into<String>) -> CreateTableBuilder<NoColumns> {
    CreateTableBuilder {
        table: CreateTable {
            table: name.into(),
            temporary: false,
            if_not_exists: false,
            columns: Vec::new(),
            constraints: Vec::new(),
        },
        _state: PhantomData,
    }
}

impl<Cols> CreateTableBuilder<Cols> {
    /// Adds a column.
    #[must_use]
    pub fn column(self, column: ColumnDefinition) -> CreateTableBuilder<HasColumns> {
        let mut table = self.table;
        table.columns.push(column);
        CreateTableBuilder {
            table,
            _state: PhantomData,
        }
    }

    /// Creates a temporary table.
    #[must_use]
    pub const fn temporary(mut self) -> Self {
        self.table.temporary = true;
        self
    }

    /// Uses IF NOT EXISTS where the dialect supports it.
    #[must_use]
    pub const fn if_not_exists(mut self) -> Self {
        self.table.if_not_exists = true;
        self
    }

    /// Adds a table-level constraint.
    #[must_use]
    pub fn constraint(mut self, constraint: impl Into<TableConstraint>) -> Self {
        self.table.constraints.push(constraint.into());
        self
    }

    /// Adds a named table-level constraint.
    #[must_use]
    pub fn named_constraint(self, name: impl Into<String>, kind: TableConstraintKind) -> Self {
        self.constraint(TableConstraint {
            name: Some(name.into()),
            kind,
        })
    }

    /// Adds a composite primary key.
    #[must_use]
    pub fn primary_key<S: Into<String>>(self, columns: impl IntoIterator<Item = S>) -> Self {
        self.constraint(TableConstraintKind::PrimaryKey(collect(columns)))
    }

    /// Adds a unique constraint on several columns.
    #[must_use]
    pub fn unique<S: Into<String>>(self, columns: impl IntoIterator<Item = S>) -> Self {
        self.constraint(TableConstraintKind::Unique(collect(columns)))
    }

    /// Adds a check constraint.
    #[must_use]
    pub fn check(self, expr: Expr) -> Self {
        self.constraint(TableConstraintKind::Check(expr))
    }

    /// Adds a foreign key over several columns.
    #[must_use]
    pub fn foreign_key<S: Into<String>>(
        self,
        columns: impl IntoIterator<Item = S>,
        references: ForeignKey,
    ) -> Self {
        self.constraint(TableConstraintKind::ForeignKey {
            columns: collect(columns),
            references,
        })
    }
}

impl CreateTableBuilder<HasColumns> {
    /// Builds the statement.
    #[must_use]
    pub fn build(self) -> Statement {
        Statement::CreateTable(self.table)
    }
}

fn collect<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Vec<String> {
    names.into_iter().map(Into::into).collect()
}

// =============================================================================
// AlterTableBuilder
// =============================================================================

/// ALTER TABLE builder. Each statement carries exactly one change.
#[derive(Debug, Clone)]
pub struct AlterTableBuilder {
    table: String,
}

/// Starts an ALTER TABLE statement.
#[must_use]
pub fn alter_table(name: impl Into<String>) -> AlterTableBuilder {
    AlterTableBuilder { table: name.into() }
}

impl AlterTableBuilder {
    /// `RENAME TO name`
    #[must_use]
    pub fn rename_to(self, name: impl Into<String>) -> Statement {
        self.with_action(AlterTableAction::RenameTo(name.into()))
    }

    /// `ADD column`
    #[must_use]
    pub fn add_column(self, column: ColumnDefinition) -> Statement {
        self.with_action(AlterTableAction::AddColumn(column))
    }

    fn with_action(self, action: AlterTableAction) -> Statement {
        Statement::AlterTable(AlterTable {
            table: self.table,
            action,
        })
    }
}

// =============================================================================
// DropTableBuilder
// =============================================================================

/// DROP TABLE builder.
#[derive(Debug, Clone)]
pub struct DropTableBuilder {
    table: DropTable,
}

/// Starts a DROP TABLE statement. The default behavior is RESTRICT.
#[must_use]
pub fn drop_table(name: impl Into<String>) -> DropTableBuilder {
    DropTableBuilder {
        table: DropTable {
            table: name.into(),
            if_exists: false,
            behavior: DropBehavior::default(),
        },
    }
}

impl DropTableBuilder {
    /// Uses IF EXISTS where the dialect supports it.
    #[must_use]
    pub fn if_exists(mut self) -> Self {
        self.table.if_exists = true;
        self
    }

    /// Drops dependent objects too.
    #[must_use]
    pub fn cascade(mut self) -> Self {
        self.table.behavior = DropBehavior::Cascade;
        self
    }

    /// Builds the statement.
    #[must_use]
    pub fn build(self) -> Statement {
        Statement::DropTable(self.table)
    }
}

// =============================================================================
// Indexes
// =============================================================================

/// CREATE INDEX builder.
#[derive(Debug, Clone)]
pub struct CreateIndexBuilder {
    index: CreateIndex,
}

/// Starts a CREATE INDEX statement.
#[must_use]
pub fn create_index(name: impl Into<String>, table: impl Into<String>) -> CreateIndexBuilder {
    CreateIndexBuilder {
        index: CreateIndex {
            name: name.into(),
            table: table.into(),
            columns: Vec::new(),
            unique: false,
        },
    }
}

impl CreateIndexBuilder {
    /// Adds indexed columns.
    #[must_use]
    pub fn columns<S: Into<String>>(mut self, columns: impl IntoIterator<Item = S>) -> Self {
        self.index.columns.extend(columns.into_iter().map(Into::into));
        self
    }

    /// Makes this a unique index.
    #[must_use]
    pub fn unique(mut self) -> Self {
        self.index.unique = true;
        self
    }

    /// Builds the statement.
    #[must_use]
    pub fn build(self) -> Statement {
        Statement::CreateIndex(self.index)
    }
}

/// A DROP INDEX statement.
#[must_use]
pub fn drop_index(name: impl Into<String>) -> Statement {
    Statement::DropIndex(DropIndex { name: name.into() })
}

//! Schema statements: tables, columns, constraints and indexes.

use super::expression::Expr;
use super::types::DataType;

/// Rendering order of constraint clauses.
///
/// Constraints are always emitted in this order, whatever order they were
/// added in: default, unique, not-null, primary key, check, collate, foreign
/// key. Adding a variant means choosing its place here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConstraintPrecedence {
    /// `DEFAULT ...`
    Default,
    /// `UNIQUE`
    Unique,
    /// `NOT NULL`
    NotNull,
    /// `PRIMARY KEY`
    PrimaryKey,
    /// `CHECK (...)`
    Check,
    /// `COLLATE ...`
    Collate,
    /// `REFERENCES ...`
    ForeignKey,
}

/// How a primary key column gets its value when none is supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrimaryKeyDefault {
    /// Caller supplies the key, no default clause.
    RowId,
    /// Database-generated increasing key.
    #[default]
    AutoIncrement,
    /// Database-generated unique identifier.
    Uid,
}

/// Foreign key referential action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForeignKeyAction {
    /// No action.
    NoAction,
    /// Restrict deletion/update.
    Restrict,
    /// Cascade the operation.
    Cascade,
    /// Set to NULL.
    SetNull,
    /// Set to default value.
    SetDefault,
}

impl ForeignKeyAction {
    /// Returns the SQL representation of the action.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NoAction => "NO ACTION",
            Self::Restrict => "RESTRICT",
            Self::Cascade => "CASCADE",
            Self::SetNull => "SET NULL",
            Self::SetDefault => "SET DEFAULT",
        }
    }
}

/// The referenced side of a foreign key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKey {
    /// Referenced table.
    pub table: String,
    /// Referenced columns.
    pub columns: Vec<String>,
    /// Action on delete.
    pub on_delete: Option<ForeignKeyAction>,
    /// Action on update.
    pub on_update: Option<ForeignKeyAction>,
}

impl ForeignKey {
    /// References `table (columns)`.
    #[must_use]
    pub fn new<S: Into<String>>(
        table: impl Into<String>,
        columns: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            table: table.into(),
            columns: columns.into_iter().map(Into::into).collect(),
            on_delete: None,
            on_update: None,
        }
    }

    /// Sets the ON DELETE action.
    #[must_use]
    pub const fn on_delete(mut self, action: ForeignKeyAction) -> Self {
        self.on_delete = Some(action);
        self
    }

    /// Sets the ON UPDATE action.
    #[must_use]
    pub const fn on_update(mut self, action: ForeignKeyAction) -> Self {
        self.on_update = Some(action);
        self
    }
}

/// A column-level constraint.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnConstraintKind {
    /// `DEFAULT expr`
    Default(Expr),
    /// `UNIQUE`
    Unique,
    /// `NOT NULL`
    NotNull,
    /// `PRIMARY KEY`, with an optional default clause.
    PrimaryKey(Option<PrimaryKeyDefault>),
    /// `CHECK (expr)`
    Check(Expr),
    /// `COLLATE name`
    Collate(String),
    /// `REFERENCES table (columns)`
    References(ForeignKey),
}

impl ColumnConstraintKind {
    /// Returns where this constraint sorts in a column definition.
    #[must_use]
    pub const fn precedence(&self) -> ConstraintPrecedence {
        match self {
            Self::Default(_) => ConstraintPrecedence::Default,
            Self::Unique => ConstraintPrecedence::Unique,
            Self::NotNull => ConstraintPrecedence::NotNull,
            Self::PrimaryKey(_) => ConstraintPrecedence::PrimaryKey,
            Self::Check(_) => ConstraintPrecedence::Check,
            Self::Collate(_) => ConstraintPrecedence::Collate,
            Self::References(_) => ConstraintPrecedence::ForeignKey,
        }
    }
}

/// A column constraint, optionally named.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnConstraint {
    /// Constraint name, rendered as `CONSTRAINT name`.
    pub name: Option<String>,
    /// The constraint.
    pub kind: ColumnConstraintKind,
}

impl From<ColumnConstraintKind> for ColumnConstraint {
    fn from(kind: ColumnConstraintKind) -> Self {
        Self { name: None, kind }
    }
}

/// A column definition for CREATE TABLE and ALTER TABLE ADD.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDefinition {
    /// Column name.
    pub name: String,
    /// Data type.
    pub data_type: DataType,
    /// Constraints in insertion order.
    pub constraints: Vec<ColumnConstraint>,
}

impl ColumnDefinition {
    /// Creates a new column definition.
    #[must_use]
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            constraints: Vec::new(),
        }
    }

    /// Adds a constraint.
    #[must_use]
    pub fn constraint(mut self, constraint: impl Into<ColumnConstraint>) -> Self {
        self.constraints.push(constraint.into());
        self
    }

    /// Adds a named constraint.
    #[must_use]
    pub fn named_constraint(self, name: impl Into<String>, kind: ColumnConstraintKind) -> Self {
        self.constraint(ColumnConstraint {
            name: Some(name.into()),
            kind,
        })
    }

    /// Sets the column as NOT NULL.
    #[must_use]
    pub fn not_null(self) -> Self {
        self.constraint(ColumnConstraintKind::NotNull)
    }

    /// Sets the column as UNIQUE.
    #[must_use]
    pub fn unique(self) -> Self {
        self.constraint(ColumnConstraintKind::Unique)
    }

    /// Sets the column as PRIMARY KEY with no default clause.
    #[must_use]
    pub fn primary_key(self) -> Self {
        self.constraint(ColumnConstraintKind::PrimaryKey(None))
    }

    /// Sets the column as PRIMARY KEY with a generated default.
    #[must_use]
    pub fn primary_key_with(self, default: PrimaryKeyDefault) -> Self {
        self.constraint(ColumnConstraintKind::PrimaryKey(Some(default)))
    }

    /// Sets the default value.
    #[must_use]
    pub fn default(self, expr: impl Into<Expr>) -> Self {
        self.constraint(ColumnConstraintKind::Default(expr.into()))
    }

    /// Adds a CHECK constraint.
    #[must_use]
    pub fn check(self, expr: Expr) -> Self {
        self.constraint(ColumnConstraintKind::Check(expr))
    }

    /// Sets the collation.
    #[must_use]
    pub fn collate(self, collation: impl Into<String>) -> Self {
        self.constraint(ColumnConstraintKind::Collate(collation.into()))
    }

    /// References another table.
    #[must_use]
    pub fn references(self, foreign_key: ForeignKey) -> Self {
        self.constraint(ColumnConstraintKind::References(foreign_key))
    }

    /// Returns the constraints in rendering order.
    ///
    /// The sort is stable, so constraints of equal precedence keep their
    /// insertion order.
    #[must_use]
    pub fn sorted_constraints(&self) -> Vec<&ColumnConstraint> {
        let mut sorted: Vec<&ColumnConstraint> = self.constraints.iter().collect();
        sorted.sort_by_key(|c| c.kind.precedence());
        sorted
    }
}

/// A table-level constraint.
#[derive(Debug, Clone, PartialEq)]
pub enum TableConstraintKind {
    /// `UNIQUE (columns)`
    Unique(Vec<String>),
    /// `PRIMARY KEY (columns)`
    PrimaryKey(Vec<String>),
    /// `CHECK (expr)`
    Check(Expr),
    /// `FOREIGN KEY (columns) REFERENCES ...`
    ForeignKey {
        /// Local columns.
        columns: Vec<String>,
        /// Referenced side.
        references: ForeignKey,
    },
}

impl TableConstraintKind {
    /// Returns where this constraint sorts among table constraints.
    #[must_use]
    pub const fn precedence(&self) -> ConstraintPrecedence {
        match self {
            Self::Unique(_) => ConstraintPrecedence::Unique,
            Self::PrimaryKey(_) => ConstraintPrecedence::PrimaryKey,
            Self::Check(_) => ConstraintPrecedence::Check,
            Self::ForeignKey { .. } => ConstraintPrecedence::ForeignKey,
        }
    }
}

/// A table constraint, optionally named.
#[derive(Debug, Clone, PartialEq)]
pub struct TableConstraint {
    /// Constraint name, rendered as `CONSTRAINT name`.
    pub name: Option<String>,
    /// The constraint.
    pub kind: TableConstraintKind,
}

impl From<TableConstraintKind> for TableConstraint {
    fn from(kind: TableConstraintKind) -> Self {
        Self { name: None, kind }
    }
}

/// A CREATE TABLE statement.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTable {
    /// Table name.
    pub table: String,
    /// `CREATE TEMPORARY TABLE`.
    pub temporary: bool,
    /// `IF NOT EXISTS`, dropped for dialects without support.
    pub if_not_exists: bool,
    /// Columns in order.
    pub columns: Vec<ColumnDefinition>,
    /// Table constraints in insertion order.
    pub constraints: Vec<TableConstraint>,
}

impl CreateTable {
    /// Returns the table constraints in rendering order.
    #[must_use]
    pub fn sorted_constraints(&self) -> Vec<&TableConstraint> {
        let mut sorted: Vec<&TableConstraint> = self.constraints.iter().collect();
        sorted.sort_by_key(|c| c.kind.precedence());
        sorted
    }
}

/// The change applied by ALTER TABLE. One change per statement.
#[derive(Debug, Clone, PartialEq)]
pub enum AlterTableAction {
    /// `RENAME TO name`
    RenameTo(String),
    /// `ADD column`
    AddColumn(ColumnDefinition),
}

/// An ALTER TABLE statement.
#[derive(Debug, Clone, PartialEq)]
pub struct AlterTable {
    /// Table name.
    pub table: String,
    /// The change.
    pub action: AlterTableAction,
}

/// What DROP TABLE does with dependent objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropBehavior {
    /// Refuse if anything depends on the table.
    #[default]
    Restrict,
    /// Drop dependents too.
    Cascade,
}

impl DropBehavior {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Restrict => "RESTRICT",
            Self::Cascade => "CASCADE",
        }
    }
}

/// A DROP TABLE statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropTable {
    /// Table name.
    pub table: String,
    /// `IF EXISTS`, dropped for dialects without support.
    pub if_exists: bool,
    /// Dependent object behavior, dropped for dialects without support.
    pub behavior: DropBehavior,
}

/// A CREATE INDEX statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateIndex {
    /// Index name.
    pub name: String,
    /// Indexed table.
    pub table: String,
    /// Indexed columns.
    pub columns: Vec<String>,
    /// `CREATE UNIQUE INDEX`.
    pub unique: bool,
}

/// A DROP INDEX statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropIndex {
    /// Index name.
    pub name: String,
}

//! SQL statement AST types.

use super::ddl::{AlterTable, CreateIndex, CreateTable, DropIndex, DropTable};
use super::expression::Expr;
use crate::value::Value;

/// Order direction for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderDirection {
    /// Ascending order (default).
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl OrderDirection {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// An ORDER BY clause entry.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    /// The expression to order by.
    pub expr: Expr,
    /// The direction (ASC or DESC).
    pub direction: OrderDirection,
}

/// Join method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    /// INNER JOIN.
    Inner,
    /// LEFT OUTER JOIN.
    Left,
    /// RIGHT OUTER JOIN.
    Right,
    /// FULL OUTER JOIN.
    Full,
}

impl JoinType {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inner => "INNER JOIN",
            Self::Left => "LEFT JOIN",
            Self::Right => "RIGHT JOIN",
            Self::Full => "FULL OUTER JOIN",
        }
    }
}

/// A JOIN clause.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinClause {
    /// The type of join.
    pub join_type: JoinType,
    /// The table to join.
    pub table: TableRef,
    /// The join condition.
    pub on: Expr,
}

/// A table reference in a FROM clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    /// Table name.
    pub name: String,
    /// Alias.
    pub alias: Option<String>,
}

impl TableRef {
    /// Creates a simple table reference.
    #[must_use]
    pub fn table(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
        }
    }

    /// Adds an alias to this table reference.
    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

impl From<&str> for TableRef {
    fn from(name: &str) -> Self {
        Self::table(name)
    }
}

/// A SELECT statement.
///
/// A select without tables is a value construction, rendered by the
/// serializer as `VALUES` where the dialect requires it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectStatement {
    /// Whether to select DISTINCT values.
    pub distinct: bool,
    /// The projected columns.
    pub columns: Vec<SelectColumn>,
    /// Source tables.
    pub tables: Vec<TableRef>,
    /// Joins, in order.
    pub joins: Vec<JoinClause>,
    /// The WHERE clause.
    pub where_clause: Option<Expr>,
    /// GROUP BY expressions.
    pub group_by: Vec<Expr>,
    /// ORDER BY clauses.
    pub order_by: Vec<OrderBy>,
    /// Maximum number of rows.
    pub limit: Option<u64>,
    /// Number of rows to skip.
    pub offset: Option<u64>,
}

impl SelectStatement {
    /// Returns true if any projected column is a wildcard.
    #[must_use]
    pub fn selects_all(&self) -> bool {
        self.columns.iter().any(SelectColumn::is_all)
    }
}

/// A column in SELECT clause.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectColumn {
    /// `*`
    All,
    /// `table.*`
    AllFrom(String),
    /// An expression with an optional alias.
    Expr {
        /// The expression.
        expr: Expr,
        /// Column alias.
        alias: Option<String>,
    },
}

impl SelectColumn {
    /// Creates a new select column.
    #[must_use]
    pub const fn new(expr: Expr) -> Self {
        Self::Expr { expr, alias: None }
    }

    /// Creates a select column with an alias.
    #[must_use]
    pub fn with_alias(expr: Expr, alias: impl Into<String>) -> Self {
        Self::Expr {
            expr,
            alias: Some(alias.into()),
        }
    }

    /// Returns true for `*` and `table.*`.
    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All | Self::AllFrom(_))
    }
}

/// An INSERT statement.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertStatement {
    /// Table name.
    pub table: String,
    /// Column names (optional).
    pub columns: Vec<String>,
    /// Values to insert.
    pub values: InsertSource,
}

/// Source of data for INSERT.
#[derive(Debug, Clone, PartialEq)]
pub enum InsertSource {
    /// VALUES (...), (...), ...
    Values(Vec<Vec<Expr>>),
    /// SELECT ...
    Query(Box<SelectStatement>),
}

/// An UPDATE statement.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateStatement {
    /// Table name.
    pub table: String,
    /// SET assignments.
    pub assignments: Vec<UpdateAssignment>,
    /// WHERE clause.
    pub where_clause: Option<Expr>,
}

/// An assignment in UPDATE SET.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateAssignment {
    /// Column name.
    pub column: String,
    /// Value expression.
    pub value: Expr,
}

/// A DELETE statement.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteStatement {
    /// Table name.
    pub table: String,
    /// WHERE clause.
    pub where_clause: Option<Expr>,
}

/// A SQL statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// SELECT statement.
    Select(SelectStatement),
    /// INSERT statement.
    Insert(InsertStatement),
    /// UPDATE statement.
    Update(UpdateStatement),
    /// DELETE statement.
    Delete(DeleteStatement),
    /// CREATE TABLE statement.
    CreateTable(CreateTable),
    /// ALTER TABLE statement.
    AlterTable(AlterTable),
    /// DROP TABLE statement.
    DropTable(DropTable),
    /// CREATE INDEX statement.
    CreateIndex(CreateIndex),
    /// DROP INDEX statement.
    DropIndex(DropIndex),
    /// Verbatim SQL with its own binds.
    Raw {
        /// SQL text, placeholders already spelled for the target dialect.
        sql: String,
        /// Values for the placeholders, in order.
        binds: Vec<Value>,
    },
}

impl Statement {
    /// Returns the leading keyword(s) of the statement, for logging.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Select(_) => "SELECT",
            Self::Insert(_) => "INSERT",
            Self::Update(_) => "UPDATE",
            Self::Delete(_) => "DELETE",
            Self::CreateTable(_) => "CREATE TABLE",
            Self::AlterTable(_) => "ALTER TABLE",
            Self::DropTable(_) => "DROP TABLE",
            Self::CreateIndex(_) => "CREATE INDEX",
            Self::DropIndex(_) => "DROP INDEX",
            Self::Raw { .. } => "RAW",
        }
    }
}

impl From<SelectStatement> for Statement {
    fn from(select: SelectStatement) -> Self {
        Self::Select(select)
    }
}

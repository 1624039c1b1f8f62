//! Abstract Syntax Tree (AST) types for SQL statements.
//!
//! Every node owns its children. Nodes carry names and values only; quoting,
//! placeholders and keyword spelling are applied by the serializer.

mod ddl;
mod expression;
mod statement;
mod types;

pub use ddl::{
    AlterTable, AlterTableAction, ColumnConstraint, ColumnConstraintKind, ColumnDefinition,
    ConstraintPrecedence, CreateIndex, CreateTable, DropBehavior, DropIndex, DropTable,
    ForeignKey, ForeignKeyAction, PrimaryKeyDefault, TableConstraint, TableConstraintKind,
};
pub use expression::{BinaryOp, ColumnRef, Expr, FunctionArg, FunctionCall, Literal, UnaryOp};
pub use statement::{
    DeleteStatement, InsertSource, InsertStatement, JoinClause, JoinType, OrderBy, OrderDirection,
    SelectColumn, SelectStatement, Statement, TableRef, UpdateAssignment, UpdateStatement,
};
pub use types::DataType;

//! Expression AST types.

use super::statement::SelectStatement;
use crate::value::{Value, ValueConvertible};

/// A literal rendered inline in the SQL text.
///
/// Only fixed keywords and numbers belong here. Application data goes
/// through [`Expr::Bind`].
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// NULL.
    Null,
    /// The DEFAULT keyword.
    Default,
    /// Boolean, spelled by the dialect.
    Boolean(bool),
    /// Integer.
    Integer(i64),
    /// Float.
    Float(f64),
    /// String, quoted by the dialect.
    String(String),
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,

    // Comparison
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Is,
    IsNot,
    In,
    NotIn,

    // Logical
    And,
    Or,

    // String
    Concat,
    Like,
    NotLike,
}

impl BinaryOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Eq => "=",
            Self::NotEq => "<>",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Is => "IS",
            Self::IsNot => "IS NOT",
            Self::In => "IN",
            Self::NotIn => "NOT IN",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Concat => "||",
            Self::Like => "LIKE",
            Self::NotLike => "NOT LIKE",
        }
    }

    /// Returns the precedence of the operator (higher = binds tighter).
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::Or => 1,
            Self::And => 2,
            Self::Eq
            | Self::NotEq
            | Self::Lt
            | Self::LtEq
            | Self::Gt
            | Self::GtEq
            | Self::Is
            | Self::IsNot
            | Self::In
            | Self::NotIn => 3,
            Self::Like | Self::NotLike => 4,
            Self::Add | Self::Sub | Self::Concat => 8,
            Self::Mul | Self::Div | Self::Mod => 9,
        }
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// Negation (-)
    Neg,
    /// Logical NOT
    Not,
}

impl UnaryOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Not => "NOT",
        }
    }
}

/// A column reference, optionally qualified with a table name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRef {
    /// Table name or alias.
    pub table: Option<String>,
    /// Column name.
    pub name: String,
}

/// A function argument.
#[derive(Debug, Clone, PartialEq)]
pub enum FunctionArg {
    /// `*`, as in `COUNT(*)`.
    All,
    /// An expression.
    Expr(Expr),
}

/// A function call expression.
///
/// A call without arguments renders as the bare name, so niladic functions
/// such as `CURRENT_TIMESTAMP` need no parentheses.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    /// The function name.
    pub name: String,
    /// The arguments.
    pub args: Vec<FunctionArg>,
}

/// An SQL expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value.
    Literal(Literal),

    /// A value sent as a bind parameter.
    Bind(Value),

    /// A column reference.
    Column(ColumnRef),

    /// A binary expression.
    Binary {
        /// Left operand.
        left: Box<Expr>,
        /// Operator.
        op: BinaryOp,
        /// Right operand.
        right: Box<Expr>,
    },

    /// A unary expression.
    Unary {
        /// Operator.
        op: UnaryOp,
        /// Operand.
        operand: Box<Expr>,
    },

    /// A function call.
    Function(FunctionCall),

    /// A subquery.
    Subquery(Box<SelectStatement>),

    /// A parenthesized, comma separated list.
    Group(Vec<Expr>),
}

impl Expr {
    /// Creates a new column reference.
    #[must_use]
    pub fn column(name: impl Into<String>) -> Self {
        Self::Column(ColumnRef {
            table: None,
            name: name.into(),
        })
    }

    /// Creates a new qualified column reference.
    #[must_use]
    pub fn qualified_column(table: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Column(ColumnRef {
            table: Some(table.into()),
            name: name.into(),
        })
    }

    /// Creates a bind parameter.
    #[must_use]
    pub fn bind<T: ValueConvertible>(value: T) -> Self {
        Self::Bind(value.to_value())
    }

    /// Creates a new integer literal.
    #[must_use]
    pub const fn integer(value: i64) -> Self {
        Self::Literal(Literal::Integer(value))
    }

    /// Creates a new float literal.
    #[must_use]
    pub const fn float(value: f64) -> Self {
        Self::Literal(Literal::Float(value))
    }

    /// Creates a new string literal.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::Literal(Literal::String(value.into()))
    }

    /// Creates a new boolean literal.
    #[must_use]
    pub const fn boolean(value: bool) -> Self {
        Self::Literal(Literal::Boolean(value))
    }

    /// Creates a NULL literal.
    #[must_use]
    pub const fn null() -> Self {
        Self::Literal(Literal::Null)
    }

    /// Creates the DEFAULT keyword.
    #[must_use]
    pub const fn default_value() -> Self {
        Self::Literal(Literal::Default)
    }

    /// Creates a function call.
    #[must_use]
    pub fn function(name: impl Into<String>, args: Vec<Self>) -> Self {
        Self::Function(FunctionCall {
            name: name.into(),
            args: args.into_iter().map(FunctionArg::Expr).collect(),
        })
    }

    /// Creates a binary expression.
    #[must_use]
    pub fn binary(self, op: BinaryOp, right: impl Into<Self>) -> Self {
        Self::Binary {
            left: Box::new(self),
            op,
            right: Box::new(right.into()),
        }
    }

    /// Creates an equality expression.
    #[must_use]
    pub fn eq(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::Eq, right)
    }

    /// Creates an inequality expression.
    #[must_use]
    pub fn not_eq(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::NotEq, right)
    }

    /// Creates a less-than expression.
    #[must_use]
    pub fn lt(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::Lt, right)
    }

    /// Creates a less-than-or-equal expression.
    #[must_use]
    pub fn lt_eq(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::LtEq, right)
    }

    /// Creates a greater-than expression.
    #[must_use]
    pub fn gt(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::Gt, right)
    }

    /// Creates a greater-than-or-equal expression.
    #[must_use]
    pub fn gt_eq(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::GtEq, right)
    }

    /// Creates an AND expression.
    #[must_use]
    pub fn and(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::And, right)
    }

    /// Creates an OR expression.
    #[must_use]
    pub fn or(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::Or, right)
    }

    /// Creates an addition.
    #[must_use]
    pub fn add(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::Add, right)
    }

    /// Creates a subtraction.
    #[must_use]
    pub fn sub(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::Sub, right)
    }

    /// Creates a string concatenation.
    #[must_use]
    pub fn concat(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::Concat, right)
    }

    /// Creates a LIKE expression.
    #[must_use]
    pub fn like(self, pattern: impl Into<Self>) -> Self {
        self.binary(BinaryOp::Like, pattern)
    }

    /// Creates a NOT LIKE expression.
    #[must_use]
    pub fn not_like(self, pattern: impl Into<Self>) -> Self {
        self.binary(BinaryOp::NotLike, pattern)
    }

    /// Creates an IS NULL expression.
    #[must_use]
    pub fn is_null(self) -> Self {
        self.binary(BinaryOp::Is, Self::null())
    }

    /// Creates an IS NOT NULL expression.
    #[must_use]
    pub fn is_not_null(self) -> Self {
        self.binary(BinaryOp::IsNot, Self::null())
    }

    /// Creates an IN expression over a list of bound values.
    #[must_use]
    pub fn in_list<T: Into<Self>>(self, values: impl IntoIterator<Item = T>) -> Self {
        let list = values.into_iter().map(Into::into).collect();
        self.binary(BinaryOp::In, Self::Group(list))
    }

    /// Creates a NOT IN expression over a list of bound values.
    #[must_use]
    pub fn not_in_list<T: Into<Self>>(self, values: impl IntoIterator<Item = T>) -> Self {
        let list = values.into_iter().map(Into::into).collect();
        self.binary(BinaryOp::NotIn, Self::Group(list))
    }

    /// Creates an IN expression over a subquery.
    #[must_use]
    pub fn in_subquery(self, query: SelectStatement) -> Self {
        self.binary(BinaryOp::In, Self::Subquery(Box::new(query)))
    }

    /// Wraps the expression in parentheses.
    #[must_use]
    pub fn paren(self) -> Self {
        Self::Group(vec![self])
    }

    /// Negates the expression with NOT.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Self::Unary {
            op: UnaryOp::Not,
            operand: Box::new(self),
        }
    }

    /// Negates a numeric expression.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn neg(self) -> Self {
        Self::Unary {
            op: UnaryOp::Neg,
            operand: Box::new(self),
        }
    }
}

impl<T: ValueConvertible> From<T> for Expr {
    fn from(value: T) -> Self {
        Self::Bind(value.to_value())
    }
}

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        Self::Bind(Value::Text(value.to_string()))
    }
}

impl From<Literal> for Expr {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

impl From<SelectStatement> for Expr {
    fn from(query: SelectStatement) -> Self {
        Self::Subquery(Box::new(query))
    }
}

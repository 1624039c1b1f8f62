//! Shorthand constructors for expressions.

use crate::ast::{Expr, FunctionArg, FunctionCall};
use crate::value::ValueConvertible;

/// Creates a column reference.
#[must_use]
pub fn col(name: &str) -> Expr {
    Expr::column(name)
}

/// Creates a table-qualified column reference.
#[must_use]
pub fn table_col(table: &str, name: &str) -> Expr {
    Expr::qualified_column(table, name)
}

/// Creates a bound value.
///
/// Useful where a bare value would be ambiguous, such as the left side of
/// a comparison.
#[must_use]
pub fn bind<T: ValueConvertible>(value: T) -> Expr {
    Expr::bind(value)
}

/// Creates a function call.
#[must_use]
pub fn func<T: Into<Expr>>(name: &str, args: impl IntoIterator<Item = T>) -> Expr {
    Expr::function(name, args.into_iter().map(Into::into).collect())
}

/// `COUNT(*)`
#[must_use]
pub fn count_all() -> Expr {
    Expr::Function(FunctionCall {
        name: String::from("COUNT"),
        args: vec![FunctionArg::All],
    })
}

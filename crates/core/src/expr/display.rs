use std::fmt;

use super::Expr;

/// Renders the expression fully parenthesized.
///
/// Sums render as `(a + b)` and products as `(a * b)`. Constants always carry
/// a decimal point (`2.0`, `-1.0`) so they are never mistaken for names.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Sum(lhs, rhs) => write!(f, "({lhs} + {rhs})"),
            Expr::Product(lhs, rhs) => write!(f, "({lhs} * {rhs})"),
            Expr::Constant(value) => write!(f, "{value:?}"),
            Expr::Variable(name) => f.write_str(name),
        }
    }
}

use thiserror::Error;

use crate::{Assignment, Expr};

/// Errors that can occur when evaluating an expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The expression references a variable the assignment does not bind.
    #[error("variable `{name}` is not bound")]
    UnboundVariable { name: String },
}

impl Expr {
    /// Evaluates the expression at the given point.
    ///
    /// Arithmetic follows IEEE 754, so overflow yields infinities and invalid
    /// operations yield `NaN` rather than errors.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::UnboundVariable`] if the expression references a
    /// variable that `values` does not bind. Missing variables never default
    /// to zero.
    pub fn evaluate(&self, values: &Assignment) -> Result<f64, EvalError> {
        match self {
            Expr::Constant(value) => Ok(*value),
            Expr::Variable(name) => values
                .get(name)
                .ok_or_else(|| EvalError::UnboundVariable { name: name.clone() }),
            Expr::Sum(lhs, rhs) => Ok(lhs.evaluate(values)? + rhs.evaluate(values)?),
            Expr::Product(lhs, rhs) => Ok(lhs.evaluate(values)? * rhs.evaluate(values)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn sum_of_variable_and_constant() {
        let expr = Expr::sum(Expr::variable("x"), Expr::constant(1.0));
        let at = Assignment::from([("x", 1.0)]);
        assert_eq!(expr.evaluate(&at), Ok(2.0));
    }

    #[test]
    fn nested_expression() {
        // (2x + 3y)(x - y) - 2 at (1, 1) = -2.
        let x = Expr::variable("x");
        let y = Expr::variable("y");
        let expr = Expr::equation(
            (Expr::constant(2.0) * x.clone() + Expr::constant(3.0) * y.clone()) * (x - y),
            Expr::constant(2.0),
        );

        let at = Assignment::from([("x", 1.0), ("y", 1.0)]);
        assert_relative_eq!(expr.evaluate(&at).unwrap(), -2.0);

        let at = Assignment::from([("x", 3.0), ("y", 1.0)]);
        assert_relative_eq!(expr.evaluate(&at).unwrap(), 16.0);
    }

    #[test]
    fn unbound_variable_is_an_error() {
        let expr = Expr::product(Expr::variable("x"), Expr::variable("y"));
        let at = Assignment::from([("x", 1.0)]);

        assert_eq!(
            expr.evaluate(&at),
            Err(EvalError::UnboundVariable {
                name: "y".to_string()
            })
        );
    }

    #[test]
    fn extra_bindings_are_ignored() {
        let expr = Expr::variable("x");
        let at = Assignment::from([("x", 4.0), ("unused", 9.0)]);
        assert_eq!(expr.evaluate(&at), Ok(4.0));
    }

    #[test]
    fn overflow_yields_infinity() {
        let expr = Expr::product(Expr::variable("x"), Expr::variable("x"));
        let at = Assignment::from([("x", 1e200)]);
        assert!(expr.evaluate(&at).unwrap().is_infinite());
    }
}

use crate::{Assignment, DerivativeSet, EvalError, Expr, cost_function};

/// An expression to minimize, bundled with its partial derivatives.
///
/// The partials are computed once, when the objective is built, and are then
/// shared read-only by every evaluation. An `Objective` is `Send + Sync`, so a
/// single instance can serve many concurrent solves.
#[derive(Debug, Clone)]
pub struct Objective {
    expr: Expr,
    partials: DerivativeSet,
}

impl Objective {
    /// Creates an objective from an expression, differentiating it once.
    #[must_use]
    pub fn new(expr: Expr) -> Self {
        let partials = expr.partial_derivatives();
        Self { expr, partials }
    }

    /// Creates the sum-of-squares objective for a system of residuals.
    ///
    /// See [`cost_function`].
    #[must_use]
    pub fn from_equations<I>(residuals: I) -> Self
    where
        I: IntoIterator<Item = Expr>,
    {
        Self::new(cost_function(residuals))
    }

    /// Returns the objective expression.
    #[must_use]
    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// Returns the precomputed partial derivatives.
    #[must_use]
    pub fn partials(&self) -> &DerivativeSet {
        &self.partials
    }

    /// Evaluates the objective at `values`.
    ///
    /// # Errors
    ///
    /// Returns an error if the objective references an unbound variable.
    pub fn cost(&self, values: &Assignment) -> Result<f64, EvalError> {
        self.expr.evaluate(values)
    }

    /// Evaluates the gradient (every partial derivative) at `values`.
    ///
    /// # Errors
    ///
    /// Returns an error if a partial references an unbound variable.
    pub fn gradient(&self, values: &Assignment) -> Result<Assignment, EvalError> {
        self.partials.evaluate(values)
    }
}

impl From<Expr> for Objective {
    fn from(expr: Expr) -> Self {
        Self::new(expr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn cost_and_gradient() {
        // f = (x - 1)² + (y + 2)²
        let objective = Objective::from_equations([
            Expr::equation("x".into(), 1.0.into()),
            Expr::equation("y".into(), (-2.0).into()),
        ]);

        let at = Assignment::from([("x", 3.0), ("y", 0.0)]);
        assert_relative_eq!(objective.cost(&at).unwrap(), 8.0);

        let gradient = objective.gradient(&at).unwrap();
        assert_relative_eq!(gradient["x"], 4.0);
        assert_relative_eq!(gradient["y"], 4.0);
    }

    #[test]
    fn partials_are_precomputed() {
        let objective = Objective::new(Expr::product("a".into(), "b".into()));
        let names: Vec<_> = objective.partials().iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Objective>();
    }
}

use crate::Expr;

/// Combines equation residuals into a single sum-of-squares objective.
///
/// Each residual should be zero exactly when its equation holds (see
/// [`Expr::equation`]); the result is then zero exactly at a common root and
/// positive everywhere else. This is not checked.
///
/// The sum starts from the constant `0`, so an empty list yields `0`.
pub fn cost_function<I>(residuals: I) -> Expr
where
    I: IntoIterator<Item = Expr>,
{
    residuals
        .into_iter()
        .fold(Expr::constant(0.0), |cost, residual| {
            Expr::sum(cost, Expr::product(residual.clone(), residual))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::Assignment;

    #[test]
    fn empty_system_costs_nothing() {
        let cost = cost_function(Vec::<Expr>::new());

        assert_eq!(cost.as_constant(), Some(0.0));
        assert_eq!(cost.evaluate(&Assignment::new()), Ok(0.0));
        assert_eq!(cost.evaluate(&Assignment::from([("x", 42.0)])), Ok(0.0));
    }

    #[test]
    fn single_residual_is_squared() {
        let residual = Expr::equation(Expr::variable("x"), Expr::constant(3.0));
        let cost = cost_function([residual]);

        assert_eq!(cost.to_string(), "((x + -3.0) * (x + -3.0))");
        assert_relative_eq!(cost.evaluate(&Assignment::from([("x", 5.0)])).unwrap(), 4.0);
    }

    #[test]
    fn residuals_are_summed_in_order() {
        let x = Expr::variable("x");
        let y = Expr::variable("y");
        let cost = cost_function([x.clone() - y.clone(), x + y]);

        assert_eq!(cost.to_string(), "(((x + (-1.0 * y)) * (x + (-1.0 * y))) + ((x + y) * (x + y)))");

        // (1 - 2)² + (1 + 2)² = 10
        let at = Assignment::from([("x", 1.0), ("y", 2.0)]);
        assert_relative_eq!(cost.evaluate(&at).unwrap(), 10.0);
    }

    #[test]
    fn zero_at_common_root() {
        let x = Expr::variable("x");
        let y = Expr::variable("y");
        let cost = cost_function([
            Expr::equation(x.clone() + y.clone(), Expr::constant(3.0)),
            Expr::equation(x - y, Expr::constant(1.0)),
        ]);

        let at = Assignment::from([("x", 2.0), ("y", 1.0)]);
        assert_eq!(cost.evaluate(&at), Ok(0.0));
    }
}

use std::collections::{BTreeMap, BTreeSet};

use crate::{Assignment, EvalError, Expr};

impl Expr {
    /// Returns the symbolic derivative with respect to `variable`.
    ///
    /// Derivatives are built with the simplifying constructors, so terms that
    /// vanish (the derivative of a constant, say) drop out of the result:
    ///
    /// - `c' = 0`
    /// - `v' = 1` if `v` is `variable`, else `0`
    /// - `(a + b)' = a' + b'`
    /// - `(a * b)' = a * b' + a' * b`
    #[must_use]
    pub fn derivative(&self, variable: &str) -> Expr {
        match self {
            Expr::Constant(_) => Expr::constant(0.0),
            Expr::Variable(name) => Expr::constant(if name == variable { 1.0 } else { 0.0 }),
            Expr::Sum(lhs, rhs) => Expr::sum(lhs.derivative(variable), rhs.derivative(variable)),
            Expr::Product(lhs, rhs) => Expr::sum(
                Expr::product((**lhs).clone(), rhs.derivative(variable)),
                Expr::product(lhs.derivative(variable), (**rhs).clone()),
            ),
        }
    }

    /// Returns the names of every variable in the expression, deduplicated.
    #[must_use]
    pub fn variables(&self) -> BTreeSet<String> {
        let mut names = BTreeSet::new();
        self.collect_variables(&mut names);
        names.into_iter().map(str::to_owned).collect()
    }

    /// Returns the partial derivative with respect to each variable in the
    /// expression.
    #[must_use]
    pub fn partial_derivatives(&self) -> DerivativeSet {
        let partials = self
            .variables()
            .into_iter()
            .map(|name| {
                let partial = self.derivative(&name);
                (name, partial)
            })
            .collect();
        DerivativeSet { partials }
    }

    fn collect_variables<'a>(&'a self, names: &mut BTreeSet<&'a str>) {
        match self {
            Expr::Constant(_) => {}
            Expr::Variable(name) => {
                names.insert(name);
            }
            Expr::Sum(lhs, rhs) | Expr::Product(lhs, rhs) => {
                lhs.collect_variables(names);
                rhs.collect_variables(names);
            }
        }
    }
}

/// The partial derivatives of one expression, keyed by variable name.
///
/// A `DerivativeSet` is computed once from a fixed expression (see
/// [`Expr::partial_derivatives`]) and then only read. It holds one entry for
/// every variable the expression mentions, even when that partial simplifies
/// to a constant.
#[derive(Debug, Clone, Default)]
pub struct DerivativeSet {
    partials: BTreeMap<String, Expr>,
}

impl DerivativeSet {
    /// Returns the partial derivative with respect to `variable`, if the
    /// expression mentions it.
    #[must_use]
    pub fn get(&self, variable: &str) -> Option<&Expr> {
        self.partials.get(variable)
    }

    /// Iterates over `(variable, partial)` pairs in variable order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Expr)> {
        self.partials.iter().map(|(name, expr)| (name.as_str(), expr))
    }

    /// Returns the number of partials (the number of distinct variables).
    #[must_use]
    pub fn len(&self) -> usize {
        self.partials.len()
    }

    /// Returns `true` if the expression had no variables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.partials.is_empty()
    }

    /// Evaluates every partial at `values`, giving the gradient.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::UnboundVariable`] if any partial references a
    /// variable that `values` does not bind.
    pub fn evaluate(&self, values: &Assignment) -> Result<Assignment, EvalError> {
        self.partials
            .iter()
            .map(|(name, partial)| partial.evaluate(values).map(|value| (name.as_str(), value)))
            .collect()
    }
}

use slope_core::Observer;

use crate::traits::{HasCost, HasStep};

/// Records `(step, cost)` for every observed event.
///
/// Pass it by mutable reference so the record outlives the solve.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CostHistory {
    entries: Vec<(usize, f64)>,
}

impl CostHistory {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded `(step, cost)` pairs in observation order.
    #[must_use]
    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    /// Returns the recorded costs in observation order.
    pub fn costs(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|&(_, cost)| cost)
    }

    /// Returns the most recent cost, if any event was observed.
    #[must_use]
    pub fn last_cost(&self) -> Option<f64> {
        self.entries.last().map(|&(_, cost)| cost)
    }

    /// Returns `true` if every recorded cost is no greater than the one before.
    #[must_use]
    pub fn is_monotone(&self) -> bool {
        self.entries.windows(2).all(|pair| pair[1].1 <= pair[0].1)
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E: HasStep + HasCost, A> Observer<E, A> for &mut CostHistory {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.entries.push((event.step(), event.cost()));
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use slope_core::{Assignment, Expr, Objective};
    use slope_solvers::gradient_descent::{self, Config};

    #[test]
    fn records_every_step_of_a_solve() {
        let x = Expr::variable("x");
        let y = Expr::variable("y");
        let objective = Objective::from_equations([
            (2.0 * x.clone() + 3.0 * y.clone()) * (x.clone() - y.clone()) - 2.0,
            3.0 * x + y - 5.0,
        ]);
        let mut history = CostHistory::new();

        let solution = gradient_descent::solve(
            &objective,
            Assignment::from([("x", 0.0), ("y", 0.0)]),
            &Config::default(),
            &mut history,
        )
        .unwrap();

        assert_eq!(history.len(), solution.trajectory.len());
        let steps: Vec<usize> = history.entries().iter().map(|&(step, _)| step).collect();
        assert_eq!(steps, (0..solution.trajectory.len()).collect::<Vec<_>>());
        assert!(history.is_monotone());
        assert_relative_eq!(history.last_cost().unwrap(), solution.cost);
    }

    #[test]
    fn empty_history() {
        let history = CostHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.last_cost(), None);
        assert!(history.is_monotone());
        assert_eq!(history.costs().count(), 0);
    }
}

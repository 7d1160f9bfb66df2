use slope_core::{Assignment, Objective};

use super::{ConfigError, Error};

/// Parameters for the backtracking (Armijo) line search.
///
/// Starting from `initial_step`, the step size is multiplied by `shrink`
/// before each candidate, so the first candidate uses
/// `initial_step * shrink`. A candidate is accepted once the cost decrease
/// reaches `step * control * -slope`, where `slope` is the directional
/// derivative of the cost along the search direction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineSearch {
    control: f64,
    shrink: f64,
    initial_step: f64,
    max_shrinks: usize,
}

impl Default for LineSearch {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(0.5, 0.5, 2.0, 128).unwrap()
    }
}

impl LineSearch {
    /// Creates validated line search parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if `control` or `shrink` is outside `(0, 1]`, if
    /// `initial_step` is not finite and positive, or if `max_shrinks` is zero.
    pub fn new(
        control: f64,
        shrink: f64,
        initial_step: f64,
        max_shrinks: usize,
    ) -> Result<Self, ConfigError> {
        if !(control > 0.0 && control <= 1.0) {
            return Err(ConfigError::ControlParameter);
        }
        if !(shrink > 0.0 && shrink <= 1.0) {
            return Err(ConfigError::ShrinkFactor);
        }
        if !initial_step.is_finite() || initial_step <= 0.0 {
            return Err(ConfigError::InitialStep);
        }
        if max_shrinks == 0 {
            return Err(ConfigError::MaxShrinks);
        }

        Ok(Self {
            control,
            shrink,
            initial_step,
            max_shrinks,
        })
    }

    /// Returns the Armijo control parameter.
    #[must_use]
    pub fn control(&self) -> f64 {
        self.control
    }

    /// Returns the factor applied to the step size before each candidate.
    #[must_use]
    pub fn shrink(&self) -> f64 {
        self.shrink
    }

    /// Returns the step size before the first shrink.
    #[must_use]
    pub fn initial_step(&self) -> f64 {
        self.initial_step
    }

    /// Returns the number of candidates tried before giving up.
    #[must_use]
    pub fn max_shrinks(&self) -> usize {
        self.max_shrinks
    }

    /// Backtracks along `direction` from `start` until the Armijo condition
    /// holds.
    ///
    /// `start_cost` must be the cost at `start`. Exhausting `max_shrinks`
    /// yields [`Search::Stalled`].
    pub(super) fn search(
        &self,
        objective: &Objective,
        start: &Assignment,
        start_cost: f64,
        gradient: &Assignment,
        direction: &Assignment,
    ) -> Result<Search, Error> {
        let slope: f64 = gradient
            .iter()
            .map(|(name, g)| g * direction.get(name).unwrap_or(0.0))
            .sum();
        let target = -self.control * slope;

        let mut step_size = self.initial_step;
        for shrinks in 1..=self.max_shrinks {
            step_size *= self.shrink;

            let point = start.map(|name, value| {
                value + step_size * direction.get(name).unwrap_or(0.0)
            });
            let cost = objective.cost(&point)?;

            // NaN compares false here, so a non-finite candidate is accepted
            // and left for the caller to reject.
            let insufficient = start_cost - cost < step_size * target;
            tracing::trace!(shrinks, step_size, cost, insufficient, "line search candidate");

            if !insufficient {
                return Ok(Search::Accepted(Accepted {
                    point,
                    cost,
                    step_size,
                    shrinks,
                }));
            }
        }

        tracing::warn!(
            shrinks = self.max_shrinks,
            step_size,
            start_cost,
            "line search stalled"
        );
        Ok(Search::Stalled)
    }
}

/// Outcome of one backtracking search.
#[derive(Debug)]
pub(super) enum Search {
    Accepted(Accepted),

    /// No candidate passed within `max_shrinks` shrinks.
    Stalled,
}

/// A candidate accepted by the line search.
#[derive(Debug)]
pub(super) struct Accepted {
    pub(super) point: Assignment,
    pub(super) cost: f64,
    pub(super) step_size: f64,
    pub(super) shrinks: usize,
}

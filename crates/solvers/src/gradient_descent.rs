//! Gradient descent with a backtracking line search.
//!
//! # Algorithm
//!
//! Each iteration moves from the current point along the negative gradient of
//! the cost, normalized so the absolute components sum to one. The step size
//! comes from a backtracking (Armijo) line search: start large, shrink until
//! the cost decreases enough. Every accepted point is appended to the
//! [`Trajectory`], so callers can inspect the whole path rather than just the
//! final estimate.
//!
//! # Termination
//!
//! Before each step the solver checks, in order:
//!
//! 1. `|cost| <= epsilon` gives [`Status::Converged`]
//! 2. every `|∂cost/∂v| < epsilon` gives [`Status::LocalMinimum`]
//!
//! A step whose point is not finite ends the solve with [`Status::Diverged`]
//! and is not recorded. A line search that exhausts its shrinks gives
//! [`Status::LineSearchStalled`]. Running out of iterations gives
//! [`Status::MaxIters`]. Every status keeps the trajectory recorded so far.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] for the initial point (step zero) and one
//! after each accepted step. Observers can return [`Action::StopEarly`] to
//! halt with the trajectory recorded so far.
//!
//! [`Trajectory`]: slope_core::Trajectory

mod action;
mod config;
mod direction;
mod error;
mod event;
mod line_search;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use line_search::LineSearch;
pub use solution::{Solution, Status};

use slope_core::{Assignment, Objective, Observer, Trajectory};

use direction::{descent_direction, is_stationary};
use line_search::Search;

/// Minimizes the objective's cost by gradient descent from `initial`.
///
/// The observer receives an [`Event`] for the initial point and for each
/// accepted step. See the [module docs](self) for the termination rules.
///
/// # Errors
///
/// Returns an error if the cost or gradient references a variable `initial`
/// does not bind, or if the gradient is exactly zero with a zero epsilon.
pub fn solve<Obs>(
    objective: &Objective,
    initial: Assignment,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let mut cost = objective.cost(&initial)?;
    let mut trajectory = Trajectory::new(initial);
    tracing::debug!(cost, "starting gradient descent");

    let event = Event {
        step: 0,
        point: trajectory.last(),
        cost,
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(finish(Status::StoppedByObserver, trajectory, cost, 0));
    }

    let epsilon = config.epsilon();
    for iter in 0..config.max_iters() {
        if cost.abs() <= epsilon {
            return Ok(finish(Status::Converged, trajectory, cost, iter));
        }

        let current = trajectory.last();
        let gradient = objective.gradient(current)?;
        if is_stationary(&gradient, epsilon) {
            return Ok(finish(Status::LocalMinimum, trajectory, cost, iter));
        }

        let direction = descent_direction(&gradient)?;
        let search = config
            .line_search()
            .search(objective, current, cost, &gradient, &direction)?;
        let accepted = match search {
            Search::Accepted(accepted) => accepted,
            Search::Stalled => {
                return Ok(finish(Status::LineSearchStalled, trajectory, cost, iter));
            }
        };

        if !accepted.point.is_finite() {
            tracing::warn!(
                step = iter + 1,
                step_size = accepted.step_size,
                "step left the finite domain"
            );
            return Ok(finish(Status::Diverged, trajectory, cost, iter));
        }

        trajectory.push(accepted.point);
        cost = accepted.cost;
        let step = iter + 1;
        tracing::debug!(
            step,
            cost,
            step_size = accepted.step_size,
            shrinks = accepted.shrinks,
            "accepted step"
        );

        let event = Event {
            step,
            point: trajectory.last(),
            cost,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(finish(Status::StoppedByObserver, trajectory, cost, step));
        }
    }

    // The last accepted point has not been tested yet.
    let status = if cost.abs() <= epsilon {
        Status::Converged
    } else {
        Status::MaxIters
    };
    Ok(finish(status, trajectory, cost, config.max_iters()))
}

/// Minimizes the objective's cost by gradient descent without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns the same errors as [`solve`].
pub fn solve_unobserved(
    objective: &Objective,
    initial: Assignment,
    config: &Config,
) -> Result<Solution, Error> {
    solve(objective, initial, config, ())
}

fn finish(status: Status, trajectory: Trajectory, cost: f64, iters: usize) -> Solution {
    match status {
        Status::Diverged | Status::LineSearchStalled | Status::MaxIters => {
            tracing::warn!(?status, cost, iters, "gradient descent stopped without a root");
        }
        _ => tracing::debug!(?status, cost, iters, "gradient descent finished"),
    }
    Solution {
        status,
        trajectory,
        cost,
        iters,
    }
}

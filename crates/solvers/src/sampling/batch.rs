use rayon::prelude::*;
use slope_core::{Assignment, Objective, Observer};

use crate::gradient_descent::{self, Action, Config, Error, Event, Solution};

/// Solves from every start in parallel.
///
/// Each start runs an independent [`gradient_descent::solve_unobserved`].
/// Results come back in the order of `starts`, and one failing start does
/// not affect the others.
pub fn solve_batch(
    objective: &Objective,
    starts: Vec<Assignment>,
    config: &Config,
) -> Vec<Result<Solution, Error>> {
    solve_batch_with(objective, starts, config, |_| ())
}

/// Solves from every start in parallel, each with its own observer.
///
/// `make_observer` is called with the index of each start to build the
/// observer for that run. Results come back in the order of `starts`.
pub fn solve_batch_with<F, Obs>(
    objective: &Objective,
    starts: Vec<Assignment>,
    config: &Config,
    make_observer: F,
) -> Vec<Result<Solution, Error>>
where
    F: Fn(usize) -> Obs + Sync,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    tracing::debug!(starts = starts.len(), "starting batch solve");

    let results: Vec<_> = starts
        .into_par_iter()
        .enumerate()
        .map(|(index, start)| {
            gradient_descent::solve(objective, start, config, make_observer(index))
        })
        .collect();

    let converged = results
        .iter()
        .filter(|result| result.as_ref().is_ok_and(Solution::is_converged))
        .count();
    tracing::debug!(starts = results.len(), converged, "finished batch solve");

    results
}

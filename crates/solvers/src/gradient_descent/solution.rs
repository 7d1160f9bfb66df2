use slope_core::{Assignment, Trajectory};

/// Why the solver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// The cost magnitude fell to or below epsilon.
    Converged,

    /// Every partial derivative is smaller than epsilon but the cost is not.
    LocalMinimum,

    /// A step produced a non-finite point. It was not recorded.
    Diverged,

    /// The line search exhausted its shrinks without sufficient decrease.
    ///
    /// Usually means the cost has reached its floating-point noise floor, so
    /// the last point is often a good estimate even though the cost is above
    /// epsilon.
    LineSearchStalled,

    /// Reached the iteration limit without terminating.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a gradient-descent solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Every point visited, starting with the initial assignment.
    pub trajectory: Trajectory,

    /// Cost at the last point of the trajectory.
    pub cost: f64,

    /// Number of accepted steps.
    pub iters: usize,
}

impl Solution {
    /// Returns the last point visited.
    #[must_use]
    pub fn point(&self) -> &Assignment {
        self.trajectory.last()
    }

    /// Returns `true` if the solver reached a root of the system.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}

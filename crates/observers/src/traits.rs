//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasStep`] — events that carry a step index
//! - [`HasCost`] — events that carry a cost value
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use slope_core::Observer;
//! use slope_observers::traits::{CanStopEarly, HasCost, HasStep};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//!     min_steps: usize,
//! }
//!
//! impl<E: HasStep + HasCost, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         if event.step() >= self.min_steps && event.cost().abs() < self.tolerance {
//!             return Some(A::stop_early());
//!         }
//!         None
//!     }
//! }
//! ```

use slope_solvers::gradient_descent;

/// An event that carries the index of the step it reports.
pub trait HasStep {
    /// Returns the step index, where zero is the initial point.
    fn step(&self) -> usize;
}

/// An event that carries a cost value.
pub trait HasCost {
    /// Returns the cost for this event.
    fn cost(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- gradient_descent ---

impl HasStep for gradient_descent::Event<'_> {
    fn step(&self) -> usize {
        self.step
    }
}

impl HasCost for gradient_descent::Event<'_> {
    fn cost(&self) -> f64 {
        self.cost
    }
}

impl CanStopEarly for gradient_descent::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

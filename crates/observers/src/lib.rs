//! Reusable observers for Slope solvers.
//!
//! This crate provides [`Observer`] implementations and the capability traits
//! they are written against, so an observer works with any solver whose
//! events and actions implement those traits.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasStep`], [`HasCost`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`Cancel`] — stops a solve when another thread raises a shared flag
//! - [`CostHistory`] — records the cost at every observed step
//!
//! [`Observer`]: slope_core::Observer
//! [`HasStep`]: traits::HasStep
//! [`HasCost`]: traits::HasCost
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod cancel;
mod history;

pub use cancel::Cancel;
pub use history::CostHistory;

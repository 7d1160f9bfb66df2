//! Solvers that drive a sum-of-squares [`Objective`] toward zero.
//!
//! - [`gradient_descent`] — steepest descent with a backtracking line search,
//!   recording every accepted point
//! - [`sampling`] — start points drawn from a bounded region, and batch solves
//!   over many starts in parallel
//!
//! [`Objective`]: slope_core::Objective

pub mod gradient_descent;
pub mod sampling;

//! Core types for the Slope workspace.
//!
//! This crate defines the symbolic layer that solvers build on:
//!
//! - [`Expr`] — an immutable expression tree of sums, products, constants,
//!   and named variables, simplified as it is built
//! - [`Assignment`] — a point in search space, mapping variable names to values
//! - [`DerivativeSet`] — the partial derivatives of an expression, computed once
//! - [`Objective`] — an expression bundled with its partial derivatives
//! - [`Trajectory`] — the ordered points visited by one solve
//! - [`Observer`] — receives solver events and optionally returns control actions
//!
//! # Example
//!
//! ```
//! use slope_core::{Assignment, Expr, cost_function};
//!
//! let x = Expr::variable("x");
//! let y = Expr::variable("y");
//!
//! // x + y = 3 and x - y = 1, written as residuals.
//! let residuals = [
//!     Expr::equation(x.clone() + y.clone(), 3.0.into()),
//!     Expr::equation(x - y, 1.0.into()),
//! ];
//! let cost = cost_function(residuals);
//!
//! let at_root = Assignment::from([("x", 2.0), ("y", 1.0)]);
//! assert_eq!(cost.evaluate(&at_root).unwrap(), 0.0);
//! ```

mod assignment;
mod cost;
mod derivative;
mod eval;
mod expr;
mod objective;
mod observer;
mod trajectory;

pub use assignment::Assignment;
pub use cost::cost_function;
pub use derivative::DerivativeSet;
pub use eval::EvalError;
pub use expr::{Expr, Leaf, VariantError};
pub use objective::Objective;
pub use observer::Observer;
pub use trajectory::Trajectory;

//! Start points drawn from a bounded region, and batch solves over them.
//!
//! A single gradient-descent run finds the root in whose basin it starts.
//! Sampling many starts and solving each independently maps out which roots
//! a system has and where their basins lie:
//!
//! ```
//! use rand::{SeedableRng, rngs::StdRng};
//! use slope_core::{Expr, Objective};
//! use slope_solvers::{gradient_descent::Config, sampling::{Region, solve_batch}};
//!
//! let x = Expr::variable("x");
//! let objective = Objective::from_equations([x.clone() * x - 4.0]);
//!
//! let region = Region::new([("x", [-3.0, 3.0])]).unwrap();
//! let starts = region.scatter(&mut StdRng::seed_from_u64(7), 8);
//!
//! let results = solve_batch(&objective, starts, &Config::default());
//! assert_eq!(results.len(), 8);
//! ```
//!
//! Setting [`Config::with_max_iters`] to one turns a batch into a single
//! exploratory step from every start.
//!
//! [`Config::with_max_iters`]: crate::gradient_descent::Config::with_max_iters

mod batch;
mod region;

pub use batch::{solve_batch, solve_batch_with};
pub use region::{MAX_GRID_POINTS, Region, RegionError};

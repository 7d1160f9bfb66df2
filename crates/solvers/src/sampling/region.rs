use std::collections::BTreeMap;

use rand::Rng;
use slope_core::Assignment;
use thiserror::Error;

/// An axis-aligned box in search space, one closed interval per variable.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    bounds: BTreeMap<String, [f64; 2]>,
}

/// Errors that can occur when building a region or sampling it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegionError {
    #[error("bounds for `{name}` must be finite")]
    NonFiniteBounds { name: String },

    #[error("lower bound for `{name}` exceeds its upper bound")]
    InvertedBounds { name: String },

    #[error("width of the bounds for `{name}` overflows")]
    UnboundedWidth { name: String },

    #[error("grid spacing must be finite and positive")]
    Spacing,

    #[error("grid would have more than {limit} points")]
    TooManyPoints { limit: usize },
}

/// Largest grid [`Region::grid`] will build.
pub const MAX_GRID_POINTS: usize = 10_000_000;

impl Region {
    /// Creates a region from `(name, [lower, upper])` pairs.
    ///
    /// A repeated name keeps its last bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if any bound is non-finite, if `lower > upper`, or if
    /// `upper - lower` overflows.
    pub fn new<K, I>(bounds: I) -> Result<Self, RegionError>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, [f64; 2])>,
    {
        bounds
            .into_iter()
            .try_fold(Self::default(), |region, (name, bounds)| {
                region.with(name, bounds)
            })
    }

    /// Returns this region with bounds added (or replaced) for one variable.
    ///
    /// # Errors
    ///
    /// Returns an error if either bound is non-finite, if `lower > upper`, or
    /// if `upper - lower` overflows.
    pub fn with(mut self, name: impl Into<String>, bounds: [f64; 2]) -> Result<Self, RegionError> {
        let name = name.into();
        let [lower, upper] = bounds;
        if !lower.is_finite() || !upper.is_finite() {
            return Err(RegionError::NonFiniteBounds { name });
        }
        if lower > upper {
            return Err(RegionError::InvertedBounds { name });
        }
        // Uniform sampling scales the width up by a few ulps, so leave headroom.
        if !((upper - lower) * (1.0 + 2.0 * f64::EPSILON)).is_finite() {
            return Err(RegionError::UnboundedWidth { name });
        }
        self.bounds.insert(name, bounds);
        Ok(self)
    }

    /// Returns the bounds for `name`, if the region constrains it.
    #[must_use]
    pub fn bounds(&self, name: &str) -> Option<[f64; 2]> {
        self.bounds.get(name).copied()
    }

    /// Returns the number of variables in the region.
    #[must_use]
    pub fn dimensions(&self) -> usize {
        self.bounds.len()
    }

    /// Returns `true` if `point` binds every variable within its bounds.
    #[must_use]
    pub fn contains(&self, point: &Assignment) -> bool {
        self.bounds.iter().all(|(name, [lower, upper])| {
            point
                .get(name)
                .is_some_and(|value| *lower <= value && value <= *upper)
        })
    }

    /// Draws `count` points uniformly from the region.
    ///
    /// The caller supplies the random source, so a seeded generator gives a
    /// reproducible scatter.
    pub fn scatter<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<Assignment> {
        (0..count)
            .map(|_| {
                self.bounds
                    .iter()
                    .map(|(name, &[lower, upper])| (name.as_str(), rng.gen_range(lower..=upper)))
                    .collect()
            })
            .collect()
    }

    /// Returns every point of a regular grid over the region.
    ///
    /// Each axis runs from its lower bound in steps of `spacing`, up to and
    /// including the upper bound when it falls on the grid. Points are ordered
    /// with the last variable (by name) varying fastest.
    ///
    /// # Errors
    ///
    /// Returns an error if `spacing` is not finite and positive, or if the grid
    /// would exceed [`MAX_GRID_POINTS`].
    pub fn grid(&self, spacing: f64) -> Result<Vec<Assignment>, RegionError> {
        if !spacing.is_finite() || spacing <= 0.0 {
            return Err(RegionError::Spacing);
        }

        let too_many = RegionError::TooManyPoints {
            limit: MAX_GRID_POINTS,
        };
        let mut axes = Vec::with_capacity(self.bounds.len());
        let mut total: usize = 1;
        for (name, &[lower, upper]) in &self.bounds {
            let count = tick_count(lower, upper, spacing).ok_or_else(|| too_many.clone())?;
            total = total
                .checked_mul(count)
                .filter(|&total| total <= MAX_GRID_POINTS)
                .ok_or_else(|| too_many.clone())?;
            axes.push((name, lower, count));
        }

        let mut points = vec![Assignment::new()];
        for (name, lower, count) in axes {
            let ticks = axis(lower, spacing, count);
            points = points
                .iter()
                .flat_map(|point| {
                    ticks.iter().map(move |&value| {
                        let mut next = point.clone();
                        next.insert(name.as_str(), value);
                        next
                    })
                })
                .collect();
        }

        tracing::debug!(
            dimensions = self.dimensions(),
            spacing,
            points = points.len(),
            "built sampling grid"
        );
        Ok(points)
    }
}

/// Number of ticks from `lower` through `upper`, or `None` past
/// [`MAX_GRID_POINTS`].
///
/// The upper bound tolerates a relative error of `1e-9` spacings.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn tick_count(lower: f64, upper: f64, spacing: f64) -> Option<usize> {
    let steps = ((upper - lower) / spacing + 1e-9).floor();
    // Also rejects an overflowed (infinite) step count.
    if !(steps < MAX_GRID_POINTS as f64) {
        return None;
    }
    Some(steps as usize + 1)
}

/// `count` grid ticks starting at `lower`, computed from their index to avoid
/// accumulated rounding.
#[allow(clippy::cast_precision_loss)]
fn axis(lower: f64, spacing: f64, count: usize) -> Vec<f64> {
    (0..count)
        .map(|i| lower + i as f64 * spacing)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rand::{SeedableRng, rngs::StdRng};

    fn unit_square() -> Region {
        Region::new([("x", [0.0, 1.0]), ("y", [-1.0, 0.0])]).unwrap()
    }

    #[test]
    fn rejects_invalid_bounds() {
        assert_eq!(
            Region::new([("x", [0.0, f64::INFINITY])]),
            Err(RegionError::NonFiniteBounds { name: "x".into() })
        );
        assert_eq!(
            Region::new([("x", [2.0, 1.0])]),
            Err(RegionError::InvertedBounds { name: "x".into() })
        );
    }

    #[test]
    fn rejects_bounds_too_wide_to_sample() {
        assert_eq!(
            Region::new([("x", [-1e308, 1e308])]),
            Err(RegionError::UnboundedWidth { name: "x".into() })
        );
    }

    #[test]
    fn scatter_over_the_widest_accepted_bounds() {
        let region = Region::new([("x", [-8e307, 8e307])]).unwrap();
        let points = region.scatter(&mut StdRng::seed_from_u64(1), 3);

        assert_eq!(points.len(), 3);
        assert!(points.iter().all(|point| region.contains(point)));
    }

    #[test]
    fn scatter_stays_inside_bounds() {
        let region = unit_square();
        let points = region.scatter(&mut StdRng::seed_from_u64(42), 200);

        assert_eq!(points.len(), 200);
        assert!(points.iter().all(|point| region.contains(point)));
        assert!(points.iter().all(|point| point.len() == 2));
    }

    #[test]
    fn scatter_is_reproducible_with_a_seed() {
        let region = unit_square();
        let first = region.scatter(&mut StdRng::seed_from_u64(9), 10);
        let second = region.scatter(&mut StdRng::seed_from_u64(9), 10);
        assert_eq!(first, second);
    }

    #[test]
    fn scatter_over_a_degenerate_interval() {
        let region = Region::new([("x", [1.5, 1.5])]).unwrap();
        let points = region.scatter(&mut StdRng::seed_from_u64(1), 3);
        assert!(points.iter().all(|point| point["x"] == 1.5));
    }

    #[test]
    fn grid_includes_both_ends() {
        let region = Region::new([("x", [-1.0, 1.0])]).unwrap();
        let points = region.grid(0.5).unwrap();

        let xs: Vec<f64> = points.iter().map(|point| point["x"]).collect();
        assert_eq!(xs, vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn grid_tolerates_inexact_spacing() {
        let region = Region::new([("x", [0.0, 0.3])]).unwrap();
        let points = region.grid(0.1).unwrap();

        assert_eq!(points.len(), 4);
        assert_relative_eq!(points[3]["x"], 0.3, epsilon = 1e-12);
    }

    #[test]
    fn grid_is_a_cartesian_product() {
        let points = unit_square().grid(0.5).unwrap();

        assert_eq!(points.len(), 9);
        assert_eq!(points[0], Assignment::from([("x", 0.0), ("y", -1.0)]));
        assert_eq!(points[1], Assignment::from([("x", 0.0), ("y", -0.5)]));
        assert_eq!(points[8], Assignment::from([("x", 1.0), ("y", 0.0)]));
    }

    #[test]
    fn grid_rejects_oversized_grids() {
        let too_many = Err(RegionError::TooManyPoints {
            limit: MAX_GRID_POINTS,
        });

        // Too many ticks on one axis.
        assert_eq!(unit_square().grid(1e-12), too_many);

        // Few enough per axis, too many in total.
        let cube = Region::new([("x", [0.0, 1.0]), ("y", [0.0, 1.0]), ("z", [0.0, 1.0])]).unwrap();
        assert_eq!(cube.grid(1e-3), too_many);
    }

    #[test]
    fn tick_count_limit() {
        assert_eq!(tick_count(0.0, 1.0, 0.25), Some(5));
        assert_eq!(tick_count(0.0, 9_999_999.0, 1.0), Some(MAX_GRID_POINTS));
        assert_eq!(tick_count(0.0, 10_000_000.0, 1.0), None);
        assert_eq!(tick_count(-1e300, 1e300, 1e-300), None);
    }

    #[test]
    fn grid_rejects_bad_spacing() {
        for spacing in [0.0, -0.1, f64::NAN] {
            assert_eq!(unit_square().grid(spacing), Err(RegionError::Spacing));
        }
    }
}

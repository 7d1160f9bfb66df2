use std::slice;

use crate::Assignment;

/// The ordered points visited by one solve.
///
/// A trajectory is never empty: it starts at the initial point and each
/// accepted solver step appends one point. The last point is the solver's
/// final estimate, whether or not it converged.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Trajectory {
    points: Vec<Assignment>,
}

impl Trajectory {
    /// Starts a trajectory at `initial`.
    #[must_use]
    pub fn new(initial: Assignment) -> Self {
        Self {
            points: vec![initial],
        }
    }

    /// Appends the next point.
    pub fn push(&mut self, point: Assignment) {
        self.points.push(point);
    }

    /// Returns the initial point.
    #[must_use]
    pub fn first(&self) -> &Assignment {
        &self.points[0]
    }

    /// Returns the most recent point.
    #[must_use]
    pub fn last(&self) -> &Assignment {
        &self.points[self.points.len() - 1]
    }

    /// Returns the number of points, including the initial one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; a trajectory holds at least its initial point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the points in visit order.
    #[must_use]
    pub fn points(&self) -> &[Assignment] {
        &self.points
    }

    /// Iterates over the points in visit order.
    pub fn iter(&self) -> slice::Iter<'_, Assignment> {
        self.points.iter()
    }

    /// Iterates over consecutive `(from, to)` pairs, one per solver step.
    ///
    /// A trajectory of `n` points yields `n - 1` segments.
    pub fn segments(&self) -> impl Iterator<Item = (&Assignment, &Assignment)> {
        self.points.windows(2).map(|pair| (&pair[0], &pair[1]))
    }

    /// Consumes the trajectory, returning its points.
    #[must_use]
    pub fn into_points(self) -> Vec<Assignment> {
        self.points
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Assignment;
    type IntoIter = slice::Iter<'a, Assignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(x: f64) -> Assignment {
        Assignment::from([("x", x)])
    }

    #[test]
    fn starts_with_initial_point() {
        let trajectory = Trajectory::new(point(1.0));

        assert_eq!(trajectory.len(), 1);
        assert!(!trajectory.is_empty());
        assert_eq!(trajectory.first(), trajectory.last());
        assert_eq!(trajectory.segments().count(), 0);
    }

    #[test]
    fn segments_pair_consecutive_points() {
        let mut trajectory = Trajectory::new(point(0.0));
        trajectory.push(point(1.0));
        trajectory.push(point(3.0));

        let segments: Vec<_> = trajectory
            .segments()
            .map(|(from, to)| (from["x"], to["x"]))
            .collect();

        assert_eq!(segments, [(0.0, 1.0), (1.0, 3.0)]);
        assert_eq!(trajectory.last()["x"], 3.0);
    }
}

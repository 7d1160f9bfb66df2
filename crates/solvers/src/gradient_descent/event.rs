use slope_core::Assignment;

/// Emitted for the initial point and after every accepted step.
///
/// `step` is zero for the initial point, so it always equals the index of
/// `point` in the trajectory.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// Index of this point in the trajectory.
    pub step: usize,

    /// The point just recorded.
    pub point: &'a Assignment,

    /// Cost at `point`.
    pub cost: f64,
}

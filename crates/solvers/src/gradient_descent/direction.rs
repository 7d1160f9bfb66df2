use slope_core::Assignment;

use super::Error;

/// Returns `true` if every gradient component is smaller than `epsilon`.
pub(super) fn is_stationary(gradient: &Assignment, epsilon: f64) -> bool {
    gradient.iter().all(|(_, g)| g.abs() < epsilon)
}

/// Computes the steepest-descent direction, normalized to unit L1 length.
///
/// # Errors
///
/// Returns [`Error::DegenerateGradient`] if every component is zero.
pub(super) fn descent_direction(gradient: &Assignment) -> Result<Assignment, Error> {
    let total: f64 = gradient.iter().map(|(_, g)| g.abs()).sum();
    if total == 0.0 {
        return Err(Error::DegenerateGradient);
    }
    Ok(gradient.map(|_, g| -g / total))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn direction_opposes_gradient_with_unit_l1_length() {
        let gradient = Assignment::from([("x", 3.0), ("y", -1.0)]);
        let direction = descent_direction(&gradient).unwrap();

        assert_relative_eq!(direction["x"], -0.75);
        assert_relative_eq!(direction["y"], 0.25);
        let length: f64 = direction.iter().map(|(_, d)| d.abs()).sum();
        assert_relative_eq!(length, 1.0);
    }

    #[test]
    fn zero_gradient_has_no_direction() {
        let gradient = Assignment::from([("x", 0.0), ("y", -0.0)]);
        assert_eq!(
            descent_direction(&gradient),
            Err(Error::DegenerateGradient)
        );
    }

    #[test]
    fn infinite_gradient_gives_nan_direction() {
        let gradient = Assignment::from([("x", f64::INFINITY)]);
        let direction = descent_direction(&gradient).unwrap();
        assert!(direction["x"].is_nan());
    }

    #[test]
    fn stationary_uses_component_magnitudes() {
        assert!(is_stationary(&Assignment::from([("x", 1e-13), ("y", -1e-13)]), 1e-12));
        assert!(!is_stationary(&Assignment::from([("x", 1e-13), ("y", -1.0)]), 1e-12));
        assert!(!is_stationary(&Assignment::from([("x", 0.0)]), 0.0));
    }
}

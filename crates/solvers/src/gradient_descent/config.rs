use thiserror::Error;

use super::LineSearch;

/// Configuration for the gradient-descent solver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    max_iters: usize,
    epsilon: f64,
    line_search: LineSearch,
}

/// Errors that can occur when validating a gradient-descent config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("epsilon must be finite and non-negative")]
    Epsilon,

    #[error("line search control parameter must be in (0, 1]")]
    ControlParameter,

    #[error("line search shrink factor must be in (0, 1]")]
    ShrinkFactor,

    #[error("line search initial step must be finite and positive")]
    InitialStep,

    #[error("line search must allow at least one shrink")]
    MaxShrinks,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1000, 1e-12, LineSearch::default()).unwrap()
    }
}

impl Config {
    /// Creates a new config with a validated epsilon.
    ///
    /// `epsilon` is both the convergence threshold on the cost magnitude and
    /// the per-component threshold of the local-minimum test.
    ///
    /// # Errors
    ///
    /// Returns an error if `epsilon` is negative or non-finite.
    pub fn new(
        max_iters: usize,
        epsilon: f64,
        line_search: LineSearch,
    ) -> Result<Self, ConfigError> {
        if !epsilon.is_finite() || epsilon < 0.0 {
            return Err(ConfigError::Epsilon);
        }

        Ok(Self {
            max_iters,
            epsilon,
            line_search,
        })
    }

    /// Returns a copy of this config with a different iteration limit.
    ///
    /// A limit of one gives a single exploratory step from each start.
    #[must_use]
    pub fn with_max_iters(self, max_iters: usize) -> Self {
        Self { max_iters, ..self }
    }

    /// Returns the maximum number of accepted steps.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the convergence and stationarity threshold.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns the line search parameters.
    #[must_use]
    pub fn line_search(&self) -> &LineSearch {
        &self.line_search
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_documented_values() {
        let config = Config::default();
        assert_eq!(config.max_iters(), 1000);
        assert_eq!(config.epsilon(), 1e-12);
        assert_eq!(config.line_search(), &LineSearch::default());
    }

    #[test]
    fn rejects_bad_epsilon() {
        for epsilon in [-1e-9, f64::NAN, f64::INFINITY] {
            assert_eq!(
                Config::new(10, epsilon, LineSearch::default()),
                Err(ConfigError::Epsilon)
            );
        }
    }

    #[test]
    fn zero_epsilon_is_allowed() {
        assert!(Config::new(10, 0.0, LineSearch::default()).is_ok());
    }

    #[test]
    fn with_max_iters_keeps_other_settings() {
        let config = Config::default().with_max_iters(1);
        assert_eq!(config.max_iters(), 1);
        assert_eq!(config.epsilon(), Config::default().epsilon());
    }
}

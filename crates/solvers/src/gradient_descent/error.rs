use slope_core::EvalError;

/// Errors that can occur during gradient descent.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("evaluation failed: {0}")]
    Eval(#[from] EvalError),

    /// Every gradient component is exactly zero, so no direction exists.
    ///
    /// Only reachable when the configured epsilon is zero. Otherwise the
    /// local-minimum check terminates first.
    #[error("descent direction is undefined: every gradient component is zero")]
    DegenerateGradient,
}

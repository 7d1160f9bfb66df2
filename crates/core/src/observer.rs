/// Observes solver events and optionally returns a control action.
///
/// Solvers call [`Observer::observe`] at well-defined points (after each step,
/// for example). Returning `Some(action)` lets the caller steer or stop the
/// solver between steps; returning `None` lets it continue unchanged.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Blanket implementation for observer closures.
impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// A no-op observer that always returns `None`.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

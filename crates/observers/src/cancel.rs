use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use slope_core::Observer;

use crate::traits::CanStopEarly;

/// Stops a solve once [`Cancel::cancel`] is called on any clone.
///
/// Clones share one flag, so a clone handed to another thread (or to every
/// run of a batch) can stop solves that are already in progress. The solver
/// sees the request at its next event.
#[derive(Debug, Clone, Default)]
pub struct Cancel {
    flag: Arc<AtomicBool>,
}

impl Cancel {
    /// Creates a handle that has not been cancelled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests that every solve observed by this handle stops.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Returns `true` once any clone has been cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

impl<E, A: CanStopEarly> Observer<E, A> for Cancel {
    fn observe(&mut self, _event: &E) -> Option<A> {
        self.is_cancelled().then(A::stop_early)
    }
}

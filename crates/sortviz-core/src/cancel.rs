use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cooperative cancellation flag shared between a run and its controller.
///
/// The engine checks the token at each commit point, after the pacing
/// interval elapses. A tripped token stops the run after the in-flight
/// commit; the sequence is left in whatever mid-sort order it had reached.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the run stop at its next commit point.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_canceled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Clear the flag so the token can gate another run.
    pub fn reset(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

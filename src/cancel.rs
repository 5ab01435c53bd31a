use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag for stopping a running search from another thread. The engine polls it once per
/// expansion and returns [SearchOutcome::Cancelled](crate::SearchOutcome::Cancelled) when raised.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> CancelToken {
        CancelToken::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Lowers the flag so the token can be reused for another search.
    pub fn reset(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

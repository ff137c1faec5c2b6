//! FocusLatch: non-blocking advisory lock around a focus animation.
//! A second trigger while one is in flight is dropped, never queued.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct FocusLatch {
    busy: Arc<AtomicBool>,
}

impl FocusLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the latch, or `None` if a focus is already in flight.
    pub fn try_acquire(&self) -> Option<FocusGuard> {
        self.busy
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| FocusGuard {
                busy: Arc::clone(&self.busy),
            })
    }

    pub fn is_held(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }
}

/// Releases the latch when dropped.
#[derive(Debug)]
#[must_use = "the latch is released as soon as the guard is dropped"]
pub struct FocusGuard {
    busy: Arc<AtomicBool>,
}

impl Drop for FocusGuard {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::SeqCst);
    }
}

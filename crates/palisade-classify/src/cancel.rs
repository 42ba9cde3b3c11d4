//! Cooperative cancellation
//!
//! The analysis checks this flag between symbols and artifacts, never
//! mid-decision (coarse-grained, per the enclosing compilation's model).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;

/// Raised when the enclosing compilation was cancelled between work items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("analysis cancelled")]
pub struct Cancelled;

/// Shared cancellation signal for one compilation
#[derive(Debug, Clone, Default)]
pub struct CancelFlag {
    inner: Arc<AtomicBool>,
}

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation; observed at the next between-items check
    pub fn cancel(&self) {
        self.inner.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.load(Ordering::Relaxed)
    }

    /// Bail out if cancellation was requested
    pub fn check(&self) -> Result<(), Cancelled> {
        if self.is_cancelled() {
            Err(Cancelled)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_starts_clear_and_latches() {
        let flag = CancelFlag::new();
        assert!(flag.check().is_ok());

        let shared = flag.clone();
        shared.cancel();
        assert!(flag.is_cancelled());
        assert_eq!(flag.check(), Err(Cancelled));
    }
}

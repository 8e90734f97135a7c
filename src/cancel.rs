//! Cooperative cancellation for the async copier.
//! A one-way "stop" flag shared between a requester (e.g. a ctrlc handler) and
//! long-running operations, which poll it between suspension points.
//!
//! Notes:
//! - Relaxed atomics are sufficient for a one-way flag.
//! - `cancel()` is safe to call from signal handlers.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::errors::{DirexError, Result};

#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation (idempotent). Visible to every clone of this token.
    #[inline]
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    /// `Err(Cancelled)` once cancellation has been requested.
    #[inline]
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(DirexError::Cancelled)
        } else {
            Ok(())
        }
    }
}

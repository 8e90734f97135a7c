//! Bounded stream copy: move at most N bytes from a reader to a writer.
//!
//! Blocking (`std::io`) and async (`tokio::io`) forms share the same loop:
//! read up to what is still owed, forward it, stop at the cap or end-of-source.

mod blocking;
mod nonblocking;

pub use blocking::{copy_at_most, copy_at_most_with_buffer};
pub use nonblocking::{copy_at_most_async, copy_at_most_async_with_buffer};

/// Default buffer size for bounded copies (80 KiB).
pub const DEFAULT_BUFFER_SIZE: usize = 81920;

/// `min(limit, remaining)` without truncating `remaining` on 32-bit targets.
#[inline]
fn next_chunk(limit: usize, remaining: u64) -> usize {
    usize::try_from(remaining).map_or(limit, |r| r.min(limit))
}

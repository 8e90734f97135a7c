//! Platform-specific helpers.
//! Hides the Unix/Windows difference in what "read-only" means behind a uniform API
//! so the deletion code can remain platform-agnostic.

#[cfg(unix)]
mod unix;
#[cfg(not(unix))]
mod windows;

#[cfg(unix)]
pub use unix::{clear_readonly, is_readonly, open_log_file_secure_append};

#[cfg(not(unix))]
pub use windows::{clear_readonly, is_readonly, open_log_file_secure_append};

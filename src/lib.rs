//! Core library for `direx`.
//!
//! Two independent utilities:
//! - [`Directory`] / [`delete_dir`]: delete a directory non-recursively, recursively,
//!   or as a "wipe" that clears read-only flags first; optionally only after a
//!   caller action succeeds ([`Directory::delete_after`], [`Directory::delete_after_async`]).
//! - [`copy_at_most`] / [`copy_at_most_async`]: copy at most N bytes between streams.

pub mod cancel;
pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod io_copy;
pub mod output;
pub mod platform;

pub use cancel::CancelToken;
pub use config::{Config, LogLevel, default_config_path, default_log_path, path_has_symlink_ancestor};
pub use errors::{DirexError, Result};
pub use fs_ops::{ActionInput, DeletionMode, DirName, Directory, delete_dir};
pub use io_copy::{
    DEFAULT_BUFFER_SIZE, copy_at_most, copy_at_most_async, copy_at_most_async_with_buffer,
    copy_at_most_with_buffer,
};

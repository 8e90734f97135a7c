//! Typed error definitions for direx.
//! Every failure surfaces to the caller verbatim; nothing here retries.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T, E = DirexError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum DirexError {
    #[error("Directory not empty: {}", .path.display())]
    DirectoryNotEmpty { path: PathBuf },

    #[error("Access denied on {}: {source}{}", .path.display(), hint(.source))]
    AccessDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Action failed: {0:#}")]
    ActionFailure(anyhow::Error),

    #[error("Operation cancelled")]
    Cancelled,

    #[error("{op}: {source}{}", hint(.source))]
    Stream {
        op: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("{op} '{}': {source}{}", .path.display(), hint(.source))]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Buffer size must be greater than zero")]
    InvalidBufferSize,
}

impl DirexError {
    /// Stable numeric code for logs and process exit status.
    pub fn code(&self) -> i32 {
        match self {
            DirexError::DirectoryNotEmpty { .. } => 10,
            DirexError::AccessDenied { .. } => 11,
            DirexError::ActionFailure(_) => 12,
            DirexError::Cancelled => 13,
            DirexError::Stream { .. } => 14,
            DirexError::Io { .. } => 15,
            DirexError::InvalidBufferSize => 16,
        }
    }

    /// Classify a filesystem error raised while operating on `path`.
    pub(crate) fn from_fs(op: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::DirectoryNotEmpty => DirexError::DirectoryNotEmpty { path },
            io::ErrorKind::PermissionDenied | io::ErrorKind::ReadOnlyFilesystem => {
                DirexError::AccessDenied { path, source }
            }
            _ => DirexError::Io { op, path, source },
        }
    }

    /// Map a failed caller action; a cancellation reported by the action stays `Cancelled`.
    pub(crate) fn from_action(err: anyhow::Error) -> Self {
        match err.downcast::<DirexError>() {
            Ok(DirexError::Cancelled) => DirexError::Cancelled,
            Ok(other) => DirexError::ActionFailure(anyhow::Error::new(other)),
            Err(err) => DirexError::ActionFailure(err),
        }
    }
}

/// Short actionable suffix for common I/O failures.
fn hint(e: &io::Error) -> &'static str {
    match e.kind() {
        io::ErrorKind::PermissionDenied => " (permission denied; check ownership and read-only flags)",
        io::ErrorKind::NotFound => " (path not found; verify it exists)",
        io::ErrorKind::ReadOnlyFilesystem => " (read-only filesystem)",
        io::ErrorKind::DirectoryNotEmpty => " (directory not empty)",
        io::ErrorKind::UnexpectedEof => " (stream ended unexpectedly)",
        io::ErrorKind::WriteZero => " (destination accepted no more bytes)",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_fs_errors_by_kind() {
        let e = DirexError::from_fs("remove", "/x", io::Error::from(io::ErrorKind::DirectoryNotEmpty));
        assert!(matches!(e, DirexError::DirectoryNotEmpty { .. }));

        let e = DirexError::from_fs("remove", "/x", io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(e, DirexError::AccessDenied { .. }));
        assert!(e.to_string().contains("permission denied"));

        let e = DirexError::from_fs("remove", "/x", io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(e, DirexError::Io { op: "remove", .. }));
        assert!(e.to_string().contains("path not found"));
    }

    #[test]
    fn action_cancellation_is_not_an_action_failure() {
        let e = DirexError::from_action(anyhow::Error::new(DirexError::Cancelled));
        assert!(matches!(e, DirexError::Cancelled));

        let e = DirexError::from_action(anyhow::anyhow!("boom"));
        assert!(matches!(e, DirexError::ActionFailure(_)));
        assert_eq!(e.to_string(), "Action failed: boom");
    }

    #[test]
    fn codes_are_distinct() {
        let codes = [
            DirexError::Cancelled.code(),
            DirexError::InvalidBufferSize.code(),
            DirexError::ActionFailure(anyhow::anyhow!("x")).code(),
        ];
        assert_eq!(codes, [13, 16, 12]);
    }
}

//! Mode-driven directory deletion.
//! Wipe clears read-only flags through the subtree (root included) before the
//! recursive delete; the first failing clear aborts and nothing is deleted.

use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::errors::{DirexError, Result};
use crate::platform::{clear_readonly, is_readonly};

use super::mode::DeletionMode;

/// Delete `dir` according to `mode`. Errors are returned untouched, never retried.
pub fn delete_dir(dir: &Path, mode: DeletionMode) -> Result<()> {
    match mode {
        DeletionMode::NonRecursive => {
            fs::remove_dir(dir).map_err(|e| DirexError::from_fs("remove directory", dir, e))?;
        }
        DeletionMode::Recursive => remove_tree(dir)?,
        DeletionMode::Wipe => {
            let cleared = clear_readonly_tree(dir).inspect_err(|e| {
                warn!(path = %dir.display(), error = %e, "Wipe aborted while clearing read-only flags");
            })?;
            debug!(path = %dir.display(), cleared, "Cleared read-only flags");
            remove_tree(dir)?;
        }
    }
    info!(path = %dir.display(), %mode, "Deleted directory");
    Ok(())
}

fn remove_tree(dir: &Path) -> Result<()> {
    fs::remove_dir_all(dir).map_err(|e| DirexError::from_fs("remove directory tree", dir, e))
}

/// Clear the read-only flag on every entry under `root` (and `root` itself) that has it.
/// Returns how many entries were changed. Symlinks are not followed.
pub(crate) fn clear_readonly_tree(root: &Path) -> Result<usize> {
    let mut cleared = 0;
    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry.map_err(|e| walk_error(root, e))?;
        if entry.file_type().is_symlink() {
            continue;
        }
        let path = entry.path();
        let meta = entry
            .metadata()
            .map_err(|e| walk_error(path, e))?;
        if is_readonly(&meta) {
            clear_readonly(path, &meta)
                .map_err(|e| DirexError::from_fs("clear read-only flag", path, e))?;
            debug!(path = %path.display(), "Cleared read-only flag");
            cleared += 1;
        }
    }
    Ok(cleared)
}

fn walk_error(fallback: &Path, e: walkdir::Error) -> DirexError {
    let path = e.path().unwrap_or(fallback).to_path_buf();
    match e.into_io_error() {
        Some(io) => DirexError::from_fs("enumerate directory", path, io),
        None => DirexError::Io {
            op: "enumerate directory",
            path,
            source: std::io::Error::other("filesystem loop detected"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn non_recursive_deletes_empty_dir() {
        let temp = assert_fs::TempDir::new().unwrap();
        let d = temp.child("empty");
        d.create_dir_all().unwrap();
        delete_dir(d.path(), DeletionMode::NonRecursive).unwrap();
        assert!(!d.path().exists());
    }

    #[test]
    fn missing_directory_is_io_not_found() {
        let temp = assert_fs::TempDir::new().unwrap();
        let err = delete_dir(&temp.path().join("nope"), DeletionMode::Recursive).unwrap_err();
        match err {
            DirexError::Io { source, .. } => assert_eq!(source.kind(), std::io::ErrorKind::NotFound),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn clear_readonly_tree_counts_only_readonly_entries() {
        let temp = assert_fs::TempDir::new().unwrap();
        let f1 = temp.child("a.txt");
        f1.write_str("a").unwrap();
        let f2 = temp.child("b.txt");
        f2.write_str("b").unwrap();

        let mut perms = fs::metadata(f1.path()).unwrap().permissions();
        perms.set_readonly(true);
        fs::set_permissions(f1.path(), perms).unwrap();

        assert_eq!(clear_readonly_tree(temp.path()).unwrap(), 1);
        assert!(!is_readonly(&fs::metadata(f1.path()).unwrap()));
        assert_eq!(clear_readonly_tree(temp.path()).unwrap(), 0);
    }
}

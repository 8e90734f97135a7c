//! Directory handle and the shapes a scoped action can receive it in.

use std::ffi::OsString;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// A path-based handle to a directory owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    path: PathBuf,
}

impl Directory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Absolute form of the path with `.` and `..` folded away lexically
    /// (no symlink resolution; the directory need not exist).
    pub fn full_name(&self) -> PathBuf {
        let abs = std::path::absolute(&self.path).unwrap_or_else(|_| self.path.clone());
        normalize_lexically(&abs)
    }

    /// Final path component, or an empty name for roots like `/`.
    pub fn name(&self) -> DirName {
        let name = self
            .full_name()
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        DirName(name)
    }

    pub fn exists(&self) -> bool {
        self.path.is_dir()
    }
}

fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            // `..` at the root stays at the root.
            Component::ParentDir => {
                if out.file_name().is_some() {
                    out.pop();
                }
            }
            other => out.push(other),
        }
    }
    out
}

impl From<PathBuf> for Directory {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&Path> for Directory {
    fn from(path: &Path) -> Self {
        Self::new(path)
    }
}

impl AsRef<Path> for Directory {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

/// Bare directory name (last path component).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirName(pub OsString);

impl DirName {
    pub fn as_os_str(&self) -> &std::ffi::OsStr {
        &self.0
    }
}

impl fmt::Display for DirName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_string_lossy())
    }
}

/// What a scoped action receives, selected by the action's argument type:
/// `()` for nothing, `Directory` for the handle, `PathBuf` for the full path,
/// `DirName` for the bare name.
pub trait ActionInput: Sized {
    fn from_directory(dir: &Directory) -> Self;
}

impl ActionInput for () {
    fn from_directory(_: &Directory) -> Self {}
}

impl ActionInput for Directory {
    fn from_directory(dir: &Directory) -> Self {
        dir.clone()
    }
}

impl ActionInput for PathBuf {
    fn from_directory(dir: &Directory) -> Self {
        dir.full_name()
    }
}

impl ActionInput for DirName {
    fn from_directory(dir: &Directory) -> Self {
        dir.name()
    }
}

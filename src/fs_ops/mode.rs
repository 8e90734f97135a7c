//! Deletion modes.
//! `Recursive`/`NonRecursive` mirror the plain recursive flag of a directory delete;
//! `Wipe` is `Recursive` that first clears read-only flags instead of failing on them.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeletionMode {
    /// Clear read-only flags through the whole subtree, then delete recursively.
    #[default]
    Wipe,
    /// Delete the directory and everything below it.
    Recursive,
    /// Delete only an empty directory.
    NonRecursive,
}

impl DeletionMode {
    /// Parse common names (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wipe" => Some(DeletionMode::Wipe),
            "recursive" => Some(DeletionMode::Recursive),
            "non-recursive" | "nonrecursive" | "non_recursive" => Some(DeletionMode::NonRecursive),
            _ => None,
        }
    }
}

impl fmt::Display for DeletionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DeletionMode::Wipe => "wipe",
            DeletionMode::Recursive => "recursive",
            DeletionMode::NonRecursive => "non-recursive",
        };
        f.write_str(s)
    }
}

impl FromStr for DeletionMode {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid deletion mode: '{s}'"))
    }
}

//! Unix implementations of platform helpers.
//! An entry counts as read-only when its owner-write bit is missing.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
use std::path::Path;

const OWNER_WRITE: u32 = 0o200;

pub fn is_readonly(meta: &fs::Metadata) -> bool {
    meta.permissions().mode() & OWNER_WRITE == 0
}

/// Add the owner-write bit; group/other bits are left as they are.
pub fn clear_readonly(path: &Path, meta: &fs::Metadata) -> io::Result<()> {
    let mode = meta.permissions().mode() | OWNER_WRITE;
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
}

/// Open log file for appending; set 0600 only when creating a new file.
/// If the file already exists, we preserve its existing permissions.
pub fn open_log_file_secure_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let existed = path.exists();
    let f = OpenOptions::new()
        .create(true)
        .append(true)
        .mode(0o600) // applies on create
        .open(path)?;
    if !existed {
        let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o600));
    }
    Ok(f)
}

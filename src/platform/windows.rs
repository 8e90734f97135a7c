//! Windows implementations of platform helpers.
//! Read-only is the FILE_ATTRIBUTE_READONLY flag exposed by `Permissions::readonly`.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;

pub fn is_readonly(meta: &fs::Metadata) -> bool {
    meta.permissions().readonly()
}

pub fn clear_readonly(path: &Path, meta: &fs::Metadata) -> io::Result<()> {
    let mut perms = meta.permissions();
    #[allow(clippy::permissions_set_readonly_false)]
    perms.set_readonly(false);
    fs::set_permissions(path, perms)
}

/// Open log file for appending (best-effort; no symlink defense available via std on Windows).
pub fn open_log_file_secure_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    OpenOptions::new().create(true).append(true).open(path)
}

//! Mode dispatch for directory deletion: non-recursive, recursive and wipe.

use assert_fs::prelude::*;
use direx::{DeletionMode, DirexError, Directory, delete_dir};
use std::fs;
use std::path::Path;

fn set_readonly(path: &Path, readonly: bool) {
    let mut perms = fs::metadata(path).unwrap().permissions();
    perms.set_readonly(readonly);
    fs::set_permissions(path, perms).unwrap();
}

#[cfg(unix)]
fn running_as_root() -> bool {
    unsafe { libc::geteuid() == 0 }
}

/// root/
///   a.txt        (read-only)
///   nested/      (read-only)
///     b.txt      (read-only)
fn readonly_tree(temp: &assert_fs::TempDir) -> std::path::PathBuf {
    let root = temp.child("tree");
    root.create_dir_all().unwrap();
    let a = root.child("a.txt");
    a.write_str("a").unwrap();
    let nested = root.child("nested");
    nested.create_dir_all().unwrap();
    let b = nested.child("b.txt");
    b.write_str("b").unwrap();

    set_readonly(a.path(), true);
    set_readonly(b.path(), true);
    set_readonly(nested.path(), true);
    root.path().to_path_buf()
}

/// Best-effort restore so TempDir cleanup succeeds when a test leaves the tree behind.
fn unlock(root: &Path) {
    for entry in walkdir::WalkDir::new(root).into_iter().filter_map(Result::ok) {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let _ = fs::set_permissions(entry.path(), fs::Permissions::from_mode(0o755));
        }
        #[cfg(not(unix))]
        {
            set_readonly(entry.path(), false);
        }
    }
}

#[test]
fn non_recursive_refuses_non_empty_directory() {
    let temp = assert_fs::TempDir::new().unwrap();
    let root = readonly_tree(&temp);

    let err = delete_dir(&root, DeletionMode::NonRecursive).unwrap_err();
    assert!(matches!(err, DirexError::DirectoryNotEmpty { .. }), "got {err:?}");
    assert!(root.exists());
    unlock(&root);
}

#[test]
fn recursive_fails_on_readonly_entries() {
    #[cfg(unix)]
    if running_as_root() {
        eprintln!("skipping: running as root");
        return;
    }
    let temp = assert_fs::TempDir::new().unwrap();
    let root = readonly_tree(&temp);

    let err = delete_dir(&root, DeletionMode::Recursive).unwrap_err();
    assert!(matches!(err, DirexError::AccessDenied { .. }), "got {err:?}");
    assert!(root.exists());
    unlock(&root);
}

#[test]
fn wipe_removes_readonly_tree() {
    let temp = assert_fs::TempDir::new().unwrap();
    let root = readonly_tree(&temp);

    delete_dir(&root, DeletionMode::Wipe).expect("wipe should succeed");
    assert!(!root.exists());
}

#[test]
fn wipe_clears_readonly_root_nested_dir_and_leaf() {
    let temp = assert_fs::TempDir::new().unwrap();
    let root = temp.child("locked");
    let deep = root.child("x").child("y");
    deep.create_dir_all().unwrap();
    let leaf = deep.child("leaf.bin");
    leaf.write_binary(&[1, 2, 3]).unwrap();

    set_readonly(leaf.path(), true);
    set_readonly(deep.path(), true);
    set_readonly(root.path(), true);

    Directory::new(root.path())
        .delete(DeletionMode::Wipe)
        .expect("wipe should succeed");
    assert!(!root.path().exists());
}

#[test]
fn wipe_on_writable_tree_behaves_like_recursive() {
    let temp = assert_fs::TempDir::new().unwrap();
    let root = temp.child("plain");
    root.child("sub").child("f.txt").write_str("f").unwrap();

    delete_dir(root.path(), DeletionMode::default()).unwrap();
    assert!(!root.path().exists());
}

#[test]
fn recursive_removes_writable_tree() {
    let temp = assert_fs::TempDir::new().unwrap();
    let root = temp.child("plain");
    root.child("one.txt").write_str("1").unwrap();
    root.child("sub").child("two.txt").write_str("2").unwrap();

    delete_dir(root.path(), DeletionMode::Recursive).unwrap();
    assert!(!root.path().exists());
}

/// root/
///   keep.txt
///   sealed/      (mode 000, cannot be listed)
///     inner.txt
#[cfg(unix)]
#[test]
fn wipe_stops_before_delete_when_subtree_cannot_be_enumerated() {
    use std::os::unix::fs::PermissionsExt;

    if running_as_root() {
        eprintln!("skipping: running as root");
        return;
    }
    let temp = assert_fs::TempDir::new().unwrap();
    let root = temp.child("partial");
    let keep = root.child("keep.txt");
    keep.write_str("k").unwrap();
    let sealed = root.child("sealed");
    let inner = sealed.child("inner.txt");
    inner.write_str("i").unwrap();
    fs::set_permissions(sealed.path(), fs::Permissions::from_mode(0o000)).unwrap();

    let err = delete_dir(root.path(), DeletionMode::Wipe).unwrap_err();
    assert!(matches!(err, DirexError::AccessDenied { .. }), "got {err:?}");
    assert!(root.path().exists());
    assert!(keep.path().exists());
    assert!(sealed.path().exists());

    unlock(root.path());
    assert!(inner.path().exists());
}

//! Directory deletion: modes, the directory handle and scoped delete-after.

mod delete;
mod directory;
mod mode;
mod scoped;

pub use delete::delete_dir;
pub use directory::{ActionInput, DirName, Directory};
pub use mode::DeletionMode;

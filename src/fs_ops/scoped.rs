//! Run a caller action, then delete the directory.
//!
//! The delete runs only when the action succeeds. A failing (or cancelled) action
//! leaves the directory in place; this is not a guaranteed-cleanup guard.

use std::future::Future;
use tracing::debug;

use crate::errors::{DirexError, Result};

use super::delete::delete_dir;
use super::directory::{ActionInput, Directory};
use super::mode::DeletionMode;

impl Directory {
    /// Delete this directory according to `mode`.
    pub fn delete(&self, mode: DeletionMode) -> Result<()> {
        delete_dir(self.path(), mode)
    }

    /// Run `action`, then delete the directory with `mode` and return the action's value.
    ///
    /// The action's argument type picks what it receives (see [`ActionInput`]):
    ///
    /// ```no_run
    /// use direx::{DeletionMode, Directory};
    /// use std::path::PathBuf;
    ///
    /// let dir = Directory::new("/tmp/scratch");
    /// let files = dir.delete_after(DeletionMode::Wipe, |path: PathBuf| {
    ///     Ok(std::fs::read_dir(path)?.count())
    /// })?;
    /// # Ok::<(), direx::DirexError>(())
    /// ```
    ///
    /// If the action fails the directory is left untouched and the failure is
    /// returned as [`DirexError::ActionFailure`].
    pub fn delete_after<A, T, F>(&self, mode: DeletionMode, action: F) -> Result<T>
    where
        A: ActionInput,
        F: FnOnce(A) -> anyhow::Result<T>,
    {
        let value = action(A::from_directory(self)).map_err(|e| self.skip_delete(e))?;
        self.delete(mode)?;
        Ok(value)
    }

    /// Async form of [`Directory::delete_after`]. The delete runs once the action's
    /// future resolves `Ok`; dropping the returned future before that skips it.
    pub async fn delete_after_async<A, T, F, Fut>(&self, mode: DeletionMode, action: F) -> Result<T>
    where
        A: ActionInput,
        F: FnOnce(A) -> Fut,
        Fut: Future<Output = anyhow::Result<T>>,
    {
        let value = action(A::from_directory(self))
            .await
            .map_err(|e| self.skip_delete(e))?;
        self.delete(mode)?;
        Ok(value)
    }

    fn skip_delete(&self, err: anyhow::Error) -> DirexError {
        debug!(path = %self.path().display(), error = %err, "Action failed; directory kept");
        DirexError::from_action(err)
    }
}

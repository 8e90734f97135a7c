//! Config validation logic.

use anyhow::{Result, bail};
use tracing::debug;

use super::types::Config;

impl Config {
    /// Reject values the operations cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.buffer_size == 0 {
            bail!("buffer_size must be greater than zero");
        }
        if let Some(log_file) = &self.log_file {
            if log_file.as_os_str().is_empty() {
                bail!("log_file must not be empty");
            }
        }
        debug!(
            deletion_mode = %self.deletion_mode,
            buffer_size = self.buffer_size,
            log_level = %self.log_level,
            "Config validated"
        );
        Ok(())
    }
}

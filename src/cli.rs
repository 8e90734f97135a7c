//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - --debug is a shorthand for --log-level debug.
//! - Flags override values loaded from config.xml.

use clap::{Parser, Subcommand, ValueHint};
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel};
use crate::fs_ops::DeletionMode;

#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Delete directories (wipe/recursive/non-recursive) and copy bounded byte ranges"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(short = 'd', long, global = true, help = "Enable debug logging (shorthand for --log-level debug)")]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, global = true, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Append logs to this file in addition to stdout.
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, global = true, help = "Emit logs in structured JSON")]
    pub json: bool,

    /// Print where direx will look for the config file, then exit.
    #[arg(long, help = "Print the config file location used by direx and exit")]
    pub print_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Delete a directory.
    Delete {
        #[arg(value_hint = ValueHint::DirPath)]
        dir: PathBuf,

        /// wipe (clear read-only flags, then recursive), recursive, or non-recursive.
        #[arg(long, short = 'm')]
        mode: Option<DeletionMode>,
    },
    /// Copy at most N bytes from one file to another.
    Copy {
        #[arg(value_hint = ValueHint::FilePath)]
        source: PathBuf,

        #[arg(value_hint = ValueHint::FilePath)]
        destination: PathBuf,

        /// Maximum number of bytes to copy.
        #[arg(long = "max-bytes", short = 'n')]
        max_bytes: u64,

        /// Copy buffer size in bytes.
        #[arg(long)]
        buffer_size: Option<usize>,

        /// Skip this many bytes of the source before copying.
        #[arg(long, default_value_t = 0)]
        offset: u64,
    },
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(lf) = &self.log_file {
            cfg.log_file = Some(lf.clone());
        }
        if self.json {
            cfg.json = true;
        }
        match &self.command {
            Some(Command::Delete { mode: Some(mode), .. }) => cfg.deletion_mode = *mode,
            Some(Command::Copy { buffer_size: Some(size), .. }) => cfg.buffer_size = *size,
            _ => {}
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}

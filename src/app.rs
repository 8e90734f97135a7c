//! Application orchestrator.
//! Loads/merges config, initializes logging, installs the Ctrl-C handler and
//! dispatches the subcommand.

use anyhow::{Context, Result, bail};
use std::io::SeekFrom;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncSeekExt, AsyncWriteExt};
use tracing::{debug, error, info};

use direx::cli::{Args, Command};
use direx::config::load_config;
use direx::output as out;
use direx::{CancelToken, Config, DirexError, Directory, copy_at_most_async_with_buffer};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    if args.print_config {
        match direx::default_config_path() {
            Ok(p) => {
                out::print_info(&format!("direx config path:\n  {}\n", p.display()));
                if !p.exists() {
                    out::print_info("No config file exists there yet; built-in defaults are used.");
                }
            }
            Err(e) => out::print_error(&format!("Could not determine a config path: {e}")),
        }
        return Ok(());
    }

    let Some(command) = args.command.clone() else {
        bail!("no subcommand given; run `direx --help`");
    };

    let mut cfg = load_config()?;
    args.apply_overrides(&mut cfg);
    cfg.validate()?;

    let guard = init_tracing(cfg.log_level, cfg.log_file.as_deref(), cfg.json).inspect_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {e}"));
    })?;

    // Guard is dropped on SIGINT so the file appender flushes.
    let guard_slot = Arc::new(Mutex::new(guard));
    let cancel = CancelToken::new();
    {
        let guard_slot = Arc::clone(&guard_slot);
        let cancel = cancel.clone();
        ctrlc::set_handler(move || {
            cancel.cancel();
            out::print_warn("Received interrupt; stopping...");
            if let Ok(mut g) = guard_slot.lock() {
                let _ = g.take();
            }
        })
        .context("install signal handler")?;
    }

    debug!(?command, "Starting direx");
    let result = dispatch(&command, &cfg, &cancel);

    if let Err(e) = &result {
        match e.downcast_ref::<DirexError>() {
            Some(de) => error!(code = de.code(), error = %de, "Command failed"),
            None => error!(error = ?e, "Command failed"),
        }
    }

    if let Ok(mut g) = guard_slot.lock() {
        let _ = g.take();
    }
    result
}

fn dispatch(command: &Command, cfg: &Config, cancel: &CancelToken) -> Result<()> {
    match command {
        Command::Delete { dir, .. } => {
            Directory::new(dir).delete(cfg.deletion_mode)?;
            out::print_success(&format!("Deleted '{}' ({})", dir.display(), cfg.deletion_mode));
            Ok(())
        }
        Command::Copy { source, destination, max_bytes, offset, .. } => {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .context("build tokio runtime")?;
            let copied = runtime.block_on(copy_file_prefix(
                source,
                destination,
                *offset,
                *max_bytes,
                cfg.buffer_size,
                cancel,
            ))?;
            info!(source = %source.display(), destination = %destination.display(), copied, "Copy completed");
            out::print_success(&format!(
                "Copied {copied} bytes '{}' -> '{}'",
                source.display(),
                destination.display()
            ));
            Ok(())
        }
    }
}

async fn copy_file_prefix(
    source: &Path,
    destination: &Path,
    offset: u64,
    max_bytes: u64,
    buffer_size: usize,
    cancel: &CancelToken,
) -> Result<u64> {
    let mut src = tokio::fs::File::open(source)
        .await
        .with_context(|| format!("open source '{}'", source.display()))?;
    if offset > 0 {
        src.seek(SeekFrom::Start(offset))
            .await
            .with_context(|| format!("seek source '{}' to {offset}", source.display()))?;
    }
    let mut dst = tokio::fs::File::create(destination)
        .await
        .with_context(|| format!("create destination '{}'", destination.display()))?;

    let copied = copy_at_most_async_with_buffer(&mut src, &mut dst, max_bytes, buffer_size, cancel).await?;
    dst.flush()
        .await
        .with_context(|| format!("flush destination '{}'", destination.display()))?;
    Ok(copied)
}

//! XML configuration support.
//! - Loads settings from config.xml (quick_xml + serde).
//! - A missing file means defaults; a malformed file or unknown field is an error.
//!
//! Example:
//! ```xml
//! <config>
//!   <log_level>info</log_level>
//!   <log_file>/var/log/direx.log</log_file>
//!   <json>false</json>
//!   <deletion_mode>recursive</deletion_mode>
//!   <buffer_size>65536</buffer_size>
//! </config>
//! ```

use anyhow::{Context, Result, anyhow};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::paths::default_config_path;
use super::types::{Config, LogLevel};
use crate::fs_ops::DeletionMode;

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    log_level: Option<String>,
    log_file: Option<String>,
    json: Option<bool>,
    deletion_mode: Option<String>,
    #[serde(default, deserialize_with = "de_usize_trimmed_opt")]
    buffer_size: Option<usize>,
}

// Custom deserializer that trims surrounding whitespace for optional usize
fn de_usize_trimmed_opt<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    opt.map(|s| s.trim().parse::<usize>().map_err(serde::de::Error::custom))
        .transpose()
}

fn xml_to_config(parsed: XmlConfig) -> Result<Config> {
    let mut cfg = Config::default();

    if let Some(s) = parsed.log_level.as_deref() {
        cfg.log_level = s.parse::<LogLevel>().map_err(|e| anyhow!(e))?;
    }
    if let Some(s) = parsed.log_file.as_deref() {
        let trimmed = s.trim();
        if !trimmed.is_empty() {
            cfg.log_file = Some(PathBuf::from(trimmed));
        }
    }
    if let Some(json) = parsed.json {
        cfg.json = json;
    }
    if let Some(s) = parsed.deletion_mode.as_deref() {
        cfg.deletion_mode = s.parse::<DeletionMode>().map_err(|e| anyhow!(e))?;
    }
    if let Some(size) = parsed.buffer_size {
        cfg.buffer_size = size;
    }
    Ok(cfg)
}

/// Load a Config from a specific XML file path.
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&contents)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;
    xml_to_config(parsed).with_context(|| format!("invalid value in '{}'", path.display()))
}

/// Load the config from `$DIREX_CONFIG` or the default path; defaults if the file is absent.
pub fn load_config() -> Result<Config> {
    let path = match default_config_path() {
        Ok(p) => p,
        Err(e) => {
            debug!(error = %e, "No config path available; using defaults");
            return Ok(Config::default());
        }
    };
    if !path.exists() {
        debug!(path = %path.display(), "Config file not found; using defaults");
        return Ok(Config::default());
    }
    let cfg = load_config_from_xml_path(&path)?;
    debug!(path = %path.display(), "Loaded config");
    Ok(cfg)
}

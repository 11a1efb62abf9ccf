//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use pacer_core::{config, Delay, PacerConfig};
use std::path::{Path, PathBuf};

/// Resolve the config file location (explicit override or the default path)
pub fn config_path(override_path: Option<&Path>) -> Result<PathBuf> {
    match override_path {
        Some(path) => Ok(path.to_path_buf()),
        None => config::config_file_path().context("Could not determine config file path"),
    }
}

/// Load the effective configuration, using defaults when no file exists
pub fn load_config(override_path: Option<&Path>) -> Result<PacerConfig> {
    let path = config_path(override_path)?;
    PacerConfig::load_or_default(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))
}

/// Pick the delay given on the command line, else the configured one
pub fn resolve_delay(flag_ms: Option<i64>, configured: Delay) -> Delay {
    flag_ms.map(Delay::from_millis).unwrap_or(configured)
}

/// Parse a comma-separated list of call offsets in milliseconds
///
/// Offsets must be non-decreasing: `"0,500,1000,2500"`.
pub fn parse_offsets(schedule: &str) -> Result<Vec<u64>> {
    let mut offsets: Vec<u64> = Vec::new();

    for part in schedule.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let offset: u64 = part
            .parse()
            .with_context(|| format!("Invalid call offset '{}': expected milliseconds", part))?;

        if let Some(&previous) = offsets.last() {
            if offset < previous {
                anyhow::bail!(
                    "Call offsets must be non-decreasing ({} comes after {})",
                    offset,
                    previous
                );
            }
        }
        offsets.push(offset);
    }

    if offsets.is_empty() {
        anyhow::bail!("No call offsets given");
    }

    Ok(offsets)
}

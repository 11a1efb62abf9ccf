//! Pacer configuration file
//!
//! Stored as TOML at `<config dir>/pacer/config.toml`. Every field has a
//! default, so a missing file or a partial file is valid.

use crate::delay::Delay;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Upper bound accepted for any configured delay (24 hours)
pub const MAX_DELAY_MS: i64 = 24 * 60 * 60 * 1000;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PacerConfig {
    pub debounce: DebounceConfig,
    pub throttle: ThrottleConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebounceConfig {
    /// Quiet period before a burst's last call runs (default: 300ms)
    pub delay_ms: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThrottleConfig {
    /// Minimum spacing between accepted calls (default: 2000ms)
    pub delay_ms: i64,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self { delay_ms: 300 }
    }
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self { delay_ms: 2000 }
    }
}

impl DebounceConfig {
    pub fn delay(&self) -> Delay {
        Delay::from_millis(self.delay_ms)
    }
}

impl ThrottleConfig {
    pub fn delay(&self) -> Delay {
        Delay::from_millis(self.delay_ms)
    }
}

impl PacerConfig {
    /// Reject delays beyond [`MAX_DELAY_MS`]
    ///
    /// Negative delays are accepted; they normalize to zero when used.
    pub fn validate(&self) -> Result<()> {
        check_delay("debounce.delay_ms", self.debounce.delay_ms)?;
        check_delay("throttle.delay_ms", self.throttle.delay_ms)?;
        Ok(())
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&contents).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file, falling back to defaults when it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Write the config as TOML, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        self.validate()?;
        let contents = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| Error::ConfigWrite {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(path, contents).map_err(|source| Error::ConfigWrite {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn check_delay(key: &'static str, delay_ms: i64) -> Result<()> {
    if delay_ms > MAX_DELAY_MS {
        return Err(Error::InvalidConfig {
            key,
            reason: format!("{} exceeds the maximum of {}ms", delay_ms, MAX_DELAY_MS),
        });
    }
    Ok(())
}

/// Default config file location (`<config dir>/pacer/config.toml`)
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pacer").join("config.toml"))
}

/// Annotated example config file
pub fn example_config() -> &'static str {
    r#"# Pacer configuration

[debounce]
# Quiet period (ms) a burst of calls must observe before the last one runs.
# Negative values are treated as 0.
delay_ms = 300

[throttle]
# Minimum spacing (ms) between accepted calls; calls inside the window are dropped.
delay_ms = 2000
"#
}

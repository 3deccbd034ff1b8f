//! Configuration file handling.
//!
//! Handles:
//! - Locating `config.toml` in the platform config directory
//! - Defaults when no file exists
//! - Writing a starter file for `natid config init`

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use directories::ProjectDirs;
use natid_codec::{ValidationMode, DEFAULT_FILLER};
use serde::{Deserialize, Serialize};

/// Configuration file name.
const CONFIG_FILE: &str = "config.toml";

/// Environment variable that overrides the configured log level.
pub const LOG_LEVEL_ENV: &str = "NATID_LOG_LEVEL";

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Get the default config file path.
pub fn default_path() -> Result<PathBuf> {
    ProjectDirs::from("org", "natid", "natid")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Validate in strict calendar mode by default.
    pub strict: bool,

    /// Filler digit used by `generate` and `fixtures` when none is given.
    pub default_filler: u8,

    /// Log filter used when neither `RUST_LOG` nor `NATID_LOG_LEVEL` is set.
    pub log_level: String,

    /// Year that two-digit birth years are resolved against; today when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_year: Option<i32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strict: false,
            default_filler: DEFAULT_FILLER,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            reference_year: None,
        }
    }
}

impl Config {
    /// Load from `path`, or from the default location when `None`.
    ///
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::load_from(&default_path()?),
        }
    }

    /// Load from an explicit path, or return defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        toml::from_str(&contents).with_context(|| format!("Failed to parse config from {:?}", path))
    }

    /// Save to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory {:?}", dir))?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents).with_context(|| format!("Failed to write config to {:?}", path))
    }

    /// Validation mode, with `--strict` taking precedence.
    pub fn mode(&self, strict_flag: bool) -> ValidationMode {
        if strict_flag || self.strict {
            ValidationMode::Strict
        } else {
            ValidationMode::Lax
        }
    }

    /// Log level in effect: a non-empty `env_override` beats the file.
    pub fn effective_log_level(&self, env_override: Option<String>) -> String {
        env_override
            .filter(|level| !level.trim().is_empty())
            .unwrap_or_else(|| self.log_level.clone())
    }

    /// Date that two-digit years are resolved against.
    pub fn reference_date(&self, today: NaiveDate) -> NaiveDate {
        self.reference_year
            .and_then(|year| NaiveDate::from_ymd_opt(year, 12, 31))
            .unwrap_or(today)
    }
}

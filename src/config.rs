//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/subcmd/subcmd.toml`
//! 3. Local config: the TOML file named by `SUBCMD_CONFIG` (or passed in)
//! 4. Environment variables: `SUBCMD_*` prefix, `__` between sections
//!
//! Malformed override values are errors, not silently skipped.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::{CliError, CliResult};
use crate::domain::UsageLayout;

/// Unified configuration for subcmd programs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Log verbosity: 0 warn, 1 info, 2 debug, 3 trace
    pub verbosity: u8,
    /// Layout of the sub-command listing
    pub usage: UsageLayout,
}

/// Raw usage layout for intermediate parsing (`None` = not specified).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawUsageLayout {
    pub min_width: Option<usize>,
    pub column_step: Option<usize>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub verbosity: Option<u8>,
    pub usage: RawUsageLayout,
}

/// Environment variable naming the local config file.
pub const LOCAL_CONFIG_ENV: &str = "SUBCMD_CONFIG";

/// Get the XDG config directory for subcmd.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "subcmd").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("subcmd.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> CliResult<RawSettings> {
    let content = std::fs::read_to_string(path).map_err(|e| CliError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| CliError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> CliError {
    CliError::Config {
        message: e.to_string(),
    }
}

/// Value of `key` from the environment layer; unset keys are `None`.
fn env_value<T: DeserializeOwned>(config: &Config, key: &str) -> CliResult<Option<T>> {
    match config.get::<T>(key) {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(CliError::Config {
            message: format!("environment override {}: {}", key, e),
        }),
    }
}

/// Local config file named by `SUBCMD_CONFIG`, if set.
pub fn local_config_path() -> Option<PathBuf> {
    std::env::var_os(LOCAL_CONFIG_ENV).map(PathBuf::from)
}

impl Settings {
    /// Overlay wins for every field it specifies.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            verbosity: overlay.verbosity.unwrap_or(self.verbosity),
            usage: UsageLayout {
                min_width: overlay.usage.min_width.unwrap_or(self.usage.min_width),
                column_step: overlay.usage.column_step.unwrap_or(self.usage.column_step),
            },
        }
    }

    /// Load settings from the global config, `local`, and the environment.
    pub fn load(local: Option<&Path>) -> CliResult<Self> {
        Self::load_layers(global_config_path().as_deref(), local)
    }

    /// Load settings from explicit file layers plus the environment.
    ///
    /// Missing files are skipped; unreadable or malformed ones are errors.
    pub fn load_layers(global: Option<&Path>, local: Option<&Path>) -> CliResult<Self> {
        let mut current = Self::default();

        for path in [global, local].into_iter().flatten() {
            if path.exists() {
                debug!(path = %path.display(), "loading config layer");
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.validate()?;
        Ok(current)
    }

    /// Apply SUBCMD_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> CliResult<Self> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("SUBCMD")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(config_err)?;

        if let Some(val) = env_value::<u8>(&config, "verbosity")? {
            settings.verbosity = val;
        }
        if let Some(val) = env_value::<usize>(&config, "usage.min_width")? {
            settings.usage.min_width = val;
        }
        if let Some(val) = env_value::<usize>(&config, "usage.column_step")? {
            settings.usage.column_step = val;
        }

        Ok(settings)
    }

    pub fn validate(&self) -> CliResult<()> {
        if self.usage.column_step == 0 {
            return Err(CliError::Config {
                message: "usage.column_step must be greater than zero".into(),
            });
        }
        Ok(())
    }

    /// Render the resolved settings as TOML.
    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}

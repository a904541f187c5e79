//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/cursorkit/cursorkit.toml`
//! 3. Explicit config file passed with `--config`
//! 4. Environment variables: `CURSORKIT_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;
use crate::domain::{Storage, DEFAULT_CAPACITY, DEFAULT_LOG_PREFIX};

/// Minimum price used by filter stages that do not name their own.
pub const DEFAULT_MIN_PRICE: f64 = 200.0;

/// Raw settings for intermediate parsing (Option to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub array_capacity: Option<usize>,
    pub min_price: Option<f64>,
    pub storage: Option<Storage>,
    pub log_prefix: Option<String>,
    pub inventory: Option<PathBuf>,
}

/// Unified configuration for cursorkit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Capacity of array-backed containers (default: 100)
    pub array_capacity: usize,
    /// Default minimum for filter stages (default: 200)
    pub min_price: f64,
    /// Container used when the command line does not choose one
    pub storage: Storage,
    /// Prefix of every logging-decorator line
    pub log_prefix: String,
    /// Inventory file; the built-in sample is used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            array_capacity: DEFAULT_CAPACITY,
            min_price: DEFAULT_MIN_PRICE,
            storage: Storage::default(),
            log_prefix: DEFAULT_LOG_PREFIX.to_string(),
            inventory: None,
        }
    }
}

/// Get the XDG config directory for cursorkit.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "cursorkit").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("cursorkit.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn expand(value: &str) -> String {
    shellexpand::full(value)
        .map(|expanded| expanded.into_owned())
        .unwrap_or_else(|_| value.to_string())
}

impl Settings {
    /// Expand `~`, `$VAR` and `${VAR}` in the inventory path.
    fn expand_paths(&mut self) {
        if let Some(inventory) = &self.inventory {
            self.inventory = Some(PathBuf::from(expand(&inventory.to_string_lossy())));
        }
    }

    /// Merge overlay onto self: overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            array_capacity: overlay.array_capacity.unwrap_or(self.array_capacity),
            min_price: overlay.min_price.unwrap_or(self.min_price),
            storage: overlay.storage.unwrap_or(self.storage),
            log_prefix: overlay
                .log_prefix
                .clone()
                .unwrap_or_else(|| self.log_prefix.clone()),
            inventory: overlay
                .inventory
                .clone()
                .or_else(|| self.inventory.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file (must exist if given)
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_layers(global_config_path().as_deref(), config_file)
    }

    /// Load settings from an explicit global path and an optional config file.
    ///
    /// A missing global file is skipped; a missing `config_file` is an error.
    pub fn load_layers(
        global: Option<&Path>,
        config_file: Option<&Path>,
    ) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global {
            if global_path.exists() {
                debug!("global config: {}", global_path.display());
                current = current.merge_with(&load_raw_settings(global_path)?);
            }
        }

        // 3. Explicit config file
        if let Some(path) = config_file {
            debug!("config file: {}", path.display());
            current = current.merge_with(&load_raw_settings(path)?);
        }

        // 4. Environment variables (explicit override)
        current = Self::apply_env_overrides(current)?;

        current.expand_paths();
        current.validate()?;
        Ok(current)
    }

    /// Apply CURSORKIT_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("CURSORKIT")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Some(val) = present(config.get_int("array_capacity"))? {
            settings.array_capacity = usize::try_from(val).map_err(|_| ApplicationError::Config {
                message: format!("array_capacity must not be negative: {val}"),
            })?;
        }
        if let Some(val) = present(config.get_float("min_price"))? {
            settings.min_price = val;
        }
        if let Some(val) = present(config.get_string("storage"))? {
            settings.storage = val
                .parse()
                .map_err(|message| ApplicationError::Config { message })?;
        }
        if let Some(val) = present(config.get_string("log_prefix"))? {
            settings.log_prefix = val;
        }
        if let Some(val) = present(config.get_string("inventory"))? {
            settings.inventory = Some(PathBuf::from(val));
        }

        Ok(settings)
    }

    /// Reject values no container or filter can work with.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        if self.array_capacity == 0 {
            return Err(ApplicationError::Config {
                message: "array_capacity must be at least 1".to_string(),
            });
        }
        if !self.min_price.is_finite() {
            return Err(ApplicationError::Config {
                message: format!("min_price must be a finite number: {}", self.min_price),
            });
        }
        Ok(())
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# cursorkit configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/cursorkit/cursorkit.toml
#   File:   --config <path>
#   Env:    CURSORKIT_* environment variables (explicit overrides)

# Capacity of array-backed containers
# array_capacity = 100

# Default minimum for "filter" stages without an explicit value
# min_price = 200.0

# Container used when --storage is not given: "array" or "list"
# storage = "array"

# Prefix of logging-decorator lines
# log_prefix = "[LOG] access:"

# Inventory file with [[component]] tables
# inventory = "~/parts.toml"
"#
        .to_string()
    }
}

/// Unset keys are `None`; values that fail to parse are errors.
fn present<T>(value: Result<T, ConfigError>) -> Result<Option<T>, ApplicationError> {
    match value {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(config_err(e)),
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

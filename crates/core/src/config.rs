//! Dashboard configuration
//!
//! Read from a TOML file. Every key is optional; missing keys take the
//! defaults below.
//!
//! ```toml
//! locale = "de"
//! locale_dir = "locale"
//! data_path = "data/attributes.json"
//! mutation_latency_ms = 300
//! confirm_hold_ms = 2000
//! log_filter = "shopdash=debug"
//!
//! [window]
//! title = "Shopdash"
//! width = 1200.0
//! height = 800.0
//! ```

use crate::error::{DashError, DashResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Environment variable naming the config file
pub const CONFIG_ENV_VAR: &str = "SHOPDASH_CONFIG";

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "shopdash.toml";

// ============================================================================
// Config Types
// ============================================================================

/// Top-level dashboard configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Locale used to resolve UI messages
    pub locale: String,

    /// Directory holding `<locale>.json` message catalogs
    pub locale_dir: Option<PathBuf>,

    /// Where the attribute store is persisted. When unset a sample store is
    /// used and nothing is written.
    pub data_path: Option<PathBuf>,

    /// Simulated round-trip time of store mutations
    pub mutation_latency_ms: u64,

    /// How long a confirm button keeps showing success or error
    pub confirm_hold_ms: u64,

    /// Fallback log filter when `RUST_LOG` is not set
    pub log_filter: String,

    /// Window settings
    pub window: WindowConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            locale_dir: None,
            data_path: None,
            mutation_latency_ms: 300,
            confirm_hold_ms: 2000,
            log_filter: "info".to_string(),
            window: WindowConfig::default(),
        }
    }
}

/// Desktop window settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Shopdash".to_string(),
            width: 1200.0,
            height: 800.0,
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Where the configuration was read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// File named by `SHOPDASH_CONFIG`
    Env(PathBuf),
    /// `shopdash.toml` in the working directory
    WorkingDir(PathBuf),
    /// No file; built-in defaults
    Defaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Env(path) => write!(f, "{} ({})", path.display(), CONFIG_ENV_VAR),
            ConfigSource::WorkingDir(path) => write!(f, "{}", path.display()),
            ConfigSource::Defaults => write!(f, "defaults"),
        }
    }
}

impl DashboardConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(text: &str) -> DashResult<Self> {
        let config: DashboardConfig =
            toml::from_str(text).map_err(|e| DashError::invalid_config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: impl AsRef<Path>) -> DashResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| DashError::FileRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&text).map_err(|e| match e {
            DashError::InvalidConfig(message) => {
                DashError::invalid_config(format!("{}: {}", path.display(), message))
            }
            other => other,
        })
    }

    /// Resolve the config file from the process environment
    pub fn discover() -> DashResult<(Self, ConfigSource)> {
        Self::discover_in(std::env::var(CONFIG_ENV_VAR).ok(), Path::new("."))
    }

    /// Resolve the config file from an explicit `SHOPDASH_CONFIG` value and
    /// working directory.
    ///
    /// A non-empty env value wins; otherwise `shopdash.toml` in `cwd` is used
    /// when present; otherwise defaults.
    pub fn discover_in(env_value: Option<String>, cwd: &Path) -> DashResult<(Self, ConfigSource)> {
        if let Some(path) = env_value.filter(|v| !v.trim().is_empty()) {
            let path = PathBuf::from(path);
            return Ok((Self::load(&path)?, ConfigSource::Env(path)));
        }

        let local = cwd.join(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            return Ok((Self::load(&local)?, ConfigSource::WorkingDir(local)));
        }

        Ok((Self::default(), ConfigSource::Defaults))
    }

    /// Check value ranges
    pub fn validate(&self) -> DashResult<()> {
        if self.locale.trim().is_empty() {
            return Err(DashError::invalid_config("locale must not be empty"));
        }
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            return Err(DashError::invalid_config(
                "window width and height must be positive",
            ));
        }
        Ok(())
    }

    /// Path of the catalog for the configured locale, if a directory is set
    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.locale_dir
            .as_ref()
            .map(|dir| dir.join(format!("{}.json", self.locale)))
    }
}

// ============================================================================
// Tests
// ============================================================================

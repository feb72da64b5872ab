//! # Service Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                            │
//! │     CINOS_BIND_ADDR=0.0.0.0                                             │
//! │     CINOS_PORT=8080                                                     │
//! │     CINOS_MENU_PATH=/etc/cinos/menu.toml                                │
//! │                                                                         │
//! │  2. TOML Config File                                                    │
//! │     $CINOS_CONFIG, else                                                 │
//! │     ~/.config/cinos/config.toml (Linux)                                 │
//! │     ~/Library/Application Support/com.cinos.cinos/config.toml (macOS)   │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                    │
//! │     127.0.0.1:5000, built-in menu                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [server]
//! bind_addr = "127.0.0.1"
//! port = 5000
//!
//! [menu]
//! path = "config/menu.toml"  # optional; built-in menu when absent
//! ```

use std::path::{Path, PathBuf};

use cinos_core::{Catalog, Menu, ValidationError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 5000;

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Invalid menu: {0}")]
    Menu(#[from] ValidationError),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Sections
// =============================================================================

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_bind_addr() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for ServerSettings {
    fn default() -> Self {
        ServerSettings {
            bind_addr: default_bind_addr(),
            port: default_port(),
        }
    }
}

/// Where the menu comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSettings {
    /// TOML menu file. The built-in menu is used when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

// =============================================================================
// Service Config
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub menu: MenuSettings,
}

impl ServiceConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`config_path`, `$CINOS_CONFIG`, or the platform default)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        let path = config_path
            .or_else(|| std::env::var_os("CINOS_CONFIG").map(PathBuf::from))
            .or_else(Self::default_config_path);

        if let Some(path) = path {
            if path.exists() {
                info!(?path, "Loading service config from file");
                let contents = read_file(&path)?;
                config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
                    path: path.clone(),
                    source,
                })?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Applies `CINOS_*` overrides read through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup("CINOS_BIND_ADDR") {
            debug!(addr = %addr, "Overriding bind address from environment");
            self.server.bind_addr = addr;
        }

        if let Some(port) = lookup("CINOS_PORT") {
            match port.parse::<u16>() {
                Ok(p) => self.server.port = p,
                Err(_) => warn!(port = %port, "Ignoring unparseable CINOS_PORT"),
            }
        }

        if let Some(path) = lookup("CINOS_MENU_PATH") {
            debug!(path = %path, "Overriding menu path from environment");
            self.menu.path = Some(PathBuf::from(path));
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.server.bind_addr.trim().is_empty() {
            return Err(ConfigError::InvalidValue("server.bind_addr".to_string()));
        }

        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue("server.port".to_string()));
        }

        Ok(())
    }

    /// Builds the catalog: the configured menu file, or the built-in menu.
    pub fn load_catalog(&self) -> ConfigResult<Catalog> {
        match &self.menu.path {
            Some(path) => {
                info!(?path, "Loading menu from file");
                let contents = read_file(path)?;
                let menu: Menu = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
                    path: path.clone(),
                    source,
                })?;
                Ok(Catalog::from_menu(menu)?)
            }
            None => Ok(Catalog::default()),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.bind_addr, self.server.port)
    }

    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "cinos", "cinos")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

fn read_file(path: &Path) -> ConfigResult<String> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

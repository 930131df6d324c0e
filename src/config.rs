//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::app::{NotFoundPolicy, ShellKind};
use crate::layout::{DocumentMetadata, FontConfig};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub app: AppConfig,

    #[serde(default)]
    pub metadata: DocumentMetadata,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// App shell selection and rendering options
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_shell")]
    pub shell: ShellKind,

    #[serde(default)]
    pub not_found: NotFoundPolicy,

    #[serde(default)]
    pub font: FontConfig,
}

fn default_shell() -> ShellKind {
    ShellKind::Plots
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            shell: default_shell(),
            not_found: NotFoundPolicy::default(),
            font: FontConfig::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

/// A configuration together with where it came from and the problems skipped
/// while loading it
///
/// Loading happens before the tracing subscriber exists, so nothing is logged
/// while loading. Call [`LoadedConfig::report`] once logging is up.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config was read from; `None` when built from defaults
    pub source: Option<PathBuf>,
    /// Unreadable candidate files and rejected environment overrides
    pub warnings: Vec<ConfigError>,
}

impl LoadedConfig {
    /// Log the config source and every warning
    pub fn report(&self) {
        match &self.source {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
        }
        for warning in &self.warnings {
            tracing::warn!("{}", warning);
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> LoadedConfig {
        Self::load_first(&[], env_lookup)
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<LoadedConfig, ConfigError> {
        let mut config = Self::load(path)?;
        let warnings = config.apply_overrides(env_lookup);
        Ok(LoadedConfig {
            config,
            source: Some(path.to_path_buf()),
            warnings,
        })
    }

    /// Load from default locations or environment
    pub fn load_default() -> LoadedConfig {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("ledger-web").join("config.toml")),
            Some(PathBuf::from("/etc/ledger-web/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths, env_lookup)
    }

    /// Load the first existing candidate that parses, then apply overrides
    fn load_first(paths: &[PathBuf], lookup: impl Fn(&str) -> Option<String>) -> LoadedConfig {
        let mut warnings = Vec::new();
        let mut loaded = None;

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load(path) {
                Ok(config) => {
                    loaded = Some((config, path.clone()));
                    break;
                }
                Err(e) => warnings.push(e),
            }
        }

        let (mut config, source) = match loaded {
            Some((config, path)) => (config, Some(path)),
            None => (Config::default(), None),
        };
        warnings.extend(config.apply_overrides(lookup));

        LoadedConfig {
            config,
            source,
            warnings,
        }
    }

    /// Apply overrides from any key lookup. Unparseable values are skipped
    /// and returned.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Vec<ConfigError> {
        let mut rejected = Vec::new();

        // Server overrides
        if let Some(host) = lookup("LEDGER_WEB_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("LEDGER_WEB_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(e) => rejected.push(ConfigError::invalid_override("LEDGER_WEB_PORT", port, e)),
            }
        }

        // App overrides
        if let Some(shell) = lookup("LEDGER_WEB_SHELL") {
            match shell.parse() {
                Ok(kind) => self.app.shell = kind,
                Err(e) => rejected.push(ConfigError::invalid_override("LEDGER_WEB_SHELL", shell, e)),
            }
        }
        if let Some(policy) = lookup("LEDGER_WEB_NOT_FOUND") {
            match policy.parse() {
                Ok(p) => self.app.not_found = p,
                Err(e) => {
                    rejected.push(ConfigError::invalid_override("LEDGER_WEB_NOT_FOUND", policy, e))
                }
            }
        }

        // Logging overrides
        if let Some(level) = lookup("LEDGER_WEB_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("LEDGER_WEB_LOG_FORMAT") {
            self.logging.format = format;
        }

        rejected
    }
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Ignoring {key}={value:?}: {error}")]
    InvalidOverride {
        key: &'static str,
        value: String,
        error: String,
    },
}

impl ConfigError {
    fn invalid_override(key: &'static str, value: String, error: impl std::fmt::Display) -> Self {
        ConfigError::InvalidOverride {
            key,
            value,
            error: error.to_string(),
        }
    }
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Ledger Web Configuration
#
# Environment variables override these settings:
# - LEDGER_WEB_HOST
# - LEDGER_WEB_PORT
# - LEDGER_WEB_SHELL
# - LEDGER_WEB_NOT_FOUND
# - LEDGER_WEB_LOG_LEVEL
# - LEDGER_WEB_LOG_FORMAT

[server]
# Host to bind to
host = "0.0.0.0"

# Port to listen on
port = 3000

[app]
# App shell to serve: "pages" or "plots"
shell = "plots"

# Unmatched paths: "blank" (empty content, 404) or "redirect-to-root"
not_found = "blank"

[app.font]
family = "Inter"
subsets = ["latin"]

[metadata]
title = "Ledger Analytics"
description = ""
icon = "/favicon.png"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

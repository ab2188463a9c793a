use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use crate::constants;
use crate::error::{CalcError, Result};

/// Service configuration.
///
/// Resolution order, later wins: built-in defaults, `config.toml`, environment
/// (`CALC_*`, optionally from `.env`), command line flags.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `web_calculator=debug`
    pub level: String,
    /// Also write JSON logs to a daily rolling file
    pub file: bool,
    pub dir: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    pub enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: constants::DEFAULT_HOST.to_string(),
            port: constants::DEFAULT_PORT,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: constants::DEFAULT_LOG_DIRECTIVE.to_string(),
            file: false,
            dir: constants::DEFAULT_LOG_DIR.to_string(),
        }
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Config {
    /// Load configuration from `path`, or from `config.toml` when no path is given.
    /// An explicit path must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let default_path = Path::new(constants::DEFAULT_CONFIG_PATH);
                if default_path.exists() {
                    Self::load_from(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CalcError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Apply `CALC_*` overrides from the process environment
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(constants::ENV_HOST) {
            self.server.host = host;
        }
        if let Some(port) = lookup(constants::ENV_PORT) {
            self.server.port = port.trim().parse().map_err(|_| {
                CalcError::Config(format!("{} must be a port number, got '{}'", constants::ENV_PORT, port))
            })?;
        }
        if let Some(level) = lookup(constants::ENV_LOG_LEVEL) {
            self.logging.level = level;
        }
        if let Some(enabled) = lookup(constants::ENV_METRICS_ENABLED) {
            self.metrics.enabled = parse_bool(&enabled).ok_or_else(|| {
                CalcError::Config(format!(
                    "{} must be true or false, got '{}'",
                    constants::ENV_METRICS_ENABLED,
                    enabled
                ))
            })?;
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let addr: SocketAddr = format!("{}:{}", self.server.host, self.server.port).parse()?;
        Ok(addr)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

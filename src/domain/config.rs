//! # Configuration
//!
//! Loads the optional `data/config.yaml` file. Every section has defaults, so a
//! missing file or a partial one is valid; the defaults reproduce the fixed
//! endpoint and weather queries the client has always used.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::strings::logs;

/// How the client talks to the MCP server.
#[derive(Debug, Default, Deserialize, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TransportKind {
    /// Legacy HTTP+SSE: a GET event stream plus POSTed messages.
    #[default]
    Sse,
    StreamableHttp,
}

pub const DEFAULT_CONFIG_PATH: &str = "data/config.yaml";

/// Main application configuration structure.
/// Matches the layout of `data/config.yaml`.
#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub client: ClientConfig,
    pub alerts: AlertsConfig,
    pub forecast: ForecastConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load the configuration from `path`.
    ///
    /// Returns `None` when the file does not exist, so the caller can fall back
    /// to the defaults and report it once logging is up. A file that exists but
    /// cannot be read or parsed is an error.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("{} ({})", logs::CONFIG_READ_ERROR, path.display()))?;
        let config: AppConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("{} ({})", logs::CONFIG_PARSE_ERROR, path.display()))?;
        Ok(Some(config))
    }
}

/// Remote tool server settings.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub transport: TransportKind,
    /// `/sse` stream URL for [`TransportKind::Sse`], the MCP endpoint otherwise.
    pub endpoint: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            transport: TransportKind::default(),
            endpoint: default_endpoint(),
        }
    }
}

fn default_endpoint() -> String {
    "http://localhost:8000/sse".to_string()
}

/// Identity announced to the server during the initialize handshake.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    pub name: String,
    pub version: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// The weather alerts invocation.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AlertsConfig {
    pub tool: String,
    /// Two-letter US state code.
    pub state: String,
}

impl Default for AlertsConfig {
    fn default() -> Self {
        Self {
            tool: "get_weather_alerts".to_string(),
            state: "CA".to_string(),
        }
    }
}

/// The weather forecast invocation.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ForecastConfig {
    pub tool: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            tool: "get_weather_forecast".to_string(),
            latitude: 34.05,
            longitude: -118.25,
        }
    }
}

#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Optional log file; cleared at startup.
    pub file: Option<String>,
    /// Filter used when `RUST_LOG` is not set.
    pub filter: Option<String>,
}

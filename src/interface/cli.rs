use clap::Parser;
use std::path::PathBuf;

use crate::domain::config::{AppConfig, DEFAULT_CONFIG_PATH, TransportKind};

/// Query an MCP weather server for alerts and a forecast.
#[derive(Debug, Parser)]
#[command(name = "weather-client", version)]
pub struct CliArgs {
    /// Path to the YAML config file (optional; defaults apply when absent)
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Transport to the MCP server, overrides `server.transport`
    #[arg(long, value_enum)]
    pub transport: Option<TransportKind>,

    /// MCP server endpoint, overrides `server.endpoint`
    #[arg(long)]
    pub endpoint: Option<String>,

    /// State code for the alerts query
    #[arg(long)]
    pub state: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    pub latitude: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    pub longitude: Option<f64>,
}

impl CliArgs {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(transport) = self.transport {
            config.server.transport = transport;
        }
        if let Some(endpoint) = &self.endpoint {
            config.server.endpoint = endpoint.clone();
        }
        if let Some(state) = &self.state {
            config.alerts.state = state.clone();
        }
        if let Some(latitude) = self.latitude {
            config.forecast.latitude = latitude;
        }
        if let Some(longitude) = self.longitude {
            config.forecast.longitude = longitude;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = CliArgs::try_parse_from(["weather-client"]).unwrap();
        assert_eq!(args.config, PathBuf::from("data/config.yaml"));

        let mut config = AppConfig::default();
        args.apply(&mut config);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_overrides_win() {
        let args = CliArgs::try_parse_from([
            "weather-client",
            "--config",
            "/etc/weather.yaml",
            "--transport",
            "streamable-http",
            "--endpoint",
            "http://10.0.0.5:8000/mcp",
            "--state",
            "TX",
            "--latitude",
            "29.76",
            "--longitude",
            "-95.37",
        ])
        .unwrap();

        let mut config = AppConfig::default();
        args.apply(&mut config);

        assert_eq!(args.config, PathBuf::from("/etc/weather.yaml"));
        assert_eq!(config.server.transport, TransportKind::StreamableHttp);
        assert_eq!(config.server.endpoint, "http://10.0.0.5:8000/mcp");
        assert_eq!(config.alerts.state, "TX");
        assert_eq!(config.forecast.latitude, 29.76);
        assert_eq!(config.forecast.longitude, -95.37);
        assert_eq!(config.forecast.tool, "get_weather_forecast");
    }

    #[test]
    fn test_rejects_unknown_transport() {
        assert!(CliArgs::try_parse_from(["weather-client", "--transport", "websocket"]).is_err());
    }

    #[test]
    fn test_rejects_non_numeric_coordinates() {
        assert!(CliArgs::try_parse_from(["weather-client", "--latitude", "north"]).is_err());
    }
}

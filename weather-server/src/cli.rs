use clap::Parser;
use std::path::PathBuf;
use weather_core::Config;

/// Command-line overrides for the server.
#[derive(Debug, Parser)]
#[command(name = "weather-server", version, about = "Weather proxy server")]
pub struct Cli {
    /// Interface to bind, overriding config.
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind, overriding config.
    #[arg(long)]
    pub port: Option<u16>,

    /// Explicit config file path (defaults to the platform config dir).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Fold flag overrides into a loaded configuration.
    pub fn apply(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let cli = Cli {
            host: Some("127.0.0.1".to_string()),
            port: Some(9999),
            config: None,
        };
        let mut config = Config::default();

        cli.apply(&mut config);

        assert_eq!(config.bind_addr(), "127.0.0.1:9999");
    }

    #[test]
    fn absent_flags_leave_config_untouched() {
        let cli = Cli {
            host: None,
            port: None,
            config: None,
        };
        let mut config = Config::default();

        cli.apply(&mut config);

        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
    }
}

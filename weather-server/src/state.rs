use anyhow::{Context, Result};
use weather_core::{Config, OpenWeatherClient};

/// Immutable per-process state shared by all handlers.
///
/// Built once at startup and cloned per request; there is no shared mutable
/// state. When no credential is configured the upstream client is absent and
/// the proxy route answers with a configuration error instead.
#[derive(Debug, Clone)]
pub struct AppState {
    pub weather: Option<OpenWeatherClient>,
}

impl AppState {
    /// Build state from configuration, constructing the upstream client once.
    pub fn from_config(config: &Config) -> Result<Self> {
        let weather = match config.credential() {
            Some(key) => Some(
                OpenWeatherClient::new(
                    key.clone(),
                    config.upstream_url.clone(),
                    config.upstream_timeout(),
                )
                .context("Failed to build upstream HTTP client")?,
            ),
            None => None,
        };

        Ok(Self { weather })
    }
}

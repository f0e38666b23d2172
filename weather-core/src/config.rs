use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

/// Default upstream current-weather endpoint.
pub const DEFAULT_UPSTREAM_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Environment variable holding the upstream credential.
pub const ENV_API_KEY: &str = "OPENWEATHER_API_KEY";
/// Environment override for the bind host.
pub const ENV_HOST: &str = "WEATHER_HOST";
/// Environment override for the bind port.
pub const ENV_PORT: &str = "WEATHER_PORT";
/// Environment override for the upstream endpoint URL.
pub const ENV_UPSTREAM_URL: &str = "WEATHER_UPSTREAM_URL";
/// Environment override for the upstream timeout, in seconds.
pub const ENV_UPSTREAM_TIMEOUT_SECS: &str = "WEATHER_UPSTREAM_TIMEOUT_SECS";

/// Upstream API credential.
///
/// Held server-side only. `Debug` is redacted and the type implements
/// neither `Display` nor `Serialize`, so the key cannot end up in a response
/// body or a log line by accident.
#[derive(Clone, Deserialize)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Raw key, for building the upstream query only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Top-level configuration.
///
/// Resolution order, lowest to highest: built-in defaults, optional TOML
/// config file, process environment.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// OpenWeather API key. The server starts without one, but the proxy
    /// route answers 500 until it is set.
    pub api_key: Option<ApiKey>,

    /// Interface the HTTP server binds to.
    pub host: String,

    /// Port the HTTP server binds to.
    pub port: u16,

    /// Upstream current-weather endpoint.
    pub upstream_url: String,

    /// Upper bound on a single upstream request, in seconds.
    pub upstream_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            host: "0.0.0.0".to_string(),
            port: 5000,
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            upstream_timeout_secs: 10,
        }
    }
}

impl Config {
    /// Load config from the default file location if it exists, then apply
    /// environment overrides.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        let cfg = if path.exists() {
            Self::load_file(&path)?
        } else {
            Self::default()
        };
        cfg.with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Load config from an explicit file, then apply environment overrides.
    pub fn load_from(path: &Path) -> Result<Self> {
        Self::load_file(path)?.with_env_overrides(|key| std::env::var(key).ok())
    }

    fn load_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Apply environment overrides through a lookup function.
    ///
    /// The lookup is consulted once per known variable name; `None` leaves
    /// the current value in place.
    pub fn with_env_overrides<F>(mut self, get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = get(ENV_API_KEY) {
            self.api_key = Some(ApiKey::new(key));
        }
        if let Some(host) = get(ENV_HOST) {
            self.host = host;
        }
        if let Some(port) = get(ENV_PORT) {
            self.port = port
                .parse()
                .with_context(|| format!("{ENV_PORT} is not a valid port: {port}"))?;
        }
        if let Some(url) = get(ENV_UPSTREAM_URL) {
            self.upstream_url = url;
        }
        if let Some(secs) = get(ENV_UPSTREAM_TIMEOUT_SECS) {
            self.upstream_timeout_secs = secs.parse().with_context(|| {
                format!("{ENV_UPSTREAM_TIMEOUT_SECS} is not a valid duration: {secs}")
            })?;
        }

        Ok(self)
    }

    /// Returns the credential, treating a blank key as unset.
    pub fn credential(&self) -> Option<&ApiKey> {
        self.api_key
            .as_ref()
            .filter(|key| !key.expose().trim().is_empty())
    }

    /// Address the HTTP server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Upper bound on a single upstream request.
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-proxy", "weather-server")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

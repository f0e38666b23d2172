//! Core library for the weather proxy.
//!
//! This crate defines:
//! - Configuration & credential handling
//! - The OpenWeather upstream client
//! - The fetch error taxonomy shared with the HTTP layer
//!
//! It is used by `weather-server`, but can also be reused by other binaries.

pub mod config;
pub mod error;
pub mod model;
pub mod openweather;

pub use config::{ApiKey, Config};
pub use error::FetchError;
pub use model::{LogicalStatus, UpstreamEnvelope, WeatherQuery};
pub use openweather::OpenWeatherClient;

//! HTTP front end for the weather proxy.
//!
//! Routing, the proxy handler, error-to-response mapping, and the embedded
//! browser frontend live here; upstream and configuration logic come from
//! `weather-core`.

pub mod app;
pub mod cli;
pub mod error;
pub mod handlers;
pub mod state;

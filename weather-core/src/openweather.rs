use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    config::ApiKey,
    error::FetchError,
    model::{LogicalStatus, UpstreamEnvelope},
};

/// Client for the OpenWeather current-weather endpoint.
///
/// Holds the server-side credential. The credential never appears in
/// returned errors: transport errors are stripped of their URL, which
/// carries the `appid` query parameter.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: ApiKey,
    base_url: String,
    http: Client,
}

impl OpenWeatherClient {
    /// Build a client with a request-level timeout.
    pub fn new(
        api_key: ApiKey,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            api_key,
            base_url: base_url.into(),
            http,
        })
    }

    /// Fetch current weather for `city` and return the payload unmodified.
    ///
    /// Logical errors embedded in an HTTP-200 payload (`cod` other than 200)
    /// are surfaced as [`FetchError`] variants just like transport failures.
    pub async fn current_weather(&self, city: &str) -> Result<Value, FetchError> {
        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.expose()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(classify_send_error)?;

        let status = res.status();
        let body = res.text().await.map_err(classify_send_error)?;

        if !status.is_success() {
            warn!(%status, body = %truncate_body(&body), "upstream request failed");
            return Err(FetchError::Http { status });
        }

        let payload: Value = serde_json::from_str(&body).map_err(|err| {
            warn!(error = %err, body = %truncate_body(&body), "upstream body is not valid JSON");
            FetchError::InvalidPayload(err)
        })?;

        let envelope = UpstreamEnvelope::deserialize(&payload).map_err(|err| {
            warn!(error = %err, body = %truncate_body(&body), "upstream status field is malformed");
            FetchError::InvalidPayload(err)
        })?;

        match envelope.cod {
            Some(cod) if cod == LogicalStatus::NOT_FOUND => {
                debug!(city, "upstream reports unknown city");
                Err(FetchError::NotFound {
                    city: city.to_string(),
                })
            }
            Some(cod) if cod != LogicalStatus::OK => {
                let message = envelope
                    .message
                    .unwrap_or_else(|| "Unknown error".to_string());
                warn!(cod = cod.0, %message, "upstream reported an error");
                Err(FetchError::Upstream { message })
            }
            _ => Ok(payload),
        }
    }
}

/// Classify a failed send into the timeout/connect/other taxonomy.
fn classify_send_error(err: reqwest::Error) -> FetchError {
    // The request URL carries the credential as a query parameter; strip it
    // before the error is logged or wrapped.
    let err = err.without_url();

    if err.is_timeout() {
        warn!(error = %err, "upstream request timed out");
        FetchError::Timeout
    } else if err.is_connect() {
        warn!(error = %err, "failed to connect to upstream");
        FetchError::Connect
    } else {
        warn!(error = %err, "upstream transport error");
        FetchError::Transport(err)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}

use axum::Json;
use axum::extract::{Query, State};
use serde_json::Value;
use tracing::{error, info};
use weather_core::WeatherQuery;

use crate::{error::ApiError, state::AppState};

/// `GET /api/weather?city=<name>`: the proxy endpoint.
///
/// Validates the query, forwards to the upstream with the server-held
/// credential, and passes the upstream payload through on success. Every
/// failure maps onto the fixed status/message table in [`ApiError`].
pub async fn weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Result<Json<Value>, ApiError> {
    let Some(city) = query.city() else {
        return Err(ApiError::MissingCity);
    };

    let Some(client) = &state.weather else {
        // Diagnostic for operators; the caller only sees a generic message.
        error!("weather request rejected: no upstream API key is configured");
        return Err(ApiError::MissingApiKey);
    };

    info!(city, "proxying weather request");
    let payload = client.current_weather(city).await?;

    Ok(Json(payload))
}

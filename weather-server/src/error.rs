//! Client-facing failure mapping.
//!
//! Every failure category has a fixed HTTP status and a fixed, generic
//! message; upstream detail never crosses this boundary except the
//! client-supplied city name and the upstream's own application-level
//! message text.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use weather_core::FetchError;

/// Failure for the proxy routes.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The `city` query parameter was absent or blank.
    #[error("city name is required")]
    MissingCity,

    /// The server started without an upstream credential.
    #[error("upstream API key is not configured")]
    MissingApiKey,

    /// The upstream fetch failed; see [`FetchError`] for the taxonomy.
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// JSON body for every failed response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            Self::MissingCity => (
                StatusCode::BAD_REQUEST,
                "City name is required".to_string(),
            ),
            Self::MissingApiKey => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Server configuration error: API key missing.".to_string(),
            ),
            Self::Fetch(FetchError::NotFound { city }) => {
                (StatusCode::NOT_FOUND, format!("City '{city}' not found."))
            }
            Self::Fetch(FetchError::Upstream { message }) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("OpenWeatherMap API error: {message}"),
            ),
            Self::Fetch(FetchError::Http { .. }) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error fetching weather data. Please try again later.".to_string(),
            ),
            Self::Fetch(FetchError::Connect) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Network error. Please check your internet connection.".to_string(),
            ),
            Self::Fetch(FetchError::Timeout) => (
                StatusCode::GATEWAY_TIMEOUT,
                "Request timed out. Please try again.".to_string(),
            ),
            Self::Fetch(FetchError::Transport(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An unexpected error occurred.".to_string(),
            ),
            Self::Fetch(FetchError::InvalidPayload(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Invalid response from weather service.".to_string(),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

use thiserror::Error;

/// Failure taxonomy for a single upstream fetch.
///
/// Every variant maps to exactly one client-facing response category in the
/// HTTP layer; raw upstream detail stays in server-side logs.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The upstream request exceeded the configured timeout.
    #[error("upstream request timed out")]
    Timeout,

    /// A connection to the upstream could not be established.
    #[error("failed to connect to upstream")]
    Connect,

    /// Any other transport-level failure while sending or reading.
    #[error("upstream transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The upstream answered with a non-success HTTP status.
    #[error("upstream returned HTTP {status}")]
    Http { status: reqwest::StatusCode },

    /// The upstream body was not valid JSON, or its logical status field
    /// was malformed.
    #[error("upstream returned an invalid payload")]
    InvalidPayload(#[source] serde_json::Error),

    /// The upstream reported that the requested city does not exist.
    #[error("city '{city}' not found")]
    NotFound { city: String },

    /// The upstream reported an application-level error.
    #[error("upstream error: {message}")]
    Upstream { message: String },
}

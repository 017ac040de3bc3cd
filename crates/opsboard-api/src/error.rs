// ── API error types ──
//
// Transport-layer errors from opsboard-api. Consumers that want a
// domain-level view (opsboard-core) translate these at their boundary;
// nothing here knows about widgets or layouts.

use thiserror::Error;

/// Unified error type for the API crate.
#[derive(Debug, Error)]
pub enum Error {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("TLS setup failed: {0}")]
    Tls(String),

    /// The backend answered, but with a non-success result envelope or
    /// an HTTP error status.
    #[error("backend rejected request: {message}")]
    Api {
        message: String,
        /// Backend result code (e.g. "DASHBOARD_NOT_FOUND").
        code: Option<String>,
        /// HTTP status code, when the rejection came from the HTTP layer.
        status: Option<u16>,
    },

    #[error("response body did not match the expected shape: {message}")]
    Deserialization { message: String, body: String },
}

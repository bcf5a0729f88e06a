//! Upstream client error types.

/// Errors from the upstream HTTP client.
///
/// `Http`, `Status`, `Json` and `NotAnObject` describe a single host's
/// failure. The client falls through to the next host on any of them and
/// only reports `Unavailable` once every host has failed.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// HTTP request failed (connection refused, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Host answered with a non-success status code
    #[error("API error {status}")]
    Status { status: u16 },

    /// Response body was not valid JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Response body was valid JSON but not an object
    #[error("expected a JSON object, got {kind}")]
    NotAnObject { kind: &'static str },

    /// Every configured host failed; carries the last host's failure
    #[error("all upstream hosts failed, last was {host}: {last}")]
    Unavailable {
        host: String,
        #[source]
        last: Box<UpstreamError>,
    },

    /// A JSON object arrived but an entry inside it has the wrong shape
    #[error("unexpected upstream payload: {message}")]
    Payload { message: String },

    /// Client cannot be used as configured
    #[error("not configured: {0}")]
    NotConfigured(String),
}

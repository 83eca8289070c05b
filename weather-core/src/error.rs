use thiserror::Error;

/// Failures of a single upstream call.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// No API key configured. Operator action needed.
    #[error("OPENWEATHER_API_KEY is missing")]
    MissingApiKey,

    /// The request never got an HTTP answer (DNS, connect, TLS, timeout).
    #[error("Upstream error: {0}")]
    Unavailable(String),

    /// Upstream answered with a non-success status; passed through verbatim.
    #[error("Upstream responded with status {status}")]
    Status { status: u16, body: String },

    /// Upstream answered 2xx but the body is not JSON.
    #[error("Upstream returned a malformed body: {0}")]
    MalformedBody(String),
}

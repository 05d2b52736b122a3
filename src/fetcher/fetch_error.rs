use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP client setup failed: {0}")]
    Client(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Upstream returned HTTP {status} for {url}")]
    Status { status: u16, url: String },
    #[error("Could not decode page at offset {offset}: {message}")]
    Decode { offset: usize, message: String },
}

impl FetchError {
    /// Failures worth retrying: transport hiccups, rate limits and 5xx.
    /// A page that decodes badly will decode badly again.
    pub fn is_transient(&self) -> bool {
        match self {
            FetchError::Network(_) => true,
            FetchError::Status { status, .. } => *status == 429 || *status >= 500,
            FetchError::Client(_) | FetchError::Decode { .. } => false,
        }
    }
}

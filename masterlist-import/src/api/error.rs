//! Errors raised by the remote store

/// Failure of a single store request
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.)
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The store answered with a non-2xx status
    #[error("store returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    /// The record could not be encoded as JSON
    #[error("failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),
}

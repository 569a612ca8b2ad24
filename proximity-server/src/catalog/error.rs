//! Catalog source error types.

/// Errors that can occur when fetching the station catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream rejected the request
    #[error("unauthorized by the station catalog endpoint")]
    Unauthorized,

    /// Endpoint returned an error status
    #[error("catalog endpoint error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}

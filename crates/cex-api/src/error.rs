//! Remote Data Service client errors

use thiserror::Error;

/// Errors returned by a [`CountryService`](crate::CountryService)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The configured base URL cannot be used for requests
    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    /// 404 from the service
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other non-success status
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// The body was not the JSON shape we expect
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Connection, TLS or timeout failure
    #[error("Network error: {0}")]
    Network(String),
}

impl ApiError {
    pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<ApiError> for cex_core::Error {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidUrl { url, reason } => cex_core::Error::invalid_api_url(url, reason),
            other => cex_core::Error::api(other.to_string()),
        }
    }
}

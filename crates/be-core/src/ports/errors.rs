use thiserror::Error;

/// Failure of a single page request.
///
/// A fetch error never implies partial success: the caller must treat the
/// page as not received.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BreweryFetchError {
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected status code: {0}")]
    Status(u16),

    #[error("failed to decode page: {0}")]
    Decode(String),
}

impl BreweryFetchError {
    /// Transient failures that are worth another attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout(_) | Self::Network(_))
    }
}

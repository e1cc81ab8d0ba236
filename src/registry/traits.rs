//! Trait abstraction for the identifier registry to enable mocking in tests

use async_trait::async_trait;

/// Answer of a uniqueness lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckResponse {
    pub exists: bool,
}

/// The lookup could not be completed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("registry unreachable: {0}")]
    Unavailable(String),
    #[error("registry returned an unexpected response: {0}")]
    BadResponse(String),
}

/// Uniqueness lookup for catalog identifiers
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentifierCheck: Send + Sync {
    /// Report whether `identifier` is already taken
    async fn check(&self, identifier: &str) -> Result<CheckResponse, TransportError>;
}

//! Domain error types for hierarchy operations.

use thiserror::Error;

/// Domain-specific errors for hierarchy operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Depth limit exceeded during hierarchy traversal.
    #[error("depth limit exceeded (max: {max_depth})")]
    DepthLimitExceeded { max_depth: u32 },

    /// Timeout during a hierarchy operation.
    #[error("timeout after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    /// Storage collaborator failure, passed through unchanged.
    #[error("storage failure: {source}")]
    Storage {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl DomainError {
    /// Wraps a storage collaborator error without altering it.
    pub fn storage(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        DomainError::Storage {
            source: Box::new(source),
        }
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

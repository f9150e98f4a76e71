//! Storage error types.

use rsgroups_domain::Id;
use thiserror::Error;

/// Storage-specific errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Group not found.
    #[error("group not found: {group_id}")]
    GroupNotFound { group_id: Id },

    /// Group already exists.
    #[error("group already exists: {group_id}")]
    GroupAlreadyExists { group_id: Id },

    /// A write would make a group its own ancestor.
    #[error("placing group {group_id} under {parent_id} would create a cycle")]
    HierarchyCycle { group_id: Id, parent_id: Id },
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

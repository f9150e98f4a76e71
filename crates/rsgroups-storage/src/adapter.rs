//! Adapter that bridges the storage layer to the domain layer.
//!
//! The domain crate defines `GroupReader`, the narrow read interface its
//! resolver consumes. This module implements it on top of any
//! `GroupStore`, passing storage failures through unchanged.

use std::sync::Arc;

use async_trait::async_trait;

use rsgroups_domain::error::{DomainError, DomainResult};
use rsgroups_domain::resolver::GroupReader;
use rsgroups_domain::Id;

use crate::error::StorageError;
use crate::traits::GroupStore;

/// Adapter that implements `GroupReader` using a `GroupStore`.
pub struct StoreGroupReader<S: GroupStore> {
    store: Arc<S>,
}

impl<S: GroupStore> StoreGroupReader<S> {
    /// Creates a new adapter wrapping the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: GroupStore> GroupReader for StoreGroupReader<S> {
    async fn root_group_ids(&self) -> DomainResult<Vec<Id>> {
        self.store
            .root_group_ids()
            .await
            .map_err(DomainError::storage)
    }

    async fn child_group_ids(&self, parent: Id) -> DomainResult<Vec<Id>> {
        self.store
            .child_group_ids(parent)
            .await
            .map_err(DomainError::storage)
    }

    async fn direct_user_group_ids(&self, user: Id) -> DomainResult<Vec<Id>> {
        self.store
            .direct_user_group_ids(user)
            .await
            .map_err(DomainError::storage)
    }

    async fn group_display_name(&self, group: Id) -> DomainResult<Option<String>> {
        match self.store.group(group).await {
            Ok(record) => Ok(Some(record.name)),
            Err(StorageError::GroupNotFound { .. }) => Ok(None),
            Err(e) => Err(DomainError::storage(e)),
        }
    }
}

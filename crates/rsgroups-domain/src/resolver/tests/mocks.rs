//! Mock implementations for resolver testing.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{DomainError, DomainResult};
use crate::model::Id;
use crate::resolver::GroupReader;

/// Simulated storage collaborator failure.
#[derive(Debug, thiserror::Error)]
#[error("simulated storage outage")]
pub(crate) struct Outage;

/// Mock group reader for testing.
///
/// Hierarchy fixtures are stored verbatim, so cyclic or otherwise
/// malformed relations can be expressed directly.
pub(crate) struct MockGroupReader {
    roots: RwLock<Vec<Id>>,
    children: RwLock<HashMap<Id, Vec<Id>>>,
    memberships: RwLock<HashMap<Id, Vec<Id>>>,
    names: RwLock<HashMap<Id, String>>,
    outage: RwLock<bool>,
    delay: RwLock<Option<Duration>>,
}

impl MockGroupReader {
    pub(crate) fn new() -> Self {
        Self {
            roots: RwLock::new(Vec::new()),
            children: RwLock::new(HashMap::new()),
            memberships: RwLock::new(HashMap::new()),
            names: RwLock::new(HashMap::new()),
            outage: RwLock::new(false),
            delay: RwLock::new(None),
        }
    }

    pub(crate) async fn add_root(&self, id: u64) {
        self.roots.write().await.push(Id::new(id));
    }

    pub(crate) async fn add_child(&self, parent: u64, child: u64) {
        self.children
            .write()
            .await
            .entry(Id::new(parent))
            .or_default()
            .push(Id::new(child));
    }

    pub(crate) async fn assign(&self, user: u64, group: u64) {
        self.memberships
            .write()
            .await
            .entry(Id::new(user))
            .or_default()
            .push(Id::new(group));
    }

    pub(crate) async fn set_name(&self, id: u64, name: &str) {
        self.names.write().await.insert(Id::new(id), name.to_string());
    }

    /// Makes every subsequent query fail.
    pub(crate) async fn fail_all(&self) {
        *self.outage.write().await = true;
    }

    /// Adds a fixed delay before every query.
    pub(crate) async fn set_delay(&self, delay: Duration) {
        *self.delay.write().await = Some(delay);
    }

    async fn gate(&self) -> DomainResult<()> {
        let delay = *self.delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if *self.outage.read().await {
            return Err(DomainError::storage(Outage));
        }
        Ok(())
    }
}

#[async_trait]
impl GroupReader for MockGroupReader {
    async fn root_group_ids(&self) -> DomainResult<Vec<Id>> {
        self.gate().await?;
        Ok(self.roots.read().await.clone())
    }

    async fn child_group_ids(&self, parent: Id) -> DomainResult<Vec<Id>> {
        self.gate().await?;
        Ok(self
            .children
            .read()
            .await
            .get(&parent)
            .cloned()
            .unwrap_or_default())
    }

    async fn direct_user_group_ids(&self, user: Id) -> DomainResult<Vec<Id>> {
        self.gate().await?;
        Ok(self
            .memberships
            .read()
            .await
            .get(&user)
            .cloned()
            .unwrap_or_default())
    }

    async fn group_display_name(&self, group: Id) -> DomainResult<Option<String>> {
        self.gate().await?;
        Ok(self.names.read().await.get(&group).cloned())
    }
}

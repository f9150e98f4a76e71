//! Trait for storage operations needed by the resolver.

use async_trait::async_trait;

use crate::error::DomainResult;
use crate::model::Id;

/// Trait for the read-only group storage queries needed by the resolver.
///
/// Every method reflects a snapshot of storage at the time the individual
/// query executes; no cross-query transactional consistency is promised.
#[async_trait]
pub trait GroupReader: Send + Sync {
    /// Ids of groups without a parent, in stored order.
    async fn root_group_ids(&self) -> DomainResult<Vec<Id>>;

    /// Direct children of `parent`, in stored order.
    async fn child_group_ids(&self, parent: Id) -> DomainResult<Vec<Id>>;

    /// Groups the user is directly assigned to, in assignment order.
    async fn direct_user_group_ids(&self, user: Id) -> DomainResult<Vec<Id>>;

    /// Display name for a group, or `None` when the group does not exist.
    async fn group_display_name(&self, group: Id) -> DomainResult<Option<String>>;
}

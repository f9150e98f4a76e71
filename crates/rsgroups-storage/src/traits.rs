//! GroupStore trait definition.

use async_trait::async_trait;

use rsgroups_domain::Id;

use crate::error::StorageResult;

/// A stored group row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRecord {
    pub id: Id,
    pub name: String,
    /// Parent group, `None` for a root group.
    pub parent_id: Option<Id>,
}

impl GroupRecord {
    /// Creates a new group record.
    pub fn new(id: Id, name: impl Into<String>, parent_id: Option<Id>) -> Self {
        Self {
            id,
            name: name.into(),
            parent_id,
        }
    }
}

/// Abstract read interface over group hierarchy storage.
///
/// Implementations must be thread-safe (Send + Sync) and are solely
/// responsible for their own consistency guarantees; the hierarchy must
/// stay acyclic on every write.
#[async_trait]
pub trait GroupStore: Send + Sync + 'static {
    /// Ids of groups without a parent, in stored order.
    async fn root_group_ids(&self) -> StorageResult<Vec<Id>>;

    /// Direct children of `parent`, in stored order.
    async fn child_group_ids(&self, parent: Id) -> StorageResult<Vec<Id>>;

    /// Groups a user is directly assigned to, in assignment order.
    async fn direct_user_group_ids(&self, user: Id) -> StorageResult<Vec<Id>>;

    /// Reads a single group record.
    async fn group(&self, id: Id) -> StorageResult<GroupRecord>;
}

//! In-memory storage implementation.
//!
//! Backs the hierarchy with `DashMap` for thread-safe concurrent access.
//! Root and child orderings are insertion-ordered `Vec`s, since stored
//! order is part of the read contract.

use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::instrument;

use rsgroups_domain::Id;

use crate::error::{StorageError, StorageResult};
use crate::traits::{GroupRecord, GroupStore};

/// In-memory implementation of `GroupStore`.
///
/// Every write keeps the hierarchy acyclic: a reparent that would make a
/// group its own ancestor is refused. Reads reflect whatever snapshot the
/// individual query observes.
#[derive(Debug, Default)]
pub struct MemoryGroupStore {
    groups: DashMap<Id, GroupRecord>,
    /// Direct children per parent, in insertion order.
    children: DashMap<Id, Vec<Id>>,
    /// Root group ids in insertion order.
    roots: RwLock<Vec<Id>>,
    /// Direct group assignments per user, in assignment order.
    memberships: DashMap<Id, Vec<Id>>,
}

impl MemoryGroupStore {
    /// Creates a new in-memory group store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new in-memory group store wrapped in Arc.
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Inserts a new group. The parent, when given, must already exist.
    #[instrument(skip(self, record), fields(group_id = %record.id))]
    pub fn add_group(&self, record: GroupRecord) -> StorageResult<()> {
        if let Some(parent) = record.parent_id {
            if !self.groups.contains_key(&parent) {
                return Err(StorageError::GroupNotFound { group_id: parent });
            }
        }

        let id = record.id;
        let parent_id = record.parent_id;
        match self.groups.entry(id) {
            Entry::Occupied(_) => {
                return Err(StorageError::GroupAlreadyExists { group_id: id });
            }
            Entry::Vacant(entry) => {
                entry.insert(record);
            }
        }

        match parent_id {
            Some(parent) => self.children.entry(parent).or_default().push(id),
            None => self
                .roots
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .push(id),
        }
        Ok(())
    }

    /// Moves a group under a new parent (or to the root level).
    ///
    /// Refuses a reparent that would make the group its own ancestor.
    #[instrument(skip(self))]
    pub fn set_parent(&self, group: Id, new_parent: Option<Id>) -> StorageResult<()> {
        if !self.groups.contains_key(&group) {
            return Err(StorageError::GroupNotFound { group_id: group });
        }

        if let Some(parent) = new_parent {
            if !self.groups.contains_key(&parent) {
                return Err(StorageError::GroupNotFound { group_id: parent });
            }
            // Walk up from the new parent; the chain is acyclic because
            // every prior write went through this same guard.
            let mut cursor = Some(parent);
            while let Some(current) = cursor {
                if current == group {
                    return Err(StorageError::HierarchyCycle {
                        group_id: group,
                        parent_id: parent,
                    });
                }
                cursor = self.groups.get(&current).and_then(|r| r.parent_id);
            }
        }

        let old_parent = self.groups.get(&group).and_then(|r| r.parent_id);
        if old_parent == new_parent {
            return Ok(());
        }

        match old_parent {
            Some(parent) => {
                if let Some(mut siblings) = self.children.get_mut(&parent) {
                    siblings.retain(|&child| child != group);
                }
            }
            None => self
                .roots
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .retain(|&root| root != group),
        }

        match new_parent {
            Some(parent) => self.children.entry(parent).or_default().push(group),
            None => self
                .roots
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .push(group),
        }

        if let Some(mut record) = self.groups.get_mut(&group) {
            record.parent_id = new_parent;
        }
        Ok(())
    }

    /// Assigns a user to a group. Re-assigning is a no-op.
    #[instrument(skip(self))]
    pub fn assign(&self, user: Id, group: Id) -> StorageResult<()> {
        if !self.groups.contains_key(&group) {
            return Err(StorageError::GroupNotFound { group_id: group });
        }
        let mut groups = self.memberships.entry(user).or_default();
        if !groups.contains(&group) {
            groups.push(group);
        }
        Ok(())
    }

    /// Removes a user's direct assignment to a group, if present.
    #[instrument(skip(self))]
    pub fn unassign(&self, user: Id, group: Id) {
        if let Some(mut groups) = self.memberships.get_mut(&user) {
            groups.retain(|&g| g != group);
        }
    }
}

#[async_trait]
impl GroupStore for MemoryGroupStore {
    async fn root_group_ids(&self) -> StorageResult<Vec<Id>> {
        Ok(self
            .roots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    async fn child_group_ids(&self, parent: Id) -> StorageResult<Vec<Id>> {
        Ok(self
            .children
            .get(&parent)
            .map(|children| children.clone())
            .unwrap_or_default())
    }

    async fn direct_user_group_ids(&self, user: Id) -> StorageResult<Vec<Id>> {
        Ok(self
            .memberships
            .get(&user)
            .map(|groups| groups.clone())
            .unwrap_or_default())
    }

    async fn group(&self, id: Id) -> StorageResult<GroupRecord> {
        self.groups
            .get(&id)
            .map(|record| record.clone())
            .ok_or(StorageError::GroupNotFound { group_id: id })
    }
}

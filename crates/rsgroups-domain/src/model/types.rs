//! Group, capability, and tree snapshot types.

use super::Id;

/// A group in the permission hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub id: Id,
    /// Display name, used for ordering and rendering.
    pub name: String,
    /// Parent group, `None` for a root group.
    pub parent_id: Option<Id>,
}

impl Group {
    /// Creates a new group.
    pub fn new(id: Id, name: impl Into<String>, parent_id: Option<Id>) -> Self {
        Self {
            id,
            name: name.into(),
            parent_id,
        }
    }
}

/// A named permission associated with a group.
///
/// Ownership is not modeled here beyond comparison; the name may be absent
/// when the backing record is malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capability {
    pub id: Id,
    pub name: Option<String>,
}

impl Capability {
    /// Creates a new capability.
    pub fn new(id: Id, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
        }
    }

    /// Creates a capability whose name could not be resolved.
    pub fn unnamed(id: Id) -> Self {
        Self { id, name: None }
    }
}

/// An insertion-ordered forest snapshot of the group hierarchy.
///
/// Each entry maps a group id to the tree of its children. Snapshots are
/// built fresh per request from storage state and never mutated in place
/// once returned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupTree {
    nodes: Vec<GroupNode>,
}

/// A single node in a [`GroupTree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupNode {
    id: Id,
    children: GroupTree,
}

impl GroupNode {
    /// The group id of this node.
    pub fn id(&self) -> Id {
        self.id
    }

    /// The subtree of this node's children.
    pub fn children(&self) -> &GroupTree {
        &self.children
    }
}

impl GroupTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the tree has no entries at this level.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of entries at this level.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Appends a childless entry and returns its (empty) child tree for
    /// further population.
    pub fn insert(&mut self, id: Id) -> &mut GroupTree {
        self.nodes.push(GroupNode {
            id,
            children: GroupTree::new(),
        });
        &mut self
            .nodes
            .last_mut()
            .expect("nodes cannot be empty after push")
            .children
    }

    /// Looks up the child tree of an entry at this level.
    pub fn get(&self, id: Id) -> Option<&GroupTree> {
        self.nodes
            .iter()
            .find(|node| node.id == id)
            .map(|node| &node.children)
    }

    /// Returns true when an entry with `id` exists at this level.
    pub fn contains(&self, id: Id) -> bool {
        self.nodes.iter().any(|node| node.id == id)
    }

    /// Iterates entries at this level in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, GroupNode> {
        self.nodes.iter()
    }
}

impl<'a> IntoIterator for &'a GroupTree {
    type Item = &'a GroupNode;
    type IntoIter = std::slice::Iter<'a, GroupNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tree_is_empty() {
        let tree = GroupTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
    }

    #[test]
    fn insert_preserves_insertion_order() {
        let mut tree = GroupTree::new();
        tree.insert(Id::new(3));
        tree.insert(Id::new(1));
        tree.insert(Id::new(2));

        let ids: Vec<Id> = tree.iter().map(|node| node.id()).collect();
        assert_eq!(ids, vec![Id::new(3), Id::new(1), Id::new(2)]);
    }

    #[test]
    fn insert_returns_child_tree_for_population() {
        let mut tree = GroupTree::new();
        let children = tree.insert(Id::new(1));
        children.insert(Id::new(2));

        let nested = tree.get(Id::new(1)).unwrap();
        assert_eq!(nested.len(), 1);
        assert!(nested.contains(Id::new(2)));
        assert!(nested.get(Id::new(2)).unwrap().is_empty());
    }

    #[test]
    fn get_misses_on_unknown_id() {
        let mut tree = GroupTree::new();
        tree.insert(Id::new(1));
        assert!(tree.get(Id::new(9)).is_none());
        assert!(!tree.contains(Id::new(9)));
    }
}

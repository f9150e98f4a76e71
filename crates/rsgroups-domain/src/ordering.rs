//! Name-based ordering for groups and capabilities.
//!
//! Entities of the same kind order lexicographically by name; entities of
//! different or unrecognized kinds compare as equal so that stable sorts
//! leave their relative order untouched.

use std::cmp::Ordering;

use crate::model::{Capability, Group};

/// Name used when ordering an entity.
pub trait SortName {
    /// The name this entity sorts under.
    fn sort_name(&self) -> &str;
}

impl SortName for Group {
    fn sort_name(&self) -> &str {
        &self.name
    }
}

impl SortName for Capability {
    /// A missing or malformed capability name sorts as the empty string.
    fn sort_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

/// An entity participating in presentation ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entity {
    Group(Group),
    Capability(Capability),
    /// Anything the ordering does not recognize.
    Other,
}

impl From<Group> for Entity {
    fn from(group: Group) -> Self {
        Entity::Group(group)
    }
}

impl From<Capability> for Entity {
    fn from(capability: Capability) -> Self {
        Entity::Capability(capability)
    }
}

/// Compares two entities for presentation ordering.
///
/// Defined only for entities of the same kind; mismatched kinds are
/// incomparable by policy and yield `Ordering::Equal`. Never fails.
pub fn compare(a: &Entity, b: &Entity) -> Ordering {
    match (a, b) {
        (Entity::Group(a), Entity::Group(b)) => a.sort_name().cmp(b.sort_name()),
        (Entity::Capability(a), Entity::Capability(b)) => a.sort_name().cmp(b.sort_name()),
        _ => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Id;

    fn group(id: u64, name: &str) -> Entity {
        Entity::Group(Group::new(Id::new(id), name, None))
    }

    fn capability(id: u64, name: &str) -> Entity {
        Entity::Capability(Capability::new(Id::new(id), name))
    }

    #[test]
    fn groups_order_by_name() {
        assert_eq!(compare(&group(1, "admins"), &group(2, "editors")), Ordering::Less);
        assert_eq!(compare(&group(1, "editors"), &group(2, "admins")), Ordering::Greater);
        assert_eq!(compare(&group(1, "admins"), &group(2, "admins")), Ordering::Equal);
    }

    #[test]
    fn capabilities_order_by_name() {
        assert_eq!(
            compare(&capability(1, "delete_posts"), &capability(2, "edit_posts")),
            Ordering::Less
        );
    }

    #[test]
    fn unnamed_capability_sorts_as_empty_string() {
        let unnamed = Entity::Capability(Capability::unnamed(Id::new(1)));
        assert_eq!(compare(&unnamed, &capability(2, "edit_posts")), Ordering::Less);
        let also_unnamed = Entity::Capability(Capability::unnamed(Id::new(3)));
        assert_eq!(compare(&unnamed, &also_unnamed), Ordering::Equal);
    }

    #[test]
    fn mismatched_kinds_compare_equal() {
        assert_eq!(compare(&group(1, "admins"), &capability(2, "edit_posts")), Ordering::Equal);
        assert_eq!(compare(&capability(2, "edit_posts"), &group(1, "admins")), Ordering::Equal);
        assert_eq!(compare(&Entity::Other, &group(1, "admins")), Ordering::Equal);
        assert_eq!(compare(&Entity::Other, &Entity::Other), Ordering::Equal);
    }

    #[test]
    fn compare_is_symmetric_in_sign() {
        let pairs = [
            (group(1, "admins"), group(2, "editors")),
            (capability(1, "a"), capability(2, "b")),
            (group(1, "admins"), capability(2, "edit_posts")),
        ];
        for (a, b) in &pairs {
            assert_eq!(compare(a, b), compare(b, a).reverse());
        }
    }

    #[test]
    fn sorting_groups_orders_by_display_name() {
        let mut entities = vec![
            group(1, "editors"),
            group(2, "admins"),
            group(3, "moderators"),
        ];
        entities.sort_by(compare);
        assert_eq!(
            entities,
            vec![
                group(2, "admins"),
                group(1, "editors"),
                group(3, "moderators"),
            ]
        );
    }
}

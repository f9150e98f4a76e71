//! Result types for the hierarchy resolver.

use crate::model::{GroupTree, Id};

/// Result of building a forest snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeSnapshot {
    /// The assembled forest, roots at the top level.
    pub tree: GroupTree,
    /// True when a visited-set guard stopped one or more branches early.
    pub cycle_detected: bool,
}

/// Result of a descendant or user-group expansion.
///
/// Order and multiplicity are exactly as produced by the traversal; callers
/// needing set semantics must post-process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion {
    /// Expanded group ids in discovery order.
    pub ids: Vec<Id>,
    /// True when a visited-set guard stopped one or more branches early.
    pub cycle_detected: bool,
}

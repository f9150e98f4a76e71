//! Hierarchy resolver for group trees and descendant expansion.
//!
//! The resolver performs async traversal of the group forest held by an
//! external storage collaborator to build tree snapshots, expand subtrees,
//! and resolve a user's effective groups.
//!
//! # Design
//!
//! - **Cycle containment**: every traversal tracks visited group ids. A
//!   re-visit stops that branch, is logged, and surfaces as a
//!   `cycle_detected` flag on the partial result; sibling branches are
//!   unaffected.
//! - **Depth limiting**: traversal deeper than `ResolverConfig::max_depth`
//!   fails with `DepthLimitExceeded` to bound pathological hierarchies.
//! - **Deadlines**: no timeout is imposed by default; when
//!   `ResolverConfig::timeout` is set, each public operation is bounded
//!   and exceeding it fails with `Timeout`.

mod config;
mod context;
mod hierarchy_resolver;
mod traits;
mod types;

pub use config::ResolverConfig;
pub use hierarchy_resolver::HierarchyResolver;
pub use traits::GroupReader;
pub use types::{Expansion, TreeSnapshot};

#[cfg(test)]
mod tests;

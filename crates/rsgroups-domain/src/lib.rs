//! rsgroups-domain: Core group hierarchy logic
//!
//! This crate contains the core group/permission hierarchy logic including:
//! - Identifier validation and entity types
//! - Hierarchy resolver for tree construction and descendant expansion
//! - Name-based ordering for groups and capabilities
//! - Nested-list rendering of group trees
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │               rsgroups-domain                │
//! ├─────────────────────────────────────────────┤
//! │  model/      - Ids, groups, tree snapshots  │
//! │  resolver/   - Hierarchy traversal engine   │
//! │  ordering    - Entity comparison            │
//! │  render      - Nested list output           │
//! └─────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod model;
pub mod ordering;
pub mod render;
pub mod resolver;

// Re-export commonly used types at the crate root
pub use error::{DomainError, DomainResult};
pub use model::{Capability, Group, GroupNode, GroupTree, Id};
pub use resolver::{Expansion, GroupReader, HierarchyResolver, ResolverConfig, TreeSnapshot};

//! Entity types for the group hierarchy.

mod ident;
mod types;

pub use ident::Id;
pub use types::{Capability, Group, GroupNode, GroupTree};

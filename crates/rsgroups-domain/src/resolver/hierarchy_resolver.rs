//! Traversal engine over the group forest.

use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use futures::future::try_join_all;
use tokio::time::timeout;
use tracing::warn;

use crate::error::{DomainError, DomainResult};
use crate::model::{GroupTree, Id};

use super::config::ResolverConfig;
use super::context::TraversalState;
use super::traits::GroupReader;
use super::types::{Expansion, TreeSnapshot};

/// Type alias for boxed future to handle async recursion.
type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Hierarchy resolver over an external group store.
///
/// Builds forest snapshots, expands subtrees, and resolves a user's
/// effective groups. The resolver holds no mutable state of its own and may
/// be shared freely between concurrent callers.
pub struct HierarchyResolver<R> {
    reader: Arc<R>,
    config: ResolverConfig,
}

impl<R> HierarchyResolver<R>
where
    R: GroupReader + 'static,
{
    /// Creates a new resolver with default configuration.
    pub fn new(reader: Arc<R>) -> Self {
        Self {
            reader,
            config: ResolverConfig::default(),
        }
    }

    /// Creates a new resolver with custom configuration.
    pub fn with_config(reader: Arc<R>, config: ResolverConfig) -> Self {
        Self { reader, config }
    }

    /// Builds a fresh forest snapshot from storage state.
    ///
    /// Proceeds level by level: root groups first, then each frontier
    /// node's direct children, fetched exactly once per node. An empty
    /// store yields an empty tree. A group encountered twice is skipped
    /// and reported through [`TreeSnapshot::cycle_detected`].
    pub async fn build_tree(&self) -> DomainResult<TreeSnapshot> {
        self.with_deadline(self.assemble_tree()).await
    }

    /// Expands the full descendant set of `group`, depth-first pre-order.
    ///
    /// The result never contains `group` itself. For a well-formed forest
    /// each descendant appears exactly once; a re-visited group stops that
    /// branch and sets [`Expansion::cycle_detected`], leaving sibling
    /// branches intact.
    pub async fn descendant_ids(&self, group: Id) -> DomainResult<Expansion> {
        self.with_deadline(self.expand_descendants(group)).await
    }

    /// Resolves every group `user` effectively belongs to.
    ///
    /// Emits each directly-assigned group in its stored order, immediately
    /// followed by that group's full descendant expansion. Duplicates
    /// across direct groups are preserved; callers needing set semantics
    /// must post-process.
    pub async fn expand_user_groups(&self, user: Id) -> DomainResult<Expansion> {
        self.with_deadline(async {
            let direct = self.reader.direct_user_group_ids(user).await?;

            // Expansions are independent per direct group, so they run
            // concurrently; emitted order stays the direct-group order.
            let expansions =
                try_join_all(direct.iter().map(|&group| self.expand_descendants(group))).await?;

            let mut result = Expansion::default();
            for (group, expansion) in direct.into_iter().zip(expansions) {
                result.ids.push(group);
                result.ids.extend(expansion.ids);
                result.cycle_detected |= expansion.cycle_detected;
            }
            Ok(result)
        })
        .await
    }

    async fn assemble_tree(&self) -> DomainResult<TreeSnapshot> {
        let roots = self.reader.root_group_ids().await?;

        let mut visited: HashSet<Id> = HashSet::new();
        let mut cycle_detected = false;
        let mut top = Vec::with_capacity(roots.len());
        for root in roots {
            if !visited.insert(root) {
                warn!(group = root.value(), "root group listed twice, skipping");
                cycle_detected = true;
                continue;
            }
            top.push(root);
        }

        // One level of the frontier at a time; each node's children are
        // fetched exactly once.
        let mut children_of: HashMap<Id, Vec<Id>> = HashMap::new();
        let mut frontier = top.clone();
        let mut depth = 0u32;
        while !frontier.is_empty() {
            if depth >= self.config.max_depth {
                return Err(DomainError::DepthLimitExceeded {
                    max_depth: self.config.max_depth,
                });
            }

            let fetched = try_join_all(
                frontier
                    .iter()
                    .map(|&parent| self.reader.child_group_ids(parent)),
            )
            .await?;

            let mut next = Vec::new();
            for (&parent, children) in frontier.iter().zip(fetched) {
                let mut kept = Vec::with_capacity(children.len());
                for child in children {
                    if !visited.insert(child) {
                        warn!(
                            group = child.value(),
                            parent = parent.value(),
                            "group revisited while building tree, skipping branch"
                        );
                        cycle_detected = true;
                        continue;
                    }
                    kept.push(child);
                    next.push(child);
                }
                children_of.insert(parent, kept);
            }
            frontier = next;
            depth += 1;
        }

        let mut tree = GroupTree::new();
        attach_children(&mut tree, &top, &children_of);
        Ok(TreeSnapshot {
            tree,
            cycle_detected,
        })
    }

    async fn expand_descendants(&self, group: Id) -> DomainResult<Expansion> {
        let mut state = TraversalState::rooted_at(group);
        self.collect_descendants(group, 0, &mut state).await?;
        Ok(Expansion {
            ids: state.ids,
            cycle_detected: state.cycle_detected,
        })
    }

    /// Depth-first pre-order collection (boxed for recursion).
    fn collect_descendants<'a>(
        &'a self,
        group: Id,
        depth: u32,
        state: &'a mut TraversalState,
    ) -> BoxFuture<'a, DomainResult<()>> {
        Box::pin(async move {
            if depth >= self.config.max_depth {
                return Err(DomainError::DepthLimitExceeded {
                    max_depth: self.config.max_depth,
                });
            }

            let children = self.reader.child_group_ids(group).await?;
            for child in children {
                if !state.mark_visited(child) {
                    warn!(
                        group = child.value(),
                        parent = group.value(),
                        "group revisited while expanding descendants, skipping branch"
                    );
                    state.cycle_detected = true;
                    continue;
                }
                state.ids.push(child);
                self.collect_descendants(child, depth + 1, state).await?;
            }
            Ok(())
        })
    }

    async fn with_deadline<T>(
        &self,
        operation: impl Future<Output = DomainResult<T>>,
    ) -> DomainResult<T> {
        match self.config.timeout {
            Some(limit) => match timeout(limit, operation).await {
                Ok(result) => result,
                Err(_) => Err(DomainError::Timeout {
                    duration_ms: limit.as_millis() as u64,
                }),
            },
            None => operation.await,
        }
    }
}

/// Assembles the nested tree from the adjacency gathered during traversal.
fn attach_children(tree: &mut GroupTree, ids: &[Id], children_of: &HashMap<Id, Vec<Id>>) {
    for &id in ids {
        let subtree = tree.insert(id);
        if let Some(children) = children_of.get(&id) {
            attach_children(subtree, children, children_of);
        }
    }
}

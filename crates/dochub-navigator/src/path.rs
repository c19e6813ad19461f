//! Breadcrumb path derivation.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::warn;

use dochub_core::types::NodeId;
use dochub_entity::breadcrumb::{BreadcrumbEntry, BreadcrumbPath};
use dochub_entity::node::DocumentNode;
use dochub_entity::repository::DocumentRepository;

/// Derives root-to-leaf breadcrumb paths by walking `parent_id` links.
///
/// The backend does not guarantee the parent graph is acyclic, so the walk
/// is bounded: a depth cap and a visited-id set both terminate it. A walk
/// cut short — by the cap, a cycle, or a failed parent lookup — keeps the
/// progress made so far and returns the partial path with
/// `complete == false` instead of erroring.
#[derive(Debug, Clone)]
pub struct PathBuilder {
    repository: Arc<dyn DocumentRepository>,
    max_depth: usize,
}

impl PathBuilder {
    /// Create a path builder with the given hop cap.
    pub fn new(repository: Arc<dyn DocumentRepository>, max_depth: usize) -> Self {
        Self {
            repository,
            max_depth,
        }
    }

    /// Build the breadcrumb path from the root down to `node`.
    ///
    /// The synthetic root entry comes first and `node` itself is the last
    /// entry.
    pub async fn build_path(&self, node: &DocumentNode) -> BreadcrumbPath {
        // Collected leaf-first, reversed at the end.
        let mut entries = vec![BreadcrumbEntry::from_node(node)];
        let mut visited: HashSet<NodeId> = HashSet::from([node.id.clone()]);
        let mut parent_ref = node.parent_id.clone();
        let mut complete = true;

        while let Some(parent_id) = parent_ref {
            if entries.len() > self.max_depth {
                warn!(
                    node_id = %node.id,
                    max_depth = self.max_depth,
                    "Breadcrumb walk hit depth cap, truncating path"
                );
                complete = false;
                break;
            }

            let parent = match self.repository.get_by_id(&parent_id).await {
                Ok(parent) => parent,
                Err(e) => {
                    warn!(
                        node_id = %node.id,
                        parent_id = %parent_id,
                        error = %e,
                        "Ancestor lookup failed, keeping partial path"
                    );
                    complete = false;
                    break;
                }
            };

            if !visited.insert(parent.id.clone()) {
                warn!(
                    node_id = %node.id,
                    repeated_id = %parent.id,
                    "Cycle in parent chain, truncating path"
                );
                complete = false;
                break;
            }

            parent_ref = parent.parent_id.clone();
            entries.push(BreadcrumbEntry::from_node(&parent));
        }

        entries.push(BreadcrumbEntry::root());
        entries.reverse();
        BreadcrumbPath { entries, complete }
    }

    /// Collect the ids of every ancestor of `node`, nearest-first.
    ///
    /// Returns `(ids, complete)`; `complete == false` carries the same
    /// meaning as in [`build_path`](Self::build_path).
    pub async fn ancestor_ids(&self, node: &DocumentNode) -> (Vec<NodeId>, bool) {
        let path = self.build_path(node).await;
        let ids = path
            .entries
            .iter()
            .rev()
            .skip(1) // `node` itself
            .filter_map(|entry| entry.id.clone())
            .collect();
        (ids, path.complete)
    }
}

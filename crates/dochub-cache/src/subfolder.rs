//! Subfolder listing cache with coalescing reads.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use futures::future::join_all;
use moka::future::Cache;
use tracing::{debug, warn};

use dochub_core::error::AppError;
use dochub_core::result::AppResult;
use dochub_core::types::NodeId;
use dochub_entity::node::DocumentNode;
use dochub_entity::repository::{ChildFilter, DocumentRepository};

use crate::key::SubfolderKey;

/// Memoizes child listings per folder for the lifetime of a navigation
/// session.
///
/// Concurrent [`get_children`](Self::get_children) calls for the same
/// folder share a single underlying repository fetch (moka guarantees
/// at-most-one in-flight init per key), so hover prefetch and explicit
/// navigation cannot issue duplicate backend calls. Failed fetches are
/// not cached.
#[derive(Debug, Clone)]
pub struct SubfolderCache {
    repository: Arc<dyn DocumentRepository>,
    listings: Cache<SubfolderKey, Arc<Vec<DocumentNode>>>,
}

impl SubfolderCache {
    /// Create a cache over the given repository.
    pub fn new(repository: Arc<dyn DocumentRepository>, max_capacity: u64) -> Self {
        Self {
            repository,
            listings: Cache::builder().max_capacity(max_capacity).build(),
        }
    }

    /// Return the child folders of `parent`, fetching on first access.
    ///
    /// `parent == None` lists root-level folders. The returned listing is
    /// shared, in backend order.
    pub async fn get_children(
        &self,
        parent: Option<&NodeId>,
    ) -> AppResult<Arc<Vec<DocumentNode>>> {
        let key = SubfolderKey::from_parent(parent);
        let repository = Arc::clone(&self.repository);

        self.listings
            .try_get_with(key.clone(), async move {
                debug!(parent = key.parent().map(|p| p.as_str()), "Cache miss, fetching children");
                repository
                    .list_children(key.parent(), ChildFilter::ContainersOnly)
                    .await
                    .map(Arc::new)
            })
            .await
            .map_err(|e: Arc<AppError>| (*e).clone())
    }

    /// Return the cached listing for `parent` without fetching.
    ///
    /// Used for "(N subfolders)" badges: absent entries simply render no
    /// badge rather than triggering a foreground fetch.
    pub async fn peek_children(&self, parent: Option<&NodeId>) -> Option<Arc<Vec<DocumentNode>>> {
        self.listings.get(&SubfolderKey::from_parent(parent)).await
    }

    /// Drop the cached listing under `parent`.
    ///
    /// Called after creating a folder under `parent` or after a completed
    /// move changes `parent`'s membership.
    pub async fn invalidate(&self, parent: Option<&NodeId>) {
        debug!(parent = parent.map(|p| p.as_str()), "Invalidating cached listing");
        self.listings
            .invalidate(&SubfolderKey::from_parent(parent))
            .await;
    }

    /// Drop every cached listing.
    pub fn clear(&self) {
        self.listings.invalidate_all();
    }

    /// Pre-populate listings for the subtree under `root`, at most `depth`
    /// levels deep.
    ///
    /// Best-effort background work: sibling folders at each level are
    /// fetched concurrently, recursion into a folder starts only after its
    /// own listing resolves, and failures are logged and swallowed so
    /// warming can never break foreground navigation.
    pub fn warm_subtree<'a>(
        &'a self,
        root: Option<&'a NodeId>,
        depth: usize,
    ) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>> {
        Box::pin(async move {
            if depth == 0 {
                return;
            }

            let children = match self.get_children(root).await {
                Ok(children) => children,
                Err(e) => {
                    warn!(
                        parent = root.map(|p| p.as_str()),
                        error = %e,
                        "Subtree warming fetch failed"
                    );
                    return;
                }
            };

            if depth == 1 {
                return;
            }

            let warms = children
                .iter()
                .filter(|child| child.is_container())
                .map(|child| self.warm_subtree(Some(&child.id), depth - 1));
            join_all(warms).await;
        })
    }
}

//! Shared test fixture: an in-memory document tree with failure injection.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use dashmap::{DashMap, DashSet};

use dochub_core::config::AppConfig;
use dochub_core::error::AppError;
use dochub_core::result::AppResult;
use dochub_core::types::NodeId;
use dochub_entity::node::{CreateDocument, DocumentNode, NodeType};
use dochub_entity::repository::{ChildFilter, DocumentRepository};

/// In-memory [`DocumentRepository`] with call counters and injectable
/// failures.
#[derive(Debug, Default)]
pub struct FakeRepository {
    nodes: DashMap<NodeId, DocumentNode>,
    /// Ids whose `get_by_id` returns `NotFound` even though callers hold
    /// a stale reference (simulates concurrent deletion).
    missing: DashSet<NodeId>,
    /// Listing keys (parent id, or `"<root>"`) that fail with a network
    /// error.
    broken_listings: DashSet<String>,
    list_calls: AtomicUsize,
    get_calls: AtomicUsize,
    created: AtomicUsize,
}

impl FakeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn add(&self, id: &str, title: &str, node_type: NodeType, parent: Option<&str>) -> DocumentNode {
        let node = DocumentNode {
            id: NodeId::new(id),
            title: title.to_string(),
            node_type,
            parent_id: parent.map(NodeId::new),
            created_at: None,
            updated_at: None,
        };
        self.nodes.insert(node.id.clone(), node.clone());
        node
    }

    pub fn add_folder(&self, id: &str, title: &str, parent: Option<&str>) -> DocumentNode {
        self.add(id, title, NodeType::Folder, parent)
    }

    pub fn add_file(&self, id: &str, title: &str, parent: Option<&str>) -> DocumentNode {
        self.add(id, title, NodeType::File, parent)
    }

    pub fn add_audit_schedule(&self, id: &str, title: &str, parent: Option<&str>) -> DocumentNode {
        self.add(id, title, NodeType::AuditSchedule, parent)
    }

    /// Make `get_by_id(id)` fail with `NotFound` from now on.
    pub fn mark_missing(&self, id: &str) {
        self.missing.insert(NodeId::new(id));
    }

    /// Make listings under `parent` fail with a network error.
    pub fn break_listing(&self, parent: Option<&str>) {
        self.broken_listings.insert(listing_key(parent));
    }

    /// Let listings under `parent` succeed again.
    pub fn fix_listing(&self, parent: Option<&str>) {
        self.broken_listings.remove(&listing_key(parent));
    }

    pub fn list_call_count(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn get_call_count(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }
}

fn listing_key(parent: Option<&str>) -> String {
    parent.unwrap_or("<root>").to_string()
}

#[async_trait]
impl DocumentRepository for FakeRepository {
    async fn get_by_id(&self, id: &NodeId) -> AppResult<DocumentNode> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        if self.missing.contains(id) {
            return Err(AppError::not_found(format!("No document {id}")));
        }
        self.nodes
            .get(id)
            .map(|entry| entry.clone())
            .ok_or_else(|| AppError::not_found(format!("No document {id}")))
    }

    async fn list_children(
        &self,
        parent: Option<&NodeId>,
        filter: ChildFilter,
    ) -> AppResult<Vec<DocumentNode>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self
            .broken_listings
            .contains(&listing_key(parent.map(|p| p.as_str())))
        {
            return Err(AppError::network("listing endpoint unreachable"));
        }

        let mut children: Vec<DocumentNode> = self
            .nodes
            .iter()
            .map(|entry| entry.clone())
            .filter(|node| node.parent_id.as_ref() == parent && filter.matches(node))
            .collect();
        children.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(children)
    }

    async fn create(&self, data: &CreateDocument) -> AppResult<DocumentNode> {
        let seq = self.created.fetch_add(1, Ordering::SeqCst);
        let node = DocumentNode {
            id: NodeId::new(format!("created-{seq}")),
            title: data.title.clone(),
            node_type: data.node_type,
            parent_id: data.parent_id.clone(),
            created_at: None,
            updated_at: None,
        };
        self.nodes.insert(node.id.clone(), node.clone());
        Ok(node)
    }

    async fn move_to(&self, id: &NodeId, new_parent: Option<&NodeId>) -> AppResult<DocumentNode> {
        let mut node = self
            .nodes
            .get_mut(id)
            .ok_or_else(|| AppError::not_found(format!("No document {id}")))?;
        node.parent_id = new_parent.cloned();
        Ok(node.clone())
    }
}

/// Config with warming disabled so listing call counts stay deterministic.
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.navigator.warm_depth = 0;
    config
}

/// The scenario-A tree: `Root -> Engineering -> Policies -> doc`, with an
/// extra sibling folder and a file to exercise filtering.
pub fn build_standard_tree(repo: &FakeRepository) -> DocumentNode {
    repo.add_folder("eng", "Engineering", None);
    repo.add_folder("ops", "Operations", None);
    repo.add_folder("pol", "Policies", Some("eng"));
    repo.add_folder("arch", "Archive", Some("pol"));
    repo.add_audit_schedule("aud", "Yearly Audits", Some("pol"));
    repo.add_file("readme", "Readme", Some("pol"));
    repo.add_file("doc", "Welding Procedure", Some("pol"))
}

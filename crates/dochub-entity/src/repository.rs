//! Repository trait for Document API access.

use async_trait::async_trait;

use dochub_core::result::AppResult;
use dochub_core::types::NodeId;

use crate::node::{CreateDocument, DocumentNode, NodeType};

/// Filter applied when listing the children of a folder.
///
/// The default filter returns only container nodes (folders and audit
/// schedules), which is what the move dialog browses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChildFilter {
    /// Only nodes that can themselves hold children.
    #[default]
    ContainersOnly,
    /// Every immediate child regardless of type.
    All,
    /// Only children of one specific type.
    OfType(NodeType),
}

impl ChildFilter {
    /// Whether a node passes this filter.
    pub fn matches(self, node: &DocumentNode) -> bool {
        match self {
            Self::ContainersOnly => node.is_container(),
            Self::All => true,
            Self::OfType(node_type) => node.node_type == node_type,
        }
    }
}

/// Access to the external Document API.
///
/// This is the seam between the navigation layer and the transport: the
/// HTTP implementation lives in `dochub-client`, and tests substitute an
/// in-memory tree. Implementations perform network I/O only — no caching
/// (that is the subfolder cache's responsibility) and no retries (the
/// caller owns retry policy).
#[async_trait]
pub trait DocumentRepository: Send + Sync + std::fmt::Debug + 'static {
    /// Fetch a single node by id.
    ///
    /// Fails with `NotFound` if the node does not exist and `Network` on
    /// transport failure (including client-initiated abort).
    async fn get_by_id(&self, id: &NodeId) -> AppResult<DocumentNode>;

    /// Fetch the immediate children of `parent`, in backend order.
    ///
    /// `parent == None` lists root-level nodes.
    async fn list_children(
        &self,
        parent: Option<&NodeId>,
        filter: ChildFilter,
    ) -> AppResult<Vec<DocumentNode>>;

    /// Create a new node and return the backend's view of it.
    async fn create(&self, data: &CreateDocument) -> AppResult<DocumentNode>;

    /// Re-parent a node, performing the actual move.
    ///
    /// `new_parent == None` moves the node to the root level.
    async fn move_to(&self, id: &NodeId, new_parent: Option<&NodeId>) -> AppResult<DocumentNode>;
}

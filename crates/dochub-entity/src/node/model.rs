//! Document node entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use dochub_core::types::NodeId;

use super::kind::NodeType;

/// Any addressable entry in the document tree.
///
/// Nodes are read-only projections of backend state fetched on demand;
/// the navigation layer observes them but never mutates them in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentNode {
    /// Unique node identifier.
    pub id: NodeId,
    /// Display name. Non-empty for valid nodes.
    pub title: String,
    /// What kind of entry this is.
    #[serde(rename = "type")]
    pub node_type: NodeType,
    /// Owning folder ID (`None` for root-level nodes).
    #[serde(rename = "parentId")]
    pub parent_id: Option<NodeId>,
    /// When the node was created.
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    /// When the node was last updated.
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl DocumentNode {
    /// Check if this node lives at the root level (no parent).
    pub fn is_root_level(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Check if this node can hold children.
    pub fn is_container(&self) -> bool {
        self.node_type.is_container()
    }
}

/// Data required to create a new document node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDocument {
    /// What kind of entry to create.
    #[serde(rename = "type")]
    pub node_type: NodeType,
    /// Owning folder (`None` for root-level).
    #[serde(rename = "parentId")]
    pub parent_id: Option<NodeId>,
    /// Display name.
    pub title: String,
}

impl CreateDocument {
    /// Convenience constructor for a folder under the given parent.
    pub fn folder(parent_id: Option<NodeId>, title: impl Into<String>) -> Self {
        Self {
            node_type: NodeType::Folder,
            parent_id,
            title: title.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_check() {
        let node = DocumentNode {
            id: NodeId::new("f1"),
            title: "Policies".to_string(),
            node_type: NodeType::Folder,
            parent_id: None,
            created_at: None,
            updated_at: None,
        };
        assert!(node.is_container());
        assert!(node.is_root_level());
    }

    #[test]
    fn test_camel_case_wire_names() {
        let json = serde_json::json!({
            "id": "d1",
            "title": "Q3 Audit",
            "type": "auditSchedule",
            "parentId": "f1"
        });
        let node: DocumentNode = serde_json::from_value(json).unwrap();
        assert_eq!(node.node_type, NodeType::AuditSchedule);
        assert_eq!(node.parent_id, Some(NodeId::new("f1")));
        assert!(node.is_container());
    }
}

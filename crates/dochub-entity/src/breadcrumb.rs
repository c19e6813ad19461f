//! Breadcrumb projections for hierarchical display.

use serde::{Deserialize, Serialize};

use dochub_core::types::NodeId;

use crate::node::DocumentNode;

/// A single entry in a breadcrumb path.
///
/// The synthetic root entry has `id == None`; every other entry projects
/// a real [`DocumentNode`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbEntry {
    /// Node identifier (`None` for the synthetic root).
    pub id: Option<NodeId>,
    /// Display title.
    pub title: String,
}

impl BreadcrumbEntry {
    /// The synthetic root entry.
    pub fn root() -> Self {
        Self {
            id: None,
            title: "Root".to_string(),
        }
    }

    /// Project a document node into a breadcrumb entry.
    pub fn from_node(node: &DocumentNode) -> Self {
        Self {
            id: Some(node.id.clone()),
            title: node.title.clone(),
        }
    }

    /// Whether this is the synthetic root entry.
    pub fn is_root(&self) -> bool {
        self.id.is_none()
    }
}

/// An ordered root-to-current breadcrumb path.
///
/// `complete == false` means the parent-chain walk was cut short (depth
/// cap hit, or an ancestor could not be resolved) and the path shows only
/// the portion that was resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbPath {
    /// Entries, root-first, current-location-last.
    pub entries: Vec<BreadcrumbEntry>,
    /// Whether the full ancestor chain was resolved.
    pub complete: bool,
}

impl BreadcrumbPath {
    /// A path consisting of only the synthetic root entry.
    pub fn root_only() -> Self {
        Self {
            entries: vec![BreadcrumbEntry::root()],
            complete: true,
        }
    }

    /// The entry for the current location (last in the path).
    ///
    /// A path always has at least the root entry, so this only returns
    /// `None` for a malformed empty path.
    pub fn current(&self) -> Option<&BreadcrumbEntry> {
        self.entries.last()
    }

    /// Number of entries including the synthetic root.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the path has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of the entry with the given id, if it appears in the path.
    ///
    /// `id == None` matches the synthetic root entry.
    pub fn position_of(&self, id: Option<&NodeId>) -> Option<usize> {
        self.entries.iter().position(|e| e.id.as_ref() == id)
    }

    /// Truncate the path back to (and including) the entry at `index`.
    pub fn truncate_to(&mut self, index: usize) {
        self.entries.truncate(index + 1);
    }

    /// Append an entry for the given node.
    pub fn push_node(&mut self, node: &DocumentNode) {
        self.entries.push(BreadcrumbEntry::from_node(node));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeType;

    fn folder(id: &str, title: &str, parent: Option<&str>) -> DocumentNode {
        DocumentNode {
            id: NodeId::new(id),
            title: title.to_string(),
            node_type: NodeType::Folder,
            parent_id: parent.map(NodeId::new),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_root_only_path() {
        let path = BreadcrumbPath::root_only();
        assert_eq!(path.len(), 1);
        assert!(path.complete);
        assert!(path.current().unwrap().is_root());
    }

    #[test]
    fn test_truncate_to_ancestor() {
        let mut path = BreadcrumbPath::root_only();
        path.push_node(&folder("eng", "Engineering", None));
        path.push_node(&folder("pol", "Policies", Some("eng")));

        let eng_id = NodeId::new("eng");
        let pos = path.position_of(Some(&eng_id)).unwrap();
        path.truncate_to(pos);

        assert_eq!(path.len(), 2);
        assert_eq!(path.current().unwrap().title, "Engineering");
    }

    #[test]
    fn test_position_of_root() {
        let path = BreadcrumbPath::root_only();
        assert_eq!(path.position_of(None), Some(0));
    }
}

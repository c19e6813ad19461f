//! Cache key construction.
//!
//! Centralising key construction keeps the root sentinel in one place:
//! listings are keyed by the parent folder id, with `None` standing for
//! the root level.

use dochub_core::types::NodeId;

/// Key of a cached child listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubfolderKey(Option<NodeId>);

impl SubfolderKey {
    /// Key for the root-level listing.
    pub fn root() -> Self {
        Self(None)
    }

    /// Key for the listing under a specific folder.
    pub fn folder(id: NodeId) -> Self {
        Self(Some(id))
    }

    /// Build a key from an optional parent reference.
    pub fn from_parent(parent: Option<&NodeId>) -> Self {
        Self(parent.cloned())
    }

    /// The parent folder this key refers to (`None` for root).
    pub fn parent(&self) -> Option<&NodeId> {
        self.0.as_ref()
    }
}

//! Opaque node identifier for the document tree.
//!
//! The Document API issues opaque string identifiers (serialized as `_id`
//! or `id` depending on the endpoint), so `NodeId` wraps a `String` rather
//! than a structured type. Using a newtype prevents accidentally passing a
//! raw title or path where an identifier is expected.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier of a node in the document tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Create an identifier from a raw backend string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Return the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the identifier, returning the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for NodeId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for NodeId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_transparent() {
        let id = NodeId::new("64f1a2b3c4");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"64f1a2b3c4\"");
        let back: NodeId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_display_roundtrip() {
        let id = NodeId::from("doc-42");
        assert_eq!(id.to_string(), "doc-42");
        assert_eq!(id.as_str(), "doc-42");
    }
}

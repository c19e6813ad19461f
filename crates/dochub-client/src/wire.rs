//! Wire types for the Document API.
//!
//! The backend is not consistent about its response shapes: node ids
//! arrive as either `_id` or `id`, and listings arrive either wrapped in a
//! `data` object or with a top-level `documents` array. Everything is
//! normalized here so the rest of the workspace only ever sees
//! [`DocumentNode`].

use chrono::{DateTime, Utc};
use serde::Deserialize;

use dochub_core::types::NodeId;
use dochub_entity::node::{DocumentNode, NodeType};

/// A document node as the backend serializes it.
#[derive(Debug, Clone, Deserialize)]
pub struct WireDocument {
    /// Node id. Some endpoints serialize this as `_id`.
    #[serde(alias = "_id")]
    pub id: NodeId,
    /// Display title.
    pub title: String,
    /// Node type.
    #[serde(rename = "type")]
    pub node_type: NodeType,
    /// Owning folder, absent or null for root-level nodes.
    #[serde(rename = "parentId", default)]
    pub parent_id: Option<NodeId>,
    /// Creation timestamp.
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last-update timestamp.
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<WireDocument> for DocumentNode {
    fn from(wire: WireDocument) -> Self {
        Self {
            id: wire.id,
            title: wire.title,
            node_type: wire.node_type,
            parent_id: wire.parent_id,
            created_at: wire.created_at,
            updated_at: wire.updated_at,
        }
    }
}

/// Envelope for single-node responses.
///
/// `GET /documents/{id}` and `POST /documents` return either the bare
/// node or a `{"document": ...}` wrapper (possibly under `data`).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum NodeEnvelope {
    /// `{"data": {"document": {...}}}`
    DataWrapped {
        /// Inner payload.
        data: NodePayload,
    },
    /// `{"document": {...}}`
    Wrapped {
        /// The node.
        document: WireDocument,
    },
    /// The node with no wrapper at all.
    Bare(WireDocument),
}

/// Inner payload of a `data`-wrapped single-node response.
#[derive(Debug, Deserialize)]
pub struct NodePayload {
    /// The node.
    pub document: WireDocument,
}

impl NodeEnvelope {
    /// Unwrap whichever envelope shape arrived into a [`DocumentNode`].
    pub fn into_node(self) -> DocumentNode {
        match self {
            Self::DataWrapped { data } => data.document.into(),
            Self::Wrapped { document } => document.into(),
            Self::Bare(document) => document.into(),
        }
    }
}

/// Envelope for listing responses.
///
/// `GET /documents?folder=...` returns either `{"data": {"documents":
/// [...]}}` or `{"documents": [...]}` depending on the endpoint version.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope {
    /// `{"data": {"documents": [...]}}`
    DataWrapped {
        /// Inner payload.
        data: ListPayload,
    },
    /// `{"documents": [...]}`
    Flat {
        /// The listing.
        documents: Vec<WireDocument>,
    },
}

/// Inner payload of a `data`-wrapped listing response.
#[derive(Debug, Deserialize)]
pub struct ListPayload {
    /// The listing.
    pub documents: Vec<WireDocument>,
}

impl ListEnvelope {
    /// Unwrap whichever envelope shape arrived, preserving backend order.
    pub fn into_nodes(self) -> Vec<DocumentNode> {
        let documents = match self {
            Self::DataWrapped { data } => data.documents,
            Self::Flat { documents } => documents,
        };
        documents.into_iter().map(DocumentNode::from).collect()
    }
}

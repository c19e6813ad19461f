//! # dochub-entity
//!
//! Domain entity models for DocHub: document tree nodes, breadcrumb
//! projections, and the [`DocumentRepository`] trait that the navigation
//! layer consumes.

pub mod breadcrumb;
pub mod node;
pub mod repository;

pub use breadcrumb::{BreadcrumbEntry, BreadcrumbPath};
pub use node::{CreateDocument, DocumentNode, NodeType};
pub use repository::{ChildFilter, DocumentRepository};

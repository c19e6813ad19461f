//! Document node domain entities.

pub mod kind;
pub mod model;

pub use kind::NodeType;
pub use model::{CreateDocument, DocumentNode};

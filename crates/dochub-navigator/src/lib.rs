//! # dochub-navigator
//!
//! The document-tree navigation engine: breadcrumb path derivation,
//! move-destination validation, and the [`Navigator`] state machine that
//! a move dialog drives.
//!
//! The navigator owns a session-scoped [`dochub_cache::SubfolderCache`]
//! and talks to the backend only through the
//! [`dochub_entity::DocumentRepository`] seam.

pub mod navigator;
pub mod path;
pub mod state;
pub mod validate;

pub use navigator::{Navigator, NavigatorSnapshot};
pub use path::PathBuilder;
pub use state::NavigatorStatus;
pub use validate::DestinationValidator;

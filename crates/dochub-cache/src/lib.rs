//! # dochub-cache
//!
//! Session-scoped memoization of folder child listings.
//!
//! The cache sits between the navigator and the repository: reads for the
//! same folder coalesce to at most one in-flight repository request, and
//! entries are invalidated only by known mutating operations (folder
//! creation, completed moves) — never by time — so behavior stays
//! deterministic and testable.

pub mod key;
pub mod subfolder;

pub use key::SubfolderKey;
pub use subfolder::SubfolderCache;

//! Navigator status machine.

use dochub_core::types::NodeId;

/// The navigator's lifecycle status.
///
/// Transitions: `Idle -> Loading -> Ready` on initialization, `Ready ->
/// Loading -> Ready` on navigation, and `Loading -> Error` when a
/// user-triggered fetch fails. `Error` keeps the failing location so a
/// retry can re-attempt the same fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigatorStatus {
    /// No session started yet, or the session was closed.
    Idle,
    /// A navigation fetch is in flight.
    Loading,
    /// Location, path, and children are current.
    Ready,
    /// The last user-triggered navigation failed.
    Error {
        /// Human-readable failure description.
        message: String,
        /// The location whose listing failed (`None` for root).
        failed_location: Option<NodeId>,
    },
}

impl NavigatorStatus {
    /// Whether the navigator has current data to display.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    /// Whether a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

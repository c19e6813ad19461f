//! Move-destination validation.

use tracing::debug;

use dochub_core::error::AppError;
use dochub_core::result::AppResult;
use dochub_entity::node::DocumentNode;

use crate::path::PathBuilder;

/// Decides whether a candidate folder may receive a document being moved.
///
/// Two moves are always rejected: moving a node into itself, and moving a
/// container into its own subtree. The descendant check verifies the
/// candidate's entire ancestor chain rather than trusting the backend's
/// listing-time exclusion, which only filters one level.
#[derive(Debug, Clone)]
pub struct DestinationValidator {
    path_builder: PathBuilder,
}

impl DestinationValidator {
    /// Create a validator over the given path builder.
    pub fn new(path_builder: PathBuilder) -> Self {
        Self { path_builder }
    }

    /// Check admissibility, returning why a destination is rejected.
    ///
    /// Moving into the document's current parent is admissible here; the
    /// navigator decides whether to surface a no-op move.
    pub async fn validate(
        &self,
        moving: &DocumentNode,
        candidate: &DocumentNode,
    ) -> AppResult<()> {
        if candidate.id == moving.id {
            return Err(AppError::validation(
                "Cannot move a document into itself",
            ));
        }

        if !candidate.is_container() {
            return Err(AppError::validation(format!(
                "'{}' is not a folder",
                candidate.title
            )));
        }

        if moving.is_container() {
            let (ancestors, complete) = self.path_builder.ancestor_ids(candidate).await;

            if ancestors.contains(&moving.id) {
                return Err(AppError::validation(
                    "Cannot move a folder into one of its own descendants",
                ));
            }

            // An unverifiable chain could hide the moving folder. Reject
            // rather than risk creating a cycle.
            if !complete {
                debug!(
                    moving = %moving.id,
                    candidate = %candidate.id,
                    "Candidate ancestor chain incomplete, rejecting destination"
                );
                return Err(AppError::validation(
                    "Destination ancestry could not be verified",
                ));
            }
        }

        Ok(())
    }

    /// Boolean form of [`validate`](Self::validate).
    pub async fn is_valid_destination(
        &self,
        moving: &DocumentNode,
        candidate: &DocumentNode,
    ) -> bool {
        self.validate(moving, candidate).await.is_ok()
    }
}

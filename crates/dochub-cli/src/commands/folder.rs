//! Folder mutation commands.

use std::sync::Arc;

use clap::Args;

use dochub_core::config::AppConfig;
use dochub_core::error::AppError;
use dochub_core::types::NodeId;
use dochub_entity::node::CreateDocument;
use dochub_entity::repository::DocumentRepository;
use dochub_navigator::{DestinationValidator, PathBuilder};

use crate::output::{self, OutputFormat};

/// Arguments for `dochub mkdir`
#[derive(Debug, Args)]
pub struct MkdirArgs {
    /// Title of the new folder
    pub title: String,

    /// Parent folder id (omit for the root level)
    #[arg(short, long)]
    pub parent: Option<String>,
}

/// Arguments for `dochub mv`
#[derive(Debug, Args)]
pub struct MvArgs {
    /// Document id to move
    pub id: String,

    /// Destination folder id (omit for the root level)
    #[arg(long)]
    pub to: Option<String>,
}

/// Create a folder.
pub async fn mkdir(
    args: &MkdirArgs,
    repository: Arc<dyn DocumentRepository>,
    format: OutputFormat,
) -> Result<(), AppError> {
    if args.title.trim().is_empty() {
        return Err(AppError::validation("Folder title cannot be empty"));
    }

    let parent = args.parent.as_deref().map(NodeId::from);
    let data = CreateDocument::folder(parent, args.title.trim());
    let created = repository.create(&data).await?;

    output::print_item(&created, format);
    output::print_success(&format!("Created folder '{}' ({})", created.title, created.id));
    Ok(())
}

/// Validate and perform a move.
pub async fn mv(
    args: &MvArgs,
    repository: Arc<dyn DocumentRepository>,
    config: &AppConfig,
) -> Result<(), AppError> {
    let id = NodeId::from(args.id.as_str());
    let moving = repository.get_by_id(&id).await?;

    let destination_id = args.to.as_deref().map(NodeId::from);
    if let Some(destination_id) = &destination_id {
        let destination = repository.get_by_id(destination_id).await?;
        let builder = PathBuilder::new(
            Arc::clone(&repository),
            config.navigator.max_breadcrumb_depth,
        );
        DestinationValidator::new(builder)
            .validate(&moving, &destination)
            .await?;
    }

    let moved = repository.move_to(&id, destination_id.as_ref()).await?;
    output::print_success(&format!(
        "Moved '{}' to {}",
        moved.title,
        args.to.as_deref().unwrap_or("root")
    ));
    Ok(())
}

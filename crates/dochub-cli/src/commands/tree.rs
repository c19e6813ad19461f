//! Read-only tree inspection commands.

use std::sync::Arc;

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use dochub_core::config::AppConfig;
use dochub_core::error::AppError;
use dochub_core::types::NodeId;
use dochub_entity::node::DocumentNode;
use dochub_entity::repository::{ChildFilter, DocumentRepository};
use dochub_navigator::PathBuilder;

use crate::output::{self, OutputFormat};

/// Arguments for `dochub browse`
#[derive(Debug, Args)]
pub struct BrowseArgs {
    /// Folder id to list (omit for the root level)
    pub folder: Option<String>,

    /// Include files and form documents, not just containers
    #[arg(short, long)]
    pub all: bool,
}

/// Arguments for `dochub path`
#[derive(Debug, Args)]
pub struct PathArgs {
    /// Document id to resolve
    pub id: String,
}

/// One row of a `browse` listing
#[derive(Debug, Serialize, Tabled)]
struct NodeRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Type")]
    node_type: String,
}

impl From<&DocumentNode> for NodeRow {
    fn from(node: &DocumentNode) -> Self {
        Self {
            id: node.id.to_string(),
            title: node.title.clone(),
            node_type: node.node_type.to_string(),
        }
    }
}

/// List the children of a folder.
pub async fn browse(
    args: &BrowseArgs,
    repository: Arc<dyn DocumentRepository>,
    _config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let parent = args.folder.as_deref().map(NodeId::from);
    let filter = if args.all {
        ChildFilter::All
    } else {
        ChildFilter::ContainersOnly
    };

    let children = repository.list_children(parent.as_ref(), filter).await?;
    let rows: Vec<NodeRow> = children.iter().map(NodeRow::from).collect();
    output::print_list(&rows, format);
    Ok(())
}

/// Print the breadcrumb path of a document.
pub async fn path(
    args: &PathArgs,
    repository: Arc<dyn DocumentRepository>,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let id = NodeId::from(args.id.as_str());
    let node = repository.get_by_id(&id).await?;

    let builder = PathBuilder::new(repository, config.navigator.max_breadcrumb_depth);
    let path = builder.build_path(&node).await;

    match format {
        OutputFormat::Table => {
            let rendered: Vec<&str> = path.entries.iter().map(|e| e.title.as_str()).collect();
            println!("{}", rendered.join(" / "));
            if !path.complete {
                println!("(path truncated: some ancestors could not be resolved)");
            }
        }
        OutputFormat::Json => output::print_item(&path, format),
    }
    Ok(())
}

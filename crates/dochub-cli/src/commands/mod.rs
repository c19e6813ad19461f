//! CLI command definitions and dispatch.

pub mod folder;
pub mod tree;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use dochub_client::HttpDocumentRepository;
use dochub_core::config::AppConfig;
use dochub_core::error::AppError;
use dochub_entity::repository::DocumentRepository;

use crate::output::OutputFormat;

/// DocHub — document tree navigation over a REST Document API
#[derive(Debug, Parser)]
#[command(name = "dochub", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment (reads config/default.toml + config/<env>.toml)
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// Override the Document API base URL from configuration
    #[arg(long)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the child folders of a folder (or the root)
    Browse(tree::BrowseArgs),
    /// Show the breadcrumb path of a document
    Path(tree::PathArgs),
    /// Create a folder
    Mkdir(folder::MkdirArgs),
    /// Move a document to another folder
    Mv(folder::MvArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = self.load_config()?;
        init_logging(&config);

        let repository: Arc<dyn DocumentRepository> =
            Arc::new(HttpDocumentRepository::new(&config.api)?);

        match &self.command {
            Commands::Browse(args) => tree::browse(args, repository, &config, self.format).await,
            Commands::Path(args) => tree::path(args, repository, &config, self.format).await,
            Commands::Mkdir(args) => folder::mkdir(args, repository, self.format).await,
            Commands::Mv(args) => folder::mv(args, repository, &config).await,
        }
    }

    fn load_config(&self) -> Result<AppConfig, AppError> {
        let mut config = AppConfig::load(&self.env)?;
        if let Some(api_url) = &self.api_url {
            config.api.base_url = api_url.clone();
        }
        Ok(config)
    }
}

/// Initialize tracing. `RUST_LOG` wins over the configured level.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .init();
        }
    }
}

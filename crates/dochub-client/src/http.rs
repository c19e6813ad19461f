//! HTTP repository client for the Document API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::json;
use tracing::debug;

use dochub_core::config::api::ApiConfig;
use dochub_core::error::AppError;
use dochub_core::result::AppResult;
use dochub_core::types::NodeId;
use dochub_entity::node::{CreateDocument, DocumentNode, NodeType};
use dochub_entity::repository::{ChildFilter, DocumentRepository};

use crate::wire::{ListEnvelope, NodeEnvelope};

/// [`DocumentRepository`] implementation over the REST Document API.
///
/// Performs network I/O only: no caching, no retries. Timeouts come from
/// [`ApiConfig`]; cancellation is driven by the caller dropping the future.
#[derive(Debug, Clone)]
pub struct HttpDocumentRepository {
    client: reqwest::Client,
    base_url: String,
    auth_token: Option<String>,
}

impl HttpDocumentRepository {
    /// Build a client from configuration.
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| AppError::with_source(
                dochub_core::error::ErrorKind::Configuration,
                "Failed to build HTTP client",
                e,
            ))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_token: config.auth_token.clone(),
        })
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{path}", self.base_url);
        let builder = self.client.request(method, url);
        match &self.auth_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Map a non-success response into the error taxonomy.
    async fn check_status(response: reqwest::Response) -> AppResult<reqwest::Response> {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(AppError::not_found("Document not found"));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::network(format!(
                "Document API returned {status}: {body}"
            )));
        }
        Ok(response)
    }
}

#[async_trait]
impl DocumentRepository for HttpDocumentRepository {
    async fn get_by_id(&self, id: &NodeId) -> AppResult<DocumentNode> {
        debug!(node_id = %id, "Fetching document");

        let response = self
            .request(reqwest::Method::GET, &format!("/documents/{id}"))
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let envelope: NodeEnvelope = response.json().await?;
        Ok(envelope.into_node())
    }

    async fn list_children(
        &self,
        parent: Option<&NodeId>,
        filter: ChildFilter,
    ) -> AppResult<Vec<DocumentNode>> {
        debug!(parent = parent.map(|p| p.as_str()), ?filter, "Listing children");

        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(parent) = parent {
            query.push(("folder", parent.to_string()));
        }
        match filter {
            // The backend's folder listing also includes audit schedules,
            // which navigate like folders.
            ChildFilter::ContainersOnly => query.push(("type", NodeType::Folder.to_string())),
            ChildFilter::OfType(node_type) => query.push(("type", node_type.to_string())),
            ChildFilter::All => {}
        }

        let response = self
            .request(reqwest::Method::GET, "/documents")
            .query(&query)
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let envelope: ListEnvelope = response.json().await?;
        // Re-apply the filter client-side: the backend's `type` parameter
        // is advisory and older endpoint versions ignore it.
        Ok(envelope
            .into_nodes()
            .into_iter()
            .filter(|node| filter.matches(node))
            .collect())
    }

    async fn create(&self, data: &CreateDocument) -> AppResult<DocumentNode> {
        debug!(title = %data.title, node_type = %data.node_type, "Creating document");

        let response = self
            .request(reqwest::Method::POST, "/documents")
            .json(data)
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let envelope: NodeEnvelope = response.json().await?;
        Ok(envelope.into_node())
    }

    async fn move_to(&self, id: &NodeId, new_parent: Option<&NodeId>) -> AppResult<DocumentNode> {
        debug!(node_id = %id, new_parent = new_parent.map(|p| p.as_str()), "Moving document");

        let body = json!({ "parentId": new_parent });
        let response = self
            .request(reqwest::Method::PATCH, &format!("/documents/{id}"))
            .json(&body)
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let envelope: NodeEnvelope = response.json().await?;
        Ok(envelope.into_node())
    }
}

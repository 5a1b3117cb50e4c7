//! Pinecone vector database integration.
//!
//! Talks to Pinecone's REST API directly:
//!
//! - control plane `GET /indexes/{name}` resolves the index's data-plane host
//!   (skipped when the host is configured),
//! - data plane `POST /query` runs the similarity search.
//!
//! Chunk text is read from each match's metadata under a configurable key
//! (`text` by default, the key LangChain-style ingestion writes).
//!
//! # Example
//!
//! ```rust,ignore
//! use investigator::db::PineconeIndex;
//!
//! let index = PineconeIndex::connect(&config.vector_store, api_key).await?;
//! let chunks = index.search(&query_embedding, 3).await?;
//! ```

use crate::db::vectorstore::VectorIndex;
use crate::types::{AppError, Result, RetrievedChunk};
use crate::utils::config::VectorStoreConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

const API_VERSION_HEADER: &str = "X-Pinecone-API-Version";
const API_VERSION: &str = "2024-07";

/// Pinecone index client bound to one index and namespace.
pub struct PineconeIndex {
    client: Client,
    api_key: String,
    index_name: String,
    host: String,
    namespace: String,
    text_key: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryRequest<'a> {
    vector: &'a [f32],
    top_k: usize,
    include_metadata: bool,
    include_values: bool,
    #[serde(skip_serializing_if = "str::is_empty")]
    namespace: &'a str,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    matches: Vec<QueryMatch>,
}

#[derive(Debug, Deserialize)]
struct QueryMatch {
    id: String,
    #[serde(default)]
    score: f32,
    #[serde(default)]
    metadata: Option<HashMap<String, serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
struct IndexDescription {
    host: String,
}

impl PineconeIndex {
    /// Create a client for a known data-plane host
    pub fn new(
        api_key: impl Into<String>,
        index_name: impl Into<String>,
        host: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            index_name: index_name.into(),
            host: normalize_host(&host.into()),
            namespace: String::new(),
            text_key: "text".to_string(),
        }
    }

    /// Restrict queries to a namespace
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Read chunk text from a different metadata key
    pub fn with_text_key(mut self, text_key: impl Into<String>) -> Self {
        self.text_key = text_key.into();
        self
    }

    /// Build a client from configuration, resolving the host through the
    /// control plane if it isn't configured.
    pub async fn connect(config: &VectorStoreConfig, api_key: &str) -> Result<Self> {
        let host = match &config.index_host {
            Some(host) if !host.trim().is_empty() => host.clone(),
            _ => {
                describe_index_host(
                    &Client::new(),
                    &config.control_plane_url,
                    &config.index_name,
                    api_key,
                )
                .await?
            }
        };

        debug!(index = %config.index_name, host = %host, "Pinecone index resolved");

        Ok(Self::new(api_key, config.index_name.clone(), host)
            .with_namespace(config.namespace.clone())
            .with_text_key(config.text_key.clone()))
    }

    /// Data-plane base URL queries are sent to
    pub fn host(&self) -> &str {
        &self.host
    }
}

/// Ask the control plane where an index's data plane lives
async fn describe_index_host(
    client: &Client,
    control_plane_url: &str,
    index_name: &str,
    api_key: &str,
) -> Result<String> {
    let url = format!(
        "{}/indexes/{}",
        control_plane_url.trim_end_matches('/'),
        index_name
    );

    let response = client
        .get(&url)
        .header("Api-Key", api_key)
        .header(API_VERSION_HEADER, API_VERSION)
        .send()
        .await
        .map_err(|e| AppError::VectorStore(format!("Failed to describe index: {}", e)))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(AppError::VectorStore(format!(
            "Failed to describe index '{}': HTTP {}: {}",
            index_name, status, body
        )));
    }

    let description: IndexDescription = response
        .json()
        .await
        .map_err(|e| AppError::VectorStore(format!("Invalid index description: {}", e)))?;

    Ok(description.host)
}

/// Pinecone reports hosts without a scheme; HTTPS is implied.
fn normalize_host(host: &str) -> String {
    let host = host.trim().trim_end_matches('/');
    if host.starts_with("http://") || host.starts_with("https://") {
        host.to_string()
    } else {
        format!("https://{}", host)
    }
}

#[async_trait]
impl VectorIndex for PineconeIndex {
    async fn search(&self, vector: &[f32], k: usize) -> Result<Vec<RetrievedChunk>> {
        let request = QueryRequest {
            vector,
            top_k: k,
            include_metadata: true,
            include_values: false,
            namespace: &self.namespace,
        };

        let response = self
            .client
            .post(format!("{}/query", self.host))
            .header("Api-Key", &self.api_key)
            .header(API_VERSION_HEADER, API_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::VectorStore(format!("Pinecone query failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::VectorStore(format!(
                "Pinecone query failed: HTTP {}: {}",
                status, body
            )));
        }

        let parsed: QueryResponse = response
            .json()
            .await
            .map_err(|e| AppError::VectorStore(format!("Invalid Pinecone response: {}", e)))?;

        let chunks = parsed
            .matches
            .into_iter()
            .filter_map(|m| {
                let text = m
                    .metadata
                    .as_ref()
                    .and_then(|meta| meta.get(&self.text_key))
                    .and_then(|value| value.as_str())
                    .map(str::to_string);

                match text {
                    Some(text) => Some(RetrievedChunk::new(m.id, text, m.score)),
                    None => {
                        warn!(
                            id = %m.id,
                            text_key = %self.text_key,
                            "Match has no text in metadata, skipping"
                        );
                        None
                    }
                }
            })
            .collect();

        Ok(chunks)
    }

    fn index_name(&self) -> &str {
        &self.index_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_host_adds_https() {
        assert_eq!(
            normalize_host("cases-abc123.svc.us-east-1.pinecone.io"),
            "https://cases-abc123.svc.us-east-1.pinecone.io"
        );
    }

    #[test]
    fn test_normalize_host_keeps_scheme_and_trims_slash() {
        assert_eq!(normalize_host("http://127.0.0.1:9000/"), "http://127.0.0.1:9000");
    }

    #[test]
    fn test_query_request_wire_format() {
        let vector = [0.1_f32, 0.2];
        let request = QueryRequest {
            vector: &vector,
            top_k: 3,
            include_metadata: true,
            include_values: false,
            namespace: "",
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["topK"], 3);
        assert_eq!(json["includeMetadata"], true);
        assert_eq!(json["includeValues"], false);
        assert!(json.get("namespace").is_none());
    }
}

//! # Investigator - Crime-Investigator RAG Chat Server
//!
//! A retrieval-augmented chat backend. Each question is embedded, matched
//! against a Pinecone index of case documents, and answered by a hosted LLM
//! from the three closest chunks.
//!
//! ## Overview
//!
//! Can be used in two ways:
//!
//! 1. **As a standalone server** - Run the `investigator-server` binary
//! 2. **As a library** - Wire the pipeline stages into your own service
//!
//! ### Basic Example
//!
//! ```rust,ignore
//! use investigator::{AppState, InvestigatorConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = InvestigatorConfig::default();
//!     let secrets = config.resolve_secrets()?;
//!     let state = AppState::from_config(&config, &secrets).await?;
//!
//!     let answer = state.pipeline.answer("Who was the suspect?").await?;
//!     println!("{}", answer);
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `local-embeddings` | fastembed sentence-transformer models (default) |
//!
//! ## Modules
//!
//! - [`api`] - REST API handlers and routes
//! - [`db`] - Vector index clients (Pinecone)
//! - [`llm`] - LLM client implementations
//! - [`rag`] - Retrieval, context formatting, prompting
//! - [`types`] - Common types and error handling
//! - [`utils`] - Configuration

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// HTTP API handlers and routes.
pub mod api;
/// Command-line interface.
pub mod cli;
/// Vector index clients.
pub mod db;
/// LLM provider clients and abstractions.
pub mod llm;
/// Retrieval Augmented Generation (RAG) components.
#[allow(missing_docs)]
pub mod rag;
/// Core types (requests, responses, errors).
pub mod types;
/// Configuration utilities.
#[allow(missing_docs)]
pub mod utils;

// Re-export commonly used types
pub use db::{PineconeIndex, VectorIndex};
pub use llm::{LLMClient, OpenAIClient};
pub use rag::{Embedder, PromptTemplate, RagPipeline, Retriever};
pub use types::{AppError, Result};
pub use utils::config::{InvestigatorConfig, Secrets};

use crate::llm::GenerationParams;
use crate::rag::EmbeddingModelKind;
use std::sync::Arc;

/// Application state shared across handlers
///
/// Everything inside is built once at startup and never mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    /// The question-answering pipeline
    pub pipeline: Arc<RagPipeline>,
}

impl AppState {
    /// Wrap an already-built pipeline
    pub fn new(pipeline: RagPipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }

    /// Construct every external client from configuration.
    ///
    /// Fails if the embedding model cannot be loaded or the index cannot be
    /// resolved; the server must not start half-wired.
    pub async fn from_config(config: &InvestigatorConfig, secrets: &Secrets) -> Result<Self> {
        let embedder = build_embedder(config)?;

        let index: Arc<dyn VectorIndex> =
            Arc::new(PineconeIndex::connect(&config.vector_store, &secrets.pinecone_api_key).await?);

        let llm: Arc<dyn LLMClient> = Arc::new(
            OpenAIClient::new(
                secrets.llm_api_key.clone(),
                config.llm.api_base.clone(),
                config.llm.model.clone(),
            )
            .with_params(GenerationParams {
                temperature: config.llm.temperature,
                max_tokens: config.llm.max_tokens,
            }),
        );

        let retriever = Retriever::new(embedder, index);
        Ok(Self::new(RagPipeline::new(
            retriever,
            PromptTemplate::investigator(),
            llm,
        )))
    }
}

#[cfg(feature = "local-embeddings")]
fn build_embedder(config: &InvestigatorConfig) -> Result<Arc<dyn Embedder>> {
    let kind = embedding_kind(config)?;
    let embedder =
        rag::embeddings::FastEmbedder::new(kind, config.embedding.show_download_progress)?;
    Ok(Arc::new(embedder))
}

#[cfg(not(feature = "local-embeddings"))]
fn build_embedder(config: &InvestigatorConfig) -> Result<Arc<dyn Embedder>> {
    let kind = embedding_kind(config)?;
    Err(AppError::Configuration(format!(
        "Embedding model '{}' requires the `local-embeddings` feature",
        kind.name()
    )))
}

fn embedding_kind(config: &InvestigatorConfig) -> Result<EmbeddingModelKind> {
    EmbeddingModelKind::from_name(&config.embedding.model).ok_or_else(|| {
        AppError::Configuration(format!(
            "Unsupported embedding model '{}'",
            config.embedding.model
        ))
    })
}

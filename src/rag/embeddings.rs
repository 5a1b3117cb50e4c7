//! Query embedding.
//!
//! [`Embedder`] is the seam the retriever depends on; [`FastEmbedder`] backs it
//! with a local sentence-transformer model through fastembed.

use crate::types::Result;
use async_trait::async_trait;

/// Converts text into a fixed-dimension vector.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Embed a single piece of text
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Length of every vector this embedder returns
    fn dimension(&self) -> usize;

    /// Identifier of the underlying model
    fn model_name(&self) -> &str;
}

/// Embedding models the server can be configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbeddingModelKind {
    /// `sentence-transformers/all-MiniLM-L6-v2` (default)
    AllMiniLmL6V2,
    /// `sentence-transformers/all-MiniLM-L12-v2`
    AllMiniLmL12V2,
    /// `BAAI/bge-small-en-v1.5`
    BgeSmallEnV15,
}

impl EmbeddingModelKind {
    const ALL: [EmbeddingModelKind; 3] = [
        EmbeddingModelKind::AllMiniLmL6V2,
        EmbeddingModelKind::AllMiniLmL12V2,
        EmbeddingModelKind::BgeSmallEnV15,
    ];

    /// Look up a model by its Hugging Face name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Hugging Face name of the model
    pub fn name(&self) -> &'static str {
        match self {
            EmbeddingModelKind::AllMiniLmL6V2 => "sentence-transformers/all-MiniLM-L6-v2",
            EmbeddingModelKind::AllMiniLmL12V2 => "sentence-transformers/all-MiniLM-L12-v2",
            EmbeddingModelKind::BgeSmallEnV15 => "BAAI/bge-small-en-v1.5",
        }
    }

    /// Output vector length
    pub fn dimension(&self) -> usize {
        match self {
            EmbeddingModelKind::AllMiniLmL6V2
            | EmbeddingModelKind::AllMiniLmL12V2
            | EmbeddingModelKind::BgeSmallEnV15 => 384,
        }
    }

    /// Names accepted by [`EmbeddingModelKind::from_name`]
    pub fn supported_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|kind| kind.name()).collect()
    }
}

#[cfg(feature = "local-embeddings")]
pub use local::FastEmbedder;

#[cfg(feature = "local-embeddings")]
mod local {
    use super::{Embedder, EmbeddingModelKind};
    use crate::types::{AppError, Result};
    use async_trait::async_trait;
    use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// Local ONNX embedding model loaded once at startup.
    ///
    /// fastembed needs `&mut` access for inference, so the model sits behind a
    /// mutex and runs on the blocking pool.
    pub struct FastEmbedder {
        model: Arc<Mutex<TextEmbedding>>,
        kind: EmbeddingModelKind,
    }

    impl FastEmbedder {
        /// Download (first run) and load the model
        pub fn new(kind: EmbeddingModelKind, show_download_progress: bool) -> Result<Self> {
            let model = TextEmbedding::try_new(
                InitOptions::new(to_fastembed(kind))
                    .with_show_download_progress(show_download_progress),
            )
            .map_err(|e| AppError::Embedding(format!("Failed to load {}: {}", kind.name(), e)))?;

            Ok(Self {
                model: Arc::new(Mutex::new(model)),
                kind,
            })
        }
    }

    fn to_fastembed(kind: EmbeddingModelKind) -> EmbeddingModel {
        match kind {
            EmbeddingModelKind::AllMiniLmL6V2 => EmbeddingModel::AllMiniLML6V2,
            EmbeddingModelKind::AllMiniLmL12V2 => EmbeddingModel::AllMiniLML12V2,
            EmbeddingModelKind::BgeSmallEnV15 => EmbeddingModel::BGESmallENV15,
        }
    }

    #[async_trait]
    impl Embedder for FastEmbedder {
        async fn embed(&self, text: &str) -> Result<Vec<f32>> {
            let model = Arc::clone(&self.model);
            let input = vec![text.to_string()];

            let mut vectors = tokio::task::spawn_blocking(move || model.lock().embed(input, None))
                .await
                .map_err(|e| AppError::Internal(format!("Embedding task failed: {}", e)))?
                .map_err(|e| AppError::Embedding(e.to_string()))?;

            vectors
                .pop()
                .ok_or_else(|| AppError::Embedding("Model returned no vector".to_string()))
        }

        fn dimension(&self) -> usize {
            self.kind.dimension()
        }

        fn model_name(&self) -> &str {
            self.kind.name()
        }
    }
}

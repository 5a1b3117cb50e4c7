use crate::db::VectorIndex;
use crate::rag::embeddings::Embedder;
use crate::types::{AppError, Result, RetrievedChunk};
use std::sync::Arc;
use tracing::debug;

/// Number of chunks fetched per question.
pub const RETRIEVAL_K: usize = 3;

/// Embeds a question and fetches its nearest chunks.
#[derive(Clone)]
pub struct Retriever {
    embedder: Arc<dyn Embedder>,
    index: Arc<dyn VectorIndex>,
}

impl Retriever {
    pub fn new(embedder: Arc<dyn Embedder>, index: Arc<dyn VectorIndex>) -> Self {
        Self { embedder, index }
    }

    /// Return up to [`RETRIEVAL_K`] chunks, most similar first.
    ///
    /// Callers must have rejected empty queries already.
    pub async fn retrieve(&self, query: &str) -> Result<Vec<RetrievedChunk>> {
        if query.is_empty() {
            return Err(AppError::Internal(
                "Empty query reached the retriever".to_string(),
            ));
        }

        let vector = self.embedder.embed(query).await?;
        if vector.len() != self.embedder.dimension() {
            return Err(AppError::Embedding(format!(
                "{} produced a {}-dimensional vector, expected {}",
                self.embedder.model_name(),
                vector.len(),
                self.embedder.dimension()
            )));
        }
        debug!(
            model = self.embedder.model_name(),
            dimension = vector.len(),
            "Query embedded"
        );

        let chunks = self.index.search(&vector, RETRIEVAL_K).await?;
        debug!(
            index = self.index.index_name(),
            requested = RETRIEVAL_K,
            returned = chunks.len(),
            "Similarity search complete"
        );

        Ok(chunks)
    }
}

//! Vector Index Abstraction
//!
//! The retriever only ever asks one question of the vector database: "which
//! stored chunks are nearest to this vector?". [`VectorIndex`] is that
//! question as a trait, so the hosted index and test stubs are interchangeable.
//!
//! ```text
//! ┌───────────────┐     search(vector, k)     ┌────────────────────┐
//! │   Retriever   │ ────────────────────────▶ │  dyn VectorIndex   │
//! └───────────────┘ ◀──────────────────────── │  (PineconeIndex)   │
//!                     Vec<RetrievedChunk>      └────────────────────┘
//! ```

use crate::types::{Result, RetrievedChunk};
use async_trait::async_trait;

/// Similarity search over stored document chunks.
#[async_trait]
pub trait VectorIndex: Send + Sync {
    /// Return at most `k` chunks nearest to `vector`, most similar first.
    ///
    /// Fewer than `k` results is not an error. Ties keep whatever order the
    /// backend produced.
    async fn search(&self, vector: &[f32], k: usize) -> Result<Vec<RetrievedChunk>>;

    /// Human-readable name of the backing index, for logs
    fn index_name(&self) -> &str;
}

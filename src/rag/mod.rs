//! Retrieval Augmented Generation (RAG) Pipeline
//!
//! # Module Structure
//!
//! - [`rag::embeddings`](crate::rag::embeddings) - Query embedding (fastembed sentence-transformers)
//! - [`rag::retriever`](crate::rag::retriever) - Embed + similarity search, k = 3
//! - [`rag::context`](crate::rag::context) - Joins retrieved chunks into one context block
//! - [`rag::prompt`](crate::rag::prompt) - Fixed investigator instruction template
//! - [`rag::pipeline`](crate::rag::pipeline) - The four stages wired together
//!
//! # RAG Pipeline
//!
//! 1. **Retrieval** - Question embedded, 3 nearest chunks fetched from the index
//! 2. **Formatting** - Chunk texts joined with a blank line, order preserved
//! 3. **Prompting** - Context and question substituted into the template
//! 4. **Generation** - LLM answers from the assembled prompt
//!
//! # Example
//!
//! ```ignore
//! use investigator::rag::{PromptTemplate, RagPipeline, Retriever};
//!
//! let retriever = Retriever::new(embedder, index);
//! let pipeline = RagPipeline::new(retriever, PromptTemplate::investigator(), llm);
//! let answer = pipeline.answer("Who was the suspect?").await?;
//! ```

pub mod context;
pub mod embeddings;
pub mod pipeline;
pub mod prompt;
pub mod retriever;

pub use context::format_context;
pub use embeddings::{Embedder, EmbeddingModelKind};
pub use pipeline::RagPipeline;
pub use prompt::PromptTemplate;
pub use retriever::{Retriever, RETRIEVAL_K};

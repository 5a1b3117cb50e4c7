//! Vector index clients.
//!
//! - [`VectorIndex`] - similarity-search seam used by the retriever
//! - [`PineconeIndex`] - managed Pinecone index over its REST API

#![allow(missing_docs)]

// Vector index abstraction layer
pub mod vectorstore;

// Provider implementations
pub mod pinecone;

// Re-exports
pub use pinecone::PineconeIndex;
pub use vectorstore::VectorIndex;

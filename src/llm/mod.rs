//! LLM Provider Clients and Abstractions
//!
//! # Architecture
//!
//! - [`LLMClient`] - The trait the RAG pipeline generates answers through
//! - [`OpenAIClient`] - Any OpenAI-compatible chat-completions gateway
//!   (OpenRouter by default)
//!
//! # Example
//!
//! ```ignore
//! use investigator::llm::{GenerationParams, LLMClient, OpenAIClient};
//!
//! let client = OpenAIClient::new(api_key, "https://openrouter.ai/api/v1".into(), model)
//!     .with_params(GenerationParams { temperature: 0.7, max_tokens: 1024 });
//! let answer = client.generate("What happened on the night of the 14th?").await?;
//! ```

/// Core LLM client trait and generation parameters.
pub mod client;
/// OpenAI-compatible chat-completions client.
pub mod openai;

pub use client::{GenerationParams, LLMClient};
pub use openai::OpenAIClient;

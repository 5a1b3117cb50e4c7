//! Stub pipeline collaborators for testing.
//!
//! Embedding, vector search and generation are all external services; these
//! stand-ins let the pipeline and HTTP layer run without any of them.

#![allow(dead_code)]

use async_trait::async_trait;
use investigator::db::VectorIndex;
use investigator::llm::LLMClient;
use investigator::rag::{Embedder, PromptTemplate, RagPipeline, Retriever};
use investigator::types::{AppError, Result, RetrievedChunk};
use investigator::AppState;
use parking_lot::Mutex;
use std::sync::Arc;

/// Embedder returning a fixed vector and recording the texts it saw.
pub struct StubEmbedder {
    vector: Vec<f32>,
    should_fail: bool,
    seen: Mutex<Vec<String>>,
}

impl StubEmbedder {
    pub fn new() -> Self {
        Self {
            vector: vec![0.1, 0.2, 0.3, 0.4],
            should_fail: false,
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::new()
        }
    }

    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().clone()
    }
}

#[async_trait]
impl Embedder for StubEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        self.seen.lock().push(text.to_string());
        if self.should_fail {
            return Err(AppError::Embedding("Mock embedding failure".to_string()));
        }
        Ok(self.vector.clone())
    }

    fn dimension(&self) -> usize {
        self.vector.len()
    }

    fn model_name(&self) -> &str {
        "stub-embedder"
    }
}

/// Vector index returning canned chunks and recording every requested k.
pub struct RecordingIndex {
    chunks: Vec<RetrievedChunk>,
    should_fail: bool,
    requested_k: Mutex<Vec<usize>>,
}

impl RecordingIndex {
    /// Index holding the given texts, scored in descending order.
    pub fn with_texts(texts: &[&str]) -> Self {
        let chunks = texts
            .iter()
            .enumerate()
            .map(|(i, text)| RetrievedChunk::new(format!("doc-{}", i), *text, 0.9 - i as f32 * 0.1))
            .collect();
        Self {
            chunks,
            should_fail: false,
            requested_k: Mutex::new(Vec::new()),
        }
    }

    pub fn empty() -> Self {
        Self::with_texts(&[])
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::empty()
        }
    }

    pub fn requested_k(&self) -> Vec<usize> {
        self.requested_k.lock().clone()
    }
}

#[async_trait]
impl VectorIndex for RecordingIndex {
    async fn search(&self, _vector: &[f32], k: usize) -> Result<Vec<RetrievedChunk>> {
        self.requested_k.lock().push(k);
        if self.should_fail {
            return Err(AppError::VectorStore("index unreachable".to_string()));
        }
        Ok(self.chunks.iter().take(k).cloned().collect())
    }

    fn index_name(&self) -> &str {
        "stub-index"
    }
}

/// LLM stub that either answers with a fixed string, echoes its prompt, or fails.
pub struct MockLLMClient {
    mode: Mode,
    prompts: Mutex<Vec<String>>,
}

enum Mode {
    Fixed(String),
    Echo,
    Fail,
}

impl MockLLMClient {
    pub fn new(response: &str) -> Self {
        Self {
            mode: Mode::Fixed(response.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn echo() -> Self {
        Self {
            mode: Mode::Echo,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            mode: Mode::Fail,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }
}

#[async_trait]
impl LLMClient for MockLLMClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().push(prompt.to_string());
        match &self.mode {
            Mode::Fixed(response) => Ok(response.clone()),
            Mode::Echo => Ok(prompt.to_string()),
            Mode::Fail => Err(AppError::LLM("Mock LLM failure".to_string())),
        }
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

/// Wire stubs into a pipeline
pub fn pipeline(
    embedder: Arc<StubEmbedder>,
    index: Arc<RecordingIndex>,
    llm: Arc<MockLLMClient>,
) -> RagPipeline {
    RagPipeline::new(
        Retriever::new(embedder, index),
        PromptTemplate::investigator(),
        llm,
    )
}

/// Application state around a stub pipeline
pub fn app_state(
    embedder: Arc<StubEmbedder>,
    index: Arc<RecordingIndex>,
    llm: Arc<MockLLMClient>,
) -> AppState {
    AppState::new(pipeline(embedder, index, llm))
}

use crate::llm::LLMClient;
use crate::rag::context::format_chunks;
use crate::rag::prompt::PromptTemplate;
use crate::rag::retriever::Retriever;
use crate::types::Result;
use std::sync::Arc;
use tracing::debug;

/// Retrieve → format → prompt → generate, for one question at a time.
///
/// Holds only read-only handles, so one instance serves every request.
#[derive(Clone)]
pub struct RagPipeline {
    retriever: Retriever,
    template: PromptTemplate,
    llm: Arc<dyn LLMClient>,
}

impl RagPipeline {
    pub fn new(retriever: Retriever, template: PromptTemplate, llm: Arc<dyn LLMClient>) -> Self {
        Self {
            retriever,
            template,
            llm,
        }
    }

    /// Produce a grounded answer. Any stage failure is returned unchanged.
    pub async fn answer(&self, question: &str) -> Result<String> {
        debug!("Retrieving context");
        let chunks = self.retriever.retrieve(question).await?;

        let context = format_chunks(&chunks);
        let prompt = self.template.build(&context, question);

        debug!(
            model = self.llm.model_name(),
            chunks = chunks.len(),
            prompt_chars = prompt.len(),
            "Generating answer"
        );
        self.llm.generate(&prompt).await
    }
}

const DEFAULT_TEMPLATE: &str = r#"You are an expert crime investigator assistant. Based on the context provided, answer the question in a simple, professional manner.

Context: {context}

Question: {input}

Instructions:
- Answer in maximum 3 sentences
- Be concise and direct
- Use simple, professional language
- Do not include references or citations
- If the context doesn't contain the answer, respond with "I don't know based on the available information."

Answer:"#;

/// Fixed instruction template with `{context}` and `{input}` slots.
///
/// Built once at startup and shared read-only across requests.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    template: &'static str,
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::investigator()
    }
}

impl PromptTemplate {
    /// The crime-investigator assistant template
    pub fn investigator() -> Self {
        Self {
            template: DEFAULT_TEMPLATE,
        }
    }

    /// Substitute context and question into the template.
    ///
    /// Substitution is single-pass, so braces inside the context or question
    /// are never re-expanded.
    pub fn build(&self, context: &str, question: &str) -> String {
        let mut out = String::with_capacity(self.template.len() + context.len() + question.len());
        let mut rest = self.template;

        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let tail = &rest[start..];
            if let Some(after) = tail.strip_prefix("{context}") {
                out.push_str(context);
                rest = after;
            } else if let Some(after) = tail.strip_prefix("{input}") {
                out.push_str(question);
                rest = after;
            } else {
                out.push('{');
                rest = &tail[1..];
            }
        }
        out.push_str(rest);
        out
    }
}

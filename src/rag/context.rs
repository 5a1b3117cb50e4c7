use crate::types::RetrievedChunk;

/// Separator placed between chunks in the context block.
pub const CHUNK_SEPARATOR: &str = "\n\n";

/// Join chunk texts with a blank line, keeping retrieval order.
///
/// No chunks yields an empty string; the prompt's fallback instruction covers
/// that case.
pub fn format_context<S: AsRef<str>>(chunks: &[S]) -> String {
    chunks
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(CHUNK_SEPARATOR)
}

/// [`format_context`] over retrieved chunks.
pub fn format_chunks(chunks: &[RetrievedChunk]) -> String {
    let texts: Vec<&str> = chunks.iter().map(|chunk| chunk.text.as_str()).collect();
    format_context(&texts)
}

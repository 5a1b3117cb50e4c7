use crate::{
    types::{AppError, ChatRequest, ChatResponse, NO_MESSAGE_PROVIDED},
    AppState,
};
use axum::{extract::rejection::JsonRejection, extract::State, response::Result, Json};
use std::time::Instant;

/// Answer a question from the case notes.
///
/// A body that isn't a JSON object with a non-empty `message` string is
/// answered with 400. Failing to read the body at all keeps axum's own
/// rejection status. Failures past that point become a single 500.
pub async fn chat(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>> {
    let message = match payload {
        Ok(Json(request)) => request.message,
        Err(
            rejection @ (JsonRejection::JsonSyntaxError(_)
            | JsonRejection::JsonDataError(_)
            | JsonRejection::MissingJsonContentType(_)),
        ) => {
            tracing::debug!(reason = %rejection.body_text(), "Unreadable chat body");
            String::new()
        }
        Err(rejection) => {
            tracing::warn!(
                status = %rejection.status(),
                reason = %rejection.body_text(),
                "Chat body could not be read"
            );
            return Err(rejection.into());
        }
    };

    if message.is_empty() {
        return Err(AppError::InvalidInput(NO_MESSAGE_PROVIDED.to_string()).into());
    }

    let start = Instant::now();
    tracing::info!(query_chars = message.chars().count(), "Processing query");
    tracing::debug!(query = %message, "Query text");

    match state.pipeline.answer(&message).await {
        Ok(response) => {
            tracing::info!(
                duration_ms = start.elapsed().as_millis() as u64,
                answer_chars = response.chars().count(),
                "Response generated"
            );
            Ok(Json(ChatResponse { response }))
        }
        Err(err) => {
            tracing::error!(
                error = %err,
                duration_ms = start.elapsed().as_millis() as u64,
                "Chat pipeline failed"
            );
            Err(err.into())
        }
    }
}

use crate::AppState;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Largest `/chat` body accepted. Long pasted case notes fit well below it.
pub const MAX_CHAT_BODY_BYTES: usize = 32 * 1024 * 1024;

/// Build the application router with its state attached
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(crate::api::handlers::web::index))
        .route("/favicon.ico", get(crate::api::handlers::web::favicon))
        .route("/health", get(crate::api::handlers::web::health))
        .route(
            "/chat",
            post(crate::api::handlers::chat::chat)
                .layer(DefaultBodyLimit::max(MAX_CHAT_BODY_BYTES)),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

//! HTTP API Handlers and Routes
//!
//! Built on the Axum web framework.
//!
//! # API Endpoints
//!
//! - `GET /` - Chat page
//! - `GET /favicon.ico` - Site icon (SVG)
//! - `GET /health` - Health check
//! - `POST /chat` - Ask a question: `{"message": "..."}` → `{"response": "..."}`
//!
//! # Errors
//!
//! - `400 {"error": "No message provided"}` - missing, empty or unreadable message
//! - `500 {"error": "An error occurred: <detail>"}` - embedding, search or generation failed

/// Request and response handlers for all API endpoints.
pub mod handlers;
/// Router configuration and route definitions.
pub mod routes;

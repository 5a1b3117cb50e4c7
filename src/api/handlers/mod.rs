//! API request handlers.

/// Question answering over the case notes.
pub mod chat;
/// Page, icon and health check.
pub mod web;

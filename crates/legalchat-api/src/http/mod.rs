//! HTTP/REST API layer for LegalChat.
//!
//! Axum-based REST API under `/api/` with bearer token authentication and a
//! JSON error envelope.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;

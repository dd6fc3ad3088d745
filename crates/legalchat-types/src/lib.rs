//! Shared domain types for LegalChat.
//!
//! This crate contains the core domain types used across the LegalChat API:
//! users, session tokens, chat history entries, and their error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod auth;
pub mod chat;
pub mod error;
pub mod user;

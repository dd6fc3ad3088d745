//! Infrastructure layer for LegalChat.
//!
//! Contains implementations of the traits defined in `legalchat-core`:
//! SQLite storage for users and chat history, bcrypt password hashing, and
//! HS256 JWT session tokens.

pub mod crypto;
pub mod sqlite;

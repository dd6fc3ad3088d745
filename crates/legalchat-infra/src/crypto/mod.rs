//! Cryptographic operations for LegalChat.
//!
//! - `password`: bcrypt password hashing (cost 10)
//! - `token`: HS256 JWT session tokens

pub mod password;
pub mod token;

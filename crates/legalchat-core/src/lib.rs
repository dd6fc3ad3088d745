//! Business logic and repository trait definitions for LegalChat.
//!
//! This crate defines the "ports" (repository, password hashing and session
//! token traits) that the infrastructure layer implements. It depends only on
//! `legalchat-types` -- never on `legalchat-infra` or any database/IO crate.

pub mod auth;
pub mod chat;
pub mod repository;

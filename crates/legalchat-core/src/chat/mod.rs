//! Per-user chat history.

pub mod repository;
pub mod service;

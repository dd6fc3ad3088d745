//! Authentication: password hashing, session tokens, and the service that
//! ties them to the credential store.

pub mod password;
pub mod service;
pub mod token;

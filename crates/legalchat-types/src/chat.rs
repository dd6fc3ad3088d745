//! Chat history types.
//!
//! A chat entry pairs one user question with the answer the AI service
//! produced for it. Entries are owned by exactly one user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::user::UserId;

/// A stored message/response pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEntry {
    pub id: i64,
    pub user_id: UserId,
    pub message: String,
    pub response: String,
    pub created_at: DateTime<Utc>,
}

/// Request body for saving a chat entry.
#[derive(Debug, Clone, Deserialize)]
pub struct NewChatEntry {
    pub message: String,
    #[serde(default)]
    pub response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_chat_entry_response_defaults_to_empty() {
        let entry: NewChatEntry = serde_json::from_str(r#"{"message":"What is bail?"}"#).unwrap();
        assert_eq!(entry.message, "What is bail?");
        assert!(entry.response.is_empty());
    }
}

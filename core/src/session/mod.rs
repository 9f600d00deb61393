//! Conversation-session state
//!
//! The active message list, the archive of saved sessions, and the
//! transitions between them. The store lives in process memory only and
//! belongs to exactly one user session; nothing here locks or isolates.

pub mod companion;
pub mod store;

pub use companion::Companion;
pub use store::SessionStore;

use crate::llm::ChatMessage;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Character width of the summary preview shown in archive listings
const SUMMARY_CHARS: usize = 50;

/// A saved conversation. Built when the user archives the active message
/// list; never mutated afterwards; destroyed on explicit delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedSession {
    /// Timestamp-derived identifier, second resolution
    pub id: String,
    /// Human-readable creation time
    pub created_at: String,
    /// Truncated prefix of the first message
    pub summary: String,
    /// Copy of the archived message list
    pub messages: Vec<ChatMessage>,
}

impl SavedSession {
    pub(crate) fn from_messages(messages: Vec<ChatMessage>, now: DateTime<Local>) -> Self {
        let summary = messages
            .first()
            .map(|m| summarize(&m.content))
            .unwrap_or_default();

        SavedSession {
            id: now.format("%Y%m%d_%H%M%S").to_string(),
            created_at: now.format("%Y-%m-%d %H:%M").to_string(),
            summary,
            messages,
        }
    }
}

/// First `SUMMARY_CHARS` characters of the content, always followed by
/// an ellipsis marker. Char-based so multi-byte content never splits a
/// code point.
fn summarize(content: &str) -> String {
    let prefix: String = content.chars().take(SUMMARY_CHARS).collect();
    format!("{}...", prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn summary_truncates_to_fifty_chars_plus_ellipsis() {
        let long = "x".repeat(60);
        let summary = summarize(&long);
        assert_eq!(summary.chars().count(), 53);
        assert!(summary.ends_with("..."));
        assert_eq!(&summary[..50], &long[..50]);
    }

    #[test]
    fn summary_of_short_message_keeps_ellipsis() {
        assert_eq!(summarize("hello"), "hello...");
    }

    #[test]
    fn summary_counts_chars_not_bytes() {
        let content = "é".repeat(60);
        let summary = summarize(&content);
        assert_eq!(summary.chars().count(), 53);
    }

    #[test]
    fn saved_session_formats_id_and_date() {
        let now = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 30).unwrap();
        let session = SavedSession::from_messages(vec![ChatMessage::user("hello there")], now);
        assert_eq!(session.id, "20240309_140530");
        assert_eq!(session.created_at, "2024-03-09 14:05");
        assert_eq!(session.summary, "hello there...");
        assert_eq!(session.messages.len(), 1);
    }
}

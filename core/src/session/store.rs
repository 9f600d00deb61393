//! In-memory session store
//!
//! Holds the active message list and the archive of saved sessions.
//! The two are disjoint: archiving copies the active list into a new
//! [`SavedSession`] and then clears it.

use super::SavedSession;
use crate::llm::{ChatMessage, MessageRole};
use chrono::{DateTime, Local};

/// Store for one user session's conversation state
#[derive(Debug, Default)]
pub struct SessionStore {
    messages: Vec<ChatMessage>,
    archive: Vec<SavedSession>,
    selected: Option<String>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The in-progress, unsaved message list
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Previously saved sessions, oldest first
    pub fn archive(&self) -> &[SavedSession] {
        &self.archive
    }

    /// Id of the restored session currently loaded into the active list
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Append a message to the active list. Content is free text; empty
    /// strings are allowed.
    pub fn append_message(&mut self, role: MessageRole, content: impl Into<String>) {
        self.messages.push(ChatMessage {
            role,
            content: content.into(),
        });
    }

    /// Archive the active list as a new saved session and clear it.
    ///
    /// Returns the new session's id, or `None` when the active list is
    /// empty (nothing to save).
    pub fn archive_active(&mut self) -> Option<String> {
        self.archive_active_at(Local::now())
    }

    pub(crate) fn archive_active_at(&mut self, now: DateTime<Local>) -> Option<String> {
        if self.messages.is_empty() {
            return None;
        }

        let session = SavedSession::from_messages(self.messages.clone(), now);
        let id = session.id.clone();
        self.archive.push(session);
        self.messages.clear();
        self.selected = None;
        crate::info_log!("archived session {}", id);
        Some(id)
    }

    /// Replace the active list with a copy of the saved session's
    /// messages and mark it selected. Returns false when the id is not
    /// in the archive (no-op).
    pub fn restore(&mut self, id: &str) -> bool {
        match self.archive.iter().find(|s| s.id == id) {
            Some(session) => {
                self.messages = session.messages.clone();
                self.selected = Some(session.id.clone());
                true
            }
            None => false,
        }
    }

    /// Remove the saved session with this id from the archive. If it was
    /// the selected/restored session, the active list is cleared too.
    /// Returns false when the id is unknown (no-op).
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.archive.len();
        self.archive.retain(|s| s.id != id);
        let removed = self.archive.len() < before;

        if removed && self.selected.as_deref() == Some(id) {
            self.messages.clear();
            self.selected = None;
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hms: (u32, u32, u32)) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2024, 3, 9, hms.0, hms.1, hms.2)
            .unwrap()
    }

    #[test]
    fn append_preserves_insertion_order() {
        let mut store = SessionStore::new();
        store.append_message(MessageRole::User, "one");
        store.append_message(MessageRole::Assistant, "two");
        store.append_message(MessageRole::User, "three");

        assert_eq!(store.messages().len(), 3);
        let contents: Vec<&str> = store.messages().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["one", "two", "three"]);
    }

    #[test]
    fn archive_moves_active_list_into_new_session() {
        let mut store = SessionStore::new();
        store.append_message(MessageRole::User, "I feel anxious today");
        store.append_message(MessageRole::Assistant, "I hear you");

        let id = store.archive_active_at(at((10, 0, 0))).unwrap();
        assert_eq!(store.archive().len(), 1);
        assert_eq!(store.archive()[0].id, id);
        assert_eq!(store.archive()[0].messages.len(), 2);
        assert!(store.messages().is_empty());

        // Immediately archiving again is a no-op
        assert_eq!(store.archive_active_at(at((10, 0, 1))), None);
        assert_eq!(store.archive().len(), 1);
    }

    #[test]
    fn archive_on_empty_store_changes_nothing() {
        let mut store = SessionStore::new();
        assert_eq!(store.archive_active(), None);
        assert!(store.archive().is_empty());
        assert!(store.messages().is_empty());
    }

    #[test]
    fn restore_then_archive_round_trips_messages() {
        let mut store = SessionStore::new();
        store.append_message(MessageRole::User, "how was my day");
        store.append_message(MessageRole::Assistant, "tell me about it");
        let original = store.archive_active_at(at((9, 0, 0))).unwrap();

        assert!(store.restore(&original));
        assert_eq!(store.selected(), Some(original.as_str()));
        assert_eq!(store.messages().len(), 2);

        let copy = store.archive_active_at(at((9, 30, 0))).unwrap();
        assert_ne!(copy, original);
        assert_eq!(store.archive().len(), 2);
        assert_eq!(store.archive()[0].messages, store.archive()[1].messages);
    }

    #[test]
    fn restore_unknown_id_is_a_noop() {
        let mut store = SessionStore::new();
        store.append_message(MessageRole::User, "keep me");
        assert!(!store.restore("20990101_000000"));
        assert_eq!(store.messages().len(), 1);
        assert_eq!(store.selected(), None);
    }

    #[test]
    fn delete_removes_exactly_one_entry() {
        let mut store = SessionStore::new();
        store.append_message(MessageRole::User, "first");
        let first = store.archive_active_at(at((8, 0, 0))).unwrap();
        store.append_message(MessageRole::User, "second");
        let second = store.archive_active_at(at((8, 1, 0))).unwrap();

        assert!(store.delete(&first));
        assert_eq!(store.archive().len(), 1);
        assert_eq!(store.archive()[0].id, second);

        assert!(!store.delete("20990101_000000"));
        assert_eq!(store.archive().len(), 1);
    }

    #[test]
    fn deleting_selected_session_clears_active_list() {
        let mut store = SessionStore::new();
        store.append_message(MessageRole::User, "hello");
        let id = store.archive_active_at(at((7, 0, 0))).unwrap();
        store.restore(&id);
        assert!(!store.messages().is_empty());

        assert!(store.delete(&id));
        assert!(store.messages().is_empty());
        assert_eq!(store.selected(), None);
    }

    #[test]
    fn deleting_unselected_session_keeps_active_list() {
        let mut store = SessionStore::new();
        store.append_message(MessageRole::User, "old");
        let id = store.archive_active_at(at((6, 0, 0))).unwrap();
        store.append_message(MessageRole::User, "in progress");

        assert!(store.delete(&id));
        assert_eq!(store.messages().len(), 1);
    }
}

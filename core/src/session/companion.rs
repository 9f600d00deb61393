//! Session controller
//!
//! Owns the session store and the completion client and exposes the
//! operations the presentation layer drives: append, archive, restore,
//! delete, and the single external-I/O point, `request_completion`.

use super::{SavedSession, SessionStore};
use crate::config::ChatSettings;
use crate::error::Result;
use crate::llm::{build_prompt, ChatMessage, CompletionClient, MessageRole};

/// Controller for one user's conversation with the companion
pub struct Companion<C> {
    store: SessionStore,
    client: C,
    settings: ChatSettings,
}

impl<C: CompletionClient> Companion<C> {
    pub fn new(client: C, settings: ChatSettings) -> Self {
        Companion {
            store: SessionStore::new(),
            client,
            settings,
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn settings(&self) -> &ChatSettings {
        &self.settings
    }

    /// Generation settings are user-adjustable at runtime (model picker,
    /// temperature slider).
    pub fn settings_mut(&mut self) -> &mut ChatSettings {
        &mut self.settings
    }

    /// The in-progress message list
    pub fn messages(&self) -> &[ChatMessage] {
        self.store.messages()
    }

    /// Saved sessions, oldest first
    pub fn archive(&self) -> &[SavedSession] {
        self.store.archive()
    }

    /// Append a message to the active list
    pub fn append_message(&mut self, role: MessageRole, content: impl Into<String>) {
        self.store.append_message(role, content);
    }

    /// Save the active conversation to the archive; `None` when there is
    /// nothing to save
    pub fn archive_active(&mut self) -> Option<String> {
        self.store.archive_active()
    }

    /// Load a saved session into the active list
    pub fn restore(&mut self, id: &str) -> bool {
        self.store.restore(id)
    }

    /// Delete a saved session
    pub fn delete(&mut self, id: &str) -> bool {
        self.store.delete(id)
    }

    /// Ask the completion service to reply to the user's latest text.
    ///
    /// The fixed companion preamble is prepended to `user_text`; on
    /// success the reply is appended to the active list as an assistant
    /// message and returned. On failure nothing is appended — the user's
    /// own message stays, and the error is surfaced to the caller.
    ///
    /// This call suspends while the remote service responds. Timeouts
    /// and cancellation are the caller's concern.
    pub async fn request_completion(&mut self, user_text: &str) -> Result<String> {
        let prompt = build_prompt(user_text);
        crate::debug_log!(
            "requesting completion: model={} temperature={}",
            self.settings.model,
            self.settings.temperature
        );

        let text = self
            .client
            .complete(&prompt, self.settings.model, self.settings.temperature)
            .await?;

        self.store
            .append_message(MessageRole::Assistant, text.clone());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolaceError;
    use crate::llm::GeminiModel;
    use async_trait::async_trait;

    /// Completion client that replays a fixed outcome
    struct ScriptedClient {
        reply: std::result::Result<String, u16>,
    }

    #[async_trait]
    impl CompletionClient for ScriptedClient {
        async fn complete(
            &self,
            _prompt: &str,
            _model: GeminiModel,
            _temperature: f32,
        ) -> Result<String> {
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(status) => Err(SolaceError::Completion {
                    status: *status,
                    message: "service error".to_string(),
                }),
            }
        }
    }

    fn companion(reply: std::result::Result<String, u16>) -> Companion<ScriptedClient> {
        Companion::new(ScriptedClient { reply }, ChatSettings::default())
    }

    #[tokio::test]
    async fn successful_completion_appends_assistant_message() {
        let mut companion = companion(Ok("I hear you; let's talk through it".to_string()));
        companion.append_message(MessageRole::User, "I feel anxious today");
        companion
            .request_completion("I feel anxious today")
            .await
            .unwrap();

        let messages = companion.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, MessageRole::User);
        assert_eq!(messages[0].content, "I feel anxious today");
        assert_eq!(messages[1].role, MessageRole::Assistant);
        assert_eq!(messages[1].content, "I hear you; let's talk through it");
    }

    #[tokio::test]
    async fn failed_completion_leaves_user_message_in_place() {
        let mut companion = companion(Err(503));
        companion.append_message(MessageRole::User, "hello?");

        let err = companion.request_completion("hello?").await.unwrap_err();
        assert!(matches!(err, SolaceError::Completion { status: 503, .. }));

        let messages = companion.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, MessageRole::User);
    }

    #[tokio::test]
    async fn controller_delegates_session_transitions() {
        let mut companion = companion(Ok("reply".to_string()));
        companion.append_message(MessageRole::User, "save me");
        let id = companion.archive_active().unwrap();
        assert!(companion.messages().is_empty());

        assert!(companion.restore(&id));
        assert_eq!(companion.messages().len(), 1);

        assert!(companion.delete(&id));
        assert!(companion.archive().is_empty());
        assert!(companion.messages().is_empty());
    }
}

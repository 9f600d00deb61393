//! Completion client module
//!
//! Talks to the Google Generative Language API (Gemini) and defines the
//! chat message types shared by the session store and the UI.

pub mod chat;
pub mod client;

pub use chat::{ChatMessage, MessageRole};
pub use client::{CompletionClient, GeminiClient, GeminiModel};

/// Fixed system preamble prepended to every completion request.
///
/// The companion never sees prior turns: each request is the preamble
/// plus the latest user text.
pub const COMPANION_PREAMBLE: &str = "You are Solace, a supportive companion for mental wellness. \
    Users will share how they are feeling, their worries, and day-to-day struggles. \
    Listen, respond with warmth, and keep appropriate boundaries. \
    If a user expresses serious concerns, guide them toward professional help.";

/// Build the full prompt for a single user submission.
pub fn build_prompt(user_text: &str) -> String {
    format!("{}\n\nUser: {}", COMPANION_PREAMBLE, user_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_carries_preamble_and_user_text() {
        let prompt = build_prompt("I feel anxious today");
        assert!(prompt.starts_with(COMPANION_PREAMBLE));
        assert!(prompt.ends_with("User: I feel anxious today"));
    }
}

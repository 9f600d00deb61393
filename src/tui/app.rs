//! Application state container
//!
//! Owns the session controller, the wellness logs, and all UI state.
//! Every mutation happens on the event-loop task; spawned work reports
//! back through `TuiEvent` so nothing touches the store concurrently.

use solace_core::config::Config;
use solace_core::llm::{build_prompt, CompletionClient, GeminiClient, GeminiModel, MessageRole};
use solace_core::session::Companion;
use solace_core::speech::{CommandTranscriber, SpeechCapture};
use solace_core::wellness::{Mood, WellnessLog};
use solace_core::SolaceError;
use tokio::sync::mpsc::UnboundedSender;

/// Events consumed by the TUI event loop
pub enum TuiEvent {
    /// Raw terminal input
    Input(crossterm::event::Event),
    /// Completion finished (reply text or user-visible failure)
    Completion(Result<String, SolaceError>),
    /// Speech capture finished
    Transcript(Result<String, SolaceError>),
    /// Animation tick
    Tick,
}

/// Which panel receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Chat,
    History,
}

/// How user submissions are produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Text,
    Speech,
}

/// What the companion is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiState {
    Idle,
    Thinking,
    Listening,
}

/// Modal entry overlays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Journal,
    Mood,
}

/// Core application state container
pub struct App {
    pub companion: Companion<GeminiClient>,
    pub wellness: WellnessLog,
    pub transcriber: Option<CommandTranscriber>,

    // Input state
    pub input: String,
    pub journal_input: String,
    pub input_mode: InputMode,

    // UI state
    pub focus: Focus,
    pub overlay: Overlay,
    pub state: UiState,
    pub status_message: Option<String>,
    pub history_index: usize,
    pub chat_scroll: u16,
    pub chat_auto_scroll: bool,
    pub tick_count: u64,
    pub should_quit: bool,
}

impl App {
    pub fn new(companion: Companion<GeminiClient>, config: &Config) -> Self {
        App {
            companion,
            wellness: WellnessLog::new(),
            transcriber: config.speech.command.as_deref().map(CommandTranscriber::new),
            input: String::new(),
            journal_input: String::new(),
            input_mode: InputMode::Text,
            focus: Focus::Chat,
            overlay: Overlay::None,
            state: UiState::Idle,
            status_message: None,
            history_index: 0,
            chat_scroll: 0,
            chat_auto_scroll: true,
            tick_count: 0,
            should_quit: false,
        }
    }

    /// Submit the typed input as a user message
    pub fn submit_input(&mut self, tx: &UnboundedSender<TuiEvent>) {
        let text = self.input.trim().to_string();
        if text.is_empty() || self.state != UiState::Idle {
            return;
        }
        self.input.clear();
        self.submit_text(text, tx);
    }

    /// Append a user message and request a completion for it.
    ///
    /// The HTTP call runs on a spawned task; the result comes back as
    /// `TuiEvent::Completion`, so the store is only mutated here and in
    /// [`App::on_completion`].
    pub fn submit_text(&mut self, text: String, tx: &UnboundedSender<TuiEvent>) {
        self.companion.append_message(MessageRole::User, text.clone());
        self.state = UiState::Thinking;
        self.status_message = None;
        self.chat_auto_scroll = true;

        let client = self.companion.client().clone();
        let settings = *self.companion.settings();
        let tx = tx.clone();
        tokio::spawn(async move {
            let prompt = build_prompt(&text);
            let result = client
                .complete(&prompt, settings.model, settings.temperature)
                .await;
            let _ = tx.send(TuiEvent::Completion(result));
        });
    }

    /// Handle a finished completion
    pub fn on_completion(&mut self, result: Result<String, SolaceError>) {
        self.state = UiState::Idle;
        match result {
            Ok(text) => {
                self.companion.append_message(MessageRole::Assistant, text);
                self.chat_auto_scroll = true;
            }
            Err(e) => {
                solace_core::error_log!("completion failed: {}", e);
                self.status_message = Some(e.user_message());
            }
        }
    }

    /// Start a speech capture; the transcript comes back as
    /// `TuiEvent::Transcript`.
    pub fn start_capture(&mut self, tx: &UnboundedSender<TuiEvent>) {
        if self.state != UiState::Idle {
            return;
        }
        let Some(transcriber) = self.transcriber.clone() else {
            self.status_message =
                Some("No transcriber configured. Set speech.command in the config.".to_string());
            return;
        };

        self.state = UiState::Listening;
        self.status_message = Some("Listening...".to_string());
        let tx = tx.clone();
        tokio::spawn(async move {
            let result = transcriber.capture().await;
            let _ = tx.send(TuiEvent::Transcript(result));
        });
    }

    /// Handle a finished speech capture: a transcript is submitted like
    /// typed text; a failure is reported and nothing is appended.
    pub fn on_transcript(
        &mut self,
        result: Result<String, SolaceError>,
        tx: &UnboundedSender<TuiEvent>,
    ) {
        self.state = UiState::Idle;
        match result {
            Ok(text) => {
                self.status_message = None;
                self.submit_text(text, tx);
            }
            Err(e) => {
                self.status_message = Some(e.user_message());
            }
        }
    }

    /// Archive the active conversation
    pub fn save_chat(&mut self) {
        match self.companion.archive_active() {
            Some(_) => {
                self.status_message = Some("Chat saved to history!".to_string());
                self.history_index = self.companion.archive().len().saturating_sub(1);
            }
            None => {
                self.status_message = Some("Nothing to save.".to_string());
            }
        }
    }

    /// Restore the session selected in the history panel
    pub fn restore_selected(&mut self) {
        let Some(id) = self.selected_session_id() else {
            return;
        };
        if self.companion.restore(&id) {
            self.status_message = Some("Chat loaded.".to_string());
            self.chat_auto_scroll = true;
            self.focus = Focus::Chat;
        }
    }

    /// Delete the session selected in the history panel
    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected_session_id() else {
            return;
        };
        if self.companion.delete(&id) {
            self.status_message = Some("Chat deleted.".to_string());
            let len = self.companion.archive().len();
            if self.history_index >= len {
                self.history_index = len.saturating_sub(1);
            }
        }
    }

    fn selected_session_id(&self) -> Option<String> {
        self.companion
            .archive()
            .get(self.history_index)
            .map(|s| s.id.clone())
    }

    /// Save the journal overlay's text; empty input is ignored
    pub fn save_journal(&mut self) {
        let entry = self.journal_input.trim().to_string();
        if entry.is_empty() {
            self.overlay = Overlay::None;
            return;
        }
        self.wellness.log_journal(entry);
        self.journal_input.clear();
        self.overlay = Overlay::None;
        self.status_message = Some("Saved!".to_string());
    }

    /// Log today's mood from a 1..5 scale position
    pub fn log_mood(&mut self, position: u8) {
        if let Some(mood) = Mood::from_scale(position) {
            self.wellness.log_mood(mood);
            self.overlay = Overlay::None;
            self.status_message = Some(format!("Mood logged: {} {}", mood.emoji(), mood.label()));
        }
    }

    /// Export the archive and wellness logs as CSV files into the data dir
    pub fn export_all(&mut self) {
        let dir = Config::data_dir().join("exports");
        let result = solace_core::export::write_all(
            &dir,
            self.companion.archive(),
            self.wellness.journal(),
            self.wellness.moods(),
        );
        self.status_message = Some(match result {
            Ok(paths) => format!("Exported {} files to {}", paths.len(), dir.display()),
            Err(e) => e.user_message(),
        });
    }

    /// Switch between typed and spoken input
    pub fn toggle_input_mode(&mut self) {
        self.input_mode = match self.input_mode {
            InputMode::Text => InputMode::Speech,
            InputMode::Speech => InputMode::Text,
        };
    }

    /// Cycle the active model
    pub fn cycle_model(&mut self) {
        let settings = self.companion.settings_mut();
        settings.model = match settings.model {
            GeminiModel::Flash15 => GeminiModel::Pro15,
            GeminiModel::Pro15 => GeminiModel::Flash15,
        };
        self.status_message = Some(format!("Model: {}", settings.model));
    }

    /// Nudge the temperature by `delta`, clamped to [0, 1]
    pub fn adjust_temperature(&mut self, delta: f32) {
        let settings = self.companion.settings_mut();
        let next = settings.temperature + delta;
        settings.set_temperature(next);
        self.status_message = Some(format!("Temperature: {:.1}", settings.temperature));
    }
}

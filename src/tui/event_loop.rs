//! Event loop module
//!
//! Drives the TUI: renders a frame, waits for the next event, applies
//! it, repeats. All state mutation happens here, so operations stay
//! strictly sequential even while a completion or capture is in flight.

use crate::tui::app::{App, Focus, InputMode, Overlay, TuiEvent};
use crate::tui::draw::render;
use anyhow::Result;
use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

/// Run the main event loop
pub async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_rx: &mut UnboundedReceiver<TuiEvent>,
    event_tx: UnboundedSender<TuiEvent>,
) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        let Some(event) = event_rx.recv().await else {
            return Ok(());
        };

        match event {
            TuiEvent::Input(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                handle_key(key, app, &event_tx);
            }
            // Resizes redraw on the next pass; other input is ignored
            TuiEvent::Input(_) => {}
            TuiEvent::Completion(result) => app.on_completion(result),
            TuiEvent::Transcript(result) => app.on_transcript(result, &event_tx),
            TuiEvent::Tick => app.tick_count = app.tick_count.wrapping_add(1),
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(key: KeyEvent, app: &mut App, tx: &UnboundedSender<TuiEvent>) {
    match app.overlay {
        Overlay::Journal => handle_journal_key(key, app),
        Overlay::Mood => handle_mood_key(key, app),
        Overlay::None => handle_main_key(key, app, tx),
    }
}

fn handle_journal_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc => {
            app.journal_input.clear();
            app.overlay = Overlay::None;
        }
        KeyCode::Enter => app.save_journal(),
        KeyCode::Backspace => {
            app.journal_input.pop();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.journal_input.push(c);
        }
        _ => {}
    }
}

fn handle_mood_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc => app.overlay = Overlay::None,
        KeyCode::Char(c @ '1'..='5') => {
            app.log_mood(c as u8 - b'0');
        }
        _ => {}
    }
}

fn handle_main_key(key: KeyEvent, app: &mut App, tx: &UnboundedSender<TuiEvent>) {
    // Control chords work from either panel.
    //
    // Ctrl+J and Ctrl+M are avoided on purpose: terminals fold them
    // into LF/CR, so they arrive as Enter.
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => app.should_quit = true,
            KeyCode::Char('s') => app.save_chat(),
            KeyCode::Char('t') => app.toggle_input_mode(),
            KeyCode::Char('n') => app.overlay = Overlay::Journal,
            KeyCode::Char('d') => app.overlay = Overlay::Mood,
            KeyCode::Char('e') => app.export_all(),
            KeyCode::Char('g') => app.cycle_model(),
            KeyCode::Up => app.adjust_temperature(0.1),
            KeyCode::Down => app.adjust_temperature(-0.1),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Tab => {
            app.focus = match app.focus {
                Focus::Chat => Focus::History,
                Focus::History => Focus::Chat,
            };
        }
        KeyCode::Esc => app.status_message = None,
        _ => match app.focus {
            Focus::Chat => handle_chat_key(key, app, tx),
            Focus::History => handle_history_key(key, app),
        },
    }
}

fn handle_chat_key(key: KeyEvent, app: &mut App, tx: &UnboundedSender<TuiEvent>) {
    match key.code {
        KeyCode::Enter => match app.input_mode {
            InputMode::Text => app.submit_input(tx),
            InputMode::Speech => app.start_capture(tx),
        },
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Up => {
            app.chat_auto_scroll = false;
            app.chat_scroll = app.chat_scroll.saturating_sub(1);
        }
        KeyCode::Down => {
            app.chat_scroll = app.chat_scroll.saturating_add(1);
        }
        KeyCode::PageDown | KeyCode::End => {
            app.chat_auto_scroll = true;
        }
        KeyCode::Char(c) => {
            if app.input_mode == InputMode::Text {
                app.input.push(c);
            }
        }
        _ => {}
    }
}

fn handle_history_key(key: KeyEvent, app: &mut App) {
    let len = app.companion.archive().len();
    match key.code {
        KeyCode::Up => {
            app.history_index = app.history_index.saturating_sub(1);
        }
        KeyCode::Down => {
            if len > 0 && app.history_index + 1 < len {
                app.history_index += 1;
            }
        }
        KeyCode::Enter => app.restore_selected(),
        KeyCode::Char('d') => app.delete_selected(),
        _ => {}
    }
}

//! Ratatui front-end
//!
//! The presentation layer: renders the session store and drives the
//! controller in response to user actions.

pub mod app;
pub mod draw;
pub mod event_loop;
pub mod setup;

pub use app::{App, TuiEvent};

use anyhow::{Context, Result};
use solace_core::config::Config;
use solace_core::llm::GeminiClient;
use solace_core::session::Companion;
use std::time::Duration;
use tokio::sync::mpsc;

/// Run the full-screen companion
pub async fn run(config: Config) -> Result<()> {
    let api_key = config
        .resolve_api_key()
        .context("No API key configured. Run `solace setup` or set GEMINI_API_KEY.")?;
    let client = GeminiClient::with_base_url(api_key, config.base_url.clone())
        .context("Failed to build the completion client")?;
    let companion = Companion::new(client, config.chat);
    let mut app = App::new(companion, &config);

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    spawn_input_reader(event_tx.clone());

    let (mut terminal, _guard) = setup::init_terminal()?;
    let result = event_loop::run(&mut terminal, &mut app, &mut event_rx, event_tx).await;
    // _guard drops here and restores the terminal before any error prints
    result
}

/// Forward crossterm events into the TUI channel; emits a tick when the
/// terminal stays quiet so animations keep moving.
fn spawn_input_reader(tx: mpsc::UnboundedSender<TuiEvent>) {
    std::thread::spawn(move || loop {
        let ready = crossterm::event::poll(Duration::from_millis(200)).unwrap_or(false);
        let event = if ready {
            match crossterm::event::read() {
                Ok(ev) => TuiEvent::Input(ev),
                Err(_) => break,
            }
        } else {
            TuiEvent::Tick
        };

        if tx.send(event).is_err() {
            // UI is gone
            break;
        }
    });
}

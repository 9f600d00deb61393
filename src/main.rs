//! `solace` - A terminal AI companion for mental wellness
//!
//! This binary provides the full-screen chat companion plus one-shot
//! CLI commands for quick questions, support resources, and setup.

use anyhow::{Context, Result};
use clap::Parser;
use console::Style;
use dialoguer::{theme::ColorfulTheme, Input, Password, Select};
use std::str::FromStr;

use crate::cli::{Cli, Commands};
use solace_core::config::Config;
use solace_core::llm::{GeminiClient, GeminiModel, MessageRole};
use solace_core::output::OutputFormatter;
use solace_core::session::Companion;

mod cli;
mod resources;
mod tui;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.version {
        let blue = Style::new().blue();
        println!(
            "{} v{} ({})",
            blue.apply_to("solace"),
            env!("CARGO_PKG_VERSION"),
            env!("GIT_HASH")
        );
        return Ok(());
    }

    solace_core::logger::init(Config::data_dir());
    let config = Config::load().context("Failed to load configuration")?;

    match cli.command {
        Some(Commands::Query {
            query,
            model,
            temperature,
        }) => {
            handle_one_shot(&query, model.as_deref(), temperature, config).await?;
        }

        Some(Commands::Resources) => {
            resources::print_resources();
        }

        Some(Commands::Setup) => {
            run_setup(config)?;
        }

        None => {
            tui::run(config).await?;
        }
    }

    Ok(())
}

/// Answer a single question and print the reply
async fn handle_one_shot(
    query: &str,
    model: Option<&str>,
    temperature: Option<f32>,
    mut config: Config,
) -> Result<()> {
    let formatter = OutputFormatter::new();

    if let Some(name) = model {
        config.chat.model = GeminiModel::from_str(name)
            .with_context(|| format!("Unsupported model: {}", name))?;
    }
    if let Some(t) = temperature {
        config.chat.set_temperature(t);
    }

    let api_key = config
        .resolve_api_key()
        .context("No API key configured. Run `solace setup` or set GEMINI_API_KEY.")?;
    let client = GeminiClient::with_base_url(api_key, config.base_url.clone())?;
    let mut companion = Companion::new(client, config.chat);

    companion.append_message(MessageRole::User, query);
    match companion.request_completion(query).await {
        Ok(reply) => {
            formatter.print_reply(&reply, companion.settings().model);
        }
        Err(e) => {
            // The user's message stays appended; the failure is local
            formatter.print_error(&e.user_message());
        }
    }

    Ok(())
}

/// Interactive first-run configuration
fn run_setup(mut config: Config) -> Result<()> {
    let theme = ColorfulTheme::default();
    let formatter = OutputFormatter::new();

    let api_key: String = Password::with_theme(&theme)
        .with_prompt("Gemini API key (leave empty to keep the current value)")
        .allow_empty_password(true)
        .interact()?;
    if !api_key.trim().is_empty() {
        config.api_key = api_key.trim().to_string();
    }

    let model_names: Vec<&str> = GeminiModel::ALL.iter().map(|m| m.as_str()).collect();
    let default_index = GeminiModel::ALL
        .iter()
        .position(|m| *m == config.chat.model)
        .unwrap_or(0);
    let selected = Select::with_theme(&theme)
        .with_prompt("Choose Gemini model")
        .items(&model_names)
        .default(default_index)
        .interact()?;
    config.chat.model = GeminiModel::ALL[selected];

    let temperature: f32 = Input::with_theme(&theme)
        .with_prompt("Response style (0.0 focused — 1.0 creative)")
        .default(config.chat.temperature)
        .validate_with(|value: &f32| {
            if (0.0..=1.0).contains(value) {
                Ok(())
            } else {
                Err("must be between 0.0 and 1.0")
            }
        })
        .interact_text()?;
    config.chat.set_temperature(temperature);

    let speech_command: String = Input::with_theme(&theme)
        .with_prompt("Speech transcriber command (empty to disable speech input)")
        .allow_empty(true)
        .default(config.speech.command.clone().unwrap_or_default())
        .interact_text()?;
    config.speech.command = if speech_command.trim().is_empty() {
        None
    } else {
        Some(speech_command.trim().to_string())
    };

    config.save().context("Failed to save configuration")?;
    formatter.print_info(&format!(
        "Saved {}",
        Config::config_path()?.display()
    ));
    Ok(())
}

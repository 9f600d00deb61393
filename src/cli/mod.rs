//! CLI argument parsing using clap 4.x derive macros

use clap::{Parser, Subcommand};

/// A terminal AI companion for mental wellness and support
///
/// Runs the full-screen chat companion when invoked without a
/// subcommand. Requires a Gemini API key (config file or the
/// GEMINI_API_KEY environment variable).
#[derive(Parser, Debug)]
#[command(name = "solace")]
#[command(author, about, long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// The command to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print version information
    #[arg(long)]
    pub version: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ask the companion a single question and print the reply
    Query {
        /// The message for the companion
        query: String,

        /// Model to use (flash, pro)
        #[arg(short, long)]
        model: Option<String>,

        /// Response style in [0, 1]: higher is more creative
        #[arg(short, long)]
        temperature: Option<f32>,
    },

    /// Show emergency helplines and the therapist directory
    Resources,

    /// Interactive configuration setup
    Setup,
}

//! Solace core library
//!
//! Conversation-session state, the Gemini completion client, wellness
//! logs, CSV export, and the speech-capture seam. The binary crate adds
//! the CLI and the ratatui front-end on top.

pub mod config;
pub mod error;
pub mod export;
pub mod llm;
pub mod logger;
pub mod output;
pub mod session;
pub mod speech;
pub mod wellness;

pub use error::{Result, SolaceError};

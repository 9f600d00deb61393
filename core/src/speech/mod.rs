//! Speech capture seam
//!
//! Converts spoken audio into the same text form the chat accepts. The
//! capture backend is an external collaborator; the production
//! implementation shells out to a user-configured transcriber command
//! and reads the transcript from its stdout.

use crate::error::{Result, SolaceError};
use async_trait::async_trait;

/// External speech-to-text collaborator.
///
/// A capture either yields transcript text, fails because the audio was
/// unintelligible, or fails because the backend is unavailable. Either
/// failure is reported to the user and no message is appended.
#[async_trait]
pub trait SpeechCapture: Send + Sync {
    async fn capture(&self) -> Result<String>;
}

/// Transcriber backed by an external command.
///
/// The command records from the microphone, transcribes, and prints the
/// transcript to stdout. Empty stdout means the audio could not be
/// understood.
#[derive(Debug, Clone)]
pub struct CommandTranscriber {
    command: String,
}

impl CommandTranscriber {
    pub fn new(command: impl Into<String>) -> Self {
        CommandTranscriber {
            command: command.into(),
        }
    }
}

#[async_trait]
impl SpeechCapture for CommandTranscriber {
    async fn capture(&self) -> Result<String> {
        let parts = shell_words::split(&self.command).map_err(|e| {
            SolaceError::SpeechUnavailable {
                reason: format!("invalid transcriber command: {}", e),
            }
        })?;

        let (program, args) = parts
            .split_first()
            .ok_or_else(|| SolaceError::SpeechUnavailable {
                reason: "no transcriber command configured".to_string(),
            })?;

        crate::debug_log!("running transcriber: {}", program);
        let output = tokio::process::Command::new(program)
            .args(args)
            .output()
            .await
            .map_err(|e| SolaceError::SpeechUnavailable {
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(SolaceError::SpeechUnavailable {
                reason: if stderr.is_empty() {
                    format!("transcriber exited with {}", output.status)
                } else {
                    stderr
                },
            });
        }

        let transcript = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if transcript.is_empty() {
            return Err(SolaceError::SpeechUnintelligible);
        }
        Ok(transcript)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[tokio::test]
    async fn stdout_becomes_the_transcript() {
        let transcriber = CommandTranscriber::new("echo I feel better today");
        let text = transcriber.capture().await.unwrap();
        assert_eq!(text, "I feel better today");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn empty_stdout_is_unintelligible() {
        let transcriber = CommandTranscriber::new("true");
        let err = transcriber.capture().await.unwrap_err();
        assert!(matches!(err, SolaceError::SpeechUnintelligible));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn failing_command_is_unavailable() {
        let transcriber = CommandTranscriber::new("false");
        let err = transcriber.capture().await.unwrap_err();
        assert!(matches!(err, SolaceError::SpeechUnavailable { .. }));
    }

    #[tokio::test]
    async fn missing_program_is_unavailable() {
        let transcriber = CommandTranscriber::new("definitely-not-a-real-transcriber-binary");
        let err = transcriber.capture().await.unwrap_err();
        assert!(matches!(err, SolaceError::SpeechUnavailable { .. }));
    }

    #[tokio::test]
    async fn empty_command_is_unavailable() {
        let transcriber = CommandTranscriber::new("");
        let err = transcriber.capture().await.unwrap_err();
        assert!(matches!(err, SolaceError::SpeechUnavailable { .. }));
    }
}

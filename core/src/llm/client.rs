//! Gemini completion client
//!
//! Thin reqwest wrapper around the Google Generative Language API
//! (`models/{model}:generateContent`). Errors are surfaced verbatim to
//! the caller; there is no retry or backoff.

use crate::error::{Result, SolaceError};
use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client as HttpClient, StatusCode};
use serde::{Deserialize, Serialize};

/// Default API endpoint for the Generative Language API
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Supported Gemini model identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeminiModel {
    /// gemini-1.5-flash: fast, lower cost
    #[serde(rename = "gemini-1.5-flash")]
    Flash15,
    /// gemini-1.5-pro: higher quality, slower
    #[serde(rename = "gemini-1.5-pro")]
    Pro15,
}

impl GeminiModel {
    /// All supported models, in menu order
    pub const ALL: [GeminiModel; 2] = [GeminiModel::Flash15, GeminiModel::Pro15];

    /// The wire identifier used in request URLs
    pub fn as_str(&self) -> &'static str {
        match self {
            GeminiModel::Flash15 => "gemini-1.5-flash",
            GeminiModel::Pro15 => "gemini-1.5-pro",
        }
    }
}

impl std::str::FromStr for GeminiModel {
    type Err = SolaceError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "gemini-1.5-flash" | "flash" => Ok(GeminiModel::Flash15),
            "gemini-1.5-pro" | "pro" => Ok(GeminiModel::Pro15),
            other => Err(SolaceError::UnknownModel(other.to_string())),
        }
    }
}

impl std::fmt::Display for GeminiModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Seam for the external completion service.
///
/// The production implementation is [`GeminiClient`]; tests substitute a
/// scripted client.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Request a text completion for `prompt`. Returns the generated text
    /// or an error to surface to the user.
    async fn complete(&self, prompt: &str, model: GeminiModel, temperature: f32) -> Result<String>;
}

/// Client for the Google Generative Language API
#[derive(Clone)]
pub struct GeminiClient {
    http_client: HttpClient,
    base_url: String,
    api_key: String,
}

impl GeminiClient {
    /// Create a client against the default endpoint
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom endpoint (used by tests and proxies)
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(std::time::Duration::from_secs(300))
            .build()?;

        Ok(GeminiClient {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl CompletionClient for GeminiClient {
    async fn complete(&self, prompt: &str, model: GeminiModel, temperature: f32) -> Result<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url,
            model.as_str(),
            self.api_key
        );

        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: Some(GenerationConfig {
                temperature: Some(temperature.clamp(0.0, 1.0)),
                max_output_tokens: None,
            }),
        };

        let response = self
            .http_client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                let response_body: GenerateContentResponse = response.json().await?;
                let content = response_body
                    .candidates
                    .first()
                    .and_then(|c| c.content.parts.first())
                    .map(|p| p.text.clone());
                match content {
                    Some(text) if !text.is_empty() => Ok(text),
                    _ => Err(SolaceError::EmptyCompletion),
                }
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(SolaceError::Unauthorized {
                message: "check your API key".to_string(),
            }),
            StatusCode::TOO_MANY_REQUESTS => Err(SolaceError::RateLimited),
            status => {
                let error_body: Option<serde_json::Value> = response.json().await.ok();
                let message = error_body
                    .as_ref()
                    .and_then(|v| v.get("error").and_then(|e| e.get("message")))
                    .and_then(|v| v.as_str())
                    .unwrap_or("Unknown error")
                    .to_string();
                Err(SolaceError::Completion {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }
}

// Generative Language API wire types
#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(rename = "maxOutputTokens", skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn model_round_trips_through_str() {
        assert_eq!(
            GeminiModel::from_str("gemini-1.5-flash").unwrap(),
            GeminiModel::Flash15
        );
        assert_eq!(GeminiModel::from_str("pro").unwrap(), GeminiModel::Pro15);
        assert_eq!(GeminiModel::Pro15.to_string(), "gemini-1.5-pro");
        assert!(GeminiModel::from_str("gpt-4").is_err());
    }

    #[test]
    fn request_serializes_to_wire_shape() {
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: "hello".to_string(),
                }],
            }],
            generation_config: Some(GenerationConfig {
                temperature: Some(0.7),
                max_output_tokens: None,
            }),
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(json["generationConfig"]["temperature"], 0.7);
        assert!(json["generationConfig"].get("maxOutputTokens").is_none());
    }

    #[test]
    fn response_parses_candidate_text() {
        let raw = r#"{
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "I hear you"}]}}
            ]
        }"#;
        let parsed: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.candidates[0].content.parts[0].text, "I hear you");
    }

    #[test]
    fn empty_candidates_parse_cleanly() {
        let parsed: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.candidates.is_empty());
    }
}

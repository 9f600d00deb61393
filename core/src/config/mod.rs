//! Configuration management
//!
//! YAML configuration file with serde defaults, located under the
//! platform config directory. The API key can come from the file or the
//! `GEMINI_API_KEY` environment variable (the environment wins).

use crate::error::{Result, SolaceError};
use crate::llm::{client::DEFAULT_BASE_URL, GeminiModel};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file name
const CONFIG_FILE_NAME: &str = "solace.yaml";

/// Default config directory name
const CONFIG_DIR_NAME: &str = "solace";

/// Environment variable consulted before the config file's api_key
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Generation settings, adjustable at runtime from the UI
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ChatSettings {
    /// Which Gemini model to use
    #[serde(default = "default_model")]
    pub model: GeminiModel,

    /// Response style: higher is more creative, lower more focused
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

impl ChatSettings {
    /// Set temperature, clamped to the supported [0, 1] range
    pub fn set_temperature(&mut self, temperature: f32) {
        self.temperature = temperature.clamp(0.0, 1.0);
    }
}

impl Default for ChatSettings {
    fn default() -> Self {
        ChatSettings {
            model: default_model(),
            temperature: default_temperature(),
        }
    }
}

fn default_model() -> GeminiModel {
    GeminiModel::Flash15
}

fn default_temperature() -> f32 {
    0.7
}

/// Speech capture configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SpeechConfig {
    /// External transcriber command; its stdout is used as the
    /// transcript. Unset disables speech input.
    #[serde(default)]
    pub command: Option<String>,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Gemini API key ("" or "none" means unset)
    #[serde(default)]
    pub api_key: String,

    /// Base URL of the Generative Language API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Generation settings
    #[serde(default)]
    pub chat: ChatSettings,

    /// Speech capture settings
    #[serde(default)]
    pub speech: SpeechConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_key: String::new(),
            base_url: default_base_url(),
            chat: ChatSettings::default(),
            speech: SpeechConfig::default(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Config {
    /// Path of the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| SolaceError::InvalidConfig {
            message: "could not determine the config directory".to_string(),
        })?;
        Ok(dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Data directory for logs and exports
    pub fn data_dir() -> PathBuf {
        if let Some(mut dir) = dirs::data_dir() {
            dir.push(CONFIG_DIR_NAME);
            return dir;
        }
        if let Some(mut home) = dirs::home_dir() {
            home.push(format!(".local/share/{}", CONFIG_DIR_NAME));
            return home;
        }
        PathBuf::from(".")
    }

    /// Load the configuration, falling back to defaults when no file
    /// exists yet.
    pub fn load() -> Result<Config> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let raw = fs::read_to_string(path)?;
        serde_yml::from_str(&raw).map_err(|e| SolaceError::InvalidConfig {
            message: format!("{}: {}", path.display(), e),
        })
    }

    /// Write the configuration to its default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let raw = serde_yml::to_string(self).map_err(|e| SolaceError::InvalidConfig {
            message: e.to_string(),
        })?;
        fs::write(path, raw)?;
        crate::info_log!("saved config to {}", path.display());
        Ok(())
    }

    /// The API key to use: environment variable first, then the file.
    pub fn resolve_api_key(&self) -> Result<String> {
        let env_key = std::env::var(API_KEY_ENV).ok();
        self.resolve_api_key_with(env_key)
    }

    fn resolve_api_key_with(&self, env_key: Option<String>) -> Result<String> {
        if let Some(key) = env_key {
            let key = key.trim().to_string();
            if !key.is_empty() {
                return Ok(key);
            }
        }

        let key = self.api_key.trim();
        if key.is_empty() || key.eq_ignore_ascii_case("none") {
            return Err(SolaceError::MissingConfig {
                key: "api_key".to_string(),
            });
        }
        Ok(key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_flash_at_point_seven() {
        let config = Config::default();
        assert_eq!(config.chat.model, GeminiModel::Flash15);
        assert_eq!(config.chat.temperature, 0.7);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.speech.command.is_none());
    }

    #[test]
    fn temperature_is_clamped() {
        let mut settings = ChatSettings::default();
        settings.set_temperature(1.4);
        assert_eq!(settings.temperature, 1.0);
        settings.set_temperature(-0.2);
        assert_eq!(settings.temperature, 0.0);
    }

    #[test]
    fn config_round_trips_through_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("solace.yaml");

        let mut config = Config::default();
        config.api_key = "test-key".to_string();
        config.chat.model = GeminiModel::Pro15;
        config.chat.temperature = 0.3;
        config.speech.command = Some("transcribe --once".to_string());
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.api_key, "test-key");
        assert_eq!(loaded.chat.model, GeminiModel::Pro15);
        assert_eq!(loaded.chat.temperature, 0.3);
        assert_eq!(loaded.speech.command.as_deref(), Some("transcribe --once"));
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.yaml")).unwrap();
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn partial_yaml_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("solace.yaml");
        fs::write(&path, "api_key: abc\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.api_key, "abc");
        assert_eq!(config.chat.model, GeminiModel::Flash15);
    }

    #[test]
    fn env_key_wins_over_file_key() {
        let mut config = Config::default();
        config.api_key = "file-key".to_string();

        let resolved = config
            .resolve_api_key_with(Some("env-key".to_string()))
            .unwrap();
        assert_eq!(resolved, "env-key");

        let resolved = config.resolve_api_key_with(None).unwrap();
        assert_eq!(resolved, "file-key");
    }

    #[test]
    fn unset_key_is_a_missing_config_error() {
        let mut config = Config::default();
        config.api_key = "none".to_string();
        let err = config.resolve_api_key_with(None).unwrap_err();
        assert!(matches!(err, SolaceError::MissingConfig { .. }));
    }
}

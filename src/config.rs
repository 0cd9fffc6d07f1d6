//! Configuration management for the career copilot

use crate::error::{CopilotError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub data: DataConfig,
    pub matching: MatchingConfig,
    pub service: ServiceConfig,
    pub output: OutputConfig,
}

/// Locations of the FAQ and skill taxonomy documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    pub faqs_path: PathBuf,
    pub skills_path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Minimum fuzzy score (0-100) for a resume n-gram to count as
    /// evidence of a job-description skill.
    pub skill_threshold: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub model: String,
    pub api_base: String,
    /// Environment variable holding the API key.
    pub api_key_env: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("career-copilot");

        Self {
            data: DataConfig {
                faqs_path: data_dir.join("faqs.json"),
                skills_path: data_dir.join("skills.json"),
            },
            matching: MatchingConfig {
                skill_threshold: 85.0,
            },
            service: ServiceConfig {
                model: "llama-3.1-8b-instant".to_string(),
                api_base: "https://api.groq.com/openai/v1/chat/completions".to_string(),
                api_key_env: "GROQ_API_KEY".to_string(),
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_path())
    }

    /// Load from an explicit path, creating it with defaults when absent.
    pub fn load_from(config_path: PathBuf) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| CopilotError::Configuration(format!("Failed to parse config: {}", e)))?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(&config_path)?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    fn save_to(&self, config_path: &PathBuf) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| CopilotError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("career-copilot")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let config = Config::default();
        assert_eq!(config.matching.skill_threshold, 85.0);
        assert_eq!(config.service.model, "llama-3.1-8b-instant");
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config::default();
        let content = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&content).unwrap();
        assert_eq!(parsed.matching.skill_threshold, config.matching.skill_threshold);
        assert_eq!(parsed.data.faqs_path, config.data.faqs_path);
    }
}

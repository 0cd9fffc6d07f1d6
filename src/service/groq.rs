//! Groq-hosted OpenAI-compatible chat-completions client

use crate::config::ServiceConfig;
use crate::error::{CopilotError, Result};
use crate::service::ChatService;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize, Clone)]
struct ChatCompletionChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize, Clone)]
struct ChatCompletionResponse {
    choices: Vec<ChatCompletionChoice>,
}

#[derive(Clone)]
pub struct GroqClient {
    client: reqwest::Client,
    api_key: String,
    api_base: String,
    model: String,
}

impl GroqClient {
    pub fn new(api_key: String, model: String, api_base: String) -> Self {
        let client = reqwest::Client::new();
        Self {
            client,
            api_key,
            api_base,
            model,
        }
    }

    /// Build a client from config, reading the key from the configured
    /// environment variable. An empty key makes the client unavailable.
    pub fn from_config(config: &ServiceConfig) -> Self {
        let api_key = std::env::var(&config.api_key_env).unwrap_or_default();
        Self::new(api_key, config.model.clone(), config.api_base.clone())
    }

    pub fn available(&self) -> bool {
        !self.api_key.is_empty()
    }

    async fn chat(&self, prompt: &str) -> Result<String> {
        if !self.available() {
            return Err(CopilotError::Service(
                "No API key configured; set the key in your environment".to_string(),
            ));
        }

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".into(),
                content: prompt.to_string(),
            }],
        };

        let resp = self
            .client
            .post(&self.api_base)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let api_response: ChatCompletionResponse = resp.json().await?;
        api_response
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .ok_or_else(|| CopilotError::Service("Chat completion returned no choices".to_string()))
    }
}

impl ChatService for GroqClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.chat(prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_availability_tracks_api_key() {
        let with_key = GroqClient::new("k".into(), "m".into(), "http://localhost".into());
        assert!(with_key.available());

        let without_key = GroqClient::new(String::new(), "m".into(), "http://localhost".into());
        assert!(!without_key.available());
    }

    #[tokio::test]
    async fn test_unavailable_client_errors_without_network() {
        let client = GroqClient::new(String::new(), "m".into(), "http://localhost".into());
        let result = client.complete("hello").await;
        assert!(matches!(result, Err(CopilotError::Service(_))));
    }
}

use crate::error::*;
use crate::prompt::{SYSTEM_PROMPT, with_guidelines};
use crate::types::*;
use log::{debug, info};
use reqwest::blocking::Client;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_MAX_TOKENS: u32 = 1000;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Produces raw summary text for a prompt.
pub trait TextGenerator {
    fn generate(&self, prompt: &str) -> Result<String>;
}

/// Blocking chat-completions client.
pub struct ChatClient {
    base_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    http_client: Client,
}

impl ChatClient {
    /// Create a client builder
    pub fn builder() -> ChatClientBuilder {
        ChatClientBuilder::new()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    /// Sends the system message and `prompt` plus the formatting guidelines,
    /// returning the full response.
    pub fn complete(&self, prompt: &str) -> Result<CompletionResponse> {
        let request = CompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user(with_guidelines(prompt)),
            ],
            max_tokens: self.max_tokens,
        };

        let url = format!("{}/chat/completions", self.base_url);
        debug!("POST {url} model={} max_tokens={}", self.model, self.max_tokens);
        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text()?;
            return Err(GenerateError::RequestFailed {
                status: status.as_u16(),
                body,
            });
        }

        let completion = response.json::<CompletionResponse>()?;
        if let Some(usage) = &completion.usage {
            info!(
                "completion used {} tokens",
                usage.total_tokens.unwrap_or_default()
            );
        }
        Ok(completion)
    }
}

impl TextGenerator for ChatClient {
    fn generate(&self, prompt: &str) -> Result<String> {
        let completion = self.complete(prompt)?;
        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(GenerateError::EmptyResponse)
    }
}

#[derive(Default)]
pub struct ChatClientBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    model: Option<String>,
    max_tokens: Option<u32>,
    timeout: Option<Duration>,
}

impl ChatClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<ChatClient> {
        let api_key = self
            .api_key
            .filter(|key| !key.is_empty())
            .ok_or(GenerateError::MissingApiKey)?;
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let model = self.model.unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let max_tokens = self.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS);
        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);

        let http_client = Client::builder().timeout(timeout).build()?;

        Ok(ChatClient {
            base_url,
            api_key,
            model,
            max_tokens,
            http_client,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_without_key_fails() {
        assert!(matches!(
            ChatClient::builder().build(),
            Err(GenerateError::MissingApiKey)
        ));
        assert!(matches!(
            ChatClient::builder().api_key("").build(),
            Err(GenerateError::MissingApiKey)
        ));
    }

    #[test]
    fn builder_defaults() {
        let client = ChatClient::builder().api_key("sk-test").build().unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
        assert_eq!(client.model(), "gpt-4o-mini");
        assert_eq!(client.max_tokens(), 1000);
    }

    #[test]
    fn builder_overrides_and_trims_base_url() {
        let client = ChatClient::builder()
            .api_key("sk-test")
            .base_url("http://localhost:8080/v1/")
            .model("gpt-4o")
            .max_tokens(200)
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/v1");
        assert_eq!(client.model(), "gpt-4o");
        assert_eq!(client.max_tokens(), 200);
    }
}

use super::prompt;
use crate::config::StyleConfig;
use crate::kernel::state::ConversationState;
use crate::services::StyleRewriter;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Chat-completions backed answer rewriter.
#[derive(Clone)]
pub struct LLMService {
    client: Client,
    config: StyleConfig,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    max_tokens: u32,
    messages: Vec<ChatMessage>,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: Option<ChatMessage>,
}

impl LLMService {
    pub fn new(config: StyleConfig, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            config,
        }
    }

    pub fn config(&self) -> &StyleConfig {
        &self.config
    }

    fn request(&self, text: &str, state: &ConversationState, recommendation_moment: bool) -> ChatRequest<'_> {
        ChatRequest {
            model: &self.config.model,
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: prompt::system_prompt(self.config.style).to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt::user_prompt(text, state, recommendation_moment),
                },
            ],
        }
    }
}

#[async_trait]
impl StyleRewriter for LLMService {
    async fn rewrite(
        &self,
        text: &str,
        state: &ConversationState,
        recommendation_moment: bool,
    ) -> Result<String> {
        let url = format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'));
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.config.api_key)
            .json(&self.request(text, state, recommendation_moment))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow!("LLM Server Error: {}", response.status()));
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .map(|message| message.content.trim().to_string())
            .unwrap_or_default();

        if content.is_empty() {
            return Err(anyhow!("LLM returned an empty rewrite"));
        }
        Ok(content)
    }
}

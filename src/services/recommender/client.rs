use crate::services::EntropySource;
use crate::kernel::clarify::EntropyScores;
use crate::kernel::state::ConversationState;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

#[derive(Clone)]
pub struct RecommenderClient {
    client: Client,
    base_url: String,
}

#[derive(Serialize)]
struct EntropyRequest<'a> {
    state: &'a ConversationState,
}

#[derive(Deserialize)]
struct EntropyResponse {
    #[serde(default)]
    entropy: HashMap<String, f64>,
}

impl RecommenderClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl EntropySource for RecommenderClient {
    async fn entropy(&self, state: &ConversationState) -> Result<EntropyScores> {
        let response = self
            .client
            .post(format!("{}/entropy", self.base_url))
            .json(&EntropyRequest { state })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow!("Recommender Error: {}", response.status()));
        }

        let body: EntropyResponse = response.json().await?;
        Ok(EntropyScores::from_raw(body.entropy))
    }
}

use serde::Deserialize;
use std::env;
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_TEMPERATURE: f32 = 0.2;
pub const DEFAULT_MAX_TOKENS: u32 = 120;
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Register the rewriter writes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum ChatStyle {
    /// `C0`: neutral, concise, no emotion.
    #[default]
    #[serde(alias = "C0", alias = "c0")]
    Neutral,
    /// `C1`: warm and conversational, first person allowed.
    #[serde(alias = "C1", alias = "c1")]
    Warm,
}

impl ChatStyle {
    /// `C1` (any case, surrounding whitespace ignored) is warm; anything else neutral.
    pub fn from_condition(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("C1") {
            ChatStyle::Warm
        } else {
            ChatStyle::Neutral
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub api_key: String,
    pub style: ChatStyle,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub base_url: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            style: ChatStyle::Neutral,
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
        }
    }
}

/// Everything the reactor needs from the outside world. Built once and
/// handed to `Reactor::from_config`; the core never reads the environment.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Recommender base URL. Without it no clarifying questions are asked.
    pub recommender_url: Option<String>,
    /// Style rewriting. Without it answers are emitted as written.
    pub style: Option<StyleConfig>,
    pub request_timeout_ms: u64,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            recommender_url: None,
            style: None,
            request_timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl PolicyConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Reads `RECOMM_API`, `OPENAI_API_KEY`, `CHAT_STYLE`, `OPENAI_MODEL`,
    /// `OPENAI_TEMPERATURE`, `OPENAI_BASE_URL` and `POLICY_HTTP_TIMEOUT_MS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`PolicyConfig::from_env`] over an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let style = non_empty("OPENAI_API_KEY").map(|api_key| StyleConfig {
            api_key,
            style: ChatStyle::from_condition(&lookup("CHAT_STYLE").unwrap_or_default()),
            model: non_empty("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            temperature: non_empty("OPENAI_TEMPERATURE")
                .and_then(|t| t.trim().parse().ok())
                .unwrap_or(DEFAULT_TEMPERATURE),
            max_tokens: DEFAULT_MAX_TOKENS,
            base_url: non_empty("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
        });

        Self {
            recommender_url: non_empty("RECOMM_API"),
            style,
            request_timeout_ms: non_empty("POLICY_HTTP_TIMEOUT_MS")
                .and_then(|t| t.trim().parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_MS),
        }
    }
}

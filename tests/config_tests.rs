use atelier::config::{ChatStyle, PolicyConfig, DEFAULT_MODEL, DEFAULT_TEMPERATURE, DEFAULT_TIMEOUT_MS};
use std::collections::HashMap;

fn from_pairs(pairs: &[(&str, &str)]) -> PolicyConfig {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    PolicyConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn test_empty_environment_disables_collaborators() {
    let config = from_pairs(&[]);
    assert_eq!(config, PolicyConfig::default());
    assert!(config.recommender_url.is_none());
    assert!(config.style.is_none());
    assert_eq!(config.request_timeout_ms, DEFAULT_TIMEOUT_MS);
}

#[test]
fn test_api_key_enables_rewriting_with_defaults() {
    let config = from_pairs(&[("OPENAI_API_KEY", "sk-1"), ("RECOMM_API", "http://reco:5000")]);
    assert_eq!(config.recommender_url.as_deref(), Some("http://reco:5000"));

    let style = config.style.unwrap();
    assert_eq!(style.api_key, "sk-1");
    assert_eq!(style.style, ChatStyle::Neutral);
    assert_eq!(style.model, DEFAULT_MODEL);
    assert_eq!(style.temperature, DEFAULT_TEMPERATURE);
    assert_eq!(style.max_tokens, 120);
}

#[test]
fn test_chat_style_condition_parsing() {
    assert_eq!(ChatStyle::from_condition("C1"), ChatStyle::Warm);
    assert_eq!(ChatStyle::from_condition("  c1 "), ChatStyle::Warm);
    assert_eq!(ChatStyle::from_condition("C0"), ChatStyle::Neutral);
    assert_eq!(ChatStyle::from_condition(""), ChatStyle::Neutral);
    assert_eq!(ChatStyle::from_condition("warm"), ChatStyle::Neutral);
}

#[test]
fn test_bad_numbers_fall_back_to_defaults() {
    let config = from_pairs(&[
        ("OPENAI_API_KEY", "sk-1"),
        ("OPENAI_TEMPERATURE", "hot"),
        ("POLICY_HTTP_TIMEOUT_MS", "soon"),
        ("CHAT_STYLE", "C1"),
        ("OPENAI_MODEL", "gpt-4o-mini"),
    ]);
    let style = config.style.clone().unwrap();
    assert_eq!(style.temperature, DEFAULT_TEMPERATURE);
    assert_eq!(style.style, ChatStyle::Warm);
    assert_eq!(style.model, "gpt-4o-mini");
    assert_eq!(config.request_timeout_ms, DEFAULT_TIMEOUT_MS);
}

#[test]
fn test_blank_values_count_as_unset() {
    let config = from_pairs(&[("OPENAI_API_KEY", "  "), ("RECOMM_API", "")]);
    assert!(config.style.is_none());
    assert!(config.recommender_url.is_none());
}

#[test]
fn test_config_deserializes_with_defaults() {
    let config: PolicyConfig = serde_json::from_str(
        r#"{"recommender_url": "http://reco", "style": {"api_key": "k", "style": "C1"}}"#,
    )
    .unwrap();
    let style = config.style.unwrap();
    assert_eq!(style.style, ChatStyle::Warm);
    assert_eq!(style.model, DEFAULT_MODEL);
    assert_eq!(config.request_timeout_ms, DEFAULT_TIMEOUT_MS);
}

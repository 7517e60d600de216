use crate::config::ChatStyle;
use crate::kernel::intent::types::Dimension;
use crate::kernel::state::ConversationState;

/// Dimensions quoted back to the user, in this order. Cart and compare
/// targets are item references, not preferences, so they are left out.
const SUMMARY_DIMENSIONS: [Dimension; 5] = [
    Dimension::Type,
    Dimension::Fabric,
    Dimension::Pattern,
    Dimension::Size,
    Dimension::Color,
];

/// Values quoted per dimension.
const SUMMARY_VALUES: usize = 2;

pub const NO_PREFERENCES: &str = "no explicit preferences yet";

/// Factual summary of what the user has asked for, built from filled slots only.
pub fn slots_summary(state: &ConversationState) -> String {
    let parts: Vec<String> = SUMMARY_DIMENSIONS
        .iter()
        .filter_map(|&dimension| {
            let values = state.slots.get(dimension)?;
            if values.is_empty() {
                return None;
            }
            let shown = &values[..values.len().min(SUMMARY_VALUES)];
            Some(format!("{}={}", dimension, shown.join(", ")))
        })
        .collect();

    if parts.is_empty() {
        NO_PREFERENCES.to_string()
    } else {
        parts.join("; ")
    }
}

pub fn system_prompt(style: ChatStyle) -> &'static str {
    match style {
        ChatStyle::Warm => {
            "You are a helpful shopping assistant. \
             Rewrite the message to be warm, friendly, and conversational. \
             You may use first-person phrasing. \
             Do NOT invent products, features, policies, or any new facts. \
             Keep it short (1-2 sentences). No emojis."
        }
        ChatStyle::Neutral => {
            "You are a neutral shopping assistant. \
             Rewrite the message in a factual, concise style. \
             Do NOT express emotions. \
             Do NOT invent products, features, policies, or any new facts. \
             Keep it short (1 sentence if possible)."
        }
    }
}

pub fn user_prompt(text: &str, state: &ConversationState, recommendation_moment: bool) -> String {
    let extra = if recommendation_moment {
        format!(
            "\nAdd (or keep) a brief justification ONLY using the user's stated preferences. \
             Known preferences: {}. \
             If there are no preferences, mention you will ask a quick question to refine preferences.",
            slots_summary(state)
        )
    } else {
        String::new()
    };
    format!("Original message:\n{}\n{}", text, extra)
}

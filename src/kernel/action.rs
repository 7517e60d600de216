use serde::{Deserialize, Serialize};

/// What the presentation layer is told to do this turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Action {
    /// Show this text to the user.
    Answer { text: String },
    /// Fetch and render product recommendations now. Carries no products.
    Recommend,
}

impl Action {
    pub fn answer(text: impl Into<String>) -> Self {
        Action::Answer { text: text.into() }
    }

    pub fn is_recommend(&self) -> bool {
        matches!(self, Action::Recommend)
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Action::Answer { text } => Some(text),
            Action::Recommend => None,
        }
    }
}

use crate::kernel::intent::types::{Dimension, Intent};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TelemetryEvent {
    TurnCompleted {
        intent: Intent,
        elapsed_ms: u64,
        actions: usize,
    },

    Recommendation {
        trigger: RecommendTrigger,
    },

    Clarification {
        dimension: Dimension,
    },

    /// Entropy fetch failed or no recommender is configured.
    EntropyUnavailable,

    Rewrite {
        outcome: RewriteOutcome,
        recommendation_moment: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendTrigger {
    /// The user stated or refined a preference.
    Preference,
    /// A refusal after a long enough pause.
    Pivot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RewriteOutcome {
    Applied,
    /// The rewriter errored; the original text was kept.
    Failed,
}

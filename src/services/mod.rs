//! External collaborators the reactor calls mid-turn.
//!
//! Both are fallible and both are optional to the turn: the reactor logs
//! their errors and carries on with a documented fallback.

pub mod llm;
pub mod recommender;

use crate::kernel::clarify::EntropyScores;
use crate::kernel::state::ConversationState;
use anyhow::Result;
use async_trait::async_trait;

/// Scores how informative each unfilled dimension would be to ask about.
#[async_trait]
pub trait EntropySource: Send + Sync {
    async fn entropy(&self, state: &ConversationState) -> Result<EntropyScores>;
}

/// Restyles an answer without changing what it says.
#[async_trait]
pub trait StyleRewriter: Send + Sync {
    /// `recommendation_moment` marks the justification that follows a
    /// `Recommend` action; rewriters may ground it in the stated preferences.
    async fn rewrite(
        &self,
        text: &str,
        state: &ConversationState,
        recommendation_moment: bool,
    ) -> Result<String>;
}

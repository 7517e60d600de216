use super::intent::types::{Entity, Intent};
use super::state::ConversationState;
use tracing::debug;

/// Merges extracted entities into the conversation's preference slots.
pub struct SlotFiller;

impl SlotFiller {
    /// 1. Every dimension `intent` cares about is introduced (empty) if absent.
    /// 2. Entity values are appended under dimensions that are already tracked,
    ///    skipping duplicates.
    ///
    /// Entities for dimensions no intent has introduced yet are dropped, so an
    /// extractor can never widen the conversation's scope on its own.
    pub fn fill(state: &mut ConversationState, intent: Intent, entities: &[Entity]) {
        for &dimension in intent.dimensions() {
            if state.slots.introduce(dimension) {
                debug!(%dimension, %intent, "slot introduced");
            }
        }

        for entity in entities {
            let Some(dimension) = entity.dimension() else {
                debug!(label = %entity.label, "entity label is not a known dimension");
                continue;
            };
            if !state.slots.contains(dimension) {
                debug!(%dimension, "entity for untracked dimension ignored");
                continue;
            }
            state.slots.record(dimension, &entity.value);
        }
    }
}

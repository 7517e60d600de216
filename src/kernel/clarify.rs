use super::action::Action;
use super::intent::types::Dimension;
use super::phrases;
use super::state::ConversationState;
use rand::Rng;
use std::collections::HashMap;

/// Informativeness score per dimension, as computed by the recommender.
/// Missing dimensions count as 0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntropyScores {
    scores: HashMap<Dimension, f64>,
}

impl EntropyScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, dimension: Dimension, score: f64) {
        self.scores.insert(dimension, score);
    }

    pub fn get(&self, dimension: Dimension) -> f64 {
        self.scores.get(&dimension).copied().unwrap_or(0.0)
    }

    /// Keeps scores whose key names a known dimension; everything else is dropped.
    pub fn from_raw(raw: HashMap<String, f64>) -> Self {
        let scores = raw
            .into_iter()
            .filter_map(|(name, score)| name.parse::<Dimension>().ok().map(|d| (d, score)))
            .collect();
        Self { scores }
    }
}

impl FromIterator<(Dimension, f64)> for EntropyScores {
    fn from_iter<I: IntoIterator<Item = (Dimension, f64)>>(iter: I) -> Self {
        Self {
            scores: iter.into_iter().collect(),
        }
    }
}

pub struct ClarificationSelector;

impl ClarificationSelector {
    /// Unfilled dimension with the strictly highest positive entropy.
    /// Candidates are scanned in slot introduction order and a later one must
    /// beat the current best outright, so ties go to the earliest introduced.
    pub fn most_informative(
        state: &ConversationState,
        entropy: &EntropyScores,
    ) -> Option<(Dimension, f64)> {
        let mut best: Option<(Dimension, f64)> = None;
        for dimension in state.slots.unfilled() {
            let score = entropy.get(dimension);
            let floor = best.map(|(_, s)| s).unwrap_or(0.0);
            if score > floor {
                best = Some((dimension, score));
            }
        }
        best
    }

    /// One clarifying question about the most informative unfilled dimension,
    /// or nothing when no unfilled dimension has positive entropy.
    pub fn select<R: Rng + ?Sized>(
        state: &ConversationState,
        entropy: &EntropyScores,
        rng: &mut R,
    ) -> Option<Action> {
        Self::most_informative(state, entropy)
            .map(|(dimension, _)| Action::answer(phrases::clarifying_question(rng, dimension)))
    }
}

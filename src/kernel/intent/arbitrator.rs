use super::types::Intent;
use crate::error::PolicyError;
use strum::EnumCount;

/// Picks the single intent the turn is handled under.
pub struct IntentArbitrator;

impl IntentArbitrator {
    /// Arg-max over the classifier's distribution. On ties the lowest index
    /// wins.
    ///
    /// Every score must be finite: the distribution is logged verbatim into
    /// the turn and has to survive a JSON round trip. An index outside the
    /// closed intent set fails the turn instead of falling back to a default
    /// intent.
    pub fn resolve(distribution: &[f32]) -> Result<Intent, PolicyError> {
        let mut best: Option<(usize, f32)> = None;
        for (index, &score) in distribution.iter().enumerate() {
            if !score.is_finite() {
                return Err(PolicyError::NonFiniteScore { index });
            }
            match best {
                Some((_, top)) if score <= top => {}
                _ => best = Some((index, score)),
            }
        }

        let (index, _) = best.ok_or(PolicyError::EmptyDistribution)?;
        Intent::from_repr(index).ok_or(PolicyError::InvalidIntent {
            index,
            known: Intent::COUNT,
        })
    }
}

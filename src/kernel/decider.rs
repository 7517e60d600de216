use super::action::Action;
use super::intent::types::{Intent, IntentClass};
use super::phrases;
use rand::Rng;

/// Idle time after which a refusal pivots into a recommendation.
pub const RECOMMEND_AFTER_SECS: f64 = 30.0;

/// Fixed per-intent action policy.
pub struct ActionDecider;

/// How a refusal is followed up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefusalFollowUp {
    /// Offer to filter the catalog. The conversation stays where it is.
    OfferFilter,
    /// Switch topic and recommend instead.
    Pivot,
}

impl RefusalFollowUp {
    pub fn for_elapsed(elapsed_secs: f64) -> Self {
        if elapsed_secs >= RECOMMEND_AFTER_SECS {
            RefusalFollowUp::Pivot
        } else {
            RefusalFollowUp::OfferFilter
        }
    }
}

impl ActionDecider {
    /// Actions for one turn. Whenever the result contains `Recommend`, the
    /// very next action is its justification `Answer`.
    pub fn decide<R: Rng + ?Sized>(intent: Intent, elapsed_secs: f64, rng: &mut R) -> Vec<Action> {
        let (mut actions, recommend) = match intent.class() {
            IntentClass::Refusal => {
                let apology = phrases::pick(rng, phrases::refusals(intent)).map(Action::answer);
                match RefusalFollowUp::for_elapsed(elapsed_secs) {
                    RefusalFollowUp::Pivot => {
                        let pivot = phrases::pick(rng, phrases::INSTEAD).map(Action::answer);
                        (apology.into_iter().chain(pivot).collect(), true)
                    }
                    RefusalFollowUp::OfferFilter => {
                        let offer = Action::answer(phrases::CAN_ASSIST);
                        (apology.into_iter().chain([offer]).collect(), false)
                    }
                }
            }
            IntentClass::Preference => (Vec::new(), true),
            IntentClass::Other => (Vec::new(), false),
        };

        if recommend {
            actions.extend(Self::recommendation(rng));
        }
        actions
    }

    /// The `Recommend` signal and its justification, always as a pair.
    fn recommendation<R: Rng + ?Sized>(rng: &mut R) -> [Action; 2] {
        let justification = phrases::pick(rng, phrases::RECOMMEND).unwrap_or(phrases::RECOMMEND[0]);
        [Action::Recommend, Action::answer(justification)]
    }
}

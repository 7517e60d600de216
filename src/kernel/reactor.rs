use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use super::action::Action;
use super::clarify::ClarificationSelector;
use super::decider::ActionDecider;
use super::intent::arbitrator::IntentArbitrator;
use super::intent::types::{Entity, Intent, IntentClass};
use super::phrases;
use super::rewrite;
use super::slots::SlotFiller;
use super::state::{ConversationState, Turn, Utterance};
use super::telemetry::event::{RecommendTrigger, TelemetryEvent};
use super::telemetry::recorder::TelemetryRecorder;
use super::time::{Clock, SystemClock};

use crate::config::PolicyConfig;
use crate::error::PolicyError;
use crate::services::llm::LLMService;
use crate::services::recommender::RecommenderClient;
use crate::services::{EntropySource, StyleRewriter};

/// Handles one user utterance at a time against a caller-owned conversation.
pub struct Reactor {
    entropy: Option<Box<dyn EntropySource>>,
    rewriter: Option<Box<dyn StyleRewriter>>,
    clock: Box<dyn Clock>,
    rng: StdRng,
    pub telemetry: TelemetryRecorder,
}

impl Default for Reactor {
    fn default() -> Self {
        Self::new()
    }
}

impl Reactor {
    /// No collaborators: no clarifying questions and no rewriting.
    pub fn new() -> Self {
        Self {
            entropy: None,
            rewriter: None,
            clock: Box::new(SystemClock),
            rng: StdRng::from_entropy(),
            telemetry: TelemetryRecorder::new(),
        }
    }

    /// Wires the HTTP collaborators named in `config`.
    pub fn from_config(config: &PolicyConfig) -> Self {
        let timeout = config.request_timeout();
        let mut reactor = Self::new();
        if let Some(url) = &config.recommender_url {
            reactor.entropy = Some(Box::new(RecommenderClient::new(url.as_str(), timeout)));
        }
        if let Some(style) = &config.style {
            reactor.rewriter = Some(Box::new(LLMService::new(style.clone(), timeout)));
        }
        info!(
            recommender = reactor.entropy.is_some(),
            rewriting = reactor.rewriter.is_some(),
            "Reactor configured"
        );
        reactor
    }

    pub fn with_entropy_source(mut self, source: impl EntropySource + 'static) -> Self {
        self.entropy = Some(Box::new(source));
        self
    }

    pub fn with_rewriter(mut self, rewriter: impl StyleRewriter + 'static) -> Self {
        self.rewriter = Some(Box::new(rewriter));
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Fixes the random phrase choices, for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Processes one utterance and returns the actions to render.
    ///
    /// Both the user turn and the system turn are appended to `state`. The
    /// only errors are a distribution that does not resolve to a known
    /// intent; those are raised before `state` is touched.
    pub async fn answer(
        &mut self,
        state: &mut ConversationState,
        text: &str,
        distribution: &[f32],
        entities: &[Entity],
    ) -> Result<Vec<Action>, PolicyError> {
        // === 1. RESOLVE ===
        let intent = IntentArbitrator::resolve(distribution)?;
        let now = self.clock.now();
        let elapsed_secs = state.elapsed_since_last_turn(now);
        debug!(%intent, elapsed_secs, "Turn received");

        // === 2. RECORD (user) ===
        state.push_turn(Turn::user(
            now,
            Utterance {
                text: text.to_string(),
                intent,
                distribution: distribution.to_vec(),
                entities: entities.to_vec(),
            },
        ));

        // === 3. FILL ===
        SlotFiller::fill(state, intent, entities);

        // === 4. DECIDE ===
        let mut actions = ActionDecider::decide(intent, elapsed_secs, &mut self.rng);

        // === 5. CLARIFY ===
        if actions.iter().any(Action::is_recommend) {
            self.telemetry.record(TelemetryEvent::Recommendation {
                trigger: match intent.class() {
                    IntentClass::Refusal => RecommendTrigger::Pivot,
                    IntentClass::Preference | IntentClass::Other => RecommendTrigger::Preference,
                },
            });
            actions.extend(self.clarify(state).await);
        }

        // === 6. RESTYLE ===
        if let Some(rewriter) = &self.rewriter {
            actions = rewrite::restyle(actions, state, rewriter.as_ref(), &mut self.telemetry).await;
        }

        // === 7. RECORD (system) ===
        state.push_turn(Turn::system(self.clock.now(), &actions));

        self.record_turn(intent, elapsed_secs, actions.len());
        Ok(actions)
    }

    /// Clarifying question for the current state, if the recommender can
    /// score it. Any recommender failure just means no question this turn.
    async fn clarify(&mut self, state: &ConversationState) -> Option<Action> {
        let Some(source) = &self.entropy else {
            debug!("No recommender configured, skipping clarification");
            self.telemetry.record(TelemetryEvent::EntropyUnavailable);
            return None;
        };

        let scores = match source.entropy(state).await {
            Ok(scores) => scores,
            Err(e) => {
                warn!("Entropy fetch failed, skipping clarification: {}", e);
                self.telemetry.record(TelemetryEvent::EntropyUnavailable);
                return None;
            }
        };

        let (dimension, score) = ClarificationSelector::most_informative(state, &scores)?;
        debug!(%dimension, score, "Clarifying");
        self.telemetry.record(TelemetryEvent::Clarification { dimension });
        Some(Action::answer(phrases::clarifying_question(&mut self.rng, dimension)))
    }

    fn record_turn(&mut self, intent: Intent, elapsed_secs: f64, actions: usize) {
        self.telemetry.record(TelemetryEvent::TurnCompleted {
            intent,
            elapsed_ms: (elapsed_secs * 1000.0) as u64,
            actions,
        });
    }
}

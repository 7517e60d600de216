use super::action::Action;
use super::state::ConversationState;
use super::telemetry::event::{RewriteOutcome, TelemetryEvent};
use super::telemetry::recorder::TelemetryRecorder;
use crate::services::StyleRewriter;
use tracing::warn;

/// One flag per action: true only for the first `Answer` after a
/// `Recommend`. The flag is armed by `Recommend` and spent by the next answer.
pub fn recommendation_moments(actions: &[Action]) -> Vec<bool> {
    actions
        .iter()
        .scan(false, |armed, action| {
            let moment = match action {
                Action::Recommend => {
                    *armed = true;
                    false
                }
                Action::Answer { .. } => std::mem::replace(armed, false),
            };
            Some(moment)
        })
        .collect()
}

/// Runs every answer through `rewriter`. `Recommend` actions pass through
/// untouched and ordering is preserved. A failed rewrite keeps the original
/// text; this never fails the turn.
pub async fn restyle(
    actions: Vec<Action>,
    state: &ConversationState,
    rewriter: &dyn StyleRewriter,
    telemetry: &mut TelemetryRecorder,
) -> Vec<Action> {
    let moments = recommendation_moments(&actions);
    let mut restyled = Vec::with_capacity(actions.len());

    for (action, recommendation_moment) in actions.into_iter().zip(moments) {
        let text = match action {
            Action::Answer { text } => text,
            Action::Recommend => {
                restyled.push(Action::Recommend);
                continue;
            }
        };

        let (text, outcome) = match rewriter.rewrite(&text, state, recommendation_moment).await {
            Ok(rewritten) if !rewritten.trim().is_empty() => (rewritten, RewriteOutcome::Applied),
            Ok(_) => {
                warn!("Style rewrite came back empty, keeping original text");
                (text, RewriteOutcome::Failed)
            }
            Err(e) => {
                warn!("Style rewrite failed, keeping original text: {}", e);
                (text, RewriteOutcome::Failed)
            }
        };
        telemetry.record(TelemetryEvent::Rewrite { outcome, recommendation_moment });
        restyled.push(Action::Answer { text });
    }

    restyled
}

use super::event::{RecommendTrigger, RewriteOutcome, TelemetryEvent};
use crate::kernel::intent::types::{Dimension, Intent};
use std::collections::{HashMap, VecDeque};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TelemetrySnapshot {
    pub turn_stats: TurnStats,
    pub recommendation_stats: RecommendationStats,
    pub rewrite_stats: RewriteStats,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TurnStats {
    pub turns: u64,
    pub by_intent: HashMap<Intent, u64>,
    pub total_actions: u64,
    pub avg_elapsed_ms: f64,
    pub max_elapsed_ms: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecommendationStats {
    pub direct: u64,
    pub pivots: u64,
    pub clarifications: u64,
    pub clarified_dimensions: HashMap<Dimension, u64>,
    pub entropy_unavailable: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RewriteStats {
    pub applied: u64,
    pub failed: u64,
    pub recommendation_moments: u64,
}

pub fn compute_snapshot(events: &VecDeque<TelemetryEvent>) -> TelemetrySnapshot {
    let mut snap = TelemetrySnapshot::default();
    let mut total_elapsed_ms = 0u64;

    for event in events {
        match event {
            TelemetryEvent::TurnCompleted { intent, elapsed_ms, actions } => {
                snap.turn_stats.turns += 1;
                *snap.turn_stats.by_intent.entry(*intent).or_insert(0) += 1;
                snap.turn_stats.total_actions += *actions as u64;
                total_elapsed_ms += elapsed_ms;
                snap.turn_stats.max_elapsed_ms = snap.turn_stats.max_elapsed_ms.max(*elapsed_ms);
            }
            TelemetryEvent::Recommendation { trigger } => match trigger {
                RecommendTrigger::Preference => snap.recommendation_stats.direct += 1,
                RecommendTrigger::Pivot => snap.recommendation_stats.pivots += 1,
            },
            TelemetryEvent::Clarification { dimension } => {
                snap.recommendation_stats.clarifications += 1;
                *snap
                    .recommendation_stats
                    .clarified_dimensions
                    .entry(*dimension)
                    .or_insert(0) += 1;
            }
            TelemetryEvent::EntropyUnavailable => snap.recommendation_stats.entropy_unavailable += 1,
            TelemetryEvent::Rewrite { outcome, recommendation_moment } => {
                match outcome {
                    RewriteOutcome::Applied => snap.rewrite_stats.applied += 1,
                    RewriteOutcome::Failed => snap.rewrite_stats.failed += 1,
                }
                if *recommendation_moment {
                    snap.rewrite_stats.recommendation_moments += 1;
                }
            }
        }
    }

    if snap.turn_stats.turns > 0 {
        snap.turn_stats.avg_elapsed_ms = total_elapsed_ms as f64 / snap.turn_stats.turns as f64;
    }

    snap
}

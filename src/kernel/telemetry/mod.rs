//! Turn telemetry.
//!
//! # SAFETY INVARIANT
//! Telemetry is a write-only side channel. Decision logic (decider,
//! selector, slot filler) must never read it.
//!
//! # PRIVACY INVARIANT
//! Events carry intents, dimensions and counts only. Never utterance text,
//! entity values or answer text.

pub mod event;
pub mod metrics;
pub mod recorder;

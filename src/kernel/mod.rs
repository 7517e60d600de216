pub mod action;
pub mod clarify;
pub mod decider;
pub mod intent;
pub mod phrases;
pub mod reactor;
pub mod rewrite;
pub mod slots;
pub mod state;
pub mod telemetry;
pub mod time;

pub mod arbitrator;
pub mod types;

pub use types::{Dimension, Entity, Intent, IntentClass};

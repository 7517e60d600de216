pub mod config;
pub mod error;
pub mod kernel;
pub mod services;

pub use config::PolicyConfig;
pub use error::PolicyError;
pub use kernel::action::Action;
pub use kernel::intent::{Dimension, Entity, Intent};
pub use kernel::reactor::Reactor;
pub use kernel::state::ConversationState;

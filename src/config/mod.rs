//! Configuration module for the token forge application.

mod debug; // Private: use crate::config::DEBUG_FLAGS, not crate::config::debug::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod deploy;
pub mod form;

// Re-export commonly used items
pub use deploy::{DEPLOY, DeployConfig};
pub use form::FORM;

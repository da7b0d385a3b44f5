pub mod address;
pub mod core;
pub mod messages;
pub mod state;
pub mod timer;

// Re-export key components
pub use address::{AddressSource, RandomAddressSource};
pub use self::core::DeploySimulator;
pub use messages::DeployTrigger;
pub use state::DeployPhase;
pub use timer::DeployTimer;

// Domain models for the token forge
// These modules contain pure logic independent of UI/visualization

pub mod deployment;
pub mod preview;
pub mod token_config;

// Re-export key types for convenience
pub use deployment::{AddressError, ContractAddress, DeploymentResult};
pub use preview::{FeatureBadge, TokenPreview};
pub use token_config::{ConfigError, ConfigUpdate, Decimals, Feature, TokenConfig};

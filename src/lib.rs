#![allow(clippy::collapsible_if)]

// Core modules
pub mod config;
pub mod engine;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use engine::{AddressSource, DeployPhase, DeploySimulator, DeployTrigger, RandomAddressSource};
pub use models::{ContractAddress, Decimals, DeploymentResult, Feature, TokenConfig, TokenPreview};
pub use ui::TokenForgeApp;
pub use ui::app::AppSettings;
pub use utils::app_time;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Simulated deployment time in milliseconds
    #[arg(long, default_value_t = config::DEPLOY.delay_ms)]
    pub deploy_delay_ms: u64,

    /// Seed the address generator for reproducible demo runs
    #[arg(long)]
    pub seed: Option<u64>,
}

impl From<&Cli> for AppSettings {
    fn from(cli: &Cli) -> Self {
        Self {
            deploy_delay_ms: cli.deploy_delay_ms,
            seed: cli.seed,
        }
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext, settings: AppSettings) -> Box<dyn eframe::App> {
    Box::new(TokenForgeApp::new(cc, &settings))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_to_the_standard_delay() {
        let cli = Cli::parse_from(["token-forge"]);
        let settings = AppSettings::from(&cli);
        assert_eq!(settings, AppSettings::default());
        assert_eq!(settings.deploy_delay_ms, 3_000);
    }

    #[test]
    fn cli_overrides_delay_and_seed() {
        let cli = Cli::parse_from(["token-forge", "--deploy-delay-ms", "250", "--seed", "11"]);
        let settings = AppSettings::from(&cli);
        assert_eq!(settings.deploy_delay_ms, 250);
        assert_eq!(settings.seed, Some(11));
        assert_eq!(settings.build_simulator().delay().as_millis(), 250);
    }
}

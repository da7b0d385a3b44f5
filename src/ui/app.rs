use eframe::{Frame, egui};

use crate::config::DEPLOY;
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::engine::{DeploySimulator, RandomAddressSource};
use crate::models::{TokenConfig, TokenPreview};
use crate::ui::utils::setup_custom_visuals;
use crate::utils::app_time::{AppInstant, millis};

/// Startup options for the GUI, usually filled from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSettings {
    pub deploy_delay_ms: u64,
    /// Fixed seed for the address generator; entropy when `None`
    pub seed: Option<u64>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            deploy_delay_ms: DEPLOY.delay_ms,
            seed: None,
        }
    }
}

impl AppSettings {
    pub fn build_simulator(&self) -> DeploySimulator {
        let source = match self.seed {
            Some(seed) => RandomAddressSource::seeded(seed),
            None => RandomAddressSource::from_entropy(),
        };
        DeploySimulator::new(source, millis(self.deploy_delay_ms))
    }
}

/// Application root. Owns the configuration and the simulator; the panels
/// only ever see snapshots of them.
pub struct TokenForgeApp {
    pub(super) config: TokenConfig,
    /// Derived from `config`, rebuilt on every edit
    pub(super) preview: TokenPreview,
    pub(super) simulator: DeploySimulator,
    /// When the address was last copied (drives the "Copied" acknowledgement)
    pub(super) copied_at: Option<AppInstant>,
}

impl TokenForgeApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: &AppSettings) -> Self {
        setup_custom_visuals(&cc.egui_ctx);

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("Starting with {:?}", settings);
        }

        Self::with_simulator(settings.build_simulator())
    }

    /// Fresh form (no persisted state) around the given simulator.
    pub fn with_simulator(simulator: DeploySimulator) -> Self {
        let config = TokenConfig::default();
        Self {
            preview: TokenPreview::from_config(&config),
            config,
            simulator,
            copied_at: None,
        }
    }

    pub fn config(&self) -> &TokenConfig {
        &self.config
    }

    pub fn simulator(&self) -> &DeploySimulator {
        &self.simulator
    }
}

impl eframe::App for TokenForgeApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!("Application shutdown complete ({}).", self.simulator.phase());
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // Complete a pending deployment before drawing so the confirmation
        // shows up on the same frame the deadline passes.
        self.poll_deploy(ctx);

        self.render_header(ctx);
        self.render_footer(ctx);
        self.render_central_panel(ctx);
        self.render_confirmation(ctx);
    }
}

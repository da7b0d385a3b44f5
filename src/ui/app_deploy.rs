use eframe::egui;
use std::time::Duration;

use crate::config::DEPLOY;
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::models::{ConfigUpdate, TokenPreview};
use crate::ui::app::TokenForgeApp;
use crate::utils::app_time::{AppInstant, millis, now};

impl TokenForgeApp {
    pub(super) fn apply_config_update(&mut self, update: ConfigUpdate) {
        self.config.apply(update);
        self.preview = TokenPreview::from_config(&self.config);

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_preview_updates {
            log::info!("Preview updated:\n{}", self.preview.code_snippet);
        }
    }

    pub(super) fn start_deploy(&mut self) {
        if self.simulator.trigger(&self.config, now()).is_started() {
            self.copied_at = None;
        }
    }

    /// Advances a pending deployment and keeps the frame loop awake until
    /// its deadline.
    pub(super) fn poll_deploy(&mut self, ctx: &egui::Context) {
        let now = now();
        if self.simulator.poll(now).is_some() {
            ctx.request_repaint();
        } else if let Some(remaining) = self.simulator.remaining(now) {
            ctx.request_repaint_after(remaining);
        }
    }

    pub(super) fn copy_address(&mut self, ctx: &egui::Context) {
        let Some(result) = self.simulator.result() else {
            return;
        };
        ctx.copy_text(result.address.to_string());
        self.copied_at = Some(now());

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("Copied {} to clipboard", result.address);
        }
    }

    /// Whether the "Copied" acknowledgement is still showing. Schedules the
    /// repaint that hides it.
    pub(super) fn copied_ack_active(&self, ctx: &egui::Context) -> bool {
        match copied_ack_remaining(self.copied_at, now()) {
            Some(left) => {
                ctx.request_repaint_after(left);
                true
            }
            None => false,
        }
    }

    pub(super) fn dismiss_deployment(&mut self) {
        if self.simulator.dismiss() {
            self.copied_at = None;
        }
    }
}

/// Time left on the copy acknowledgement, `None` once it has expired.
pub(super) fn copied_ack_remaining(copied_at: Option<AppInstant>, now: AppInstant) -> Option<Duration> {
    let left = millis(DEPLOY.copied_ack_ms).saturating_sub(now.saturating_duration_since(copied_at?));
    (!left.is_zero()).then_some(left)
}

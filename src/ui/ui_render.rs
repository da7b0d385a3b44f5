use eframe::egui::{
    Align, CentralPanel, Context, Frame, Id, Layout, Margin, Modal, RichText, ScrollArea,
    TopBottomPanel, Ui,
};

use crate::config::DEPLOY;
use crate::ui::ui_panels::{
    ConfirmationEvent, ConfirmationPanel, FormEvent, Panel, PreviewPanel, TokenFormPanel,
};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::card_frame;

use super::app::TokenForgeApp;

/// Below this width the form and the preview stack vertically
const STACKED_LAYOUT_WIDTH: f32 = 720.0;

impl TokenForgeApp {
    pub(super) fn render_header(&self, ctx: &Context) {
        let frame = Frame::new()
            .fill(UI_CONFIG.colors.background)
            .inner_margin(Margin::symmetric(24, 14));
        TopBottomPanel::top("header").frame(frame).show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("◆")
                        .size(20.0)
                        .color(UI_CONFIG.colors.accent),
                );
                ui.label(
                    RichText::new(UI_TEXT.brand)
                        .size(18.0)
                        .strong()
                        .color(UI_CONFIG.colors.heading),
                );
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(
                        RichText::new(UI_TEXT.network_status)
                            .small()
                            .monospace()
                            .color(UI_CONFIG.colors.success),
                    );
                });
            });
        });
    }

    pub(super) fn render_footer(&self, ctx: &Context) {
        let frame = Frame::new()
            .fill(UI_CONFIG.colors.background)
            .inner_margin(Margin::symmetric(24, 10));
        TopBottomPanel::bottom("footer").frame(frame).show(ctx, |ui| {
            ui.vertical_centered(|ui| ui.label_subdued(UI_TEXT.footer));
        });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let mut form_events = Vec::new();
        let frame = Frame::new()
            .fill(UI_CONFIG.colors.background)
            .inner_margin(Margin::symmetric(24, 12));

        CentralPanel::default().frame(frame).show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                render_hero(ui);
                ui.add_space(24.0);

                let mut form = TokenFormPanel::new(&self.config, self.simulator.is_deploying());
                let preview = PreviewPanel::new(&self.preview);
                let width = ui.available_width().min(UI_CONFIG.max_content_width);

                if width < STACKED_LAYOUT_WIDTH {
                    form_events = card_frame().show(ui, |ui| form.render(ui)).inner;
                    ui.add_space(24.0);
                    preview.show(ui);
                } else {
                    ui.set_max_width(width);
                    ui.columns(2, |cols| {
                        form_events = card_frame().show(&mut cols[0], |ui| form.render(ui)).inner;
                        preview.show(&mut cols[1]);
                    });
                }
            });
        });

        for event in form_events {
            match event {
                FormEvent::Update(update) => self.apply_config_update(update),
                FormEvent::Deploy => self.start_deploy(),
            }
        }
    }

    /// The "Token Deployed!" modal, present only while a result exists.
    pub(super) fn render_confirmation(&mut self, ctx: &Context) {
        let copied = self.copied_ack_active(ctx);
        let Some(result) = self.simulator.result() else {
            return;
        };

        let modal = Modal::new(Id::new("deployed_modal")).show(ctx, |ui| {
            ui.set_width(440.0);
            ui.vertical_centered(|ui| {
                ui.heading(
                    RichText::new(UI_TEXT.deployed_title)
                        .strong()
                        .color(UI_CONFIG.colors.heading),
                );
            });
            ConfirmationPanel::new(result, DEPLOY.network_name, copied).render(ui)
        });

        // Backdrop click or Escape closes it like the dismiss button does
        let should_close = modal.should_close();
        let mut events = modal.inner;
        if should_close {
            events.push(ConfirmationEvent::Dismiss);
        }

        for event in events {
            match event {
                ConfirmationEvent::CopyAddress => self.copy_address(ctx),
                ConfirmationEvent::Dismiss => self.dismiss_deployment(),
            }
        }
    }
}

fn render_hero(ui: &mut Ui) {
    ui.label(
        RichText::new(UI_TEXT.hero_top)
            .size(48.0)
            .strong()
            .color(UI_CONFIG.colors.heading),
    );
    ui.label(
        RichText::new(UI_TEXT.hero_bottom)
            .size(48.0)
            .strong()
            .color(UI_CONFIG.colors.accent_alt),
    );
    ui.add_space(6.0);
    ui.label_mono(UI_TEXT.hero_tagline, UI_CONFIG.colors.subdued);
}

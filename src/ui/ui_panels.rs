use eframe::egui::{Button, ComboBox, Frame, RichText, Spinner, TextEdit, Ui, vec2};
use strum::IntoEnumIterator;

use crate::config::FORM;
use crate::models::preview::{CHAIN_LABEL, TOKEN_STANDARD};
use crate::models::{ConfigUpdate, Decimals, DeploymentResult, Feature, TokenConfig, TokenPreview};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::{card_frame, feature_badge, spaced_separator, token_icon, window_dots};
use crate::utils::group_digits;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    Update(ConfigUpdate),
    Deploy,
}

/// The token configuration form.
///
/// Reads a snapshot of the config and reports edits as events; it never
/// writes to the config itself.
pub struct TokenFormPanel<'a> {
    config: &'a TokenConfig,
    is_deploying: bool,
}

impl<'a> TokenFormPanel<'a> {
    pub fn new(config: &'a TokenConfig, is_deploying: bool) -> Self {
        Self {
            config,
            is_deploying,
        }
    }

    fn text_input(ui: &mut Ui, label: &str, value: &str, hint: &str) -> Option<String> {
        ui.label_caption(label);
        let mut buffer = value.to_string();
        let response = ui.add(
            TextEdit::singleline(&mut buffer)
                .hint_text(hint)
                .font(eframe::egui::TextStyle::Monospace)
                .desired_width(f32::INFINITY),
        );
        response.changed().then_some(buffer)
    }

    fn render_decimals(&self, ui: &mut Ui) -> Option<Decimals> {
        let mut selected = self.config.decimals;
        ui.label_caption(UI_TEXT.decimals_label);
        ComboBox::from_id_salt("decimals")
            .selected_text(selected.option_label())
            .width(ui.available_width())
            .show_ui(ui, |ui| {
                for option in Decimals::iter() {
                    ui.selectable_value(&mut selected, option, option.option_label());
                }
            });
        (selected != self.config.decimals).then_some(selected)
    }

    fn render_features(&self, ui: &mut Ui) -> Vec<(Feature, bool)> {
        let mut toggled = Vec::new();
        ui.label_caption(UI_TEXT.features_label);
        ui.add_space(4.0);

        for feature in Feature::iter() {
            let mut enabled = self.config.feature(feature);
            Frame::new()
                .inner_margin(eframe::egui::Margin::symmetric(8, 4))
                .show(ui, |ui| {
                    if ui
                        .checkbox(&mut enabled, RichText::new(feature.label()).monospace())
                        .changed()
                    {
                        toggled.push((feature, enabled));
                    }
                    ui.label_subdued(feature.description());
                });
        }
        toggled
    }

    fn render_deploy_button(&self, ui: &mut Ui) -> bool {
        if self.is_deploying {
            ui.horizontal(|ui| {
                ui.add(Spinner::new());
                let busy = RichText::new(UI_TEXT.deploying_button).monospace();
                let size = vec2(ui.available_width(), UI_CONFIG.deploy_button_height);
                ui.add_enabled(false, Button::new(busy).min_size(size));
            });
            return false;
        }

        let enabled = self.config.is_deployable();
        let size = vec2(ui.available_width(), UI_CONFIG.deploy_button_height);
        let text = RichText::new(UI_TEXT.deploy_button).monospace().strong();
        let button = if enabled {
            Button::new(text.color(UI_CONFIG.colors.background)).fill(UI_CONFIG.colors.accent)
        } else {
            Button::new(text)
        };
        ui.add_enabled(enabled, button.min_size(size)).clicked()
    }
}

impl<'a> Panel for TokenFormPanel<'a> {
    type Event = FormEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        ui.label_header(UI_TEXT.form_heading);
        ui.add_space(8.0);

        if let Some(name) =
            Self::text_input(ui, UI_TEXT.name_label, &self.config.name, FORM.name_placeholder)
        {
            events.push(FormEvent::Update(ConfigUpdate::Name(name)));
        }
        ui.add_space(8.0);

        ui.columns(2, |cols| {
            if let Some(symbol) = Self::text_input(
                &mut cols[0],
                UI_TEXT.symbol_label,
                &self.config.symbol,
                FORM.symbol_placeholder,
            ) {
                events.push(FormEvent::Update(ConfigUpdate::Symbol(symbol)));
            }
            if let Some(decimals) = self.render_decimals(&mut cols[1]) {
                events.push(FormEvent::Update(ConfigUpdate::Decimals(decimals)));
            }
        });
        ui.add_space(8.0);

        if let Some(supply) = Self::text_input(
            ui,
            UI_TEXT.supply_label,
            &self.config.supply,
            FORM.supply_placeholder,
        ) {
            events.push(FormEvent::Update(ConfigUpdate::Supply(supply)));
        }
        ui.label_subdued(format!(
            "{} {}",
            group_digits(&self.config.supply),
            UI_TEXT.supply_suffix
        ));
        spaced_separator(ui);

        for (feature, enabled) in self.render_features(ui) {
            events.push(FormEvent::Update(ConfigUpdate::Feature(feature, enabled)));
        }
        spaced_separator(ui);

        if self.render_deploy_button(ui) {
            events.push(FormEvent::Deploy);
        }
        ui.vertical_centered(|ui| ui.label_subdued(UI_TEXT.deploy_footnote));

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            for event in &events {
                log::info!("Form event: {:?}", event);
            }
        }

        events
    }
}

/// Preview card plus pseudo-source snippet. Display only.
pub struct PreviewPanel<'a> {
    preview: &'a TokenPreview,
}

impl<'a> PreviewPanel<'a> {
    pub fn new(preview: &'a TokenPreview) -> Self {
        Self { preview }
    }

    pub fn show(&self, ui: &mut Ui) {
        let preview = self.preview;
        ui.label_header(UI_TEXT.preview_heading);
        ui.add_space(8.0);

        card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            token_icon(ui, preview.icon_initial);
            ui.add_space(8.0);

            ui.label(
                RichText::new(&preview.display_name)
                    .heading()
                    .strong()
                    .color(UI_CONFIG.colors.heading),
            );
            ui.label_mono(&preview.display_symbol, UI_CONFIG.colors.accent);
            ui.add_space(10.0);

            ui.columns(2, |cols| {
                cols[0].stat(UI_TEXT.supply_stat, &preview.formatted_supply);
                cols[1].stat(UI_TEXT.decimals_stat, &preview.decimals.to_string());
            });
            ui.add_space(8.0);

            ui.horizontal_wrapped(|ui| {
                for badge in &preview.badges {
                    feature_badge(ui, badge.label(), badge.active);
                }
            });

            ui.separator();
            ui.horizontal(|ui| {
                ui.label_mono(format!("◆ {}", CHAIN_LABEL), UI_CONFIG.colors.subdued);
                ui.with_layout(
                    eframe::egui::Layout::right_to_left(eframe::egui::Align::Center),
                    |ui| ui.label_subdued(TOKEN_STANDARD),
                );
            });
        });

        ui.add_space(12.0);
        card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            window_dots(ui);
            ui.label(
                RichText::new(&preview.code_snippet)
                    .monospace()
                    .small()
                    .color(UI_CONFIG.colors.label),
            );
        });
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationEvent {
    CopyAddress,
    Dismiss,
}

/// Body of the "Token Deployed!" window
pub struct ConfirmationPanel<'a> {
    result: &'a DeploymentResult,
    network_name: &'a str,
    /// Inside the short "copied" acknowledgement window
    copied: bool,
}

impl<'a> ConfirmationPanel<'a> {
    pub fn new(result: &'a DeploymentResult, network_name: &'a str, copied: bool) -> Self {
        Self {
            result,
            network_name,
            copied,
        }
    }
}

impl<'a> Panel for ConfirmationPanel<'a> {
    type Event = ConfirmationEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();

        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("✔")
                    .size(UI_CONFIG.icon_text_size)
                    .color(UI_CONFIG.colors.success),
            );
            ui.label_subdued(format!(
                "{} {} {}",
                self.result.token_name, UI_TEXT.deployed_live_suffix, self.network_name
            ));
        });
        ui.add_space(10.0);

        card_frame().show(ui, |ui| {
            ui.label_caption(UI_TEXT.contract_address_label);
            ui.horizontal(|ui| {
                ui.label_mono(self.result.address.as_str(), UI_CONFIG.colors.heading);
                let copy_text = if self.copied {
                    RichText::new(UI_TEXT.copied_ack).color(UI_CONFIG.colors.success)
                } else {
                    RichText::new(UI_TEXT.copy_button)
                };
                if ui.small_button(copy_text).clicked() {
                    events.push(ConfirmationEvent::CopyAddress);
                }
            });
        });
        ui.add_space(10.0);

        ui.vertical_centered(|ui| {
            ui.hyperlink_to(UI_TEXT.explorer_link, self.result.address.explorer_url());
            ui.add_space(6.0);
            if ui.button(UI_TEXT.deploy_another).clicked() {
                events.push(ConfirmationEvent::Dismiss);
            }
        });

        events
    }
}

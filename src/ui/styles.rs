use eframe::egui::{Color32, RichText, Ui};
use crate::ui::config::UI_CONFIG;

/// Extension trait to add semantic styling methods directly to `egui::Ui`.
pub trait UiStyleExt {
    /// Renders small, gray text (hints, footnotes).
    fn label_subdued(&mut self, text: impl Into<String>);

    /// Renders a tiny uppercase monospace caption above an input or stat.
    fn label_caption(&mut self, text: impl Into<String>);

    /// Renders a "Label / Value" stat box, caption on top, value below.
    fn stat(&mut self, label: &str, value: &str);

    /// Renders a section header with the accent bar in front.
    fn label_header(&mut self, text: impl Into<String>);

    /// Renders monospace text in the given color.
    fn label_mono(&mut self, text: impl Into<String>, color: Color32);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(UI_CONFIG.colors.subdued));
    }

    fn label_caption(&mut self, text: impl Into<String>) {
        let text = text.into().to_uppercase();
        self.label(
            RichText::new(text)
                .small()
                .monospace()
                .color(UI_CONFIG.colors.subdued),
        );
    }

    fn stat(&mut self, label: &str, value: &str) {
        self.vertical(|ui| {
            ui.spacing_mut().item_spacing.y = 2.0; // Tight spacing
            ui.label_caption(label);
            ui.label_mono(value, UI_CONFIG.colors.heading);
        });
    }

    fn label_header(&mut self, text: impl Into<String>) {
        let text = text.into().to_uppercase();
        self.horizontal(|ui| {
            ui.label(RichText::new("▌").color(UI_CONFIG.colors.accent));
            ui.label(
                RichText::new(text)
                    .small()
                    .monospace()
                    .color(UI_CONFIG.colors.subdued),
            );
        });
    }

    fn label_mono(&mut self, text: impl Into<String>, color: Color32) {
        self.label(RichText::new(text).monospace().color(color));
    }
}

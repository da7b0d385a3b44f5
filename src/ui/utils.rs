use eframe::egui::{Color32, Context, CornerRadius, Frame, Margin, RichText, Stroke, Ui, Visuals};

use crate::ui::config::UI_CONFIG;

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = UI_CONFIG.colors.card;
    visuals.panel_fill = UI_CONFIG.colors.background;
    visuals.extreme_bg_color = UI_CONFIG.colors.card;
    visuals.hyperlink_color = UI_CONFIG.colors.accent_alt;
    visuals.selection.bg_fill = UI_CONFIG.colors.accent;

    // Make the widgets stand out a bit more
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    ctx.set_visuals(visuals);
}

/// The bordered, dark box used for the form, the preview and the snippet
pub fn card_frame() -> Frame {
    Frame::new()
        .fill(UI_CONFIG.colors.card)
        .stroke(Stroke::new(1.0, UI_CONFIG.colors.card_stroke))
        .corner_radius(CornerRadius::same(12))
        .inner_margin(Margin::same(16))
}

/// Pill-shaped feature badge, highlighted when active
pub fn feature_badge(ui: &mut Ui, label: &str, active: bool) {
    let (fg, bg) = if active {
        (UI_CONFIG.colors.accent, UI_CONFIG.colors.accent.gamma_multiply(0.2))
    } else {
        (UI_CONFIG.colors.subdued, UI_CONFIG.colors.badge_inactive)
    };

    Frame::new()
        .fill(bg)
        .corner_radius(CornerRadius::same(10))
        .inner_margin(Margin::symmetric(10, 3))
        .show(ui, |ui| {
            ui.label(RichText::new(label.to_uppercase()).small().monospace().color(fg));
        });
}

/// Rounded square with the token initial in it
pub fn token_icon(ui: &mut Ui, initial: char) {
    Frame::new()
        .fill(UI_CONFIG.colors.accent)
        .corner_radius(CornerRadius::same(12))
        .inner_margin(Margin::symmetric(18, 10))
        .show(ui, |ui| {
            ui.label(
                RichText::new(initial.to_string())
                    .size(UI_CONFIG.icon_text_size)
                    .strong()
                    .color(UI_CONFIG.colors.background),
            );
        });
}

/// Creates a separator with standard spacing
pub fn spaced_separator(ui: &mut Ui) {
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);
}

/// Dim color for traffic-light dots on the snippet window
pub fn window_dots(ui: &mut Ui) {
    ui.horizontal(|ui| {
        for color in [Color32::from_rgb(200, 70, 70), Color32::from_rgb(200, 180, 60), Color32::from_rgb(70, 180, 90)] {
            ui.label(RichText::new("●").small().color(color.gamma_multiply(0.6)));
        }
    });
}

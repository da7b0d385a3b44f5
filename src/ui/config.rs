use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub background: Color32,
    pub card: Color32,
    pub card_stroke: Color32,
    pub label: Color32,
    pub subdued: Color32,
    pub heading: Color32,
    /// Primary brand blue
    pub accent: Color32,
    /// Secondary cyan used for highlights
    pub accent_alt: Color32,
    pub success: Color32,
    pub badge_inactive: Color32,
    pub code_keyword: Color32,
    pub code_comment: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    /// Widest the form/preview grid may grow before it is centered
    pub max_content_width: f32,
    pub deploy_button_height: f32,
    pub icon_text_size: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        background: Color32::from_rgb(10, 10, 15),
        card: Color32::from_rgb(18, 18, 26),
        card_stroke: Color32::from_rgb(40, 40, 52),
        label: Color32::from_rgb(200, 200, 210),
        subdued: Color32::from_rgb(110, 110, 125),
        heading: Color32::WHITE,
        accent: Color32::from_rgb(0, 133, 255),
        accent_alt: Color32::from_rgb(0, 212, 255),
        success: Color32::from_rgb(0, 255, 136),
        badge_inactive: Color32::from_rgb(30, 30, 40),
        code_keyword: Color32::from_rgb(255, 121, 198),
        code_comment: Color32::from_rgb(98, 114, 164),
    },
    max_content_width: 1100.0,
    deploy_button_height: 44.0,
    icon_text_size: 26.0,
};

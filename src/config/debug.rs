//! Debugging feature flags.
//!
//! Toggle individual diagnostics here. They are only consulted under
//! `cfg(debug_assertions)`, so release builds stay quiet.

pub struct DebugFlags {
    /// Emit UI interaction logs (field edits, feature toggles, button presses).
    pub print_ui_interactions: bool,
    /// Emit deploy lifecycle logs (ignored triggers, timer polling).
    pub print_deploy_events: bool,
    /// Emit the derived preview snippet whenever the configuration changes.
    pub print_preview_updates: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_ui_interactions: true,
    print_deploy_events: true,
    print_preview_updates: false,
    print_shutdown: false,
};

//! Visual styling for the list screen.

use egui::Color32;

/// Background behind the cards
pub const SCREEN_BACKGROUND: Color32 = Color32::from_rgb(0xF3, 0xF1, 0xF6);

/// Applies the light card theme to the egui context.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Called once at startup; egui keeps the visuals until replaced.
    pub fn apply_theme(ctx: &egui::Context) {
        let mut visuals = egui::Visuals::light();
        visuals.panel_fill = SCREEN_BACKGROUND;
        visuals.window_fill = SCREEN_BACKGROUND;
        ctx.set_visuals(visuals);
    }
}

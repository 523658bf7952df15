//! Toast overlay rendering
//!
//! Shows the head of the toast queue near the bottom of the window.

use crate::app::AppState;
use egui::{Color32, RichText};
use std::time::Instant;

/// Renders the current toast, if any, above all panels.
pub fn render_toast_overlay(ctx: &egui::Context, state: &mut AppState) {
    let Some(toast) = state.screen.sink_mut().current(Instant::now()) else {
        return;
    };
    let text = toast.text.clone();

    egui::Area::new(egui::Id::new("toast_overlay"))
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -48.0))
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::default()
                .fill(Color32::from_gray(60))
                .corner_radius(18.0)
                .inner_margin(egui::Margin::symmetric(16, 10))
                .show(ui, |ui| {
                    ui.label(RichText::new(text).color(Color32::WHITE).size(15.0));
                });
        });
}

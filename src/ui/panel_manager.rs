//! Panel orchestration and layout management.

use crate::app::AppState;
use crate::ui::{toast_overlay, user_list_panel};
use usercards::RowEvent;

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    /// A list row was tapped
    Row(RowEvent),
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        let list_frame = egui::Frame::default()
            .inner_margin(egui::Margin::ZERO)
            .fill(ctx.style().visuals.panel_fill);

        egui::CentralPanel::default()
            .frame(list_frame)
            .show(ctx, |ui| {
                if let Some(event) = user_list_panel::render_user_list_panel(ui, state) {
                    interaction = Some(PanelInteraction::Row(event));
                }
            });

        toast_overlay::render_toast_overlay(ctx, state);

        interaction
    }
}

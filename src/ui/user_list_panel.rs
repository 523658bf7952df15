//! User list panel UI rendering
//!
//! Uses virtual scrolling: only the rows the renderer realized for the current
//! viewport are drawn, with spacers standing in for the rest.

use crate::app::AppState;
use crate::rendering::user_card_renderer::{self, CardLabels};
use egui::ScrollArea;
use usercards::strings::{DELETE_USER, USER_PHOTO};
use usercards::{RowEvent, Viewport};

/// Renders the scrollable list of user cards.
///
/// Returns the row tap of this frame, if any.
pub fn render_user_list_panel(ui: &mut egui::Ui, state: &mut AppState) -> Option<RowEvent> {
    let row_height = state.screen.renderer().config().row_height;
    let labels = CardLabels {
        user_photo: state.screen.strings().resolve(USER_PHOTO, &[]),
        delete_user: state.screen.strings().resolve(DELETE_USER, &[]),
    };

    let mut interaction: Option<RowEvent> = None;
    let viewport_height = ui.available_height();

    let scroll_area = ScrollArea::vertical()
        .id_salt("user_list_scroll_area")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            // Rows and spacers must add up to the exact content height
            ui.spacing_mut().item_spacing.y = 0.0;

            let viewport = Viewport::new(state.scroll_offset, viewport_height);
            let frame = state.screen.render_pass(viewport);

            if frame.top_padding > 0.0 {
                ui.add_space(frame.top_padding);
            }

            let renderer = state.screen.renderer();
            for frame_row in &frame.rows {
                let Some(row) = renderer.row(frame_row.key) else {
                    continue;
                };
                let image = renderer.loader().state(&row.image);

                if let Some(event) = user_card_renderer::render_user_card(ui, &row.view, &image, &labels, row_height) {
                    interaction = Some(event);
                }
            }

            if frame.bottom_padding > 0.0 {
                ui.add_space(frame.bottom_padding);
            }
        });

    state.scroll_offset = scroll_area.state.offset.y;

    interaction
}

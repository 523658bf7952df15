//! User card rendering logic
//!
//! Draws one realized row: a rounded card with a circular photo, the user's
//! name and status on single clipped lines, and a delete control on the right.
//! Uses egui's painter API for the card itself and real widgets for the
//! clickable areas.

use eframe::egui;
use egui::{Color32, CornerRadius, FontId, Rect, Sense};
use usercards::{resolve_tap, RowEvent, RowView};

use crate::io::ImageState;
use crate::rendering::text_utils::truncate_text_to_fit;

/// Horizontal padding between the list edges and the cards
const LIST_PADDING: f32 = 16.0;
/// Gap above each card
const CARD_GAP: f32 = 16.0;
/// Padding inside the card
const CARD_PADDING: f32 = 8.0;
const CARD_CORNER_RADIUS: u8 = 6;
const PHOTO_SIZE: f32 = 64.0;
const PHOTO_TEXT_GAP: f32 = 16.0;
const DELETE_BUTTON_SIZE: f32 = 48.0;
const TEXT_SIZE: f32 = 18.0;
const LINE_GAP: f32 = 6.0;

/// Resolved user-facing strings shared by all cards in a frame.
pub struct CardLabels {
    /// Description attached to the photo
    pub user_photo: String,
    /// Hover text of the delete control
    pub delete_user: String,
}

/// Renders a single user card row
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `view` - Row content
/// * `image` - Current state of the row's photo
/// * `labels` - Resolved accessibility and hover strings
/// * `row_height` - Height of the row slot, including the gap above the card
///
/// # Returns
/// * `Option<RowEvent>` - Tap on the card body or on the delete control
pub fn render_user_card(
    ui: &mut egui::Ui,
    view: &RowView,
    image: &ImageState,
    labels: &CardLabels,
    row_height: f32,
) -> Option<RowEvent> {
    let (slot_rect, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), row_height), Sense::hover());

    let card_rect = Rect::from_min_max(
        egui::pos2(slot_rect.left() + LIST_PADDING, slot_rect.top() + CARD_GAP),
        egui::pos2(slot_rect.right() - LIST_PADDING, slot_rect.bottom()),
    );
    if card_rect.width() <= 0.0 || card_rect.height() <= 0.0 {
        return None;
    }

    let body_response = ui.interact(card_rect, ui.id().with(("user_card", view.key)), Sense::click());

    paint_card_background(ui, card_rect, &body_response);

    let content_rect = card_rect.shrink(CARD_PADDING);

    let photo_rect = Rect::from_min_size(
        egui::pos2(content_rect.left(), content_rect.center().y - PHOTO_SIZE / 2.0),
        egui::vec2(PHOTO_SIZE, PHOTO_SIZE),
    );
    paint_photo(ui, photo_rect, image, &labels.user_photo);

    let delete_rect = Rect::from_center_size(
        egui::pos2(content_rect.right() - DELETE_BUTTON_SIZE / 2.0, content_rect.center().y),
        egui::vec2(DELETE_BUTTON_SIZE, DELETE_BUTTON_SIZE),
    );

    let text_left = photo_rect.right() + PHOTO_TEXT_GAP;
    let text_width = (delete_rect.left() - text_left).max(0.0);
    paint_text_lines(ui, view, text_left, text_width, content_rect.center().y);

    // Added after the body so it sits on top and receives its own clicks
    let delete_response = ui
        .put(
            delete_rect,
            egui::Button::new(egui::RichText::new("🗑").size(22.0).color(Color32::from_gray(70))).frame(false),
        )
        .on_hover_text(&labels.delete_user);

    resolve_tap(view.key, body_response.clicked(), delete_response.clicked())
}

fn paint_card_background(ui: &egui::Ui, card_rect: Rect, response: &egui::Response) {
    let painter = ui.painter();

    let shadow = egui::epaint::Shadow {
        offset: [0, 3],
        blur: 10,
        spread: 0,
        color: Color32::from_black_alpha(45),
    };
    painter.add(shadow.as_shape(card_rect, CornerRadius::same(CARD_CORNER_RADIUS)));

    let fill = if response.is_pointer_button_down_on() {
        Color32::from_gray(228)
    } else if response.hovered() {
        Color32::from_gray(246)
    } else {
        Color32::WHITE
    };
    painter.rect_filled(card_rect, CornerRadius::same(CARD_CORNER_RADIUS), fill);
}

fn paint_photo(ui: &egui::Ui, photo_rect: Rect, image: &ImageState, description: &str) {
    match image {
        ImageState::Ready(texture) => {
            egui::Image::new(texture)
                .uv(center_square_uv(texture.size_vec2()))
                .corner_radius(CornerRadius::same((PHOTO_SIZE / 2.0) as u8))
                .alt_text(description)
                .paint_at(ui, photo_rect);
        }
        ImageState::Pending | ImageState::Failed => paint_photo_placeholder(ui, photo_rect),
    }
}

/// Account-circle glyph drawn while the photo is missing.
fn paint_photo_placeholder(ui: &egui::Ui, photo_rect: Rect) {
    let painter = ui.painter().with_clip_rect(photo_rect);
    let center = photo_rect.center();
    let radius = PHOTO_SIZE / 2.0;
    let figure = Color32::from_gray(150);

    painter.circle_filled(center, radius, Color32::from_gray(215));
    painter.circle_filled(center - egui::vec2(0.0, radius * 0.25), radius * 0.32, figure);
    painter.circle_filled(center + egui::vec2(0.0, radius * 0.95), radius * 0.62, figure);
}

/// UV rect cropping a texture to its centered square.
fn center_square_uv(size: egui::Vec2) -> Rect {
    if size.x <= 0.0 || size.y <= 0.0 {
        return Rect::from_min_max(egui::Pos2::ZERO, egui::pos2(1.0, 1.0));
    }

    if size.x > size.y {
        let inset = (size.x - size.y) / 2.0 / size.x;
        Rect::from_min_max(egui::pos2(inset, 0.0), egui::pos2(1.0 - inset, 1.0))
    } else {
        let inset = (size.y - size.x) / 2.0 / size.y;
        Rect::from_min_max(egui::pos2(0.0, inset), egui::pos2(1.0, 1.0 - inset))
    }
}

fn paint_text_lines(ui: &egui::Ui, view: &RowView, left: f32, width: f32, center_y: f32) {
    let painter = ui.painter();
    let font_id = FontId::proportional(TEXT_SIZE);
    let line_offset = (TEXT_SIZE + LINE_GAP) / 2.0;

    let title = truncate_text_to_fit(&view.title, width, &font_id, painter);
    painter.text(
        egui::pos2(left, center_y - line_offset),
        egui::Align2::LEFT_CENTER,
        title,
        font_id.clone(),
        Color32::BLACK,
    );

    let subtitle = truncate_text_to_fit(&view.subtitle, width, &font_id, painter);
    painter.text(
        egui::pos2(left, center_y + line_offset),
        egui::Align2::LEFT_CENTER,
        subtitle,
        font_id,
        Color32::from_gray(70),
    );
}

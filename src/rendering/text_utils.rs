//! Text rendering utilities
//!
//! Shared utilities for text measurement and truncation.

use eframe::egui;
use usercards::text::truncate_to_width;

/// Truncates text to fit within a given width, adding "…" if truncated
///
/// # Arguments
/// * `text` - The text to potentially truncate
/// * `available_width` - Maximum width available for the text
/// * `font_id` - Font to use for measuring text
/// * `painter` - Painter for text measurement
///
/// # Returns
/// * Truncated string that fits within the available width
pub fn truncate_text_to_fit(
    text: &str,
    available_width: f32,
    font_id: &egui::FontId,
    painter: &egui::Painter,
) -> String {
    truncate_to_width(text, available_width, |candidate| {
        painter
            .layout_no_wrap(candidate.to_string(), font_id.clone(), egui::Color32::WHITE)
            .size()
            .x
    })
}

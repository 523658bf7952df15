//! Single-line text clipping.

/// Marker appended to clipped text
pub const ELLIPSIS: &str = "…";

/// Truncates text to fit within a given width, appending an ellipsis if truncated
///
/// # Arguments
/// * `text` - The text to potentially truncate
/// * `max_width` - Maximum width available for the text
/// * `measure` - Width of a string in the same units as `max_width`
///
/// # Returns
/// * The original text if it fits, the longest fitting prefix plus `…`
///   otherwise, or an empty string if not even the ellipsis fits
pub fn truncate_to_width(text: &str, max_width: f32, measure: impl Fn(&str) -> f32) -> String {
    if max_width <= 0.0 {
        return String::new();
    }

    if measure(text) <= max_width {
        return text.to_string();
    }

    let ellipsis_width = measure(ELLIPSIS);
    if ellipsis_width > max_width {
        return String::new();
    }
    let available_for_text = max_width - ellipsis_width;

    // Binary search over char boundaries for the longest prefix that fits
    let boundaries: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
    let mut low = 0;
    let mut high = boundaries.len();

    while low < high {
        let mid = (low + high).div_ceil(2);
        if measure(&text[..prefix_end(&boundaries, text, mid)]) <= available_for_text {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    let mut result = text[..prefix_end(&boundaries, text, low)].trim_end().to_string();
    result.push_str(ELLIPSIS);
    result
}

/// Byte offset where the prefix of `chars` characters ends.
fn prefix_end(boundaries: &[usize], text: &str, chars: usize) -> usize {
    boundaries.get(chars).copied().unwrap_or(text.len())
}

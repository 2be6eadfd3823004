//! Text measurement and truncation for labels drawn inside fixed-size shapes.

use eframe::egui;

const ELLIPSIS: &str = "..";

/// Horizontal padding kept free inside a shape, both sides together.
const PADDING: f32 = 8.0;

/// Truncates text to fit within a given width, adding ".." if truncated.
///
/// Used for container cells and node labels, whose size does not depend on
/// the value they hold.
pub fn truncate_text_to_fit(
    text: &str,
    available_width: f32,
    font_id: &egui::FontId,
    painter: &egui::Painter,
) -> String {
    truncate_with(text, available_width - PADDING, |s| {
        painter
            .layout_no_wrap(s.to_string(), font_id.clone(), egui::Color32::WHITE)
            .size()
            .x
    })
}

/// Longest prefix of `text` that, followed by "..", fits in `max_width`.
///
/// `measure` returns the rendered width of a string. Returns `text` unchanged
/// when it fits, and an empty string when not even the ellipsis fits.
pub fn truncate_with(text: &str, max_width: f32, measure: impl Fn(&str) -> f32) -> String {
    if max_width <= 0.0 {
        return String::new();
    }
    if measure(text) <= max_width {
        return text.to_string();
    }
    let room = max_width - measure(ELLIPSIS);
    if room <= 0.0 {
        return String::new();
    }

    // Binary search over char counts; width grows with the prefix.
    let chars: Vec<char> = text.chars().collect();
    let (mut low, mut high) = (0, chars.len());
    while low < high {
        let mid = (low + high + 1) / 2;
        let prefix: String = chars[..mid].iter().collect();
        if measure(&prefix) <= room {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    let mut result: String = chars[..low].iter().collect();
    result.push_str(ELLIPSIS);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every char is 10 units wide.
    fn monospace(s: &str) -> f32 {
        s.chars().count() as f32 * 10.0
    }

    #[test]
    fn test_fitting_text_unchanged() {
        assert_eq!(truncate_with("abc", 30.0, monospace), "abc");
    }

    #[test]
    fn test_long_text_truncated() {
        // 60 units: ".." takes 20, leaving room for 4 chars.
        assert_eq!(truncate_with("abcdefghij", 60.0, monospace), "abcd..");
    }

    #[test]
    fn test_no_room_at_all() {
        assert_eq!(truncate_with("abcdef", 15.0, monospace), "");
        assert_eq!(truncate_with("abc", -1.0, monospace), "");
    }

    #[test]
    fn test_multibyte_chars() {
        assert_eq!(truncate_with("ääääää", 40.0, monospace), "ää..");
    }
}

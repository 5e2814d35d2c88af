//! Utility functions for rendering UI components

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, List, ListItem, ListState},
    Frame,
};

pub fn render_scrollable_list(
    frame: &mut Frame,
    area: Rect,
    items: Vec<ListItem>,
    selected_index: usize,
    block: Block,
) {
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default()); // Highlight handled by item styles

    let mut list_state = ListState::default();
    list_state.select(Some(selected_index));

    frame.render_stateful_widget(list, area, &mut list_state);
}

/// `m:ss`; anything that is not a finite time renders as `00:00`
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() {
        return "00:00".to_string();
    }
    let total_seconds = seconds.max(0.0).floor() as u64;
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() > max_width {
        let truncated: String = s.chars().take(max_width.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_width)
    } else {
        format!("{:<width$}", s, width = max_width)
    }
}

/// A popup rectangle centered in `area`, shrunk to fit
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(4));
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_duration(0.0), "0:00");
        assert_eq!(format_duration(65.9), "1:05");
        assert_eq!(format_duration(3600.0), "60:00");
    }

    #[test]
    fn non_finite_time_is_zero() {
        assert_eq!(format_duration(f64::NAN), "00:00");
        assert_eq!(format_duration(f64::INFINITY), "00:00");
    }

    #[test]
    fn truncates_with_ellipsis() {
        assert_eq!(truncate_string("Al-Baqara", 6), "Al-...");
        assert_eq!(truncate_string("Yaseen", 8), "Yaseen  ");
    }

    #[test]
    fn popup_fits_small_screens() {
        let rect = centered_rect(Rect::new(0, 0, 20, 10), 60, 30);
        assert_eq!(rect, Rect::new(2, 2, 16, 6));
    }
}

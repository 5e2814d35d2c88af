//! Modal overlays drawn over the main layout

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::catalog::{reciters, Reciter};
use crate::model::UiState;
use super::utils::centered_rect;

const HELP_SECTIONS: [(&str, &[(&str, &str)]); 4] = [
    (
        "Navigation",
        &[
            ("↑ ↓", "Move selection / scroll reader"),
            ("Enter", "Open surah / retry loading"),
            ("Esc Backspace", "Back to the list"),
            ("B Home", "Home, clearing search"),
            ("/ G Tab", "Focus search"),
        ],
    ),
    (
        "Search",
        &[
            ("Enter", "Number, name, sipara or topic"),
            ("Esc", "Clear search"),
        ],
    ),
    (
        "Playback",
        &[
            ("Space", "Play / pause"),
            ("N P", "Next / previous surah"),
            ("← →", "Seek 10s back / forward"),
            ("+ -", "Volume"),
            ("R", "Choose reciter"),
        ],
    ),
    ("General", &[("H ?", "Toggle this help"), ("Q Ctrl+C", "Quit")]),
];

fn popup_block(title: &str, color: Color) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(title)
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .style(Style::default().bg(Color::Black))
}

/// Clear `area` and return it, so the popup hides what is beneath
fn clear_popup(frame: &mut Frame, width: u16, height: u16) -> Rect {
    let area = centered_rect(frame.area(), width, height);
    frame.render_widget(Clear, area);
    area
}

pub fn render_error_notification(frame: &mut Frame, ui_state: &UiState) {
    let Some(message) = ui_state.error_message.as_deref() else {
        return;
    };

    let width = frame.area().width.saturating_sub(4).min(56);
    let text_width = usize::from(width.saturating_sub(2).max(1));
    let wrapped_lines = message.chars().count().div_ceil(text_width).max(1) as u16;
    let area = clear_popup(frame, width, wrapped_lines + 2);

    let notification = Paragraph::new(message)
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: true })
        .block(popup_block(" Error (Esc to dismiss) ", Color::Red));
    frame.render_widget(notification, area);
}

fn reciter_row(reciter: &Reciter, is_selected: bool, is_active: bool) -> ListItem<'static> {
    let mut spans = vec![Span::raw(format!("🎙 {}", reciter.display_name))];
    if !reciter.has_fallback() {
        spans.push(Span::styled(" (no backup)", Style::default().fg(Color::DarkGray)));
    }
    if is_active {
        spans.push(Span::raw(" ●"));
    }

    let style = match (is_selected, is_active) {
        (true, _) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        (false, true) => Style::default().fg(Color::Green),
        (false, false) => Style::default().fg(Color::White),
    };
    ListItem::new(Line::from(spans)).style(style)
}

pub fn render_reciter_picker(frame: &mut Frame, ui_state: &UiState, active_reciter_id: &str) {
    let widest = reciters()
        .iter()
        .map(|r| r.display_name.chars().count())
        .max()
        .unwrap_or(24) as u16;
    let area = clear_popup(frame, (widest + 20).clamp(36, 64), reciters().len() as u16 + 2);

    let rows: Vec<ListItem> = reciters()
        .iter()
        .enumerate()
        .map(|(i, reciter)| {
            reciter_row(reciter, i == ui_state.reciter_selected, reciter.id == active_reciter_id)
        })
        .collect();

    let mut state = ListState::default().with_selected(Some(ui_state.reciter_selected));
    frame.render_stateful_widget(
        List::new(rows).block(popup_block(" Select Reciter (↑↓ Enter Esc) ", Color::Cyan)),
        area,
        &mut state,
    );
}

pub fn render_help_popup(frame: &mut Frame) {
    let mut lines = Vec::new();
    for (i, (section, bindings)) in HELP_SECTIONS.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(
            Line::from(Span::styled(
                format!("── {} ──", section),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ))
            .centered(),
        );
        for (keys, action) in bindings.iter() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:>15}", keys),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
                Span::raw("   "),
                Span::styled(*action, Style::default().fg(Color::White)),
            ]));
        }
    }

    let area = clear_popup(frame, 60, lines.len() as u16 + 2);
    frame.render_widget(
        Paragraph::new(lines).block(popup_block(" Help (H or Esc to close) ", Color::Cyan)),
        area,
    );
}

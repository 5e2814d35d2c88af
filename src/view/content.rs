//! Main content area rendering (surah list, detail reader)

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListItem, Padding, Paragraph, Wrap},
    Frame,
};

use crate::catalog::{find_entry, CatalogEntry};
use crate::model::{
    DetailLoadState, DetailTextBundle, Focus, SearchState, UiState, INVOCATION,
    INVOCATION_TRANSLATION, LOAD_FAILED_MESSAGE,
};
use super::utils::{render_scrollable_list, truncate_string};

pub const NO_RESULTS_MESSAGE: &str = "No Surahs found matching your search.";

pub fn render_surah_list(
    frame: &mut Frame,
    area: Rect,
    entries: &[&'static CatalogEntry],
    search: &SearchState,
    ui_state: &UiState,
    active_entry: Option<u16>,
) {
    let is_focused = ui_state.focus == Focus::List;
    let border_style = if is_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    let title = if search.is_filtered() {
        format!(" Search Results ({}) ", entries.len())
    } else {
        " All Surahs ".to_string()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding::horizontal(1))
        .border_style(border_style);

    if entries.is_empty() {
        let empty = Paragraph::new(format!("  {}", NO_RESULTS_MESSAGE))
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    // " ▶114   name   translation   286 Ayahs   Medinan   native"
    let content_width = area.width.saturating_sub(4) as usize;
    let fixed_width = 1 + 4 + 3 + 3 + 9 + 3 + 7 + 3 + 12;
    let remaining = content_width.saturating_sub(fixed_width);
    let name_width = (remaining * 45) / 100;
    let translation_width = remaining.saturating_sub(name_width);

    let items: Vec<ListItem> = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let is_playing = active_entry == Some(entry.number);
            let style = if i == ui_state.list_selected && is_focused {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else if is_playing {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else if i == ui_state.list_selected {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let playing_indicator = if is_playing { "▶" } else { " " };
            let playing_label = if is_playing { "  Playing" } else { "" };
            ListItem::new(format!(
                "{}{:>3}   {}   {}   {:>3} Ayahs   {:<7}   {}{}",
                playing_indicator,
                entry.number,
                truncate_string(entry.english_name, name_width),
                truncate_string(entry.english_translation, translation_width),
                entry.ayah_count,
                entry.revelation_type,
                entry.native_name,
                playing_label,
            ))
            .style(style)
        })
        .collect();

    render_scrollable_list(frame, area, items, ui_state.list_selected, block);
}

/// Draw the reader and return the largest scroll offset that still shows text
pub fn render_detail(frame: &mut Frame, area: Rect, detail: Option<&DetailTextBundle>, scroll: u16) -> u16 {
    let Some(detail) = detail else {
        return 0;
    };
    let Some(entry) = find_entry(detail.entry_number) else {
        return 0;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!("{}. {}", entry.number, entry.english_name),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(Span::styled(entry.native_name, Style::default().fg(Color::White))).centered(),
        Line::from(Span::styled(
            format!(
                "{} • {} • {} Ayahs",
                entry.english_translation, entry.revelation_type, entry.ayah_count
            ),
            Style::default().fg(Color::DarkGray),
        ))
        .centered(),
        Line::from(""),
    ];

    match &detail.load_state {
        DetailLoadState::Loading => {
            lines.push(
                Line::from(Span::styled(
                    "Loading Surah & Translation...",
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
                ))
                .centered(),
            );
        }
        DetailLoadState::Failed(cause) => {
            lines.push(
                Line::from(Span::styled(LOAD_FAILED_MESSAGE, Style::default().fg(Color::Red))).centered(),
            );
            lines.push(Line::from(Span::styled(cause.clone(), Style::default().fg(Color::DarkGray))).centered());
            lines.push(Line::from(""));
            lines.push(
                Line::from(Span::styled("Press Enter to retry", Style::default().fg(Color::Yellow))).centered(),
            );
        }
        DetailLoadState::Ready => {
            if detail.shows_invocation_heading() {
                lines.push(
                    Line::from(Span::styled(
                        INVOCATION,
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    ))
                    .centered(),
                );
                lines.push(
                    Line::from(Span::styled(INVOCATION_TRANSLATION, Style::default().fg(Color::Cyan))).centered(),
                );
                lines.push(Line::from(""));
            }

            for pair in detail.verse_pairs() {
                lines.push(Line::from(Span::styled(
                    format!("─ {} ─", pair.verse_number),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                )));
                if !pair.original.is_empty() {
                    lines.push(
                        Line::from(Span::styled(pair.original.to_string(), Style::default().fg(Color::White)))
                            .right_aligned(),
                    );
                }
                lines.push(
                    Line::from(Span::styled(pair.translated.to_string(), Style::default().fg(Color::Gray)))
                        .right_aligned(),
                );
                lines.push(Line::from(""));
            }

            lines.push(
                Line::from(Span::styled(
                    format!("End of Surah {}", entry.english_name),
                    Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
                ))
                .centered(),
            );
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Reader (Esc to go back, ↑↓ to scroll) ")
        .padding(Padding::horizontal(1))
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);

    let reader = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);
    let wrapped_height = u16::try_from(reader.line_count(inner.width)).unwrap_or(u16::MAX);
    let max_scroll = wrapped_height.saturating_sub(inner.height);

    frame.render_widget(reader.scroll((scroll.min(max_scroll), 0)).block(block), area);
    max_scroll
}

//! Layout rendering (welcome screen, top bar, search status line)

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

use crate::catalog::reciters;
use crate::model::{Focus, SearchState, UiState};

pub const SEARCHING_MESSAGE: &str = "AI is finding the best Surahs for you...";

pub fn render_welcome(frame: &mut Frame, area: Rect) {
    let names: Vec<&str> = reciters().iter().map(|r| r.display_name).collect();

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "☪  Al-Quran Player",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Immerse yourself in the divine words with the voices of {}.",
                names.join(", ")
            ),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("✦ AI Powered Search", Style::default().fg(Color::Cyan)),
            Span::raw("    "),
            Span::styled(
                format!("✦ {} Famous Reciters", reciters().len()),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw("    "),
            Span::styled("✦ Urdu Translation", Style::default().fg(Color::Cyan)),
        ]),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "[ Press Enter to start listening ]",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("q to quit", Style::default().fg(Color::DarkGray))),
    ];

    let height = lines.len() as u16 + 2;
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    let welcome = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green))
                .padding(Padding::horizontal(2)),
        );
    frame.render_widget(welcome, vertical[1]);
}

pub fn render_top_bar(frame: &mut Frame, area: Rect, ui_state: &UiState, search: &SearchState, reciter_name: &str) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(20), // Brand
            Constraint::Min(0),     // Search input
            Constraint::Length(32), // Reciter
        ])
        .split(area);

    let brand = Paragraph::new(Span::styled(
        "☪ Quran Player",
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    ))
    .block(Block::default().borders(Borders::ALL).title(" Home (b) "));
    frame.render_widget(brand, chunks[0]);

    let focused = ui_state.focus == Focus::Search;
    let search_style = if focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::White)
    };

    let search_text = if search.query_text.is_empty() {
        if focused {
            String::new()
        } else {
            "Search Surah, Sipara, or topic (e.g. Sipara 1 Surah 22)... press /".to_string()
        }
    } else {
        search.query_text.clone()
    };
    let search_text = if focused { format!("{}▏", search_text) } else { search_text };

    let search_widget = Paragraph::new(search_text)
        .style(if search.query_text.is_empty() && !focused {
            Style::default().fg(Color::DarkGray)
        } else {
            search_style
        })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .padding(Padding::horizontal(1))
                .border_style(if focused {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default()
                }),
        );
    frame.render_widget(search_widget, chunks[1]);

    let reciter = Paragraph::new(format!("🎙 {}", reciter_name))
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL).title(" Reciter (r) "));
    frame.render_widget(reciter, chunks[2]);
}

/// One line under the top bar: progress while searching, then the reasoning
pub fn render_search_status(frame: &mut Frame, area: Rect, search: &SearchState) {
    let line = if search.is_searching {
        Line::from(Span::styled(
            format!(" ⟳ {}", SEARCHING_MESSAGE),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
        ))
    } else if let Some(reasoning) = &search.reasoning_text {
        let color = if search.failed { Color::Red } else { Color::Green };
        Line::from(vec![
            Span::styled(" ✦ ", Style::default().fg(color)),
            Span::styled(reasoning.clone(), Style::default().fg(color).add_modifier(Modifier::ITALIC)),
        ])
    } else {
        Line::from("")
    };
    frame.render_widget(Paragraph::new(line), area);
}

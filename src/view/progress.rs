//! Player bar rendering

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge},
    Frame,
};

use crate::model::{PlaybackSession, PlaybackStatus};
use super::utils::format_duration;

pub const AUDIO_UNAVAILABLE: &str = "Audio Unavailable";
pub const USING_BACKUP: &str = "Using Backup Server";
const UNKNOWN_DURATION: &str = "--:--";

/// Short status shown next to the title, with its color
pub fn status_label(playback: &PlaybackSession) -> Option<(String, Color)> {
    match playback.status {
        PlaybackStatus::Failed => Some((AUDIO_UNAVAILABLE.to_string(), Color::Red)),
        PlaybackStatus::Loading => {
            let loading = match playback.buffered {
                Some(ratio) => format!("Loading {:.0}%", ratio * 100.0),
                None => "Loading...".to_string(),
            };
            if playback.using_fallback {
                Some((format!("{} | {}", USING_BACKUP, loading), Color::Yellow))
            } else {
                Some((loading, Color::Yellow))
            }
        }
        _ if playback.using_fallback => Some((USING_BACKUP.to_string(), Color::Yellow)),
        _ => None,
    }
}

pub fn render_player_bar(frame: &mut Frame, area: Rect, playback: &PlaybackSession) {
    let Some(entry) = playback.active_entry else {
        let idle = Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Select a Surah to start listening "),
            )
            .gauge_style(Style::default().fg(Color::DarkGray))
            .ratio(0.0)
            .label("");
        frame.render_widget(idle, area);
        return;
    };

    let icon = match playback.status {
        PlaybackStatus::Playing => " ▶",
        PlaybackStatus::Loading => " ⟳",
        PlaybackStatus::Failed => " ✗",
        _ => " ⏸",
    };

    let mut title = vec![Span::raw(format!(
        "{} {} | {} | {} ",
        icon, entry.english_name, entry.native_name, playback.active_reciter.display_name
    ))];
    if let Some((label, color)) = status_label(playback) {
        title.push(Span::styled(format!("[{}] ", label), Style::default().fg(color)));
    }

    let progress_ratio = if playback.duration_seconds > 0.0 {
        (playback.position_seconds / playback.duration_seconds).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let duration_str = if playback.duration_seconds > 0.0 {
        format_duration(playback.duration_seconds)
    } else {
        UNKNOWN_DURATION.to_string()
    };
    let time_str = format!("{} / {}", format_duration(playback.position_seconds), duration_str);
    let controls_info = format!(" Vol: {:.0}% ", playback.volume * 100.0);

    let gauge_color = if playback.status == PlaybackStatus::Failed {
        Color::DarkGray
    } else {
        Color::Green
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Line::from(title))
                .title_bottom(Line::from(controls_info).right_aligned()),
        )
        .gauge_style(Style::default().fg(gauge_color))
        .ratio(progress_ratio)
        .label(time_str);

    frame.render_widget(gauge, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::AudioEvent;
    use crate::catalog::{find_entry, find_reciter};

    fn loading(reciter: &str) -> PlaybackSession {
        let session = PlaybackSession::new(find_reciter(reciter).unwrap());
        session.select(find_entry(1).unwrap(), "https://cdn.test").0
    }

    #[test]
    fn failed_session_reports_unavailable() {
        let session = loading("husary");
        let (failed, _) = session.on_audio_event(&AudioEvent::Error {
            generation: session.generation,
            message: "x".to_string(),
        });
        assert_eq!(status_label(&failed).unwrap().0, AUDIO_UNAVAILABLE);
    }

    #[test]
    fn backup_server_is_flagged() {
        let session = loading("sudais");
        let (fallback, _) = session.on_audio_event(&AudioEvent::Error {
            generation: session.generation,
            message: "x".to_string(),
        });
        let (playing, _) = fallback.on_audio_event(&AudioEvent::Started {
            generation: fallback.generation,
        });
        assert_eq!(status_label(&playing).unwrap().0, USING_BACKUP);
    }

    #[test]
    fn buffering_shows_percentage() {
        let session = loading("sudais");
        let (buffering, _) = session.on_audio_event(&AudioEvent::Buffering {
            generation: session.generation,
            ratio: 0.42,
        });
        assert_eq!(status_label(&buffering).unwrap().0, "Loading 42%");
    }
}

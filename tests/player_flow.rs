mod common;

use crossterm::event::KeyCode;

use common::{Harness, FIRST_VERSE};
use quran_player::audio::AudioEvent;
use quran_player::controller::AppEvent;
use quran_player::model::{DetailLoadState, PlaybackStatus, View};

fn audio(harness: &mut Harness, event: AudioEvent) {
    harness.controller.handle_app_event(AppEvent::Audio(event));
}

fn generation(harness: &Harness) -> u64 {
    harness.model().playback.generation
}

/// Past the welcome screen with the first surah open
async fn open_first(reciter: &str) -> Harness {
    let mut harness = Harness::new(reciter);
    harness.press(KeyCode::Enter);
    harness.press(KeyCode::Enter);
    harness.pump().await;
    harness
}

#[tokio::test]
async fn opening_a_surah_loads_audio_and_text() {
    let harness = open_first("sudais").await;
    let model = harness.model();

    assert_eq!(model.view(), View::Detail);
    assert_eq!(model.navigation.active_entry, Some(1));
    assert_eq!(
        harness.output.loads(),
        vec!["https://cdn.test/quran/abdurrahmaan_as-sudays/001.mp3".to_string()]
    );

    let detail = model.detail.as_ref().unwrap();
    assert_eq!(detail.load_state, DetailLoadState::Ready);
    assert!(detail.shows_invocation_heading());
    let pairs = detail.verse_pairs();
    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0].original, FIRST_VERSE);
}

#[tokio::test]
async fn primary_failure_switches_to_backup_once() {
    let mut harness = open_first("sudais").await;

    let g = generation(&harness);
    audio(&mut harness, AudioEvent::Error { generation: g, message: "404".to_string() });
    assert!(harness.model().playback.using_fallback);
    assert_eq!(
        harness.output.loads().last().map(String::as_str),
        Some("https://server11.mp3quran.net/sds/001.mp3")
    );

    let g = generation(&harness);
    audio(&mut harness, AudioEvent::Error { generation: g, message: "404".to_string() });
    assert_eq!(harness.model().playback.status, PlaybackStatus::Failed);
    assert_eq!(harness.output.loads().len(), 2);
    assert!(
        harness
            .model()
            .ui
            .error_message
            .as_deref()
            .unwrap()
            .starts_with("Audio unavailable for Al-Faatiha")
    );
}

#[tokio::test]
async fn reciter_without_backup_fails_on_first_error() {
    let mut harness = open_first("husary").await;

    let g = generation(&harness);
    audio(&mut harness, AudioEvent::Error { generation: g, message: "timeout".to_string() });
    assert_eq!(harness.model().playback.status, PlaybackStatus::Failed);
    assert_eq!(harness.output.loads().len(), 1);
}

#[tokio::test]
async fn stale_audio_events_are_ignored() {
    let mut harness = open_first("sudais").await;
    let old = generation(&harness);

    harness.press(KeyCode::Char('n'));
    harness.pump().await;
    assert_ne!(generation(&harness), old);

    audio(&mut harness, AudioEvent::Error { generation: old, message: "late".to_string() });
    assert_eq!(harness.model().playback.status, PlaybackStatus::Loading);
    assert!(!harness.model().playback.using_fallback);
}

#[tokio::test]
async fn finished_track_advances_and_follows_in_reader() {
    let mut harness = open_first("sudais").await;

    let g = generation(&harness);
    audio(&mut harness, AudioEvent::Loaded { generation: g, duration_seconds: Some(60.0) });
    audio(&mut harness, AudioEvent::Started { generation: g });
    audio(&mut harness, AudioEvent::Ended { generation: g });

    assert_eq!(harness.model().navigation.active_entry, Some(2));
    assert_eq!(
        harness.output.loads().last().map(String::as_str),
        Some("https://cdn.test/quran/abdurrahmaan_as-sudays/002.mp3")
    );

    harness.pump().await;
    let detail = harness.model().detail.as_ref().unwrap();
    assert_eq!(detail.entry_number, 2);
    assert!(!detail.shows_invocation_heading());
}

#[tokio::test]
async fn previous_stops_at_first_surah() {
    let mut harness = open_first("sudais").await;
    harness.press(KeyCode::Char('p'));

    assert_eq!(harness.model().navigation.active_entry, Some(1));
    assert_eq!(harness.output.loads().len(), 1);
}

#[tokio::test]
async fn controls_reach_the_output() {
    let mut harness = open_first("sudais").await;
    let g = generation(&harness);
    audio(&mut harness, AudioEvent::Loaded { generation: g, duration_seconds: Some(120.0) });
    audio(&mut harness, AudioEvent::Started { generation: g });

    harness.press(KeyCode::Char(' '));
    harness.press(KeyCode::Right);
    harness.press(KeyCode::Char('-'));

    let commands = harness.output.commands();
    assert!(commands.contains(&"pause".to_string()));
    assert!(commands.contains(&"seek 10".to_string()));
    assert!(commands.contains(&"volume 0.9".to_string()));
    assert_eq!(harness.model().playback.status, PlaybackStatus::Paused);
}

#[tokio::test]
async fn missing_output_device_fails_through_the_bus() {
    let mut harness = Harness::without_audio("sudais");
    harness.press(KeyCode::Enter);
    harness.press(KeyCode::Enter);

    // Detail text, primary failure, backup failure; in whatever order they land
    for _ in 0..3 {
        harness.pump().await;
    }

    assert_eq!(harness.model().playback.status, PlaybackStatus::Failed);
    assert!(harness.output.commands().is_empty());
}

#[tokio::test]
async fn failed_text_can_be_retried() {
    let mut harness = Harness::new("sudais");
    harness.texts.set_offline(true);
    harness.press(KeyCode::Enter);
    harness.press(KeyCode::Enter);
    harness.pump().await;

    let detail = harness.model().detail.as_ref().unwrap();
    assert_eq!(
        detail.load_state,
        DetailLoadState::Failed("Unexpected response: offline".to_string())
    );

    harness.texts.set_offline(false);
    harness.press(KeyCode::Enter);
    harness.pump().await;
    assert_eq!(
        harness.model().detail.as_ref().unwrap().load_state,
        DetailLoadState::Ready
    );
}

#[tokio::test]
async fn closing_the_reader_keeps_playback() {
    let mut harness = open_first("sudais").await;
    harness.press(KeyCode::Esc);

    assert_eq!(harness.model().view(), View::List);
    assert!(harness.model().detail.is_none());
    assert_eq!(harness.model().navigation.active_entry, Some(1));
    assert_eq!(
        harness.output.commands(),
        vec!["load https://cdn.test/quran/abdurrahmaan_as-sudays/001.mp3".to_string()]
    );
}

//! Playback session state machine
//!
//! Transitions are pure: each takes the current session and returns the next
//! one together with at most one effect for the audio output. The controller
//! executes effects; the audio backend reports back through `AudioEvent`s
//! tagged with the generation of the load that produced them.

use crate::audio::{AudioEvent, DEFAULT_VOLUME};
use crate::catalog::{CatalogEntry, Reciter};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PlaybackStatus {
    #[default]
    Idle,
    Loading,
    Playing,
    Paused,
    Failed,
}

/// What the audio output should do next
#[derive(Clone, Debug, PartialEq)]
pub enum PlaybackEffect {
    Load { url: String, generation: u64 },
    Pause,
    Resume,
    Seek(f64),
    SetVolume(f32),
    /// The track ended on its own; advance to the next entry
    RequestNext,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlaybackSession {
    pub active_entry: Option<&'static CatalogEntry>,
    pub active_reciter: &'static Reciter,
    pub using_fallback: bool,
    pub position_seconds: f64,
    pub duration_seconds: f64,
    pub volume: f32,
    pub status: PlaybackStatus,
    /// Download progress while loading
    pub buffered: Option<f64>,
    pub generation: u64,
    /// Source URLs tried for the current entry/reciter pair
    pub attempts: u8,
    pub source_url: Option<String>,
}

type Transition = (PlaybackSession, Option<PlaybackEffect>);

impl PlaybackSession {
    pub fn new(reciter: &'static Reciter) -> Self {
        Self {
            active_entry: None,
            active_reciter: reciter,
            using_fallback: false,
            position_seconds: 0.0,
            duration_seconds: 0.0,
            volume: DEFAULT_VOLUME,
            status: PlaybackStatus::Idle,
            buffered: None,
            generation: 0,
            attempts: 0,
            source_url: None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.status == PlaybackStatus::Playing
    }

    /// Toggle and seek are disabled until something is loaded, and after a failure
    pub fn controls_enabled(&self) -> bool {
        matches!(self.status, PlaybackStatus::Playing | PlaybackStatus::Paused)
    }

    fn at_end(&self) -> bool {
        self.duration_seconds > 0.0 && self.position_seconds >= self.duration_seconds
    }

    /// Start a fresh attempt budget on `url`
    fn start_load(&self, url: String) -> Transition {
        let generation = self.generation + 1;
        let next = Self {
            using_fallback: false,
            position_seconds: 0.0,
            duration_seconds: 0.0,
            status: PlaybackStatus::Loading,
            buffered: None,
            generation,
            attempts: 1,
            source_url: Some(url.clone()),
            ..self.clone()
        };
        (next, Some(PlaybackEffect::Load { url, generation }))
    }

    fn reload(&self, primary_base: &str) -> Transition {
        match self.active_entry {
            Some(entry) => {
                let url = self.active_reciter.primary_source(primary_base).url_for(entry.number);
                tracing::info!(
                    entry = entry.number,
                    reciter = self.active_reciter.id,
                    url = %url,
                    "Loading recitation"
                );
                self.start_load(url)
            }
            None => (self.clone(), None),
        }
    }

    /// Make `entry` the active entry. Re-selecting the current entry only
    /// reloads it after a failure.
    pub fn select(&self, entry: &'static CatalogEntry, primary_base: &str) -> Transition {
        let unchanged = self.active_entry.is_some_and(|e| e.number == entry.number);
        if unchanged && self.status != PlaybackStatus::Failed {
            return (self.clone(), None);
        }
        Self {
            active_entry: Some(entry),
            ..self.clone()
        }
        .reload(primary_base)
    }

    /// Switch reciter. The active entry, if any, restarts from the primary source.
    pub fn select_reciter(&self, reciter: &'static Reciter, primary_base: &str) -> Transition {
        if reciter.id == self.active_reciter.id {
            return (self.clone(), None);
        }
        Self {
            active_reciter: reciter,
            ..self.clone()
        }
        .reload(primary_base)
    }

    pub fn on_audio_event(&self, event: &AudioEvent) -> Transition {
        if event.generation().is_some_and(|g| g != self.generation) {
            tracing::trace!(?event, current = self.generation, "Ignoring stale audio event");
            return (self.clone(), None);
        }

        match (self.status, event) {
            (PlaybackStatus::Loading, AudioEvent::Buffering { ratio, .. }) => (
                Self {
                    buffered: Some(ratio.clamp(0.0, 1.0)),
                    ..self.clone()
                },
                None,
            ),
            (PlaybackStatus::Loading, AudioEvent::Loaded { duration_seconds, .. }) => (
                Self {
                    duration_seconds: duration_seconds
                        .filter(|d| d.is_finite() && *d > 0.0)
                        .unwrap_or(0.0),
                    ..self.clone()
                },
                None,
            ),
            (PlaybackStatus::Loading, AudioEvent::Started { .. }) => (
                Self {
                    status: PlaybackStatus::Playing,
                    buffered: None,
                    ..self.clone()
                },
                None,
            ),
            (PlaybackStatus::Playing, AudioEvent::Position { position_seconds, .. }) => (
                Self {
                    position_seconds: self.clamp_position(*position_seconds),
                    ..self.clone()
                },
                None,
            ),
            (PlaybackStatus::Playing, AudioEvent::Ended { .. }) => (
                Self {
                    status: PlaybackStatus::Paused,
                    position_seconds: self.duration_seconds,
                    ..self.clone()
                },
                Some(PlaybackEffect::RequestNext),
            ),
            (PlaybackStatus::Loading | PlaybackStatus::Playing, AudioEvent::Error { message, .. }) => {
                self.on_media_error(message)
            }
            _ => (self.clone(), None),
        }
    }

    /// One fallback substitution per entry/reciter pair, then Failed
    fn on_media_error(&self, message: &str) -> Transition {
        let fallback = self
            .active_entry
            .zip(self.active_reciter.fallback_source())
            .filter(|_| !self.using_fallback);

        match fallback {
            Some((entry, source)) => {
                let url = source.url_for(entry.number);
                let generation = self.generation + 1;
                tracing::warn!(
                    entry = entry.number,
                    reciter = self.active_reciter.id,
                    error = message,
                    url = %url,
                    "Primary audio source failed, trying backup server"
                );
                let next = Self {
                    using_fallback: true,
                    position_seconds: 0.0,
                    duration_seconds: 0.0,
                    status: PlaybackStatus::Loading,
                    buffered: None,
                    generation,
                    attempts: self.attempts + 1,
                    source_url: Some(url.clone()),
                    ..self.clone()
                };
                (next, Some(PlaybackEffect::Load { url, generation }))
            }
            None => {
                tracing::error!(
                    entry = self.active_entry.map(|e| e.number),
                    reciter = self.active_reciter.id,
                    attempts = self.attempts,
                    error = message,
                    "Audio unavailable"
                );
                (
                    Self {
                        status: PlaybackStatus::Failed,
                        buffered: None,
                        ..self.clone()
                    },
                    None,
                )
            }
        }
    }

    /// Play/pause. A track paused at its end starts over from the same source.
    pub fn toggle(&self) -> Transition {
        match self.status {
            PlaybackStatus::Playing => (
                Self {
                    status: PlaybackStatus::Paused,
                    ..self.clone()
                },
                Some(PlaybackEffect::Pause),
            ),
            PlaybackStatus::Paused if self.at_end() => match self.source_url.clone() {
                Some(url) => {
                    let (next, effect) = self.start_load(url);
                    let next = Self {
                        using_fallback: self.using_fallback,
                        attempts: self.attempts,
                        ..next
                    };
                    (next, effect)
                }
                None => (self.clone(), None),
            },
            PlaybackStatus::Paused => (
                Self {
                    status: PlaybackStatus::Playing,
                    ..self.clone()
                },
                Some(PlaybackEffect::Resume),
            ),
            _ => (self.clone(), None),
        }
    }

    fn clamp_position(&self, position_seconds: f64) -> f64 {
        let position = if position_seconds.is_finite() {
            position_seconds.max(0.0)
        } else {
            0.0
        };
        if self.duration_seconds > 0.0 {
            position.min(self.duration_seconds)
        } else {
            position
        }
    }

    /// Jump within [0, duration]. Without a known duration there is no upper
    /// bound to respect, so seeking is disabled until one arrives.
    pub fn seek_to(&self, position_seconds: f64) -> Transition {
        if !self.controls_enabled() || self.duration_seconds <= 0.0 {
            return (self.clone(), None);
        }
        let position = self.clamp_position(position_seconds);
        (
            Self {
                position_seconds: position,
                ..self.clone()
            },
            Some(PlaybackEffect::Seek(position)),
        )
    }

    pub fn seek_by(&self, delta_seconds: f64) -> Transition {
        self.seek_to(self.position_seconds + delta_seconds)
    }

    /// Applied in every status, including Idle and Failed
    pub fn set_volume(&self, volume: f32) -> Transition {
        let volume = if volume.is_finite() { volume.clamp(0.0, 1.0) } else { self.volume };
        (
            Self {
                volume,
                ..self.clone()
            },
            Some(PlaybackEffect::SetVolume(volume)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{find_entry, find_reciter};
    use proptest::prelude::*;

    const BASE: &str = "https://cdn.test/quran";

    fn entry(n: u16) -> &'static CatalogEntry {
        find_entry(n).unwrap()
    }

    fn session(reciter: &str) -> PlaybackSession {
        PlaybackSession::new(find_reciter(reciter).unwrap())
    }

    fn loaded_url(effect: Option<PlaybackEffect>) -> String {
        match effect {
            Some(PlaybackEffect::Load { url, .. }) => url,
            other => panic!("expected a load, got {:?}", other),
        }
    }

    fn playing(reciter: &str, n: u16) -> PlaybackSession {
        let (s, _) = session(reciter).select(entry(n), BASE);
        let g = s.generation;
        let (s, _) = s.on_audio_event(&AudioEvent::Loaded {
            generation: g,
            duration_seconds: Some(120.0),
        });
        let (s, _) = s.on_audio_event(&AudioEvent::Started { generation: g });
        s
    }

    #[test]
    fn select_loads_primary_source() {
        let (s, effect) = session("sudais").select(entry(36), BASE);
        assert_eq!(s.status, PlaybackStatus::Loading);
        assert_eq!(s.attempts, 1);
        assert_eq!(loaded_url(effect), "https://cdn.test/quran/abdurrahmaan_as-sudays/036.mp3");
    }

    #[test]
    fn started_moves_to_playing() {
        let s = playing("sudais", 1);
        assert_eq!(s.status, PlaybackStatus::Playing);
        assert_eq!(s.duration_seconds, 120.0);
    }

    #[test]
    fn media_error_falls_back_once_then_fails() {
        let (s, _) = session("mishary").select(entry(1), BASE);
        let (s, effect) = s.on_audio_event(&AudioEvent::Error {
            generation: s.generation,
            message: "404".to_string(),
        });
        assert!(s.using_fallback);
        assert_eq!(s.status, PlaybackStatus::Loading);
        assert_eq!(loaded_url(effect), "https://server8.mp3quran.net/afs/001.mp3");

        let (s, effect) = s.on_audio_event(&AudioEvent::Error {
            generation: s.generation,
            message: "404".to_string(),
        });
        assert_eq!(s.status, PlaybackStatus::Failed);
        assert_eq!(s.attempts, 2);
        assert!(effect.is_none());
    }

    #[test]
    fn no_fallback_fails_after_one_attempt() {
        let (s, _) = session("husary").select(entry(1), BASE);
        let (s, effect) = s.on_audio_event(&AudioEvent::Error {
            generation: s.generation,
            message: "decode".to_string(),
        });
        assert_eq!(s.status, PlaybackStatus::Failed);
        assert_eq!(s.attempts, 1);
        assert!(effect.is_none());
    }

    #[test]
    fn new_selection_resets_fallback_budget() {
        let (s, _) = session("mishary").select(entry(1), BASE);
        let (s, _) = s.on_audio_event(&AudioEvent::Error {
            generation: s.generation,
            message: "404".to_string(),
        });
        let (s, effect) = s.select(entry(2), BASE);
        assert!(!s.using_fallback);
        assert_eq!(s.attempts, 1);
        assert_eq!(s.position_seconds, 0.0);
        assert!(loaded_url(effect).ends_with("/mishaari_raashid_al_3afaasee/002.mp3"));
    }

    #[test]
    fn reciter_change_reloads_active_entry() {
        let s = playing("sudais", 18);
        let (s, effect) = s.select_reciter(find_reciter("husary").unwrap(), BASE);
        assert_eq!(s.status, PlaybackStatus::Loading);
        assert!(loaded_url(effect).ends_with("/mahmood_khaleel_al-husaree/018.mp3"));
    }

    #[test]
    fn reciter_change_without_entry_stays_idle() {
        let (s, effect) = session("sudais").select_reciter(find_reciter("basit").unwrap(), BASE);
        assert_eq!(s.status, PlaybackStatus::Idle);
        assert_eq!(s.active_reciter.id, "basit");
        assert!(effect.is_none());
    }

    #[test]
    fn stale_events_are_ignored() {
        let (first, _) = session("sudais").select(entry(1), BASE);
        let (second, _) = first.select(entry(2), BASE);
        let (after, effect) = second.on_audio_event(&AudioEvent::Error {
            generation: first.generation,
            message: "late".to_string(),
        });
        assert_eq!(after, second);
        assert!(effect.is_none());
    }

    #[test]
    fn toggle_only_between_playing_and_paused() {
        let s = playing("sudais", 1);
        let (paused, effect) = s.toggle();
        assert_eq!(paused.status, PlaybackStatus::Paused);
        assert_eq!(effect, Some(PlaybackEffect::Pause));
        let (resumed, effect) = paused.toggle();
        assert_eq!(resumed.status, PlaybackStatus::Playing);
        assert_eq!(effect, Some(PlaybackEffect::Resume));

        let (loading, _) = session("sudais").select(entry(1), BASE);
        assert_eq!(loading.toggle(), (loading.clone(), None));
    }

    #[test]
    fn failed_disables_toggle_and_seek() {
        let (s, _) = session("husary").select(entry(1), BASE);
        let (failed, _) = s.on_audio_event(&AudioEvent::Error {
            generation: s.generation,
            message: "x".to_string(),
        });
        assert!(failed.toggle().1.is_none());
        assert!(failed.seek_to(10.0).1.is_none());
    }

    #[test]
    fn seek_is_disabled_without_duration() {
        let (s, _) = session("sudais").select(entry(1), BASE);
        let g = s.generation;
        let (s, _) = s.on_audio_event(&AudioEvent::Loaded {
            generation: g,
            duration_seconds: None,
        });
        let (s, _) = s.on_audio_event(&AudioEvent::Started { generation: g });
        assert_eq!(s.status, PlaybackStatus::Playing);
        assert_eq!(s.duration_seconds, 0.0);

        let (after, effect) = s.seek_to(5000.0);
        assert!(effect.is_none());
        assert_eq!(after.position_seconds, 0.0);
    }

    #[test]
    fn natural_end_requests_next() {
        let s = playing("sudais", 1);
        let (s, effect) = s.on_audio_event(&AudioEvent::Ended { generation: s.generation });
        assert_eq!(s.status, PlaybackStatus::Paused);
        assert_eq!(s.position_seconds, 120.0);
        assert_eq!(effect, Some(PlaybackEffect::RequestNext));
    }

    #[test]
    fn toggle_at_end_replays_source() {
        let s = playing("sudais", 114);
        let (s, _) = s.on_audio_event(&AudioEvent::Ended { generation: s.generation });
        let (replay, effect) = s.toggle();
        assert_eq!(replay.status, PlaybackStatus::Loading);
        assert!(loaded_url(effect).ends_with("/114.mp3"));
    }

    #[test]
    fn volume_applies_while_idle() {
        let (s, effect) = session("sudais").set_volume(0.25);
        assert_eq!(s.volume, 0.25);
        assert_eq!(effect, Some(PlaybackEffect::SetVolume(0.25)));
    }

    proptest! {
        #[test]
        fn seek_is_clamped_to_duration(target in -1000.0f64..1000.0) {
            let (s, effect) = playing("sudais", 1).seek_to(target);
            prop_assert!((0.0..=120.0).contains(&s.position_seconds));
            prop_assert_eq!(effect, Some(PlaybackEffect::Seek(s.position_seconds)));
        }

        #[test]
        fn volume_is_clamped(volume in -10.0f32..10.0) {
            let (s, _) = session("sudais").set_volume(volume);
            prop_assert!((0.0..=1.0).contains(&s.volume));
        }
    }
}

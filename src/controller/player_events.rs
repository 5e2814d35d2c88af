//! Audio backend event listener

use tokio::sync::mpsc;

use crate::audio::AudioEvent;
use crate::model::PlaybackStatus;
use super::{AppController, AppEvent};

impl AppController {
    /// Forward backend events onto the app event bus so they are applied in
    /// order with everything else.
    pub fn start_audio_event_listener(&self, mut audio_events: mpsc::UnboundedReceiver<AudioEvent>) {
        let events = self.events.clone();
        tracing::info!("Starting audio event listener");

        tokio::spawn(async move {
            while let Some(event) = audio_events.recv().await {
                if events.send(AppEvent::Audio(event)).is_err() {
                    tracing::debug!("Audio event listener shutting down");
                    break;
                }
            }
        });
    }

    pub(crate) fn handle_audio_event(&mut self, event: AudioEvent) {
        match &event {
            AudioEvent::Buffering { generation, ratio } => {
                tracing::trace!(generation, ratio, "AudioEvent::Buffering");
            }
            AudioEvent::Position { generation, position_seconds } => {
                tracing::trace!(generation, position_seconds, "AudioEvent::Position");
            }
            AudioEvent::Loaded { generation, duration_seconds } => {
                tracing::debug!(generation, ?duration_seconds, "AudioEvent::Loaded");
            }
            AudioEvent::Started { generation } => {
                tracing::info!(generation, "AudioEvent::Started");
            }
            AudioEvent::Ended { generation } => {
                tracing::info!(generation, "AudioEvent::Ended");
            }
            AudioEvent::Error { generation, message } => {
                tracing::warn!(generation, error = %message, "AudioEvent::Error");
            }
            AudioEvent::DeviceUnavailable(reason) => {
                tracing::error!(reason = %reason, "AudioEvent::DeviceUnavailable");
            }
        }

        let was_failed = self.model.playback.status == PlaybackStatus::Failed;
        let effects = self.model.apply_audio(&event);
        if !was_failed && self.model.playback.status == PlaybackStatus::Failed {
            if let Some(entry) = self.model.playback.active_entry {
                self.model.set_error(format!(
                    "Audio unavailable for {} ({})",
                    entry.english_name, self.model.playback.active_reciter.display_name
                ));
            }
        }
        self.run_effects(effects);
    }
}

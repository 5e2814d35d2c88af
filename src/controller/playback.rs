//! Playback controls and audio effect execution

use crate::audio::AudioEvent;
use crate::model::{PlaybackEffect, SEEK_STEP_SECONDS, VOLUME_STEP};

use super::{AppController, AppEvent};

impl AppController {
    pub fn toggle_playback(&mut self) {
        let effects = self.model.toggle_playback();
        self.run_effects(effects);
    }

    pub fn seek_forward(&mut self) {
        let effects = self.model.seek_by(SEEK_STEP_SECONDS);
        self.run_effects(effects);
    }

    pub fn seek_backward(&mut self) {
        let effects = self.model.seek_by(-SEEK_STEP_SECONDS);
        self.run_effects(effects);
    }

    pub fn volume_up(&mut self) {
        let effects = self.model.change_volume(VOLUME_STEP);
        self.run_effects(effects);
    }

    pub fn volume_down(&mut self) {
        let effects = self.model.change_volume(-VOLUME_STEP);
        self.run_effects(effects);
    }

    pub fn confirm_reciter(&mut self) {
        let effects = self.model.confirm_reciter_picker();
        self.run_effects(effects);
    }

    pub(crate) fn execute_playback(&mut self, effect: PlaybackEffect) {
        let Some(audio) = self.audio.clone() else {
            // Without an output device a load fails like a missing source
            if let PlaybackEffect::Load { generation, .. } = effect {
                let _ = self.events.send(AppEvent::Audio(AudioEvent::Error {
                    generation,
                    message: "No audio output device".to_string(),
                }));
            }
            return;
        };

        match effect {
            PlaybackEffect::Load { url, generation } => {
                tracing::debug!(url = %url, generation, "Loading audio source");
                audio.load(&url, generation);
            }
            PlaybackEffect::Pause => audio.pause(),
            PlaybackEffect::Resume => audio.resume(),
            PlaybackEffect::Seek(position) => audio.seek(position),
            PlaybackEffect::SetVolume(volume) => audio.set_volume(volume),
            // The model advances to the next entry itself
            PlaybackEffect::RequestNext => {}
        }
    }
}

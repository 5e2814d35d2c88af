//! Hand-written collaborators for driving the controller end to end

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use quran_player::audio::AudioOutput;
use quran_player::catalog::find_reciter;
use quran_player::controller::{AppController, AppEvent};
use quran_player::error::{ServiceError, ServiceResult};
use quran_player::model::{AppModel, INVOCATION};
use quran_player::services::{DetailTexts, LocalSearchBackend, SearchResolver, TextSource, Verse};

pub const AUDIO_BASE: &str = "https://cdn.test/quran";
pub const FIRST_VERSE: &str = "ٱلْحَمْدُ لِلَّهِ رَبِّ ٱلْعَـٰلَمِينَ";

/// Records every command as a short string
#[derive(Default)]
pub struct RecordingOutput {
    commands: Mutex<Vec<String>>,
}

impl RecordingOutput {
    pub fn commands(&self) -> Vec<String> {
        self.commands.lock().unwrap().clone()
    }

    pub fn loads(&self) -> Vec<String> {
        self.commands()
            .into_iter()
            .filter_map(|c| c.strip_prefix("load ").map(str::to_string))
            .collect()
    }

    fn push(&self, command: String) {
        self.commands.lock().unwrap().push(command);
    }
}

impl AudioOutput for RecordingOutput {
    fn load(&self, url: &str, _generation: u64) {
        self.push(format!("load {}", url));
    }

    fn pause(&self) {
        self.push("pause".to_string());
    }

    fn resume(&self) {
        self.push("resume".to_string());
    }

    fn seek(&self, position_seconds: f64) {
        self.push(format!("seek {}", position_seconds));
    }

    fn set_volume(&self, volume: f32) {
        self.push(format!("volume {:.1}", volume));
    }
}

/// Two verses per entry; fails while `offline` is set
#[derive(Default)]
pub struct FakeTexts {
    pub offline: AtomicBool,
}

impl FakeTexts {
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }
}

#[async_trait]
impl TextSource for FakeTexts {
    async fn fetch_detail(&self, entry_number: u16) -> ServiceResult<DetailTexts> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(ServiceError::SchemaMismatch("offline".to_string()));
        }
        let verse = |index: usize, text: String| Verse {
            index,
            verse_number: index as u16 + 1,
            text,
        };
        Ok(DetailTexts {
            entry_number,
            original: vec![
                verse(0, format!("{} {}", INVOCATION, FIRST_VERSE)),
                verse(1, "ٱلرَّحْمَـٰنِ ٱلرَّحِيمِ".to_string()),
            ],
            translated: vec![
                verse(0, "سب تعریفیں اللہ کے لیے ہیں".to_string()),
                verse(1, "بڑا مہربان نہایت رحم والا".to_string()),
            ],
        })
    }
}

pub struct Harness {
    pub controller: AppController,
    pub events: mpsc::UnboundedReceiver<AppEvent>,
    pub output: Arc<RecordingOutput>,
    pub texts: Arc<FakeTexts>,
}

impl Harness {
    pub fn new(reciter: &str) -> Self {
        Self::build(reciter, true)
    }

    pub fn without_audio(reciter: &str) -> Self {
        Self::build(reciter, false)
    }

    fn build(reciter: &str, with_audio: bool) -> Self {
        let (tx, events) = mpsc::unbounded_channel();
        let output = Arc::new(RecordingOutput::default());
        let texts = Arc::new(FakeTexts::default());
        let audio = with_audio.then(|| output.clone() as Arc<dyn AudioOutput>);
        let model = AppModel::new(find_reciter(reciter).unwrap(), AUDIO_BASE);
        let controller = AppController::new(
            model,
            audio,
            SearchResolver::new(Arc::new(LocalSearchBackend)),
            texts.clone(),
            tx,
        );
        Self {
            controller,
            events,
            output,
            texts,
        }
    }

    pub fn press(&mut self, code: KeyCode) {
        self.controller
            .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.press(KeyCode::Char(c));
        }
    }

    /// Wait for the next background completion and apply it
    pub async fn pump(&mut self) {
        let event = self.events.recv().await.expect("event bus closed");
        self.controller.handle_app_event(event);
    }

    pub fn model(&self) -> &AppModel {
        self.controller.model()
    }
}

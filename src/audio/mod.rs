//! Audio output: source URLs, download and the rodio sink
//!
//! `AudioOutput` is the seam the controller drives. `AudioBackend` is the real
//! implementation: it downloads the source over HTTP on the tokio runtime and
//! hands the bytes to a dedicated sink thread (the rodio output stream is not
//! `Send`). Progress and failures come back as `AudioEvent`s.

mod source;
mod sink;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{mpsc as std_mpsc, Arc};
use std::time::Duration;

use anyhow::Result;
use futures::StreamExt;
use tokio::sync::mpsc;

use crate::error::{ServiceError, ServiceResult};
use sink::SinkCommand;

pub use source::{pad_entry_number, SourceDescriptor, AUDIO_EXTENSION};

pub const DEFAULT_VOLUME: f32 = 1.0;
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const BUFFERING_REPORT_STEP: f64 = 0.05;

/// Events reported by the audio backend. Every per-source event carries the
/// generation of the load that produced it.
#[derive(Clone, Debug, PartialEq)]
pub enum AudioEvent {
    Buffering { generation: u64, ratio: f64 },
    Loaded { generation: u64, duration_seconds: Option<f64> },
    Started { generation: u64 },
    Position { generation: u64, position_seconds: f64 },
    Ended { generation: u64 },
    Error { generation: u64, message: String },
    DeviceUnavailable(String),
}

impl AudioEvent {
    pub fn generation(&self) -> Option<u64> {
        match self {
            AudioEvent::Buffering { generation, .. }
            | AudioEvent::Loaded { generation, .. }
            | AudioEvent::Started { generation }
            | AudioEvent::Position { generation, .. }
            | AudioEvent::Ended { generation }
            | AudioEvent::Error { generation, .. } => Some(*generation),
            AudioEvent::DeviceUnavailable(_) => None,
        }
    }
}

/// Commands the playback controller issues to the output sink
#[cfg_attr(test, mockall::automock)]
pub trait AudioOutput: Send + Sync {
    /// Replace whatever is playing with `url`. Only one source is attempted at
    /// a time; a newer load supersedes an unfinished one.
    fn load(&self, url: &str, generation: u64);
    fn pause(&self);
    fn resume(&self);
    fn seek(&self, position_seconds: f64);
    fn set_volume(&self, volume: f32);
}

pub struct AudioBackend {
    http: reqwest::Client,
    commands: std_mpsc::Sender<SinkCommand>,
    events: mpsc::UnboundedSender<AudioEvent>,
    current_generation: Arc<AtomicU64>,
}

impl AudioBackend {
    pub fn new(events: mpsc::UnboundedSender<AudioEvent>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;

        let (commands, command_rx) = std_mpsc::channel();
        let sink_events = events.clone();
        std::thread::Builder::new()
            .name("audio-sink".to_string())
            .spawn(move || sink::run_sink(command_rx, sink_events))?;

        tracing::info!("Audio backend started");

        Ok(Self {
            http,
            commands,
            events,
            current_generation: Arc::new(AtomicU64::new(0)),
        })
    }

    fn send(&self, command: SinkCommand) {
        if self.commands.send(command).is_err() {
            tracing::error!("Audio sink thread is gone");
        }
    }
}

impl AudioOutput for AudioBackend {
    fn load(&self, url: &str, generation: u64) {
        self.current_generation.store(generation, Ordering::SeqCst);
        self.send(SinkCommand::Stop);

        let http = self.http.clone();
        let url = url.to_string();
        let events = self.events.clone();
        let commands = self.commands.clone();
        let current = self.current_generation.clone();

        tokio::spawn(async move {
            crate::log_request_started!("audio_download", url = %url, generation);
            match download(&http, &url, generation, &current, &events).await {
                Ok(Some(bytes)) => {
                    if current.load(Ordering::SeqCst) != generation {
                        tracing::debug!(generation, "Dropping superseded audio download");
                        return;
                    }
                    tracing::info!(generation, bytes = bytes.len(), "Audio source downloaded");
                    let _ = commands.send(SinkCommand::Play { generation, bytes });
                }
                Ok(None) => {
                    tracing::debug!(generation, "Audio download superseded");
                }
                Err(e) => {
                    tracing::warn!(url = %url, generation, error = %e, "Audio source failed");
                    let _ = events.send(AudioEvent::Error {
                        generation,
                        message: e.to_string(),
                    });
                }
            }
        });
    }

    fn pause(&self) {
        self.send(SinkCommand::Pause);
    }

    fn resume(&self) {
        self.send(SinkCommand::Resume);
    }

    fn seek(&self, position_seconds: f64) {
        self.send(SinkCommand::Seek(Duration::from_secs_f64(position_seconds.max(0.0))));
    }

    fn set_volume(&self, volume: f32) {
        self.send(SinkCommand::Volume(volume));
    }
}

/// Download a whole source, reporting buffering progress.
///
/// Returns `Ok(None)` when a newer load superseded this one mid-flight.
async fn download(
    http: &reqwest::Client,
    url: &str,
    generation: u64,
    current: &AtomicU64,
    events: &mpsc::UnboundedSender<AudioEvent>,
) -> ServiceResult<Option<Vec<u8>>> {
    let response = http.get(url).send().await?.error_for_status()?;
    let total = response.content_length();
    let mut bytes = Vec::with_capacity(total.unwrap_or(0) as usize);
    let mut last_reported = 0.0;
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        if current.load(Ordering::SeqCst) != generation {
            return Ok(None);
        }
        bytes.extend_from_slice(&chunk?);

        if let Some(total) = total.filter(|t| *t > 0) {
            let ratio = (bytes.len() as f64 / total as f64).min(1.0);
            if ratio - last_reported >= BUFFERING_REPORT_STEP {
                last_reported = ratio;
                let _ = events.send(AudioEvent::Buffering { generation, ratio });
            }
        }
    }

    if bytes.is_empty() {
        return Err(ServiceError::MediaSource(format!("empty audio source: {}", url)));
    }
    Ok(Some(bytes))
}

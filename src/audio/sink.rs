//! The rodio output sink, owned by a dedicated thread

use std::io::Cursor;
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::Duration;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::{MediaSourceStream, MediaSourceStreamOptions};
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use tokio::sync::mpsc::UnboundedSender;

use super::{AudioEvent, AUDIO_EXTENSION, DEFAULT_VOLUME};

const POSITION_TICK: Duration = Duration::from_millis(250);

pub(super) enum SinkCommand {
    Play { generation: u64, bytes: Vec<u8> },
    Pause,
    Resume,
    Seek(Duration),
    Volume(f32),
    Stop,
}

struct Output {
    // Dropping the stream silences the sink
    _stream: OutputStream,
    _handle: OutputStreamHandle,
    sink: Sink,
}

fn open_output() -> Result<Output, String> {
    let (stream, handle) = OutputStream::try_default().map_err(|e| e.to_string())?;
    let sink = Sink::try_new(&handle).map_err(|e| e.to_string())?;
    Ok(Output {
        _stream: stream,
        _handle: handle,
        sink,
    })
}

/// Duration read from the container over a sized cursor.
///
/// rodio decodes from a source of unknown length, so constant-bitrate files
/// without a Xing/Info header report no total duration there. With the byte
/// length known, the demuxer can estimate the frame count.
fn probe_duration(bytes: &[u8]) -> Option<f64> {
    let stream = MediaSourceStream::new(
        Box::new(Cursor::new(bytes.to_vec())),
        MediaSourceStreamOptions::default(),
    );
    let mut hint = Hint::new();
    hint.with_extension(AUDIO_EXTENSION);

    let probed = symphonia::default::get_probe()
        .format(&hint, stream, &FormatOptions::default(), &MetadataOptions::default())
        .ok()?;
    let params = &probed.format.default_track()?.codec_params;
    let time = params.time_base?.calc_time(params.n_frames?);
    let seconds = time.seconds as f64 + time.frac;
    (seconds.is_finite() && seconds > 0.0).then_some(seconds)
}

pub(super) fn run_sink(commands: Receiver<SinkCommand>, events: UnboundedSender<AudioEvent>) {
    let output = match open_output() {
        Ok(output) => Some(output),
        Err(e) => {
            tracing::error!(error = %e, "No audio output device");
            let _ = events.send(AudioEvent::DeviceUnavailable(e));
            None
        }
    };

    let mut volume = DEFAULT_VOLUME;
    let mut playing_generation: Option<u64> = None;

    loop {
        match commands.recv_timeout(POSITION_TICK) {
            Ok(SinkCommand::Play { generation, bytes }) => {
                let Some(output) = output.as_ref() else {
                    let _ = events.send(AudioEvent::Error {
                        generation,
                        message: "No audio output device".to_string(),
                    });
                    continue;
                };
                let probed_duration = probe_duration(&bytes);
                match Decoder::new(Cursor::new(bytes)) {
                    Ok(source) => {
                        let duration_seconds = source
                            .total_duration()
                            .map(|d| d.as_secs_f64())
                            .or(probed_duration);
                        output.sink.clear();
                        output.sink.append(source);
                        output.sink.set_volume(volume);
                        output.sink.play();
                        playing_generation = Some(generation);
                        tracing::debug!(generation, ?duration_seconds, "Sink playing");
                        let _ = events.send(AudioEvent::Loaded {
                            generation,
                            duration_seconds,
                        });
                        let _ = events.send(AudioEvent::Started { generation });
                    }
                    Err(e) => {
                        tracing::warn!(generation, error = %e, "Could not decode audio source");
                        let _ = events.send(AudioEvent::Error {
                            generation,
                            message: e.to_string(),
                        });
                    }
                }
            }
            Ok(SinkCommand::Pause) => {
                if let Some(output) = output.as_ref() {
                    output.sink.pause();
                }
            }
            Ok(SinkCommand::Resume) => {
                if let Some(output) = output.as_ref() {
                    output.sink.play();
                }
            }
            Ok(SinkCommand::Seek(position)) => {
                if let Some(output) = output.as_ref() {
                    if let Err(e) = output.sink.try_seek(position) {
                        tracing::warn!(error = %e, "Seek failed");
                    }
                }
            }
            Ok(SinkCommand::Volume(v)) => {
                volume = v;
                if let Some(output) = output.as_ref() {
                    output.sink.set_volume(v);
                }
            }
            Ok(SinkCommand::Stop) => {
                playing_generation = None;
                if let Some(output) = output.as_ref() {
                    output.sink.clear();
                }
            }
            Err(RecvTimeoutError::Timeout) => {
                let (Some(output), Some(generation)) = (output.as_ref(), playing_generation) else {
                    continue;
                };
                if output.sink.empty() {
                    playing_generation = None;
                    let _ = events.send(AudioEvent::Ended { generation });
                } else if !output.sink.is_paused() {
                    let _ = events.send(AudioEvent::Position {
                        generation,
                        position_seconds: output.sink.get_pos().as_secs_f64(),
                    });
                }
            }
            Err(RecvTimeoutError::Disconnected) => {
                tracing::debug!("Audio sink thread shutting down");
                break;
            }
        }
    }
}

//! Tracing setup for the player
//!
//! While the player runs, the alternate screen belongs to ratatui, so nothing
//! may be printed. Every event from the catalog, the collaborators and the
//! audio thread lands in `.logs/quran-player.<date>` instead, one file per day.
//! Set `RUST_LOG` (e.g. `RUST_LOG=quran_player::audio=trace`) to change what
//! gets recorded.

use std::path::Path;
use tracing_appender::{
    non_blocking::NonBlocking,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

const LOG_DIR: &str = ".logs";
const LOG_FILE_PREFIX: &str = "quran-player";

/// Our own modules at debug; HTTP and decoding internals only when notable
const DEFAULT_FILTER: &str = "quran_player=debug,reqwest=info,rodio=info,symphonia=warn,warn";

fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Daily-rotated file writer. The worker guard is leaked: the player never
/// tears logging down before exit, and dropping it early would lose lines.
fn daily_file_writer(dir: &Path) -> anyhow::Result<NonBlocking> {
    std::fs::create_dir_all(dir)?;
    let appender = RollingFileAppender::new(Rotation::DAILY, dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    Box::leak(Box::new(guard));
    Ok(writer)
}

/// Install the global subscriber.
///
/// Fails if the log directory cannot be created or a subscriber is already
/// set; `main` reports that on stderr and carries on without logs.
pub fn init_logging() -> anyhow::Result<()> {
    let writer = daily_file_writer(Path::new(LOG_DIR))?;

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(log_filter())
        .with(file_layer)
        .try_init()?;

    tracing::info!(dir = LOG_DIR, prefix = LOG_FILE_PREFIX, "Player log opened");
    Ok(())
}

/// Record how a call to a remote collaborator (text editions, LLM, audio CDN) ended
#[macro_export]
macro_rules! log_request_outcome {
    ($operation:expr, $result:expr) => {
        match &$result {
            Ok(_) => tracing::info!(operation = $operation, "Collaborator request completed"),
            Err(e) => {
                tracing::error!(operation = $operation, error = %e, "Collaborator request failed")
            }
        }
    };
}

/// Record that a collaborator call is about to go out, with its key fields
#[macro_export]
macro_rules! log_request_started {
    ($operation:expr, $($field:tt)*) => {
        tracing::debug!(operation = $operation, $($field)*, "Collaborator request sent");
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }
}

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use quran_player::audio::{AudioBackend, AudioOutput};
use quran_player::catalog::default_reciter;
use quran_player::controller::{AppController, AppEvent};
use quran_player::logging;
use quran_player::model::AppModel;
use quran_player::services::{search_backend, AlQuranClient, SearchResolver};
use quran_player::settings::Settings;
use quran_player::view::{AppView, FrameInfo};

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== Quran Player Starting ===");

    let settings = Settings::load().context("Failed to load settings")?;

    let http = reqwest::Client::builder()
        .timeout(settings.http_timeout())
        .build()
        .context("Failed to build HTTP client")?;

    let texts = Arc::new(AlQuranClient::new(http.clone(), &settings));
    let resolver = SearchResolver::new(search_backend(http, &settings));

    let reciter = default_reciter(settings.default_reciter.as_deref());
    let mut app_model = AppModel::new(reciter, settings.audio_base_url.clone());

    let (audio_tx, audio_rx) = mpsc::unbounded_channel();
    let audio: Option<Arc<dyn AudioOutput>> = match AudioBackend::new(audio_tx) {
        Ok(backend) => Some(Arc::new(backend)),
        Err(e) => {
            tracing::error!(error = %e, "Audio backend failed to start");
            app_model.set_error(format!("Audio init failed: {}", e));
            None
        }
    };

    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let controller = AppController::new(app_model, audio, resolver, texts, events_tx);
    controller.start_audio_event_listener(audio_rx);

    tracing::info!("Starting TUI...");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, controller, events_rx).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("Quran Player shutting down");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut controller: AppController,
    mut events: mpsc::UnboundedReceiver<AppEvent>,
) -> io::Result<()> {
    loop {
        // Apply finished background work before drawing
        while let Ok(event) = events.try_recv() {
            controller.handle_app_event(event);
        }

        controller.tick();

        let mut frame_info = FrameInfo::default();
        terminal.draw(|f| {
            frame_info = AppView::render(f, controller.model());
        })?;
        controller.set_detail_scroll_limit(frame_info.detail_max_scroll);

        if controller.should_quit() {
            break;
        }

        // Short poll keeps the progress bar moving; yield so spawned work runs
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    controller.handle_key_event(key);
                }
            }
        }
        tokio::task::yield_now().await;
    }

    Ok(())
}

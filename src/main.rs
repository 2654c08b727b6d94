//! SwiftCap Apply - terminal funding application form
//!
//! A Ratatui-based TUI that walks an applicant through the five steps of a
//! funding application and submits it.

mod app;
mod config;
mod controller;
mod error;
mod state;
mod submission;
mod ui;

use anyhow::Result;
use app::App;
use config::ApplyConfig;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let (config, config_warnings, config_error) = match ApplyConfig::load() {
        Ok((config, warnings)) => (config, warnings, None),
        Err(err) => (ApplyConfig::default(), Vec::new(), Some(err)),
    };

    init_logging(&config)?;
    if let Some(err) = config_error {
        tracing::warn!("Failed to load config, using defaults: {err:#}");
    }
    for warning in config_warnings {
        tracing::warn!("{warning}");
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(&config);
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Log to the configured file, or to stderr when none is set
fn init_logging(config: &ApplyConfig) -> Result<()> {
    let file_layer = match &config.log_file {
        Some(path) => {
            let file = File::create(path)?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };
    let stderr_layer = file_layer
        .is_none()
        .then(|| tracing_subscriber::fmt::layer().with_writer(io::stderr));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "swiftcap_apply=info".into()),
        )
        .with(file_layer)
        .with(stderr_layer)
        .init();

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Size the step section before anything scrolls
        let term_size = terminal.size()?;
        app.set_visible_fields(ui::visible_field_rows(term_size.height));

        // Settle finished submissions and ease the progress bar
        app.tick();

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Use faster polling during animation or processing (16ms = ~60fps)
        // Normal polling (100ms) otherwise
        let poll_duration = if app.is_animating() {
            std::time::Duration::from_millis(16)
        } else {
            std::time::Duration::from_millis(100)
        };

        // Handle crossterm events
        if event::poll(poll_duration)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        // Give the submission task a chance to run between frames
        tokio::task::yield_now().await;

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}

//! Registration TUI - terminal user registration form
//!
//! Accepted registrations are handed to the log sink.

use anyhow::Result;
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use registration_tui::{
    app::App,
    config::{TuiConfig, LOG_ENV},
    logging,
    sink::LogSink,
    ui,
};
use std::io;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let config = match TuiConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Warning: {err}; using defaults");
            TuiConfig::default()
        }
    };

    // Initialize logging; the guard flushes the log file on exit
    let filter = config.log_filter(std::env::var(LOG_ENV).ok());
    let _log_guard = logging::init(&filter, &TuiConfig::log_dir())?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let sink = LogSink::new(config.pretty_submissions());
    let mut app = App::new(config, Box::new(sink));
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key).await?;
                }
                Event::Paste(text) => app.handle_paste(&text),
                Event::Resize(_width, _height) => {
                    // Layout is recomputed on next draw
                }
                _ => {}
            }
        }

        if app.should_quit() {
            tracing::info!(
                delivered = app.state.submissions_delivered,
                "Registration form closed"
            );
            return Ok(());
        }
    }
}

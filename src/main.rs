pub mod app;
pub mod config;
pub mod cursor;
pub mod grid;
pub mod menu;
pub mod model;
pub mod node;
pub mod render;
pub mod resolver;

use std::io;
use std::process;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};
use ratatui::{backend::CrosstermBackend, Terminal};

use app::App;
use config::{Args, GridConfig};

fn main() -> Result<(), io::Error> {
    let config = match Args::parse().validate() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(2);
        }
    };

    // The terminal belongs to the UI, so logs only go to a file.
    let _logger = start_logger(&config);

    let mut app = match App::new(&config) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };
    log::info!("circuit grid {}x{} ready", config.wires, config.columns);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        log::error!("terminal loop failed: {e}");
        eprintln!("Error: {e}");
    }

    Ok(())
}

fn start_logger(config: &GridConfig) -> Option<LoggerHandle> {
    let logger = match Logger::try_with_env_or_str(&config.log_level) {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("Invalid log level {:?}: {e}", config.log_level);
            return None;
        }
    };
    match logger
        .log_to_file(
            FileSpec::default()
                .directory(&config.log_dir)
                .basename("circuit-grid")
                .suffix("log")
                .suppress_timestamp(),
        )
        .rotate(
            Criterion::Size(64 * 1024),
            Naming::Numbers,
            Cleanup::KeepLogFiles(3),
        )
        .start()
    {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Failed to create log file in {}: {e}", config.log_dir.display());
            None
        }
    }
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<(), io::Error> {
    loop {
        terminal.draw(|f| render::render(f, app))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        let evt = event::read()?;
        if let Event::Key(key) = evt {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            // Clear status message on any key
            app.status_msg.clear();

            // Global: Ctrl+C always quits
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                return Ok(());
            }

            if let Some(command) = menu::command_for(key.code) {
                if app.apply(command) {
                    log::info!("quit requested");
                    return Ok(());
                }
            }
        }
    }
}

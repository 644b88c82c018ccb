//! Main entry point for the episode-browser application.

use clap::Parser;
use crossterm::{
    event::Event,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use episode_browser::api::fetch_episodes;
use episode_browser::catalog::Catalog;
use episode_browser::config::Config;
use episode_browser::tui::{Action, App, draw, poll_event};
use log::{debug, warn};
use ratatui::prelude::*;
use std::io::{self, stdout};
use std::time::Duration;

/// Command-line arguments for the episode-browser application.
#[derive(Parser, Debug)]
#[command(
    name = "episode-browser",
    version,
    about = "A TUI episode catalogue browser",
    long_about = "Browse, search, and jump through a show's episode catalogue from TVMaze using a TUI interface."
)]
struct Args {
    /// TVMaze show id to browse (overrides config)
    #[arg(short, long)]
    show: Option<u64>,

    /// Base URL of the episode provider API (overrides config)
    #[arg(short, long)]
    api_url: Option<String>,

    /// Log verbosity level: 0=error, 1=warn, 2=info, 3=debug, 4=trace
    #[arg(short, long, default_value_t = 1)]
    log: u8,
}

/// Initialize the terminal for TUI rendering.
fn init_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    Terminal::new(backend)
}

/// Restore the terminal to its original state.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize logging
    let log_level = match args.log {
        0 => log::LevelFilter::Error,
        1 => log::LevelFilter::Warn,
        2 => log::LevelFilter::Info,
        3 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp(None)
        .format_target(false)
        .init();

    debug!("Log level set to {:?}", log_level);

    // Load config
    let config = Config::load().unwrap_or_else(|e| {
        warn!("Failed to load config: {}. Using defaults.", e);
        Config::new()
    });

    // Merge config with CLI args
    let show_id = args.show.unwrap_or(config.show_id);
    let api_url = args.api_url.unwrap_or(config.api_url);

    // Initialize terminal
    let mut terminal = init_terminal()?;

    // Create app state and run
    let mut app = App::new();
    let result = run_app(&mut terminal, &mut app, &api_url, show_id).await;

    // Restore terminal
    restore_terminal()?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    api_url: &str,
    show_id: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    // Show the loading frame while the single fetch is in flight.
    terminal.draw(|f| draw(f, app))?;

    match fetch_episodes(api_url, show_id).await {
        Ok(episodes) => app.set_catalog(Catalog::new(episodes)),
        Err(e) => app.set_load_error(&e.to_string()),
    }

    loop {
        terminal.draw(|f| draw(f, app))?;

        if let Some(Event::Key(key)) = poll_event(Duration::from_millis(100))? {
            if let Action::Quit = app.handle_input(key) {
                break;
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

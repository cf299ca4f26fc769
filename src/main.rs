// Binary includes library modules - some public API items are only for library consumers
#![allow(unused)]

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

mod app;
mod commands;
mod data;
mod events;
mod source;
mod ui;

use app::App;
use commands::NoopHandler;
use source::{SimulatedSource, SnapshotProvider};
use ui::{Theme, ThemeChoice};

#[derive(Parser, Debug)]
#[command(name = "aquawatch")]
#[command(about = "Terminal dashboard for monitoring a demo aquaponics setup")]
struct Args {
    /// Snapshot refresh interval in seconds
    #[arg(short, long, default_value = "5")]
    refresh: u64,

    /// Color theme
    #[arg(short, long, value_enum, default_value = "auto")]
    theme: ThemeChoice,

    /// Export the current snapshot to a JSON file and exit
    #[arg(short, long)]
    export: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let source: Box<dyn SnapshotProvider> = Box::new(SimulatedSource::new());
    let app = App::new(source, Box::new(NoopHandler), Theme::from_choice(args.theme));

    // Handle export mode (non-interactive)
    if let Some(export_path) = args.export {
        app.export_state(&export_path)?;
        println!("Exported snapshot to: {}", export_path.display());
        return Ok(());
    }

    run_tui(app, Duration::from_secs(args.refresh))
}

/// Run the TUI with the given app state
fn run_tui(mut app: App, refresh_interval: Duration) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    // Run the main loop
    let result = run_app(&mut terminal, &mut app, refresh_interval);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    refresh_interval: Duration,
) -> Result<()> {
    let mut last_refresh = Instant::now();

    while app.running {
        terminal.draw(|frame| ui::render(frame, app))?;

        // Poll for events with a short timeout
        if let Some(event) = events::poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }

        // Re-stamp the snapshot periodically
        if last_refresh.elapsed() >= refresh_interval {
            app.refresh();
            last_refresh = Instant::now();
        }
    }

    Ok(())
}

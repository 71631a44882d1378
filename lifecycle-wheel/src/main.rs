use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::info;

use lifecycle_wheel::app::App;
use lifecycle_wheel::cli::{Args, Command};
use lifecycle_wheel::export::export;
use lifecycle_wheel::logging;
use lifecycle_wheel::markup::CommonMarkRenderer;
use lifecycle_wheel::ui::ui;

fn main() -> Result<()> {
    let args = Args::parse();

    let log_path = args.log_file.clone().unwrap_or_else(logging::default_log_path);
    logging::init(&log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    match args.command.unwrap_or(Command::Run) {
        Command::Run => run_tui(),
        Command::Export {
            format,
            output,
            select,
        } => {
            let rendered = export(format, select, &CommonMarkRenderer::new())?;
            match output {
                Some(path) => {
                    std::fs::write(&path, rendered)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!(path = %path.display(), "export written");
                }
                None => print!("{}", rendered),
            }
            Ok(())
        }
    }
}

fn run_tui() -> Result<()> {
    let mut app = App::new()?;

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    info!("wheel started");

    // Run main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    info!("wheel stopped");

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        let frame = terminal.draw(|f| ui(f, app))?;
        app.viewport = frame.area;

        // Every event is handled to completion before the next redraw
        let event = event::read()?;
        app.handle_event(event);

        if app.should_quit {
            return Ok(());
        }
    }
}

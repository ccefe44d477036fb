//! `Taskpad` - terminal task-list manager
//!
//! Entry point for the application.

use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use taskpad::app::App;
use taskpad::cli::Args;
use taskpad::fs::{DataPaths, FileStore, Storage};
use taskpad::logging;
use taskpad::tui::TerminalEventGuard;

/// How long to wait for terminal input before running periodic work.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.log_file.as_deref(), args.log_level)?;

    let paths = match &args.data_dir {
        Some(dir) => DataPaths::new(dir),
        None => DataPaths::from_cwd()?,
    };
    info!(data_dir = %paths.base().display(), "starting");
    let app = App::new(Storage::new(Box::new(FileStore::new(paths))));

    let mut terminal = ratatui::init();
    let result = run_app(&mut terminal, app);
    ratatui::restore();

    result.context("terminal I/O failed")
}

fn run_app(terminal: &mut ratatui::DefaultTerminal, mut app: App) -> std::io::Result<()> {
    // Must come after ratatui::init, which can reset terminal flags.
    let _event_guard = TerminalEventGuard::new();

    loop {
        terminal.draw(|frame| {
            app.update_layout(frame.area());
            app.render(frame);
        })?;

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Paste(text) => app.handle_paste(&text),
                _ => {}
            }
        }

        app.process_events();
        app.tick();

        if app.should_quit() {
            info!("quitting");
            break;
        }
    }

    Ok(())
}

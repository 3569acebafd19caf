//! Triqui terminal host
//!
//! Drives the core game engine through its narrow interface: a board
//! with a cursor, plus new-game / save / load / quit keys mirroring a
//! desktop menu. All calls into the core happen on this one control
//! thread; the screen is re-rendered from the core's accessors after
//! every intent.

#![warn(missing_docs)]

mod app;
mod cli;
mod input;
mod ui;

use anyhow::Result;
use app::App;
use clap::Parser;
use cli::Cli;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log to a file so tracing output never fights the alternate screen.
    let log_file = std::fs::File::create(&cli.log_file)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!(save_path = %cli.save_path.display(), resume = cli.resume, "starting triqui TUI");

    let app = if cli.resume {
        App::resume(cli.save_path)
    } else {
        App::new(cli.save_path)
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        eprintln!("Error: {}", err);
    }
    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: std::error::Error + Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') => {
                    info!("quit requested");
                    return Ok(());
                }
                KeyCode::Char('n') => app.new_game(),
                KeyCode::Char('s') => app.save_game(),
                KeyCode::Char('l') => app.load_game(),
                KeyCode::Enter => app.place_at_cursor(),
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    // Digits 1-9 address cells directly, row-major.
                    if let Some(digit) = c.to_digit(10) {
                        if (1..=9).contains(&digit) {
                            let index = (digit - 1) as usize;
                            app.place_at(index / 3, index % 3);
                        }
                    }
                }
                code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
                    app.set_cursor(input::move_cursor(app.cursor(), code));
                }
                _ => {}
            }
        }
    }
}

//! WordScramble - spell as many words as you can from one root word
//!
//! Longer words score more, repeats and made-up words don't count.

mod app;
mod config;
mod error;
mod game;
mod logging;
mod tui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use config::Args;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use game::dictionary::load_dictionary;
use game::roots::{load_root_words, RootWordSource, RootWords};
use tui::Tui;

fn main() -> Result<()> {
    let args = Args::parse();

    // Logging is optional, the game runs without it
    match args.log_path() {
        Ok(path) => {
            if let Err(e) = logging::init(&path, args.verbose) {
                eprintln!("logging disabled: {}", e);
            }
        }
        Err(e) => eprintln!("logging disabled: {}", e),
    }

    let dictionary = load_dictionary(args.dictionary.as_deref());
    let list = load_root_words(args.words.as_deref());
    log::info!("{} dictionary words, {} root words", dictionary.len(), list.len());

    let roots: Box<dyn RootWordSource> = match args.seed {
        Some(seed) => Box::new(RootWords::seeded(list, seed)),
        None => Box::new(RootWords::from_os_rng(list)),
    };
    let mut app = App::new(Box::new(dictionary), roots);

    let mut terminal = Tui::new().context("failed to open terminal")?;
    terminal.enter().context("failed to set up terminal")?;

    run(&mut terminal, &mut app)?;

    terminal.exit().context("failed to restore terminal")?;
    log::info!("quit with score {}", app.score());
    Ok(())
}

/// Main event loop
fn run(terminal: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| tui::render(frame, app))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        // Only handle key press events (not release)
        if key.kind != KeyEventKind::Press {
            continue;
        }

        if app.alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                app.dismiss_alert();
            }
            continue;
        }

        match key.code {
            KeyCode::Esc => app.quit(),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => app.restart(),
            KeyCode::Enter => app.on_submit(),
            KeyCode::Backspace => app.on_backspace(),
            KeyCode::Char(c) if !c.is_control() => app.on_char(c),
            _ => {}
        }
    }
    Ok(())
}

mod cli;
mod config;
mod error;
mod game;
mod render;
mod tracker;

use std::{
    fs::File,
    io::{stdout, Write},
    path::Path,
};

use clap::Parser;
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{info, warn};

use cli::{Cli, Command, Source};
use error::{Error, Result};
use render::{demo::write_demo, game::play, menu::MenuRenderer, wordlist::random_secret};
use tracker::GuessTracker;

/// Puts the terminal into raw mode on an alternate screen, and restores it when dropped.
struct RawTerminal;

impl RawTerminal {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for RawTerminal {
    fn drop(&mut self) {
        if let Err(e) = execute!(stdout(), Show, LeaveAlternateScreen) {
            warn!("failed to leave alternate screen: {e}");
        }
        if let Err(e) = disable_raw_mode() {
            warn!("failed to disable raw mode: {e}");
        }
    }
}

/// Logs go to `log_file` when given. Without one, stderr is only used if `RUST_LOG` asks for it,
/// since anything printed there would scribble over the game screen.
fn setup_logging(log_file: Option<&Path>) -> Result<()> {
    let default_filter = if log_file.is_some() { "info" } else { "off" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));
    if let Some(path) = log_file {
        let file = File::create(path).map_err(|source| Error::LogFile {
            path: path.display().to_string(),
            source,
        })?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.log_file.as_deref())?;
    let config = cli.config()?;
    info!("starting, command {:?}", cli.command());

    match cli.command() {
        Command::Demo => {
            let mut stdout = stdout();
            write_demo(&mut stdout)?;
            stdout.flush()?;
        }
        Command::Play => {
            // resolve the secret before touching the terminal, so errors print normally
            let tracker = match cli.source() {
                Source::Word(word) => Some(GuessTracker::new(word)?),
                Source::Random(wordlist) => Some(GuessTracker::new(&random_secret(wordlist)?)?),
                Source::Menu => None,
            };

            let _terminal = RawTerminal::enter()?;
            match tracker {
                Some(tracker) => {
                    let outcome = play(tracker, &config)?;
                    info!("round finished: {outcome:?}");
                }
                None => MenuRenderer::new(config).render()?,
            }
        }
    }
    Ok(())
}

use std::io::{stdout, Write};

use super::util::*;
use crate::{error::Result, tracker::GuessTracker};
use crossterm::{
    cursor::{MoveTo, Show},
    event::{read, Event, KeyCode, KeyEventKind},
    queue,
    style::{Print, Stylize},
    terminal::{Clear, ClearType},
};
use log::debug;

const PROMPT: &str = "Enter the secret word (letters only): ";

/// Asks for a secret word without echoing it, so a second player can't read it off the screen.
/// Returns `None` if the prompt is cancelled with ESC.
pub fn prompt_secret() -> Result<Option<GuessTracker>> {
    let mut stdout = stdout();
    let mut input = String::new();
    let mut error: Option<String> = None;
    clear(&mut stdout)?;

    loop {
        queue!(
            stdout,
            MoveTo(4, 1),
            Clear(ClearType::CurrentLine),
            Print(PROMPT),
            Print("*".repeat(input.chars().count())),
            MoveTo(4, 3),
            Clear(ClearType::CurrentLine),
        )?;
        if let Some(error) = &error {
            queue!(stdout, Print(error.as_str().yellow()))?;
        }
        queue!(
            stdout,
            MoveTo(4 + (PROMPT.len() + input.chars().count()) as u16, 1),
            Show
        )?;
        stdout.flush()?;

        use Event::*;
        use KeyCode::*;
        if let Key(key) = read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                Esc => {
                    clear(&mut stdout)?;
                    return Ok(None);
                }
                Backspace => {
                    input.pop();
                }
                Enter => match GuessTracker::new(input.trim()) {
                    Ok(tracker) => {
                        debug!("custom secret accepted");
                        clear(&mut stdout)?;
                        return Ok(Some(tracker));
                    }
                    Err(e) => {
                        error = Some(format!("Please use only letters for the secret word ({e})."));
                        input.clear();
                    }
                },
                Char(c) => {
                    input.push(c);
                    error = None;
                }
                _ => {}
            }
        }
    }
}

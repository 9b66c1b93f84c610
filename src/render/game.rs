use std::io::{stdout, Write};

use super::util::*;
use crate::{
    config::{Config, REVEAL_WORD_ON_LOSS, SHOW_GUESSED_LETTERS},
    error::Result,
    game::{Game, GameError, GameState, Turn},
    tracker::GuessTracker,
};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{read, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::{Print, Stylize},
    terminal::{Clear, ClearType},
};
use log::debug;

/// Base X padding for the UI.
const PAD_X: u16 = 4;

/// Base Y padding for the UI.
const PAD_Y: u16 = 1;

/// Line the feedback message is drawn on, relative to `PAD_Y`.
const MESSAGE_ROW: u16 = 13;

/// Feedback shown under the word after each key press.
enum Message {
    None,
    Hit(char, usize),
    Miss(char),
    Rejected(GameError),
}

/// Renders one round of hangman and feeds key presses into the game.
pub struct GameRenderer {
    game: Game,
    message: Message,
}

impl GameRenderer {
    pub fn new(game: Game) -> Self {
        Self {
            game,
            message: Message::None,
        }
    }

    /// Runs the round until it is won, lost, or abandoned with ESC. Returns `None` when abandoned.
    pub fn render(&mut self, config: &Config) -> Result<Option<GameState>> {
        let mut stdout = stdout();
        clear(&mut stdout)?;

        // play loop
        loop {
            self.draw(config)?;

            // end condition
            let state = self.game.state();
            if state != GameState::Playing {
                self.draw_result(config, state)?;
                pause(None)?;
                clear(&mut stdout)?;
                return Ok(Some(state));
            }

            // handle events
            use Event::*;
            use KeyCode::*;
            match read()? {
                Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    Esc => {
                        debug!("round abandoned after {} turns", self.game.turns());
                        execute!(stdout, Show)?;
                        clear(&mut stdout)?;
                        return Ok(None);
                    }
                    _ => self.handle_key(key),
                },
                _ => {}
            }
        }
    }

    /// Handles a keypress.
    fn handle_key(&mut self, key: KeyEvent) {
        if let KeyCode::Char(c) = key.code {
            self.message = match self.game.guess(&c.to_string()) {
                Ok(Turn {
                    letter,
                    hit: true,
                    result,
                }) => Message::Hit(letter, result.remaining),
                Ok(Turn { letter, .. }) => Message::Miss(letter),
                Err(e) => {
                    debug!("guess rejected: {e}");
                    Message::Rejected(e)
                }
            };
        }
    }

    /// Draws the scoreboard, gallows, word, and guessed letters.
    fn draw(&self, config: &Config) -> Result<()> {
        let mut stdout = stdout();
        let game = &self.game;
        let tracker = game.tracker();

        // header
        queue!(
            stdout,
            Hide,
            MoveTo(PAD_X, PAD_Y),
            Clear(ClearType::CurrentLine),
            Print(" HANGMAN ".on_dark_magenta().white()),
            Print(" "),
            Print(
                format!(" misses {}/{} ", game.misses(), game.max_misses())
                    .black()
                    .on(miss_color(game.misses(), game.max_misses()))
            ),
            Print(format!("  turn {}", game.turns() + 1).dark_grey()),
        )?;

        // gallows
        for (row, line) in gallows(game.misses(), game.max_misses()).iter().enumerate() {
            queue!(stdout, MoveTo(PAD_X, PAD_Y + 2 + row as u16), Print(line))?;
        }

        // word
        queue!(
            stdout,
            MoveTo(PAD_X, PAD_Y + 9),
            Clear(ClearType::CurrentLine),
            Print(spaced(&tracker.display()).bold()),
            Print(format!("   ({} hidden)", tracker.remaining()).dark_grey()),
        )?;

        // guessed letters
        queue!(
            stdout,
            MoveTo(PAD_X, PAD_Y + 11),
            Clear(ClearType::CurrentLine)
        )?;
        if config.get_bool(SHOW_GUESSED_LETTERS)? {
            let guessed = tracker.guessed();
            queue!(stdout, Print("guessed: ".dark_grey()))?;
            for letter in guessed {
                let styled = if tracker.contains(letter) {
                    letter.green()
                } else {
                    letter.red()
                };
                queue!(stdout, Print(styled), Print(' '))?;
            }
        }

        // feedback
        queue!(
            stdout,
            MoveTo(PAD_X, PAD_Y + MESSAGE_ROW),
            Clear(ClearType::CurrentLine)
        )?;
        match &self.message {
            Message::None => queue!(
                stdout,
                Print(format!("The word has {} letters. Type a letter, ESC to give up.", tracker.letter_count()).italic())
            )?,
            Message::Hit(c, remaining) => queue!(
                stdout,
                Print(format!("'{c}' is in the word. {remaining} letters to go.").green())
            )?,
            Message::Miss(c) => queue!(
                stdout,
                Print(format!("'{c}' is not in the word. {} wrong guesses left.", game.misses_left()).red())
            )?,
            Message::Rejected(e) => queue!(stdout, Print(e.to_string().yellow()))?,
        }

        stdout.flush()?;
        Ok(())
    }

    /// Draws the end-of-round banner.
    fn draw_result(&self, config: &Config, state: GameState) -> Result<()> {
        let mut stdout = stdout();
        let game = &self.game;
        queue!(
            stdout,
            MoveTo(PAD_X, PAD_Y + MESSAGE_ROW),
            Clear(ClearType::CurrentLine)
        )?;
        match state {
            GameState::Won => queue!(
                stdout,
                Print(
                    format!(
                        " You guessed '{}' in {} turns with {} wrong! ",
                        game.tracker().secret(),
                        game.turns(),
                        game.misses()
                    )
                    .black()
                    .on_green()
                )
            )?,
            GameState::Lost => {
                queue!(
                    stdout,
                    Print(format!(" Game over after {} wrong guesses. ", game.misses()).white().on_dark_red())
                )?;
                if config.get_bool(REVEAL_WORD_ON_LOSS)? {
                    queue!(
                        stdout,
                        Print(format!(" The word was '{}'.", game.tracker().secret()))
                    )?;
                }
            }
            GameState::Playing => {}
        }
        queue!(
            stdout,
            MoveTo(PAD_X, PAD_Y + MESSAGE_ROW + 2),
            Print("Press enter to continue.".italic()),
            Show
        )?;
        stdout.flush()?;
        Ok(())
    }
}

/// Plays a single round on `tracker` with the miss limit from `config`.
pub fn play(tracker: GuessTracker, config: &Config) -> Result<Option<GameState>> {
    let game = Game::new(tracker, config.max_misses()?);
    GameRenderer::new(game).render(config)
}

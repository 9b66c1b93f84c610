mod menu_action;
mod menu_element;

use std::io::{stdout, Write};

use super::{demo::write_demo, game::play, prompt::prompt_secret, util::*, wordlist::*};
use crate::{
    config::{Config, ConfigValue},
    error::Result,
    game::GameState,
    tracker::GuessTracker,
};
use crossterm::{
    cursor::{Hide, MoveRight, MoveTo, MoveToNextLine, MoveUp, Show},
    event::{read, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::{Print, Stylize},
    terminal::{disable_raw_mode, enable_raw_mode},
};
use log::{debug, error, info};
use menu_action::*;
use menu_element::*;

/// Gap between menu stacks.
const GAP: usize = 1;

/// Margin between menu and screen edge.
const MARGIN: usize = 3;

/// Rounds played since the program started.
#[derive(Default, Debug, PartialEq)]
struct Record {
    won: u32,
    lost: u32,
    abandoned: u32,
}

/// Renders the menu.
pub struct MenuRenderer {
    /// Selected menu option for each menu currently open.
    cursor: Vec<usize>,
    /// Settings, edited from the settings submenu.
    config: Config,
    /// Results of this run.
    record: Record,
    /// Root menu element.
    root_menu: MenuElement,
}

impl MenuRenderer {
    pub fn new(config: Config) -> Self {
        let root_menu = build_root(&config);
        Self {
            cursor: vec![0],
            config,
            record: Record::default(),
            root_menu,
        }
    }

    /// Renders the menu until exited.
    pub fn render(&mut self) -> Result<()> {
        let mut stdout = stdout();
        let mut err: Result<()> = Ok(());
        loop {
            // print label and record
            clear(&mut stdout)?;
            queue!(
                stdout,
                Hide,
                MoveTo(0, 0),
                Print("HANGMAN".on_dark_grey().grey()),
                MoveRight(1),
                Print(
                    format!(
                        "{} won / {} lost / {} abandoned",
                        self.record.won, self.record.lost, self.record.abandoned
                    )
                    .dark_grey()
                ),
                MoveToNextLine(1),
            )?;

            // set up variables for rendering
            self.clamp_cursor();
            let menus = self.get_menus_from_cursor();
            let selected = self.cursor.last().copied().unwrap_or(0);
            let mut this_max_x: usize = 0; // the longest line of any render
            let mut last_max_x: usize = 0; // the longest line of this render

            // render main menu stack
            for (depth, menu) in menus.iter().enumerate() {
                // for each menu in the stack, print subitems
                let mut lns = 0;
                let is_last = depth == menus.len() - 1;
                for (idx, element) in menu.subitems().into_iter().flatten().enumerate() {
                    let label = element.label();
                    this_max_x = this_max_x.max(label.chars().count());

                    if is_last && idx == selected {
                        let styled = if element.is_submenu() {
                            label.dark_green().on_dark_grey()
                        } else {
                            label.grey().on_dark_grey()
                        };
                        queue!(
                            stdout,
                            MoveRight((MARGIN + 1 + last_max_x) as u16),
                            Print(styled),
                        )?;
                    } else if is_last {
                        queue!(stdout, MoveRight((MARGIN + last_max_x) as u16), Print(label))?;
                    } else {
                        queue!(
                            stdout,
                            MoveRight((MARGIN + last_max_x) as u16),
                            Print(label.dark_grey()),
                        )?;
                    }
                    queue!(stdout, MoveToNextLine(1))?;
                    lns += 1;
                }
                last_max_x += this_max_x + GAP;
                this_max_x = 0;

                // if this isn't the last menu, shift the cursor back up
                if !is_last && lns > 0 {
                    queue!(stdout, MoveUp(lns))?;
                }
            }

            // render errors
            if let Err(ref e) = err {
                queue!(
                    stdout,
                    MoveToNextLine(2),
                    Print(format!("ERROR({})", e).on_dark_red())
                )?;
            }

            // flush
            stdout.flush()?;

            // handle events
            use Event::*;
            use KeyCode::*;
            err = match read()? {
                Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    Esc | Char('q') => {
                        // if the user is in a menu, leave that first
                        // otherwise, just exit the program itself
                        if !self.back() {
                            info!(
                                "quitting: {} won, {} lost, {} abandoned",
                                self.record.won, self.record.lost, self.record.abandoned
                            );
                            break;
                        }
                        Ok(())
                    }
                    _ => self.handle_key(key),
                },
                _ => Ok(()),
            };
            if let Err(ref e) = err {
                error!("{e}");
            }
        }
        clear(&mut stdout)?;
        execute!(stdout, Show)?;
        Ok(())
    }

    /// Handles a keypress.
    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        use KeyCode::*;
        match key.code {
            Down | Char('j') => self.move_cursor(1),
            Up | Char('k') => self.move_cursor(-1),
            Left | Char('h') => {
                self.back();
            }
            Enter | Right | Char('l') => {
                if let Some(action) = self.select() {
                    self.execute(action)?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Runs a menu action.
    fn execute(&mut self, action: MenuAction) -> Result<()> {
        match action {
            MenuAction::Play(wordlist) => {
                let secret = random_secret(wordlist)?;
                self.play(GuessTracker::new(&secret)?)?;
            }
            MenuAction::PlayCustom => {
                if let Some(tracker) = prompt_secret()? {
                    self.play(tracker)?;
                }
            }
            MenuAction::Demo => {
                let mut stdout = stdout();
                clear(&mut stdout)?;
                disable_raw_mode()?;
                write_demo(&mut stdout)?;
                writeln!(stdout, "\n{}", "Press enter to return.".italic())?;
                stdout.flush()?;
                enable_raw_mode()?;
                pause(None)?;
            }
            MenuAction::CfgToggle(key) => {
                self.config.toggle(&key)?;
                self.root_menu = build_root(&self.config);
            }
            MenuAction::CfgIncrement(key) => {
                self.config.increment(&key)?;
                self.root_menu = build_root(&self.config);
            }
        }
        Ok(())
    }

    /// Plays one round and records how it ended.
    fn play(&mut self, tracker: GuessTracker) -> Result<()> {
        match play(tracker, &self.config)? {
            Some(GameState::Won) => self.record.won += 1,
            Some(GameState::Lost) => self.record.lost += 1,
            Some(GameState::Playing) | None => self.record.abandoned += 1,
        }
        debug!("record now {:?}", self.record);
        Ok(())
    }

    /// Moves the selection in the innermost menu, staying within its items.
    fn move_cursor(&mut self, delta: isize) {
        if let Some(i) = self.cursor.last_mut() {
            *i = i.saturating_add_signed(delta);
        }
        self.clamp_cursor();
    }

    /// Keeps the innermost selection within the items of the innermost menu.
    fn clamp_cursor(&mut self) {
        let len = self
            .get_menus_from_cursor()
            .last()
            .and_then(|menu| menu.subitems())
            .map_or(0, <[MenuElement]>::len);
        if let Some(i) = self.cursor.last_mut() {
            *i = (*i).min(len.saturating_sub(1));
        }
    }

    /// Opens the selected submenu, or returns the selected action.
    fn select(&mut self) -> Option<MenuAction> {
        let element = self
            .get_menus_from_cursor()
            .last()
            .and_then(|menu| menu.subitems())
            .and_then(|items| items.get(*self.cursor.last()?))
            .cloned()?;
        if element.is_submenu() {
            // if this item is a submenu, open it by pushing a new cursor
            self.cursor.push(0);
        }
        element.action().cloned()
    }

    /// Leaves the innermost menu. Returns false when already at the root.
    fn back(&mut self) -> bool {
        if self.cursor.len() > 1 {
            self.cursor.pop();
            true
        } else {
            false
        }
    }

    /// Get menus from cursor position.
    fn get_menus_from_cursor(&self) -> Vec<&MenuElement> {
        // create vec and add the first menu, the root one
        let mut menus = vec![&self.root_menu];

        // get menus down depth levels
        for cursor in &self.cursor[..self.cursor.len().saturating_sub(1)] {
            match menus
                .last()
                .and_then(|menu| menu.subitems())
                .and_then(|items| items.get(*cursor))
            {
                Some(menu) if menu.is_submenu() => menus.push(menu),
                _ => break,
            }
        }

        // done
        menus
    }
}

/// Builds the menu tree. Settings labels carry their current values, so this is rebuilt whenever
/// the config changes.
fn build_root(config: &Config) -> MenuElement {
    let settings = config
        .entries()
        .into_iter()
        .map(|(key, value)| {
            let action = match value {
                ConfigValue::Bool(_) => MenuAction::CfgToggle(key.to_owned()),
                ConfigValue::Integer { .. } => MenuAction::CfgIncrement(key.to_owned()),
            };
            MenuElement::new_action(format!("{key}: {value}"), action)
        })
        .collect();

    MenuElement::new_menu(
        "root",
        vec![
            MenuElement::new_menu(
                "play",
                vec![
                    MenuElement::new_action("easy word", MenuAction::Play(Wordlist::EnglishEasy)),
                    MenuElement::new_action("hard word", MenuAction::Play(Wordlist::EnglishHard)),
                    MenuElement::new_action("custom word", MenuAction::PlayCustom),
                ],
            ),
            MenuElement::new_action("demo", MenuAction::Demo),
            MenuElement::new_menu("settings", settings),
        ],
    )
}

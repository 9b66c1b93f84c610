use std::{
    io::Stdout,
    time::{Duration, Instant},
};

use crossterm::{
    cursor::MoveTo,
    event::{poll, read, Event, KeyCode, KeyEventKind},
    execute,
    style::Color,
    terminal::{Clear, ClearType},
};

/// Gallows drawings, from an empty scaffold to a full figure.
const GALLOWS: [[&str; 5]; 7] = [
    ["  +---+", "  |   |", "      |", "      |", "      |"],
    ["  +---+", "  |   |", "  O   |", "      |", "      |"],
    ["  +---+", "  |   |", "  O   |", "  |   |", "      |"],
    ["  +---+", "  |   |", "  O   |", " /|   |", "      |"],
    ["  +---+", "  |   |", "  O   |", " /|\\  |", "      |"],
    ["  +---+", "  |   |", "  O   |", " /|\\  |", " /    |"],
    ["  +---+", "  |   |", "  O   |", " /|\\  |", " / \\  |"],
];

/// Color linear interpolation, returns a Crossterm struct.
pub fn color_lerp(a: (u8, u8, u8), b: (u8, u8, u8), t: f32) -> Color {
    let a = (a.0 as f32, a.1 as f32, a.2 as f32);
    let b = (b.0 as f32, b.1 as f32, b.2 as f32);
    let t = t.clamp(0., 1.);
    Color::Rgb {
        r: (a.0 + (b.0 - a.0) * t) as u8,
        g: (a.1 + (b.1 - a.1) * t) as u8,
        b: (a.2 + (b.2 - a.2) * t) as u8,
    }
}

/// Green with no misses, red at the limit.
pub fn miss_color(misses: u32, max_misses: u32) -> Color {
    color_lerp(
        (0, 255, 0),
        (255, 0, 0),
        misses as f32 / max_misses.max(1) as f32,
    )
}

/// Gallows drawing for the given miss count, scaled so the figure completes exactly at
/// `max_misses`.
pub fn gallows(misses: u32, max_misses: u32) -> &'static [&'static str; 5] {
    let last = GALLOWS.len() - 1;
    let stage = (misses.min(max_misses) as usize * last) / max_misses.max(1) as usize;
    &GALLOWS[stage]
}

/// Clear the screen via the given `stdout` handle.
pub fn clear(io: &mut Stdout) -> Result<(), std::io::Error> {
    execute!(
        io,
        MoveTo(0, 0),
        Clear(ClearType::All),
        Clear(ClearType::Purge)
    )
}

/// Stalls this thread until the enter/ESC key is pressed, unless the timeout is reached first, if
/// it is provided.
pub fn pause(timeout: Option<Duration>) -> Result<(), std::io::Error> {
    use Event::*;
    let now = Instant::now();
    loop {
        // if enter gets pressed, done
        if poll(Duration::from_millis(250))? {
            if let Key(key) = read()? {
                if key.kind == KeyEventKind::Press
                    && matches!(key.code, KeyCode::Enter | KeyCode::Esc)
                {
                    return Ok(());
                }
            }
        }

        // if there is a timeout, and it's been that long, done
        if let Some(timeout) = timeout {
            if now.elapsed() >= timeout {
                return Ok(());
            }
        }
    }
}

/// Spaces a display form out so each position is visible on its own, `c_t` becomes `c _ t`.
pub fn spaced(display: &str) -> String {
    display
        .chars()
        .map(|c| c.to_string())
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallows_starts_empty_and_ends_full() {
        assert_eq!(gallows(0, 6), &GALLOWS[0]);
        assert_eq!(gallows(6, 6), &GALLOWS[6]);
        assert_eq!(gallows(9, 6), &GALLOWS[6]);
    }

    #[test]
    fn gallows_scales_to_limit() {
        assert_eq!(gallows(1, 2), &GALLOWS[3]);
        assert_eq!(gallows(2, 2), &GALLOWS[6]);
        assert_eq!(gallows(5, 12), &GALLOWS[2]);
    }

    #[test]
    fn miss_color_ends() {
        assert_eq!(miss_color(0, 6), Color::Rgb { r: 0, g: 255, b: 0 });
        assert_eq!(miss_color(6, 6), Color::Rgb { r: 255, g: 0, b: 0 });
    }

    #[test]
    fn spaced_display() {
        assert_eq!(spaced("c_t"), "c _ t");
        assert_eq!(spaced(""), "");
    }
}

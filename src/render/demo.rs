use std::io::Write;

use crate::{
    error::Result,
    tracker::{GuessResult, GuessTracker},
};

/// One progress report, as printed after every guess.
pub fn report(result: &GuessResult) -> String {
    let guessed = result
        .guessed
        .iter()
        .map(char::to_string)
        .collect::<Vec<String>>()
        .join(", ");
    let status = if result.complete {
        String::from("Word complete!")
    } else {
        format!("Keep going! {} letters remaining.", result.remaining)
    };
    format!(
        "Word: {}\nGuesses so far: [{}]\n{}",
        result.display, guessed, status
    )
}

/// Plays two sessions side by side to show that each one keeps its own guesses.
pub fn write_demo(out: &mut impl Write) -> Result<()> {
    let rule = "=".repeat(60);
    let mut first = GuessTracker::new("python")?;
    let mut second = GuessTracker::new("closure")?;

    writeln!(out, "{rule}")?;
    writeln!(out, "Two independent hangman sessions")?;
    writeln!(out, "{rule}")?;

    let steps = [(1, "p"), (1, "y"), (2, "c"), (2, "l"), (1, "t")];
    let mut current = 0;
    for (session, letter) in steps {
        let (label, tracker) = match session {
            1 => ("first game (python)", &mut first),
            _ => ("second game (closure)", &mut second),
        };
        if session != current {
            writeln!(out, "\nPlaying the {label}:")?;
            current = session;
        }
        let result = tracker.guess(letter)?;
        writeln!(out, "> {letter}")?;
        writeln!(out, "{}", report(&result))?;
    }

    writeln!(
        out,
        "\nThe first game still remembers {:?}, the second only {:?}.",
        first.guessed(),
        second.guessed()
    )?;
    writeln!(out, "{rule}")?;
    Ok(())
}

//! Display functions for game turns and results

use super::formatters::{attempts_bar, create_progress_bar, format_used_letters, pluralize};
use crate::commands::{HangmanEnd, HangmanSummary, ScrambleEnd, ScrambleSummary};
use crate::core::{GuessOutcome, HangmanSession, ScrambleOutcome};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// Print the Hangman welcome banner
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_hangman_banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "Welcome to Hangman!".bright_cyan().bold())?;
    writeln!(out, "Try to guess all the hidden words")?;
    writeln!(out)
}

/// Print the state of a Hangman round before each guess
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_hangman_turn(
    out: &mut impl Write,
    session: &HangmanSession,
    clue: &str,
) -> io::Result<()> {
    let remaining = session.attempts_remaining();
    let tries = if remaining <= 2 {
        remaining.to_string().red().bold()
    } else {
        remaining.to_string().bright_yellow().bold()
    };

    writeln!(
        out,
        "You have {tries} {} left  {}",
        if remaining == 1 { "try" } else { "tries" },
        attempts_bar(remaining, session.max_attempts()).green()
    )?;
    writeln!(
        out,
        "Letters used already: {}",
        format_used_letters(session.used_letters())
    )?;
    writeln!(out, "Clue: {}", clue.italic())?;
    writeln!(
        out,
        "The current word is:  {}",
        session.mask().bright_white().bold()
    )?;
    writeln!(out)
}

/// Print the reaction to one Hangman guess
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_guess_feedback(
    out: &mut impl Write,
    letter: Option<char>,
    outcome: GuessOutcome,
) -> io::Result<()> {
    let letter = letter.unwrap_or(' ');
    match outcome {
        GuessOutcome::Hit { revealed } => {
            writeln!(
                out,
                "{}",
                format!("Letter '{letter}' found ({revealed}x)").green()
            )?;
        }
        GuessOutcome::Miss => {
            writeln!(out, "{}", format!("Sorry, there's no letter '{letter}'").red())?;
        }
        GuessOutcome::AlreadyUsed => {
            writeln!(out, "{}", "You've used that letter already!".yellow())?;
        }
        GuessOutcome::Blank => {
            writeln!(out, "{}", "Please enter a letter.".yellow())?;
        }
        GuessOutcome::Finished => {}
    }
    writeln!(out, "{}", "=".repeat(25).bright_black())
}

/// Print the message for a solved Hangman word
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_round_won(out: &mut impl Write, word: &str) -> io::Result<()> {
    writeln!(
        out,
        "{} The word was {}. Loading the next word.",
        "CORRECT!".bright_green().bold(),
        word.bright_white().bold()
    )?;
    writeln!(out, "{}", "-".repeat(37).bright_black())?;
    writeln!(out)
}

/// Print the final Hangman result
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_hangman_summary(out: &mut impl Write, summary: &HangmanSummary) -> io::Result<()> {
    writeln!(out)?;
    match &summary.end {
        HangmanEnd::PoolExhausted => {
            writeln!(
                out,
                "{}",
                "CONGRATULATIONS! YOU BEAT THE GAME!".bright_green().bold()
            )?;
        }
        HangmanEnd::Lost { word } => {
            writeln!(out, "{}", "GAME OVER.".red().bold())?;
            writeln!(out, "The word was: {}", word.bright_white().bold())?;
        }
        HangmanEnd::InputClosed => {
            writeln!(out, "{}", "Input closed, stopping the game.".yellow())?;
        }
        HangmanEnd::Abandoned => {
            writeln!(out, "{}", "Game abandoned.".yellow())?;
        }
    }
    writeln!(
        out,
        "You successfully solved {} of {}",
        pluralize(summary.solved, "word").bright_cyan().bold(),
        summary.total_words
    )
}

/// Print the Word Scramble welcome banner
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_scramble_banner(out: &mut impl Write) -> io::Result<()> {
    let border = "-".repeat(34);
    writeln!(out, "{}", border.bright_cyan())?;
    writeln!(
        out,
        "{}",
        "| Welcome to the Word Scrambler! |".bright_cyan().bold()
    )?;
    writeln!(out, "{}", border.bright_cyan())?;
    writeln!(out)?;
    writeln!(out, "Unscramble the letters to make a word.")?;
    writeln!(out, "Enter 'hint' to receive a hint.")?;
    writeln!(out, "Enter 'quit' to quit the game.")?;
    writeln!(out)
}

/// Print the next jumbled word
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_jumble(out: &mut impl Write, number: usize, jumble: &str) -> io::Result<()> {
    writeln!(out, "{}", "-".repeat(47).bright_black())?;
    writeln!(
        out,
        "Jumble #{number}: {}",
        jumble.bright_yellow().bold()
    )?;
    writeln!(out)
}

/// Print the reaction to one scramble guess
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_scramble_feedback(
    out: &mut impl Write,
    outcome: ScrambleOutcome,
    hint: &str,
) -> io::Result<()> {
    match outcome {
        ScrambleOutcome::Solved => {
            writeln!(out, "{}", "Correct! Loading the next word...".green())?;
            writeln!(out)
        }
        ScrambleOutcome::Quit => writeln!(out, "Okay. Bye Bye."),
        ScrambleOutcome::HintRequested => {
            writeln!(out, "Hint: {}", hint.italic())?;
            writeln!(out)
        }
        ScrambleOutcome::Retry => {
            writeln!(out, "{}", "Incorrect. Try again.".red())?;
            writeln!(out)
        }
        ScrambleOutcome::Finished => Ok(()),
    }
}

/// Print the final Word Scramble result
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_scramble_summary(out: &mut impl Write, summary: &ScrambleSummary) -> io::Result<()> {
    writeln!(out)?;
    match summary.end {
        ScrambleEnd::Completed => {
            writeln!(
                out,
                "{}",
                "CONGRATULATIONS! YOU BEAT THE GAME!".bright_green().bold()
            )?;
        }
        ScrambleEnd::Quit => writeln!(out, "{}", "Game abandoned.".yellow())?,
        ScrambleEnd::PoolExhausted => {
            writeln!(out, "{}", "Ran out of words to scramble.".yellow())?;
        }
        ScrambleEnd::InputClosed => {
            writeln!(out, "{}", "Input closed, stopping the game.".yellow())?;
        }
    }

    if summary.target > 0 {
        let bar = create_progress_bar(summary.solved as f64, summary.target as f64, 20);
        writeln!(
            out,
            "Unscrambled: [{}] {}/{}",
            bar.green(),
            summary.solved,
            summary.target
        )?;
    }
    writeln!(
        out,
        "Hints used: {}  Wrong guesses: {}",
        summary.hints_used, summary.wrong_guesses
    )
}

/// Count down before the program exits after a completed game
///
/// Blocks for `delay`, rounded down to whole seconds, ticking a progress bar.
pub fn closing_countdown(delay: Duration) {
    let secs = delay.as_secs();
    if secs == 0 {
        return;
    }

    let pb = ProgressBar::new(secs);
    if let Ok(style) = ProgressStyle::with_template("Closing in {msg} [{bar:20.cyan/blue}]") {
        pb.set_style(style.progress_chars("█▓░"));
    }

    for remaining in (1..=secs).rev() {
        pb.set_message(format!("{remaining}s"));
        thread::sleep(Duration::from_secs(1));
        pb.inc(1);
    }

    pb.finish_and_clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn turn_shows_clue_and_mask() {
        let mut session = HangmanSession::new("cat", 7);
        session.submit_guess("a");
        session.submit_guess("z");

        let text = render(|out| print_hangman_turn(out, &session, "a small feline"));
        assert!(text.contains("Letters used already: a, z"));
        assert!(text.contains("a small feline"));
        assert!(text.contains("-a-"));
    }

    #[test]
    fn miss_feedback_names_the_letter() {
        let text = render(|out| print_guess_feedback(out, Some('q'), GuessOutcome::Miss));
        assert!(text.contains("Sorry, there's no letter 'q'"));
    }

    #[test]
    fn hangman_summary_reports_loss() {
        let summary = HangmanSummary {
            solved: 2,
            total_words: 5,
            end: HangmanEnd::Lost {
                word: "cat".to_string(),
            },
        };

        let text = render(|out| print_hangman_summary(out, &summary));
        assert!(text.contains("GAME OVER."));
        assert!(text.contains("2 words"));
    }

    #[test]
    fn scramble_hint_feedback_shows_hint() {
        let text =
            render(|out| print_scramble_feedback(out, ScrambleOutcome::HintRequested, "a fruit"));
        assert!(text.contains("a fruit"));
    }

    #[test]
    fn zero_countdown_returns_immediately() {
        closing_countdown(Duration::ZERO);
    }
}

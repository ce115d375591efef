//! Console Word Scramble runner
//!
//! Asks how many words to play, then serves scrambled words drawn at random
//! from the pool until that many are solved or the user quits.

use super::prompt::Console;
use crate::core::{ScrambleOutcome, ScrambleSession, WordPool};
use crate::output::display::{
    closing_countdown, print_jumble, print_scramble_banner, print_scramble_feedback,
    print_scramble_summary,
};
use anyhow::Result;
use log::{debug, info};
use rand::Rng;
use std::io::{BufRead, Write};
use std::ops::RangeInclusive;
use std::time::Duration;
use thiserror::Error;

/// Fewest words a scramble pool must hold
pub const MIN_WORDS: usize = 20;

/// Most words read from a scramble word list
pub const MAX_POOL_WORDS: usize = 100;

/// Allowed answers to "how many words?"
pub const TARGET_RANGE: RangeInclusive<usize> = 10..=20;

/// Configuration for a Word Scramble run
#[derive(Debug, Clone)]
pub struct ScrambleConfig {
    pub min_words: usize,
    pub target_range: RangeInclusive<usize>,
    /// Countdown shown after beating the game
    pub closing_delay: Duration,
}

impl ScrambleConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min_words: MIN_WORDS,
            target_range: TARGET_RANGE,
            closing_delay: Duration::from_secs(5),
        }
    }
}

impl Default for ScrambleConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Fatal problems with the word pool
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("there needs to be at least {required} words loaded, found {loaded}")]
    TooFewWords { loaded: usize, required: usize },

    #[error("up to {max} words can be requested but only {available} are loaded")]
    TargetExceedsPool { max: usize, available: usize },
}

/// Rejected answers to the target-count prompt
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("{0:?} is not a number")]
    NotANumber(String),

    #[error("{value} is outside {min}..={max}")]
    OutOfRange { value: i64, min: usize, max: usize },
}

/// Why a scramble run stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrambleEnd {
    /// The requested number of words were solved
    Completed,
    /// The user typed `quit`
    Quit,
    /// Every word was visited before the target was reached
    PoolExhausted,
    /// Input ended mid-game
    InputClosed,
}

/// Result of a Word Scramble run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrambleSummary {
    pub solved: usize,
    /// Requested word count, 0 if the prompt was never answered
    pub target: usize,
    pub hints_used: u32,
    pub wrong_guesses: u32,
    pub end: ScrambleEnd,
}

/// Check that a pool of `loaded` words can support a run
///
/// # Errors
///
/// - [`ConfigurationError::TooFewWords`] below `config.min_words`
/// - [`ConfigurationError::TargetExceedsPool`] if the largest allowed target
///   could not be served without repeats
pub fn check_pool(loaded: usize, config: &ScrambleConfig) -> Result<(), ConfigurationError> {
    if loaded < config.min_words {
        return Err(ConfigurationError::TooFewWords {
            loaded,
            required: config.min_words,
        });
    }

    let max = *config.target_range.end();
    if loaded < max {
        return Err(ConfigurationError::TargetExceedsPool {
            max,
            available: loaded,
        });
    }

    Ok(())
}

/// Parse an answer to the target-count prompt
///
/// # Errors
///
/// - [`ParseError::NotANumber`] if the trimmed input is not an integer
/// - [`ParseError::OutOfRange`] if it falls outside `range`
pub fn parse_target_count(input: &str, range: &RangeInclusive<usize>) -> Result<usize, ParseError> {
    let trimmed = input.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| ParseError::NotANumber(trimmed.to_string()))?;

    usize::try_from(value)
        .ok()
        .filter(|count| range.contains(count))
        .ok_or(ParseError::OutOfRange {
            value,
            min: *range.start(),
            max: *range.end(),
        })
}

/// Keep asking until the answer lies in `range`; `None` if input ends
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn prompt_target_count<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    range: &RangeInclusive<usize>,
) -> Result<Option<usize>> {
    let question = format!(
        "How many words would you like to unscramble between {} and {}? ",
        range.start(),
        range.end()
    );

    loop {
        let Some(input) = console.prompt(&question)? else {
            return Ok(None);
        };

        match parse_target_count(&input, range) {
            Ok(count) => return Ok(Some(count)),
            Err(e) => {
                debug!("Rejected target count: {e}");
                writeln!(
                    console.out(),
                    "Please enter a number between {} and {}.\n",
                    range.start(),
                    range.end()
                )?;
            }
        }
    }
}

/// Play Word Scramble over `pool`
///
/// Prints the summary when the run stops and, after a completed game, counts
/// down `config.closing_delay` before returning.
///
/// # Errors
///
/// Returns a [`ConfigurationError`] (inside `anyhow::Error`) if the pool is
/// too small, or an I/O error if reading input or writing output fails.
pub fn run_scramble<R, W, G>(
    pool: &mut WordPool,
    config: &ScrambleConfig,
    rng: &mut G,
    console: &mut Console<R, W>,
) -> Result<ScrambleSummary>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    check_pool(pool.len(), config)?;
    info!("Starting Word Scramble with {} words", pool.len());
    pool.log_contents();

    print_scramble_banner(console.out())?;
    let summary = play_rounds(pool, config, rng, console)?;

    print_scramble_summary(console.out(), &summary)?;
    if summary.end == ScrambleEnd::Completed {
        console.out().flush()?;
        closing_countdown(config.closing_delay);
    }
    Ok(summary)
}

/// Ask for the target, then serve words until it is met or the run stops
fn play_rounds<R, W, G>(
    pool: &mut WordPool,
    config: &ScrambleConfig,
    rng: &mut G,
    console: &mut Console<R, W>,
) -> Result<ScrambleSummary>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let mut summary = ScrambleSummary {
        solved: 0,
        target: 0,
        hints_used: 0,
        wrong_guesses: 0,
        end: ScrambleEnd::Completed,
    };

    let Some(target) = prompt_target_count(console, &config.target_range)? else {
        summary.end = ScrambleEnd::InputClosed;
        return Ok(summary);
    };
    summary.target = target;
    info!("Player asked for {target} words");
    writeln!(console.out())?;

    while summary.solved < target {
        let Some(entry) = pool.draw_random_unvisited(rng) else {
            summary.end = ScrambleEnd::PoolExhausted;
            break;
        };
        let mut session = ScrambleSession::new(entry, rng);
        print_jumble(console.out(), summary.solved + 1, session.displayed())?;

        let end = loop {
            let Some(input) = console.prompt("Enter your guess: ")? else {
                break Some(ScrambleEnd::InputClosed);
            };

            let outcome = session.submit_guess(&input);
            debug!("Guess {input:?} -> {outcome:?}");
            print_scramble_feedback(console.out(), outcome, session.hint())?;

            match outcome {
                ScrambleOutcome::Solved | ScrambleOutcome::Finished => break None,
                ScrambleOutcome::Quit => break Some(ScrambleEnd::Quit),
                ScrambleOutcome::HintRequested | ScrambleOutcome::Retry => {}
            }
        };

        summary.hints_used += session.hints_requested();
        summary.wrong_guesses += session.wrong_guesses();

        if let Some(end) = end {
            info!("Word Scramble stopped ({end:?}) after {} words", summary.solved);
            summary.end = end;
            return Ok(summary);
        }
        summary.solved += 1;
    }

    info!("Word Scramble finished, {} of {target} solved", summary.solved);
    Ok(summary)
}

//! Console Hangman runner
//!
//! Draws words from a shuffled pool until it runs dry or a round is lost.

use super::prompt::Console;
use crate::core::{DEFAULT_MAX_ATTEMPTS, HangmanSession, SessionState, WordPool, normalize_guess};
use crate::output::display::{
    print_guess_feedback, print_hangman_banner, print_hangman_turn, print_round_won,
};
use anyhow::Result;
use log::{debug, info};
use rand::Rng;
use std::io::{BufRead, Write};

/// Configuration for a Hangman run
#[derive(Debug, Clone)]
pub struct HangmanConfig {
    /// Misses allowed per word
    pub max_attempts: u32,
}

impl HangmanConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl Default for HangmanConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Why a Hangman run stopped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HangmanEnd {
    /// Every word was solved (or the pool was empty to begin with)
    PoolExhausted,
    /// A round ran out of attempts
    Lost { word: String },
    /// Input ended mid-game
    InputClosed,
    /// The player left the full-screen game mid-round
    Abandoned,
}

/// Result of a Hangman run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HangmanSummary {
    pub solved: usize,
    pub total_words: usize,
    pub end: HangmanEnd,
}

enum RoundResult {
    Finished(SessionState),
    InputClosed,
}

/// Play Hangman over every word in `pool`
///
/// The pool is shuffled once up front and consumed as a stack. A lost round
/// stops the run immediately; an empty pool counts as beating the game.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_hangman<R, W, G>(
    pool: &mut WordPool,
    config: &HangmanConfig,
    rng: &mut G,
    console: &mut Console<R, W>,
) -> Result<HangmanSummary>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let total_words = pool.len();
    info!(
        "Starting Hangman with {total_words} words, {} attempts per word",
        config.max_attempts
    );
    pool.log_contents();
    pool.shuffle(rng);

    print_hangman_banner(console.out())?;

    let mut solved = 0;
    while let Some(entry) = pool.draw_without_replacement() {
        let clue = entry.clue().to_string();
        let mut session = HangmanSession::new(entry.word(), config.max_attempts);
        debug!("Round {} begins", solved + 1);

        match play_round(&mut session, &clue, console)? {
            RoundResult::Finished(SessionState::Won) => {
                print_round_won(console.out(), &session.target())?;
                solved += 1;
            }
            RoundResult::Finished(_) => {
                info!("Hangman lost on {:?} after {solved} words", session.target());
                return Ok(HangmanSummary {
                    solved,
                    total_words,
                    end: HangmanEnd::Lost {
                        word: session.target(),
                    },
                });
            }
            RoundResult::InputClosed => {
                info!("Input closed during Hangman round {}", solved + 1);
                return Ok(HangmanSummary {
                    solved,
                    total_words,
                    end: HangmanEnd::InputClosed,
                });
            }
        }
    }

    info!("Hangman pool exhausted, {solved} words solved");
    Ok(HangmanSummary {
        solved,
        total_words,
        end: HangmanEnd::PoolExhausted,
    })
}

/// Prompt for letters until the round is won or lost
fn play_round<R: BufRead, W: Write>(
    session: &mut HangmanSession,
    clue: &str,
    console: &mut Console<R, W>,
) -> Result<RoundResult> {
    while !session.is_finished() {
        print_hangman_turn(console.out(), session, clue)?;

        let Some(input) = console.prompt("Enter a letter: ")? else {
            return Ok(RoundResult::InputClosed);
        };

        let outcome = session.submit_guess(&input);
        debug!("Guess {input:?} -> {outcome:?}");
        print_guess_feedback(console.out(), normalize_guess(&input), outcome)?;
    }

    Ok(RoundResult::Finished(session.state()))
}

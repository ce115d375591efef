//! Core puzzle types
//!
//! Word pools, the scrambler, and the per-round state machines for both
//! games. Nothing here touches the terminal; runners in `commands` and the
//! TUI in `interactive` drive these types.

mod entry;
mod hangman;
mod pool;
mod scramble;
mod scrambler;

pub use entry::{Entry, LoadError, NO_CLUE, parse_line};
pub use hangman::{
    DEFAULT_MAX_ATTEMPTS, GuessOutcome, HangmanSession, PLACEHOLDER, SessionState,
    normalize_guess,
};
pub use pool::{DuplicatePolicy, LoadReport, SkippedLine, WordPool};
pub use scramble::{HINT_COMMAND, QUIT_COMMAND, ScrambleOutcome, ScrambleSession, ScrambleState};
pub use scrambler::scramble;

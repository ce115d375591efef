//! Game runners
//!
//! Each runner owns the loop that sequences rounds against a [`WordPool`]
//! until its stopping condition.
//!
//! [`WordPool`]: crate::core::WordPool

pub mod hangman;
pub mod prompt;
pub mod scramble;

pub use hangman::{HangmanConfig, HangmanEnd, HangmanSummary, run_hangman};
pub use prompt::Console;
pub use scramble::{
    ConfigurationError, ParseError, ScrambleConfig, ScrambleEnd, ScrambleSummary, check_pool,
    parse_target_count, run_scramble,
};

//! Word lists for the games
//!
//! Provides embedded `word : clue` lists compiled into the binary, plus a
//! loader for user-supplied files.

mod embedded;
pub mod loader;

pub use embedded::{HANGMAN, HANGMAN_COUNT, SCRAMBLE, SCRAMBLE_COUNT};

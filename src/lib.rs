//! Word Puzzles
//!
//! Console Hangman and Word Scramble games sharing one puzzle-session core.
//!
//! # Quick Start
//!
//! ```rust
//! use word_puzzles::core::{GuessOutcome, HangmanSession, SessionState, WordPool};
//!
//! // Load a pool and draw a word
//! let mut pool = WordPool::from_lines(["cat : a small pet"]);
//! let entry = pool.draw_without_replacement().unwrap();
//!
//! // Play a round
//! let mut session = HangmanSession::new(entry.word(), 7);
//! for letter in ["c", "a", "t"] {
//!     assert!(matches!(session.submit_guess(letter), GuessOutcome::Hit { .. }));
//! }
//! assert_eq!(session.state(), SessionState::Won);
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Game runners
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

//! Terminal output formatting
//!
//! Display utilities for game turns, results and the closing countdown.

pub mod display;
pub mod formatters;

pub use display::{closing_countdown, print_hangman_summary, print_scramble_summary};

//! Word Scramble round state machine
//!
//! `InProgress -> {Solved, Quit}`. There is no way to lose a round; the user
//! keeps guessing until the word is unscrambled or they quit.

use super::entry::Entry;
use super::scrambler::scramble;
use rand::Rng;

/// Input that abandons the whole run
pub const QUIT_COMMAND: &str = "quit";

/// Input that asks for the stored hint
pub const HINT_COMMAND: &str = "hint";

/// Lifecycle of a scramble round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrambleState {
    InProgress,
    Solved,
    Quit,
}

/// Result of submitting one scramble guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrambleOutcome {
    Solved,
    Quit,
    HintRequested,
    Retry,
    /// The round is already solved or quit
    Finished,
}

/// One scramble round
#[derive(Debug, Clone)]
pub struct ScrambleSession {
    original: String,
    displayed: String,
    hint: String,
    state: ScrambleState,
    wrong_guesses: u32,
    hints_requested: u32,
}

impl ScrambleSession {
    /// Start a round for `entry`, scrambling its word with `rng`
    #[must_use]
    pub fn new<R: Rng + ?Sized>(entry: &Entry, rng: &mut R) -> Self {
        let displayed = scramble(entry.word(), rng);
        Self::from_parts(entry.word(), &displayed, entry.clue())
    }

    /// Start a round with an already chosen display
    ///
    /// # Examples
    /// ```
    /// use word_puzzles::core::{ScrambleOutcome, ScrambleSession};
    ///
    /// let mut session = ScrambleSession::from_parts("apple", "pplea", "a fruit");
    /// assert_eq!(session.submit_guess("hint"), ScrambleOutcome::HintRequested);
    /// assert_eq!(session.submit_guess("Apple"), ScrambleOutcome::Solved);
    /// ```
    #[must_use]
    pub fn from_parts(original: &str, displayed: &str, hint: &str) -> Self {
        Self {
            original: original.to_string(),
            displayed: displayed.to_string(),
            hint: hint.to_string(),
            state: ScrambleState::InProgress,
            wrong_guesses: 0,
            hints_requested: 0,
        }
    }

    /// Evaluate one line of input
    ///
    /// Input is trimmed and lowercased before comparison since stored words
    /// are lowercase. `quit` is checked first, then the word itself, then
    /// `hint`, so a word spelled "hint" can still be solved.
    pub fn submit_guess(&mut self, input: &str) -> ScrambleOutcome {
        if self.state != ScrambleState::InProgress {
            return ScrambleOutcome::Finished;
        }

        let guess = input.trim().to_lowercase();

        if guess == QUIT_COMMAND {
            self.state = ScrambleState::Quit;
            ScrambleOutcome::Quit
        } else if guess == self.original {
            self.state = ScrambleState::Solved;
            ScrambleOutcome::Solved
        } else if guess == HINT_COMMAND {
            self.hints_requested += 1;
            ScrambleOutcome::HintRequested
        } else {
            self.wrong_guesses += 1;
            ScrambleOutcome::Retry
        }
    }

    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The scrambled form shown to the user
    #[must_use]
    pub fn displayed(&self) -> &str {
        &self.displayed
    }

    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    #[must_use]
    pub const fn state(&self) -> ScrambleState {
        self.state
    }

    #[must_use]
    pub const fn wrong_guesses(&self) -> u32 {
        self.wrong_guesses
    }

    #[must_use]
    pub const fn hints_requested(&self) -> u32 {
        self.hints_requested
    }
}

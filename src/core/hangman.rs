//! Hangman round state machine
//!
//! A session tracks one target word through `InProgress -> {Won, Lost}`.
//! Each guess is reduced to a single letter; correct letters reveal every
//! matching position at once and only incorrect, previously unused letters
//! cost an attempt.

use std::collections::BTreeSet;

/// Attempts per word unless configured otherwise
pub const DEFAULT_MAX_ATTEMPTS: u32 = 7;

/// Character shown for a hidden position in the mask
pub const PLACEHOLDER: char = '-';

/// Lifecycle of a Hangman round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    InProgress,
    Won,
    Lost,
}

/// Result of submitting one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Letter is in the word; `revealed` counts its positions
    Hit { revealed: usize },
    /// Letter is not in the word and cost one attempt
    Miss,
    /// Letter was guessed before; nothing changed
    AlreadyUsed,
    /// Input had no character after trimming
    Blank,
    /// The round is already won or lost
    Finished,
}

/// Reduce raw input to the single letter that gets evaluated
///
/// Trims, lowercases and keeps the first character only, so `"  Cat\n"`
/// evaluates as `'c'`.
#[must_use]
pub fn normalize_guess(input: &str) -> Option<char> {
    input.trim().to_lowercase().chars().next()
}

/// One Hangman round
#[derive(Debug, Clone)]
pub struct HangmanSession {
    target: Vec<char>,
    revealed: Vec<char>,
    used_letters: BTreeSet<char>,
    attempts_remaining: u32,
    max_attempts: u32,
    state: SessionState,
}

impl HangmanSession {
    /// Start a round for `word` with `max_attempts` misses allowed
    ///
    /// Non-alphabetic characters (spaces, hyphens, apostrophes) start out
    /// revealed. `max_attempts` is raised to 1 if zero.
    ///
    /// # Examples
    /// ```
    /// use word_puzzles::core::{GuessOutcome, HangmanSession, SessionState};
    ///
    /// let mut session = HangmanSession::new("cat", 7);
    /// assert_eq!(session.mask(), "---");
    ///
    /// assert_eq!(session.submit_guess("c"), GuessOutcome::Hit { revealed: 1 });
    /// assert_eq!(session.mask(), "c--");
    /// assert_eq!(session.submit_guess("x"), GuessOutcome::Miss);
    /// assert_eq!(session.attempts_remaining(), 6);
    /// assert_eq!(session.state(), SessionState::InProgress);
    /// ```
    #[must_use]
    pub fn new(word: &str, max_attempts: u32) -> Self {
        let target: Vec<char> = word.chars().collect();
        let revealed = target
            .iter()
            .map(|&c| if c.is_alphabetic() { PLACEHOLDER } else { c })
            .collect::<Vec<_>>();
        let max_attempts = max_attempts.max(1);

        let state = if revealed == target {
            SessionState::Won
        } else {
            SessionState::InProgress
        };

        Self {
            target,
            revealed,
            used_letters: BTreeSet::new(),
            attempts_remaining: max_attempts,
            max_attempts,
            state,
        }
    }

    /// Evaluate one guess
    ///
    /// Only the first character of the trimmed, lowercased input counts.
    pub fn submit_guess(&mut self, input: &str) -> GuessOutcome {
        if self.is_finished() {
            return GuessOutcome::Finished;
        }

        let Some(letter) = normalize_guess(input) else {
            return GuessOutcome::Blank;
        };

        if !self.used_letters.insert(letter) {
            return GuessOutcome::AlreadyUsed;
        }

        let mut revealed = 0;
        for (slot, &c) in self.revealed.iter_mut().zip(&self.target) {
            if c == letter {
                *slot = c;
                revealed += 1;
            }
        }

        if revealed > 0 {
            if self.revealed == self.target {
                self.state = SessionState::Won;
            }
            GuessOutcome::Hit { revealed }
        } else {
            self.attempts_remaining -= 1;
            if self.attempts_remaining == 0 {
                self.state = SessionState::Lost;
            }
            GuessOutcome::Miss
        }
    }

    /// The word being guessed
    #[must_use]
    pub fn target(&self) -> String {
        self.target.iter().collect()
    }

    /// The word with unrevealed positions replaced by [`PLACEHOLDER`]
    #[must_use]
    pub fn mask(&self) -> String {
        self.revealed.iter().collect()
    }

    /// Letters guessed so far, in sorted order
    #[must_use]
    pub const fn used_letters(&self) -> &BTreeSet<char> {
        &self.used_letters
    }

    #[inline]
    #[must_use]
    pub const fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// True once the round is won or lost
    #[inline]
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state != SessionState::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(revealed: usize) -> GuessOutcome {
        GuessOutcome::Hit { revealed }
    }

    #[test]
    fn new_session_hides_every_letter() {
        let session = HangmanSession::new("guitar", DEFAULT_MAX_ATTEMPTS);
        assert_eq!(session.mask(), "------");
        assert_eq!(session.target(), "guitar");
        assert_eq!(session.attempts_remaining(), 7);
        assert_eq!(session.state(), SessionState::InProgress);
        assert!(session.used_letters().is_empty());
    }

    #[test]
    fn cat_solved_letter_by_letter() {
        let mut session = HangmanSession::new("cat", DEFAULT_MAX_ATTEMPTS);
        let mut masks = Vec::new();
        let mut outcomes = Vec::new();

        for guess in ["c", "a", "t"] {
            outcomes.push(session.submit_guess(guess));
            masks.push(session.mask());
        }

        assert_eq!(outcomes, vec![hit(1), hit(1), hit(1)]);
        assert_eq!(masks, vec!["c--", "ca-", "cat"]);
        assert_eq!(session.state(), SessionState::Won);
        assert_eq!(session.attempts_remaining(), 7);
    }

    #[test]
    fn cat_lost_after_seven_misses() {
        let mut session = HangmanSession::new("cat", 7);
        let misses = ["x", "y", "z", "q", "w", "e", "r"];

        for (i, guess) in misses.iter().enumerate() {
            assert_eq!(session.state(), SessionState::InProgress, "lost early at {i}");
            assert_eq!(session.submit_guess(guess), GuessOutcome::Miss);
        }

        assert_eq!(session.attempts_remaining(), 0);
        assert_eq!(session.state(), SessionState::Lost);
        assert_eq!(session.mask(), "---");
    }

    #[test]
    fn hit_reveals_every_occurrence_without_cost() {
        let mut session = HangmanSession::new("banana", 7);

        assert_eq!(session.submit_guess("a"), hit(3));
        assert_eq!(session.mask(), "-a-a-a");
        assert_eq!(session.submit_guess("n"), hit(2));
        assert_eq!(session.mask(), "-anana");
        assert_eq!(session.attempts_remaining(), 7);
    }

    #[test]
    fn miss_costs_one_attempt_and_leaves_mask() {
        let mut session = HangmanSession::new("banana", 7);
        session.submit_guess("a");
        let before = session.mask();

        assert_eq!(session.submit_guess("z"), GuessOutcome::Miss);
        assert_eq!(session.mask(), before);
        assert_eq!(session.attempts_remaining(), 6);
    }

    #[test]
    fn repeated_letter_is_free() {
        let mut session = HangmanSession::new("cat", 7);

        assert_eq!(session.submit_guess("z"), GuessOutcome::Miss);
        assert_eq!(session.submit_guess("z"), GuessOutcome::AlreadyUsed);
        assert_eq!(session.submit_guess("c"), hit(1));
        assert_eq!(session.submit_guess("C"), GuessOutcome::AlreadyUsed);
        assert_eq!(session.attempts_remaining(), 6);
        assert_eq!(session.mask(), "c--");
    }

    #[test]
    fn only_first_character_is_evaluated() {
        let mut session = HangmanSession::new("cat", 7);

        // "cat" as a whole-word guess only tries 'c'
        assert_eq!(session.submit_guess("  CAT \n"), hit(1));
        assert_eq!(session.mask(), "c--");
        assert_eq!(session.state(), SessionState::InProgress);
        assert_eq!(session.used_letters().iter().collect::<String>(), "c");
    }

    #[test]
    fn blank_input_changes_nothing() {
        let mut session = HangmanSession::new("cat", 7);

        assert_eq!(session.submit_guess(""), GuessOutcome::Blank);
        assert_eq!(session.submit_guess("   "), GuessOutcome::Blank);
        assert_eq!(session.attempts_remaining(), 7);
        assert!(session.used_letters().is_empty());
    }

    #[test]
    fn used_letters_are_sorted() {
        let mut session = HangmanSession::new("cat", 7);
        for guess in ["t", "z", "a", "m"] {
            session.submit_guess(guess);
        }
        assert_eq!(session.used_letters().iter().collect::<String>(), "amtz");
    }

    #[test]
    fn win_ignores_remaining_attempts() {
        let mut session = HangmanSession::new("ox", 7);
        for guess in ["a", "b", "c", "d", "e", "f"] {
            session.submit_guess(guess);
        }
        assert_eq!(session.attempts_remaining(), 1);

        session.submit_guess("o");
        session.submit_guess("x");
        assert_eq!(session.state(), SessionState::Won);
        assert_eq!(session.attempts_remaining(), 1);
    }

    #[test]
    fn finished_session_rejects_guesses() {
        let mut session = HangmanSession::new("a", 7);
        assert_eq!(session.submit_guess("a"), hit(1));
        assert_eq!(session.state(), SessionState::Won);
        assert_eq!(session.submit_guess("b"), GuessOutcome::Finished);
        assert_eq!(session.attempts_remaining(), 7);

        let mut lost = HangmanSession::new("a", 1);
        assert_eq!(lost.submit_guess("b"), GuessOutcome::Miss);
        assert_eq!(lost.state(), SessionState::Lost);
        assert_eq!(lost.submit_guess("a"), GuessOutcome::Finished);
        assert_eq!(lost.mask(), "-");
    }

    #[test]
    fn non_letters_start_revealed() {
        let mut session = HangmanSession::new("ice cream", 7);
        assert_eq!(session.mask(), "--- -----");

        for guess in ["i", "c", "e", "r", "a", "m"] {
            session.submit_guess(guess);
        }
        assert_eq!(session.state(), SessionState::Won);
    }

    #[test]
    fn zero_attempts_is_raised_to_one() {
        let session = HangmanSession::new("cat", 0);
        assert_eq!(session.max_attempts(), 1);
        assert_eq!(session.attempts_remaining(), 1);
    }

    #[test]
    fn normalize_guess_examples() {
        assert_eq!(normalize_guess("A"), Some('a'));
        assert_eq!(normalize_guess("  hello "), Some('h'));
        assert_eq!(normalize_guess(" \t"), None);
    }
}

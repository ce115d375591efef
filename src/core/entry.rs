//! Word/clue entries and the `word : clue` line format

use std::fmt;
use thiserror::Error;

/// Clue stored when a line carries a word but no clue text
pub const NO_CLUE: &str = "no clue available";

/// One loaded puzzle word together with its clue
///
/// The word is always lowercase and non-empty; construction through
/// [`Entry::new`] or [`parse_line`] enforces both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    word: String,
    clue: String,
}

/// Reasons a word-list line is skipped during loading
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("line has no ':' delimiter between word and clue")]
    MissingDelimiter,

    #[error("line has an empty word before the ':' delimiter")]
    EmptyWord,
}

impl Entry {
    /// Create an entry from a word and an optional clue
    ///
    /// Both are trimmed and lowercased. A missing or blank clue becomes [`NO_CLUE`].
    ///
    /// # Errors
    /// Returns [`LoadError::EmptyWord`] if the word is blank after trimming.
    ///
    /// # Examples
    /// ```
    /// use word_puzzles::core::{Entry, NO_CLUE};
    ///
    /// let entry = Entry::new("  Apple ", Some("A Fruit")).unwrap();
    /// assert_eq!(entry.word(), "apple");
    /// assert_eq!(entry.clue(), "a fruit");
    ///
    /// let bare = Entry::new("pear", None).unwrap();
    /// assert_eq!(bare.clue(), NO_CLUE);
    /// ```
    pub fn new(word: &str, clue: Option<&str>) -> Result<Self, LoadError> {
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return Err(LoadError::EmptyWord);
        }

        let clue = clue
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map_or_else(|| NO_CLUE.to_string(), str::to_lowercase);

        Ok(Self { word, clue })
    }

    /// The puzzle word (lowercase)
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The clue or hint shown for this word
    #[inline]
    #[must_use]
    pub fn clue(&self) -> &str {
        &self.clue
    }

    pub(crate) fn set_clue(&mut self, clue: String) {
        self.clue = clue;
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.word, self.clue)
    }
}

/// Parse one `word : clue` line
///
/// The first `:` splits word from clue. Anything after it, further colons
/// included, is clue text.
///
/// # Errors
/// - [`LoadError::MissingDelimiter`] if the line has no `:`
/// - [`LoadError::EmptyWord`] if nothing but whitespace precedes the `:`
pub fn parse_line(line: &str) -> Result<Entry, LoadError> {
    let (word, clue) = line.split_once(':').ok_or(LoadError::MissingDelimiter)?;
    Entry::new(word, Some(clue))
}

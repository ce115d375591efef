//! Word pool with draw-without-replacement bookkeeping
//!
//! A pool is filled once from raw `word : clue` lines and then consumed by one
//! of two draw policies:
//! - **stack** ([`WordPool::shuffle`] + [`WordPool::draw_without_replacement`]),
//!   used by Hangman
//! - **visited set** ([`WordPool::draw_random_unvisited`]), used by Word Scramble
//!
//! A run should stick to one policy; the two do not share bookkeeping.

use super::entry::{Entry, LoadError, parse_line};
use log::{debug, warn};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rand::seq::SliceRandom;
use rustc_hash::{FxHashMap, FxHashSet};

/// How repeated words are stored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Every line becomes its own pool item, duplicates included
    #[default]
    KeepAll,
    /// A repeated word replaces the clue of the earlier entry in place
    LastWins,
}

/// A line that was skipped while loading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number within the loaded source
    pub line_number: usize,
    pub error: LoadError,
}

/// Outcome of [`WordPool::load`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Entries newly stored in the pool
    pub loaded: usize,
    /// Lines that overwrote an earlier entry under [`DuplicatePolicy::LastWins`]
    pub merged: usize,
    pub skipped: Vec<SkippedLine>,
}

/// Loaded entries plus draw state
#[derive(Debug, Clone, Default)]
pub struct WordPool {
    entries: Vec<Entry>,
    stack: Vec<usize>,
    visited: FxHashSet<usize>,
    by_word: FxHashMap<String, usize>,
    policy: DuplicatePolicy,
    limit: Option<usize>,
}

impl WordPool {
    /// Create an empty pool that keeps duplicate words
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how repeated words are stored
    #[must_use]
    pub fn with_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Stop storing entries once `limit` are held
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Build a pool from lines using the default policy
    ///
    /// # Examples
    /// ```
    /// use word_puzzles::core::WordPool;
    ///
    /// let pool = WordPool::from_lines(["apple : a fruit", "not a valid line", "pear :"]);
    /// assert_eq!(pool.len(), 2);
    /// ```
    #[must_use]
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut pool = Self::new();
        pool.load(lines);
        pool
    }

    /// Parse and store `word : clue` lines
    ///
    /// Malformed lines are skipped and reported, never fatal. Loading stops
    /// early once the pool limit is reached.
    pub fn load<I, S>(&mut self, lines: I) -> LoadReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = LoadReport::default();

        for (idx, line) in lines.into_iter().enumerate() {
            if self.limit.is_some_and(|limit| self.entries.len() >= limit) {
                debug!("Pool limit of {} entries reached, ignoring remaining lines", self.entries.len());
                break;
            }

            let line = line.as_ref();
            match parse_line(line) {
                Ok(entry) => {
                    if self.insert(entry) {
                        report.loaded += 1;
                    } else {
                        report.merged += 1;
                    }
                }
                Err(error) => {
                    // Blank lines are common in hand-edited lists and not worth a warning
                    if line.trim().is_empty() {
                        debug!("Skipping blank line {}", idx + 1);
                    } else {
                        warn!("Skipping line {} ({error}): {line:?}", idx + 1);
                    }
                    report.skipped.push(SkippedLine {
                        line_number: idx + 1,
                        error,
                    });
                }
            }
        }

        report
    }

    /// Store an entry, returning `false` if it merged into an existing one
    fn insert(&mut self, entry: Entry) -> bool {
        if self.policy == DuplicatePolicy::LastWins
            && let Some(&idx) = self.by_word.get(entry.word())
        {
            debug!("Duplicate word {:?}, replacing its clue", entry.word());
            self.entries[idx].set_clue(entry.clue().to_string());
            return false;
        }

        let idx = self.entries.len();
        self.by_word.insert(entry.word().to_string(), idx);
        self.entries.push(entry);
        self.stack.push(idx);
        true
    }

    /// Number of entries held (drawn or not)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in load order
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Entries still on the stack
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.stack.len()
    }

    /// Entries not yet marked visited
    #[inline]
    #[must_use]
    pub fn unvisited(&self) -> usize {
        self.entries.len() - self.visited.len()
    }

    /// Randomize the order of the remaining stack
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.stack.shuffle(rng);
    }

    /// Pop the next entry off the stack
    ///
    /// After [`shuffle`](Self::shuffle), successive calls yield every entry
    /// exactly once in random order, then `None`.
    pub fn draw_without_replacement(&mut self) -> Option<&Entry> {
        let idx = self.stack.pop()?;
        debug!("Drew entry #{idx}, {} left on the stack", self.stack.len());
        Some(&self.entries[idx])
    }

    /// Pick a uniformly random entry that has not been visited, and mark it visited
    ///
    /// Equivalent in distribution to resampling the whole pool until an
    /// unvisited entry turns up, but the pick is taken directly among the
    /// unvisited indices so the cost does not grow as the pool drains.
    pub fn draw_random_unvisited<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&Entry> {
        let unvisited: Vec<usize> = (0..self.entries.len())
            .filter(|idx| !self.visited.contains(idx))
            .collect();

        let &idx = unvisited.choose(rng)?;
        self.visited.insert(idx);
        debug!("Visited entry #{idx}, {} unvisited", unvisited.len() - 1);
        Some(&self.entries[idx])
    }

    /// Dump every entry at debug level
    pub fn log_contents(&self) {
        debug!("Word pool holds {} entries:", self.entries.len());
        for entry in &self.entries {
            debug!("  {entry}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    const LINES: &[&str] = &[
        "apple : a fruit",
        "bridge : crosses a river",
        "candle : gives light",
        "dragon : breathes fire",
    ];

    #[test]
    fn load_counts_valid_lines() {
        let mut pool = WordPool::new();
        let report = pool.load(LINES);

        assert_eq!(report.loaded, 4);
        assert_eq!(report.merged, 0);
        assert!(report.skipped.is_empty());
        assert_eq!(pool.len(), 4);
        assert_eq!(pool.remaining(), 4);
        assert_eq!(pool.unvisited(), 4);
    }

    #[test]
    fn load_skips_and_reports_bad_lines() {
        let mut pool = WordPool::new();
        let report = pool.load(["apple : a fruit", "garbage", "  : no word", "pear :"]);

        assert_eq!(report.loaded, 2);
        assert_eq!(
            report.skipped,
            vec![
                SkippedLine {
                    line_number: 2,
                    error: LoadError::MissingDelimiter
                },
                SkippedLine {
                    line_number: 3,
                    error: LoadError::EmptyWord
                },
            ]
        );
        assert_eq!(pool.entries()[1].clue(), crate::core::NO_CLUE);
    }

    #[test]
    fn keep_all_keeps_duplicates_as_separate_items() {
        let pool = WordPool::from_lines(["apple : first", "apple : second"]);
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.entries()[0].clue(), "first");
        assert_eq!(pool.entries()[1].clue(), "second");
    }

    #[test]
    fn last_wins_overwrites_earlier_clue() {
        let mut pool = WordPool::new().with_policy(DuplicatePolicy::LastWins);
        let report = pool.load(["apple : first", "pear : fruit", "APPLE : second"]);

        assert_eq!(report.loaded, 2);
        assert_eq!(report.merged, 1);
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.entries()[0].word(), "apple");
        assert_eq!(pool.entries()[0].clue(), "second");
    }

    #[test]
    fn limit_stops_loading() {
        let mut pool = WordPool::new().with_limit(2);
        let report = pool.load(LINES);

        assert_eq!(report.loaded, 2);
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.entries()[1].word(), "bridge");
    }

    #[test]
    fn empty_pool_draws_nothing() {
        let mut pool = WordPool::new();
        let mut rng = StdRng::seed_from_u64(1);

        assert!(pool.is_empty());
        assert!(pool.draw_without_replacement().is_none());
        assert!(pool.draw_random_unvisited(&mut rng).is_none());
    }

    #[test]
    fn unshuffled_stack_pops_in_reverse_load_order() {
        let mut pool = WordPool::from_lines(LINES);
        let drawn: Vec<String> = std::iter::from_fn(|| {
            pool.draw_without_replacement().map(|e| e.word().to_string())
        })
        .collect();

        assert_eq!(drawn, vec!["dragon", "candle", "bridge", "apple"]);
    }

    #[test]
    fn random_unvisited_visits_everything_once() {
        let mut pool = WordPool::from_lines(LINES);
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = HashSet::new();

        while let Some(entry) = pool.draw_random_unvisited(&mut rng) {
            assert!(seen.insert(entry.word().to_string()), "drew {} twice", entry.word());
        }

        assert_eq!(seen.len(), 4);
        assert_eq!(pool.unvisited(), 0);
        assert!(pool.draw_random_unvisited(&mut rng).is_none());
    }

    #[test]
    fn policies_keep_separate_bookkeeping() {
        let mut pool = WordPool::from_lines(LINES);
        let mut rng = StdRng::seed_from_u64(3);

        pool.draw_random_unvisited(&mut rng);
        assert_eq!(pool.unvisited(), 3);
        assert_eq!(pool.remaining(), 4);
    }

    proptest! {
        #[test]
        fn shuffled_stack_yields_each_entry_exactly_once(
            words in prop::collection::vec("[a-z]{1,8}", 0..40),
            seed in any::<u64>(),
        ) {
            let lines: Vec<String> = words
                .iter()
                .enumerate()
                .map(|(i, w)| format!("{w} : clue {i}"))
                .collect();

            let mut pool = WordPool::from_lines(&lines);
            let mut rng = StdRng::seed_from_u64(seed);
            pool.shuffle(&mut rng);

            let mut drawn: Vec<String> = Vec::new();
            while let Some(entry) = pool.draw_without_replacement() {
                drawn.push(format!("{}|{}", entry.word(), entry.clue()));
            }

            let mut expected: Vec<String> = lines
                .iter()
                .map(|l| {
                    let (w, c) = l.split_once(" : ").unwrap();
                    format!("{w}|{c}")
                })
                .collect();

            drawn.sort();
            expected.sort();
            prop_assert_eq!(drawn, expected);
            prop_assert!(pool.draw_without_replacement().is_none());
        }
    }
}

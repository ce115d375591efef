//! Formatting utilities for terminal output

use std::collections::BTreeSet;

/// Format guessed letters as a comma-separated list
#[must_use]
pub fn format_used_letters(letters: &BTreeSet<char>) -> String {
    if letters.is_empty() {
        return "(none)".to_string();
    }

    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Widest bar drawn with one cell per attempt
pub const ATTEMPTS_BAR_WIDTH: u32 = 26;

/// Bar with one cell per attempt, filled cells for attempts still available
///
/// Above [`ATTEMPTS_BAR_WIDTH`] attempts the bar is scaled to that width.
#[must_use]
pub fn attempts_bar(remaining: u32, max: u32) -> String {
    if max > ATTEMPTS_BAR_WIDTH {
        return create_progress_bar(
            f64::from(remaining),
            f64::from(max),
            ATTEMPTS_BAR_WIDTH as usize,
        );
    }

    let filled = remaining.min(max) as usize;
    let empty = (max as usize) - filled;
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

/// `1 word`, `2 words`
#[must_use]
pub fn pluralize(count: usize, singular: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {singular}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn used_letters_empty() {
        assert_eq!(format_used_letters(&BTreeSet::new()), "(none)");
    }

    #[test]
    fn used_letters_sorted_list() {
        let letters: BTreeSet<char> = ['t', 'a', 'c'].into_iter().collect();
        assert_eq!(format_used_letters(&letters), "a, c, t");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn attempts_bar_one_cell_per_attempt() {
        assert_eq!(attempts_bar(7, 7), "███████");
        assert_eq!(attempts_bar(3, 7), "███░░░░");
        assert_eq!(attempts_bar(0, 7), "░░░░░░░");
    }

    #[test]
    fn attempts_bar_scales_huge_limits() {
        let bar = attempts_bar(u32::MAX, u32::MAX);
        assert_eq!(bar.chars().count(), ATTEMPTS_BAR_WIDTH as usize);
        assert!(bar.chars().all(|c| c == '█'));

        assert_eq!(attempts_bar(0, 1_000).chars().count(), 26);
    }

    #[test]
    fn pluralize_words() {
        assert_eq!(pluralize(1, "word"), "1 word");
        assert_eq!(pluralize(0, "word"), "0 words");
        assert_eq!(pluralize(12, "word"), "12 words");
    }
}

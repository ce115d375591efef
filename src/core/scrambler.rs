//! Letter scrambling for the Word Scramble display

use rand::Rng;

/// Scramble a word by random pairwise swaps
///
/// Performs one swap per character, each between two uniformly chosen
/// positions. The result is always a permutation of `word` and may equal it;
/// no derangement is enforced.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use word_puzzles::core::scramble;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let jumble = scramble("planet", &mut rng);
///
/// let mut a: Vec<char> = jumble.chars().collect();
/// let mut b: Vec<char> = "planet".chars().collect();
/// a.sort_unstable();
/// b.sort_unstable();
/// assert_eq!(a, b);
/// ```
#[must_use]
pub fn scramble<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    let len = chars.len();

    if len < 2 {
        return word.to_string();
    }

    for _ in 0..len {
        let a = rng.random_range(0..len);
        let b = rng.random_range(0..len);
        chars.swap(a, b);
    }

    chars.into_iter().collect()
}

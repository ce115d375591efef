//! Word list loading utilities
//!
//! Fills a [`WordPool`] from a file or from one of the embedded lists. The
//! pool passed in carries the duplicate policy and size limit to apply.

use crate::core::{LoadReport, WordPool};
use log::{info, warn};
use std::fs;
use std::io;
use std::path::Path;

/// Load `word : clue` lines from a file into `pool`
///
/// Malformed lines are skipped, not reported as errors. Lines that are not
/// valid UTF-8 are skipped the same way, and a missing file leaves `pool`
/// empty so the games fall back to their empty-pool behavior.
///
/// # Errors
///
/// Returns an I/O error if the file exists but cannot be read.
///
/// # Examples
/// ```no_run
/// use word_puzzles::core::WordPool;
/// use word_puzzles::wordlists::loader::load_from_file;
///
/// let pool = load_from_file("data/hangman.txt", WordPool::new()).unwrap();
/// println!("Loaded {} words", pool.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, mut pool: WordPool) -> io::Result<WordPool> {
    let path = path.as_ref();
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!("Word list {} not found, loading no words", path.display());
            return Ok(pool);
        }
        Err(e) => return Err(e),
    };

    // Undecodable lines become blank so line numbers in the report stay accurate
    let lines = bytes
        .split_inclusive(|&b| b == b'\n')
        .enumerate()
        .map(|(idx, raw)| {
            let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
            std::str::from_utf8(raw).unwrap_or_else(|e| {
                warn!("Skipping line {} of {}: {e}", idx + 1, path.display());
                ""
            })
        });

    let report = pool.load(lines);
    log_report(&path.display().to_string(), &report);

    Ok(pool)
}

/// Load embedded lines into `pool`
///
/// # Examples
/// ```
/// use word_puzzles::core::WordPool;
/// use word_puzzles::wordlists::{HANGMAN, loader::pool_from_slice};
///
/// let pool = pool_from_slice(HANGMAN, WordPool::new());
/// assert_eq!(pool.len(), HANGMAN.len());
/// ```
#[must_use]
pub fn pool_from_slice(slice: &[&str], mut pool: WordPool) -> WordPool {
    let report = pool.load(slice);
    log_report("embedded list", &report);
    pool
}

fn log_report(source: &str, report: &LoadReport) {
    info!(
        "Loaded {} entries from {source} ({} merged, {} skipped)",
        report.loaded,
        report.merged,
        report.skipped.len()
    );
}

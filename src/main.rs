//! Word Puzzles - CLI
//!
//! Hangman (full-screen or plain console) and Word Scramble.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::process::ExitCode;
use std::time::Duration;
use word_puzzles::{
    commands::{
        ConfigurationError, Console, HangmanConfig, ScrambleConfig, run_hangman, run_scramble,
        scramble::{MAX_POOL_WORDS, MIN_WORDS},
    },
    core::{DEFAULT_MAX_ATTEMPTS, DuplicatePolicy, WordPool},
    output::print_hangman_summary,
    wordlists::{
        HANGMAN, SCRAMBLE,
        loader::{load_from_file, pool_from_slice},
    },
};

/// Exit status when the word list cannot support a scramble game
const CONFIG_ERROR_EXIT: u8 = 2;

/// Upper bound for `--max-tries`, one miss per letter of the alphabet
const MAX_TRIES: i64 = 26;

#[derive(Parser)]
#[command(
    name = "word_puzzles",
    about = "Hangman and Word Scramble in the terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: 'builtin' (default) or path to a file of `word : clue` lines
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Seed for a reproducible word order and scrambles
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Merge repeated words, keeping the clue from the last occurrence
    #[arg(long, global = true)]
    dedup: bool,

    /// Log debug output (including the loaded word list) to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Full-screen Hangman (default)
    Play {
        /// Wrong guesses allowed per word (1-26)
        #[arg(short = 't', long, default_value_t = DEFAULT_MAX_ATTEMPTS, value_parser = clap::value_parser!(u32).range(1..=MAX_TRIES))]
        max_tries: u32,
    },

    /// Hangman in plain console mode
    Hangman {
        /// Wrong guesses allowed per word (1-26)
        #[arg(short = 't', long, default_value_t = DEFAULT_MAX_ATTEMPTS, value_parser = clap::value_parser!(u32).range(1..=MAX_TRIES))]
        max_tries: u32,
    },

    /// Unscramble jumbled words
    Scramble {
        /// Fewest words the list must hold
        #[arg(long, default_value_t = MIN_WORDS)]
        min_words: usize,

        /// Seconds to count down after beating the game
        #[arg(long, default_value_t = 5)]
        closing_delay: u64,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut rng = seeded_rng(cli.seed);
    let policy = if cli.dedup {
        DuplicatePolicy::LastWins
    } else {
        DuplicatePolicy::KeepAll
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        max_tries: DEFAULT_MAX_ATTEMPTS,
    });

    match command {
        Commands::Play { max_tries } => {
            let pool = load_pool(&cli.wordlist, HANGMAN, WordPool::new().with_policy(policy))?;
            run_play_command(pool, max_tries, &mut rng)
        }
        Commands::Hangman { max_tries } => {
            let pool = load_pool(&cli.wordlist, HANGMAN, WordPool::new().with_policy(policy))?;
            run_hangman_command(pool, max_tries, &mut rng)
        }
        Commands::Scramble {
            min_words,
            closing_delay,
        } => {
            let pool = load_pool(
                &cli.wordlist,
                SCRAMBLE,
                WordPool::new()
                    .with_policy(policy)
                    .with_limit(MAX_POOL_WORDS),
            )?;
            let config = ScrambleConfig {
                min_words,
                closing_delay: Duration::from_secs(closing_delay),
                ..ScrambleConfig::default()
            };
            run_scramble_command(pool, &config, &mut rng)
        }
    }
}

/// Route `log` output to stderr, `warn` and up unless `--verbose` or `RUST_LOG` say otherwise
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    let seed = seed.unwrap_or_else(rand::random);
    info!("Using random seed {seed}");
    StdRng::seed_from_u64(seed)
}

/// Fill `pool` from the -w selection
///
/// - "builtin": the embedded list for the chosen game
/// - "<path>": a custom `word : clue` file
fn load_pool(wordlist: &str, builtin: &[&str], pool: WordPool) -> Result<WordPool> {
    match wordlist {
        "builtin" => Ok(pool_from_slice(builtin, pool)),
        path => load_from_file(path, pool).with_context(|| format!("Failed to read word list '{path}'")),
    }
}

fn run_play_command(pool: WordPool, max_tries: u32, rng: &mut StdRng) -> Result<ExitCode> {
    use word_puzzles::interactive::{App, run_tui};

    let config = HangmanConfig {
        max_attempts: max_tries,
    };
    let app = App::new(pool, config, rng);
    let summary = run_tui(app)?;

    print_hangman_summary(&mut std::io::stdout(), &summary)?;
    Ok(ExitCode::SUCCESS)
}

fn run_hangman_command(mut pool: WordPool, max_tries: u32, rng: &mut StdRng) -> Result<ExitCode> {
    let config = HangmanConfig {
        max_attempts: max_tries,
    };
    let mut console = Console::stdio();
    let summary = run_hangman(&mut pool, &config, rng, &mut console)?;

    print_hangman_summary(console.out(), &summary)?;
    Ok(ExitCode::SUCCESS)
}

fn run_scramble_command(
    mut pool: WordPool,
    config: &ScrambleConfig,
    rng: &mut StdRng,
) -> Result<ExitCode> {
    let mut console = Console::stdio();

    // The runner prints its own summary and closing countdown
    match run_scramble(&mut pool, config, rng, &mut console) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            if let Some(config_err) = err.downcast_ref::<ConfigurationError>() {
                eprintln!("{config_err}");
                return Ok(ExitCode::from(CONFIG_ERROR_EXIT));
            }
            Err(err)
        }
    }
}

//! TUI application state and logic

use crate::commands::{HangmanConfig, HangmanEnd, HangmanSummary};
use crate::core::{GuessOutcome, HangmanSession, SessionState, WordPool};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, info};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub pool: WordPool,
    pub config: HangmanConfig,
    pub session: Option<HangmanSession>,
    pub clue: String,
    pub total_words: usize,
    pub solved: usize,
    pub round: usize,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Letter keys are guesses
    Guessing,
    /// Word solved, waiting for Enter to draw the next one
    RoundWon,
    /// A round was lost; the run is over
    GameOver,
    /// Every word was solved
    Victory,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    /// Shuffle `pool` and open the first round
    #[must_use]
    pub fn new<R: Rng + ?Sized>(mut pool: WordPool, config: HangmanConfig, rng: &mut R) -> Self {
        pool.log_contents();
        pool.shuffle(rng);
        let total_words = pool.len();

        let mut app = Self {
            pool,
            config,
            session: None,
            clue: String::new(),
            total_words,
            solved: 0,
            round: 0,
            input_mode: InputMode::Guessing,
            messages: vec![Message {
                text: "Welcome! Type letters to guess the hidden word.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        };
        app.next_word();
        app
    }

    /// Draw the next word, or declare victory if the pool is empty
    pub fn next_word(&mut self) {
        if let Some(entry) = self.pool.draw_without_replacement() {
            self.clue = entry.clue().to_string();
            let session = HangmanSession::new(entry.word(), self.config.max_attempts);
            self.round += 1;
            debug!("TUI round {} begins", self.round);

            let message = format!(
                "Word {} of {}: {} letters",
                self.round,
                self.total_words,
                session.mask().chars().count()
            );
            self.session = Some(session);
            self.input_mode = InputMode::Guessing;
            self.add_message(&message, MessageStyle::Info);

            // Words with no letters to guess are solved on arrival
            self.settle_round();
        } else {
            info!("TUI pool exhausted, {} words solved", self.solved);
            self.session = None;
            self.input_mode = InputMode::Victory;
            self.add_message(
                "CONGRATULATIONS! YOU BEAT THE GAME! Press 'q' to quit.",
                MessageStyle::Success,
            );
        }
    }

    /// Submit one letter to the current round
    pub fn handle_guess(&mut self, letter: char) {
        if self.input_mode != InputMode::Guessing {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let outcome = session.submit_guess(&letter.to_string());
        debug!("TUI guess {letter:?} -> {outcome:?}");

        match outcome {
            GuessOutcome::Hit { revealed } => self.add_message(
                &format!("Letter '{letter}' found ({revealed}x)"),
                MessageStyle::Success,
            ),
            GuessOutcome::Miss => self.add_message(
                &format!("Sorry, there's no letter '{letter}'"),
                MessageStyle::Error,
            ),
            GuessOutcome::AlreadyUsed => {
                self.add_message("You've used that letter already!", MessageStyle::Info);
            }
            GuessOutcome::Blank | GuessOutcome::Finished => {}
        }

        self.settle_round();
    }

    /// Leave `Guessing` once the current session has been won or lost
    fn settle_round(&mut self) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let target = session.target();

        match session.state() {
            SessionState::Won => {
                self.solved += 1;
                self.input_mode = InputMode::RoundWon;
                self.add_message(
                    &format!("CORRECT! The word was '{target}'. Press Enter for the next word."),
                    MessageStyle::Success,
                );
            }
            SessionState::Lost => {
                info!("TUI game lost on {target:?} after {} words", self.solved);
                self.input_mode = InputMode::GameOver;
                self.add_message(
                    &format!("GAME OVER. The word was '{target}'. Press 'q' to quit."),
                    MessageStyle::Error,
                );
            }
            SessionState::InProgress => {}
        }
    }

    /// Move past a solved word
    pub fn advance(&mut self) {
        if self.input_mode == InputMode::RoundWon {
            self.next_word();
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Result of the run so far
    #[must_use]
    pub fn summary(&self) -> HangmanSummary {
        let end = match self.input_mode {
            InputMode::Victory => HangmanEnd::PoolExhausted,
            InputMode::GameOver => HangmanEnd::Lost {
                word: self
                    .session
                    .as_ref()
                    .map(HangmanSession::target)
                    .unwrap_or_default(),
            },
            InputMode::Guessing | InputMode::RoundWon => HangmanEnd::Abandoned,
        };

        HangmanSummary {
            solved: self.solved,
            total_words: self.total_words,
            end,
        }
    }
}

/// Run the TUI application
///
/// Returns the run summary once the player quits.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<HangmanSummary> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<HangmanSummary> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match (key.code, app.input_mode) {
                (KeyCode::Char('c'), _) if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                (KeyCode::Esc, _) => {
                    app.should_quit = true;
                }
                (KeyCode::Char(c), InputMode::Guessing) if c.is_alphabetic() => {
                    app.handle_guess(c);
                }
                (KeyCode::Enter | KeyCode::Char(' ' | 'n'), InputMode::RoundWon) => {
                    app.advance();
                }
                (KeyCode::Char('q') | KeyCode::Enter, InputMode::GameOver | InputMode::Victory) => {
                    app.should_quit = true;
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.summary())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn app_with(lines: &[&str], max_attempts: u32) -> App {
        let pool = WordPool::from_lines(lines);
        let mut rng = StdRng::seed_from_u64(1);
        App::new(pool, HangmanConfig { max_attempts }, &mut rng)
    }

    #[test]
    fn new_app_opens_first_round() {
        let app = app_with(&["cat : a pet"], 7);

        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.round, 1);
        assert_eq!(app.clue, "a pet");
        assert_eq!(app.session.as_ref().unwrap().mask(), "---");
    }

    #[test]
    fn empty_pool_is_immediate_victory() {
        let app = app_with(&[], 7);

        assert_eq!(app.input_mode, InputMode::Victory);
        assert_eq!(app.summary().end, HangmanEnd::PoolExhausted);
    }

    #[test]
    fn solving_waits_for_advance() {
        let mut app = app_with(&["ox : a bovine", "ox : a bovine"], 7);

        app.handle_guess('o');
        app.handle_guess('x');
        assert_eq!(app.input_mode, InputMode::RoundWon);
        assert_eq!(app.solved, 1);

        // Letters are ignored until the next word is drawn
        app.handle_guess('z');
        assert_eq!(app.round, 1);

        app.advance();
        assert_eq!(app.round, 2);
        assert_eq!(app.input_mode, InputMode::Guessing);

        app.handle_guess('o');
        app.handle_guess('x');
        app.advance();
        assert_eq!(app.input_mode, InputMode::Victory);
        assert_eq!(app.summary().solved, 2);
    }

    #[test]
    fn losing_ends_the_game() {
        let mut app = app_with(&["cat : a pet"], 2);

        app.handle_guess('x');
        app.handle_guess('y');
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(
            app.summary().end,
            HangmanEnd::Lost {
                word: "cat".to_string()
            }
        );
    }

    #[test]
    fn quitting_mid_round_is_abandoned() {
        let mut app = app_with(&["cat : a pet"], 7);
        app.handle_guess('c');
        assert_eq!(app.summary().end, HangmanEnd::Abandoned);
    }

    #[test]
    fn message_log_is_bounded() {
        let mut app = app_with(&["cat : a pet"], 7);
        for _ in 0..10 {
            app.add_message("spam", MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
    }

    #[test]
    fn word_without_letters_is_solved_on_arrival() {
        let mut app = app_with(&["42 : the answer"], 7);

        assert_eq!(app.input_mode, InputMode::RoundWon);
        assert_eq!(app.solved, 1);

        app.advance();
        assert_eq!(app.input_mode, InputMode::Victory);
        assert_eq!(app.summary().solved, 1);
    }
}

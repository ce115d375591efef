//! Line-buffered console I/O shared by the game runners

use std::io::{self, BufRead, Write};

/// Prompt/response pair over any reader and writer
///
/// The runners only talk to the terminal through this type, so tests can
/// drive whole games with a `Cursor` and capture the output in a `Vec<u8>`.
pub struct Console<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process's stdin and stdout
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` and read one line
    ///
    /// Returns `None` once the input is exhausted. The trailing newline is
    /// stripped; other whitespace is left for the caller to normalize.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if writing the prompt or reading the line fails.
    pub fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Writer for rendering between prompts
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consume the console and hand back the writer
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn prompt_reads_lines_in_order() {
        let mut console = Console::new(Cursor::new("first\nsecond\r\n"), Vec::new());

        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some("first"));
        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some("second"));
        assert_eq!(console.prompt("> ").unwrap(), None);
    }

    #[test]
    fn prompt_writes_prompt_text() {
        let mut console = Console::new(Cursor::new("x\n"), Vec::new());
        console.prompt("Enter a letter: ").unwrap();

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output, "Enter a letter: ");
    }

    #[test]
    fn prompt_keeps_inner_whitespace() {
        let mut console = Console::new(Cursor::new("  spaced out  \n"), Vec::new());
        assert_eq!(
            console.prompt("").unwrap().as_deref(),
            Some("  spaced out  ")
        );
    }

    #[test]
    fn empty_line_is_not_end_of_input() {
        let mut console = Console::new(Cursor::new("\n"), Vec::new());
        assert_eq!(console.prompt("").unwrap().as_deref(), Some(""));
        assert_eq!(console.prompt("").unwrap(), None);
    }
}

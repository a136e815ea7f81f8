//! Confirmation gate for publishing and pruning
//!
//! Every mutation is previewed and then blocked on an explicit "yes". Callers
//! treat a decline as a successful abort.

use std::io::{self, BufRead, Write};

/// Asks the operator to approve a pending mutation
pub trait Confirm {
  /// Returns true only on an explicit affirmative answer
  fn confirm(&mut self, prompt: &str) -> bool;
}

/// Line-based prompt on a reader/writer pair (stdin/stdout in production)
pub struct TerminalPrompt<R, W> {
  input: R,
  output: W,
}

impl TerminalPrompt<io::StdinLock<'static>, io::Stdout> {
  /// Prompt on the process's stdin and stdout
  pub fn stdio() -> Self {
    Self::new(io::stdin().lock(), io::stdout())
  }
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
  pub fn new(input: R, output: W) -> Self {
    Self { input, output }
  }

  fn ask(&mut self, prompt: &str) -> io::Result<String> {
    write!(self.output, "{} [y/N]: ", prompt)?;
    self.output.flush()?;

    let mut answer = String::new();
    self.input.read_line(&mut answer)?;
    Ok(answer)
  }
}

impl<R: BufRead, W: Write> Confirm for TerminalPrompt<R, W> {
  fn confirm(&mut self, prompt: &str) -> bool {
    match self.ask(prompt) {
      Ok(answer) => is_affirmative(&answer),
      Err(e) => {
        log::warn!("failed to read confirmation, treating as decline: {}", e);
        false
      }
    }
  }
}

fn is_affirmative(answer: &str) -> bool {
  matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

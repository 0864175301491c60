//! Console capability.
//!
//! The game never touches stdin/stdout directly. The CLI supplies a terminal
//! implementation; tests use [`crate::mock::ScriptedConsole`].

use crate::error::{GameError, Result};

/// Message shown when an integer prompt receives something else.
pub const INVALID_INTEGER: &str = "Invalid input. Please enter a valid integer.";

/// How a message should stand out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Plain,
    Success,
    Error,
    Bright,
}

/// Line-oriented console access used by the session and round runner.
pub trait Console {
    /// Print one line of output.
    fn display(&mut self, message: &str, emphasis: Emphasis) -> Result<()>;

    /// Print `prompt` without a newline and read one line of input.
    /// Returns `Ok(None)` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Print `message` and block until a key is pressed.
    fn wait_for_key(&mut self, message: &str) -> Result<()>;

    /// Clear the screen.
    fn clear(&mut self) -> Result<()>;
}

/// Prompt with `"{prompt}: "` until the reply parses as an integer.
///
/// Malformed replies are answered with [`INVALID_INTEGER`] and re-prompted
/// without limit. End of input yields [`GameError::InputClosed`].
pub fn prompt_integer<C: Console + ?Sized>(console: &mut C, prompt: &str) -> Result<i32> {
    loop {
        let Some(line) = console.read_line(&format!("{prompt}: "))? else {
            return Err(GameError::InputClosed);
        };
        match line.trim().parse::<i32>() {
            Ok(value) => return Ok(value),
            Err(_) => {
                tracing::debug!("rejected non-integer input {line:?}");
                console.display(INVALID_INTEGER, Emphasis::Plain)?;
            }
        }
    }
}

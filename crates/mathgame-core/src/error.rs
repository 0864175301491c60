//! Game error types.
//!
//! Malformed integer input is not an error at this level: it is handled by
//! re-prompting inside [`crate::traits::prompt_integer`]. What remains are the
//! conditions a session cannot recover from on its own.

use thiserror::Error;

/// Errors that can end a game session.
#[derive(Debug, Error)]
pub enum GameError {
    /// The input stream reached end-of-file while a value was expected.
    #[error("input closed while waiting for an answer")]
    InputClosed,

    /// Reading from or writing to the console failed.
    #[error("console I/O failed")]
    Io(#[from] std::io::Error),

    /// No operand can be drawn from `[1, upper_bound)`.
    #[error("operand range [1, {upper_bound}) is empty")]
    EmptyOperandRange { upper_bound: i32 },

    /// A difficulty level outside 1..=3.
    #[error("invalid difficulty {0}, expected 1, 2, or 3")]
    InvalidDifficulty(i32),
}

impl GameError {
    /// Returns `true` if the error came from the player's side going away
    /// rather than from a fault in the game.
    pub fn is_input_closed(&self) -> bool {
        matches!(self, GameError::InputClosed)
    }
}

pub type Result<T> = std::result::Result<T, GameError>;

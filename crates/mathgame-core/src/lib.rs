//! mathgame-core — Problem generation, scoring, and the session loop.
//!
//! This crate holds everything the quiz does apart from talking to a real
//! terminal. Console access goes through the [`traits::Console`] capability
//! so the whole game can be driven headlessly.

pub mod error;
pub mod generator;
pub mod history;
pub mod mock;
pub mod model;
pub mod round;
pub mod session;
pub mod traits;

/// Number of questions asked in one round.
pub const QUESTIONS_PER_ROUND: u32 = 5;

/// Points awarded for a correct answer.
pub const POINTS_CORRECT: i32 = 4;

/// Points deducted for a wrong answer.
pub const POINTS_WRONG: i32 = 1;

/// Multiplier turning a difficulty level into an exclusive operand bound.
pub const BOUND_PER_LEVEL: i32 = 50;

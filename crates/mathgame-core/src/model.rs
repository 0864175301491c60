//! Core data model types for mathgame.
//!
//! Operations, difficulty levels, generated problems, and the records a
//! finished round leaves behind.

use std::fmt;

use chrono::NaiveDate;
use rand::Rng;

use crate::error::GameError;
use crate::BOUND_PER_LEVEL;

/// An arithmetic operation offered as a game mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl Operation {
    /// All operations in menu order.
    pub const ALL: [Operation; 4] = [
        Operation::Addition,
        Operation::Subtraction,
        Operation::Multiplication,
        Operation::Division,
    ];

    /// Display name, used in headers and history records.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Addition => "Addition",
            Operation::Subtraction => "Subtraction",
            Operation::Multiplication => "Multiplication",
            Operation::Division => "Division",
        }
    }

    /// Symbol shown between the operands of a question.
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Addition => "+",
            Operation::Subtraction => "-",
            Operation::Multiplication => "x",
            Operation::Division => "÷",
        }
    }

    /// Apply the operation. Division truncates toward zero; callers only pass
    /// pairs accepted by [`Operation::is_valid`].
    pub fn apply(self, a: i32, b: i32) -> i32 {
        match self {
            Operation::Addition => a + b,
            Operation::Subtraction => a - b,
            Operation::Multiplication => a * b,
            Operation::Division => a / b,
        }
    }

    /// Whether `(a, b)` is an acceptable operand pair for this operation.
    pub fn is_valid(self, a: i32, b: i32) -> bool {
        match self {
            Operation::Division => b != 0 && a % b == 0,
            _ => true,
        }
    }

    /// Pick one of the four operations uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Difficulty level, 1 (easy) through 3 (hard).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Difficulty(u8);

impl Difficulty {
    pub const EASY: Difficulty = Difficulty(1);
    pub const MEDIUM: Difficulty = Difficulty(2);
    pub const HARD: Difficulty = Difficulty(3);

    pub fn level(self) -> u8 {
        self.0
    }

    /// Exclusive upper bound for operands at this level.
    pub fn upper_bound(self) -> i32 {
        i32::from(self.0) * BOUND_PER_LEVEL
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "Easy",
            2 => "Medium",
            _ => "Hard",
        }
    }
}

impl TryFrom<i32> for Difficulty {
    type Error = GameError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1..=3 => Ok(Difficulty(value as u8)),
            _ => Err(GameError::InvalidDifficulty(value)),
        }
    }
}

/// A single generated question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Problem {
    pub operation: Operation,
    pub num1: i32,
    pub num2: i32,
    /// The correct answer.
    pub result: i32,
}

impl Problem {
    pub fn is_correct(&self, answer: i32) -> bool {
        answer == self.result
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = ?",
            self.num1,
            self.operation.symbol(),
            self.num2
        )
    }
}

/// The outcome of one completed round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    date: NaiveDate,
    mode: Operation,
    points: i32,
}

impl SessionRecord {
    pub fn new(date: NaiveDate, mode: Operation, points: i32) -> Self {
        Self { date, mode, points }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Short calendar-day form, e.g. `10/17/2026`.
    pub fn date_label(&self) -> String {
        self.date.format("%m/%d/%Y").to_string()
    }

    pub fn mode(&self) -> Operation {
        self.mode
    }

    pub fn mode_name(&self) -> &'static str {
        self.mode.name()
    }

    pub fn points(&self) -> i32 {
        self.points
    }
}

//! Round runner: difficulty selection, five questions, scoring.

use chrono::NaiveDate;
use rand::Rng;

use crate::error::Result;
use crate::generator::generate;
use crate::model::{Difficulty, Operation, SessionRecord};
use crate::traits::{prompt_integer, Console, Emphasis};
use crate::{POINTS_CORRECT, POINTS_WRONG, QUESTIONS_PER_ROUND};

const DIFFICULTY_MENU: &str = "Select difficulty: 1. Easy, 2. Medium, 3. Hard";
const INVALID_DIFFICULTY: &str = "Invalid choice! Please select 1, 2, or 3.";
const CORRECT: &str = "Correct! +4 points";
const WRONG: &str = "Wrong! -1 point";
const SEPARATOR: &str = "- - - - - - - - - - -";

/// Score after `correct` right answers out of a full round.
pub fn final_score(correct: u32) -> i32 {
    let correct = correct.min(QUESTIONS_PER_ROUND);
    let wrong = QUESTIONS_PER_ROUND - correct;
    correct as i32 * POINTS_CORRECT - wrong as i32 * POINTS_WRONG
}

/// Apply one graded answer to a running score.
pub fn update_score(score: i32, correct: bool) -> i32 {
    if correct {
        score + POINTS_CORRECT
    } else {
        score - POINTS_WRONG
    }
}

/// Ask for a difficulty until the player enters 1, 2, or 3.
pub fn select_difficulty<C: Console + ?Sized>(console: &mut C) -> Result<Difficulty> {
    loop {
        console.display(DIFFICULTY_MENU, Emphasis::Plain)?;
        let choice = prompt_integer(console, "Difficulty")?;
        match Difficulty::try_from(choice) {
            Ok(difficulty) => return Ok(difficulty),
            Err(_) => console.display(INVALID_DIFFICULTY, Emphasis::Error)?,
        }
    }
}

/// Play one round of `operation` and return its record.
///
/// `today` is read once, after the last answer. The caller owns the history
/// and decides where the record goes.
pub fn run_round<C, R, D>(
    operation: Operation,
    console: &mut C,
    rng: &mut R,
    today: D,
) -> Result<SessionRecord>
where
    C: Console + ?Sized,
    R: Rng + ?Sized,
    D: FnOnce() -> NaiveDate,
{
    let difficulty = select_difficulty(console)?;
    let upper_bound = difficulty.upper_bound();
    tracing::debug!(
        "starting {operation} round at {} (operands below {upper_bound})",
        difficulty.label()
    );

    console.clear()?;
    console.display(&format!("Game Mode: {operation}"), Emphasis::Plain)?;
    console.display(SEPARATOR, Emphasis::Plain)?;

    let mut score = 0;
    for question in 1..=QUESTIONS_PER_ROUND {
        let problem = generate(operation, upper_bound, rng)?;
        console.display(&format!("Que. {problem}"), Emphasis::Bright)?;
        let answer = prompt_integer(console, "Ans")?;

        let correct = problem.is_correct(answer);
        score = update_score(score, correct);
        if correct {
            console.display(CORRECT, Emphasis::Success)?;
        } else {
            console.display(WRONG, Emphasis::Error)?;
        }
        tracing::debug!(
            "question {question}: {problem} answered {answer}, expected {}, score {score}",
            problem.result
        );

        if question < QUESTIONS_PER_ROUND {
            console.wait_for_key("Press any key for the next question...")?;
        }
    }

    let record = SessionRecord::new(today(), operation, score);
    console.display(&format!("Your final score: {score}"), Emphasis::Plain)?;
    console.wait_for_key("Press any key to continue...")?;

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::ScriptedConsole;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::Cell;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    /// Answers for the next round, from a generator seeded like the round's.
    fn answers(op: Operation, bound: i32, seed: u64, correct: &[bool]) -> Vec<String> {
        let mut rng = StdRng::seed_from_u64(seed);
        correct
            .iter()
            .map(|&right| {
                let p = generate(op, bound, &mut rng).unwrap();
                let answer = if right { p.result } else { p.result + 1 };
                answer.to_string()
            })
            .collect()
    }

    #[test]
    fn score_law_covers_every_outcome() {
        let scores: Vec<i32> = (0..=5).map(final_score).collect();
        let expected: Vec<i32> = (0..=5).map(|c| 4 * c - (5 - c)).collect();
        assert_eq!(scores, expected);
        assert_eq!(scores, [-5, 0, 5, 10, 15, 20]);
    }

    #[test]
    fn update_score_has_no_floor() {
        assert_eq!(update_score(0, false), -1);
        assert_eq!(update_score(-1, false), -2);
        assert_eq!(update_score(-2, true), 2);
    }

    #[test]
    fn all_correct_addition_scores_twenty() {
        let mut inputs = vec!["1".to_string()];
        inputs.extend(answers(Operation::Addition, 50, 11, &[true; 5]));
        let mut console = ScriptedConsole::new(inputs);
        let mut rng = StdRng::seed_from_u64(11);

        let record = run_round(Operation::Addition, &mut console, &mut rng, today).unwrap();

        assert_eq!(record.points(), 20);
        assert_eq!(record.mode_name(), "Addition");
        assert_eq!(record.date(), today());
        assert_eq!(console.count_output(CORRECT), 5);
        assert!(console.saw("Your final score: 20"));
        assert_eq!(console.remaining_inputs(), 0);
    }

    #[test]
    fn mixed_answers_follow_score_law() {
        let pattern = [true, false, true, false, false];
        let mut inputs = vec!["3".to_string()];
        inputs.extend(answers(Operation::Division, 150, 12, &pattern));
        let mut console = ScriptedConsole::new(inputs);
        let mut rng = StdRng::seed_from_u64(12);

        let record = run_round(Operation::Division, &mut console, &mut rng, today).unwrap();

        assert_eq!(record.points(), final_score(2));
        assert_eq!(record.points(), 5);
        assert_eq!(console.count_output(CORRECT), 2);
        assert_eq!(console.count_output(WRONG), 3);
    }

    #[test]
    fn all_wrong_goes_negative() {
        let mut inputs = vec!["2".to_string()];
        inputs.extend(answers(Operation::Subtraction, 100, 13, &[false; 5]));
        let mut console = ScriptedConsole::new(inputs);
        let mut rng = StdRng::seed_from_u64(13);

        let record = run_round(Operation::Subtraction, &mut console, &mut rng, today).unwrap();
        assert_eq!(record.points(), -5);
    }

    #[test]
    fn out_of_range_difficulty_reprompts() {
        let mut inputs = vec!["0".to_string(), "7".to_string(), "x".to_string(), "1".to_string()];
        inputs.extend(answers(Operation::Multiplication, 50, 14, &[true; 5]));
        let mut console = ScriptedConsole::new(inputs);
        let mut rng = StdRng::seed_from_u64(14);

        let record =
            run_round(Operation::Multiplication, &mut console, &mut rng, today).unwrap();

        assert_eq!(record.points(), 20);
        assert_eq!(console.count_output(INVALID_DIFFICULTY), 2);
        assert_eq!(console.count_output(crate::traits::INVALID_INTEGER), 1);
        assert_eq!(console.count_output(DIFFICULTY_MENU), 3);
    }

    #[test]
    fn questions_are_shown_with_symbol_and_gated() {
        let mut inputs = vec!["1".to_string()];
        inputs.extend(answers(Operation::Multiplication, 50, 15, &[true; 5]));
        let mut console = ScriptedConsole::new(inputs);
        let mut rng = StdRng::seed_from_u64(15);

        run_round(Operation::Multiplication, &mut console, &mut rng, today).unwrap();

        let questions: Vec<_> = console
            .output()
            .iter()
            .filter(|(m, e)| m.starts_with("Que. ") && *e == Emphasis::Bright)
            .collect();
        assert_eq!(questions.len(), 5);
        assert!(questions.iter().all(|(m, _)| m.contains(" x ") && m.ends_with(" = ?")));
        // four between questions, one after the score
        assert_eq!(console.key_waits(), 5);
        assert_eq!(console.clears(), 1);
        assert!(console.saw("Game Mode: Multiplication"));
    }

    #[test]
    fn input_closing_mid_round_aborts() {
        let mut console = ScriptedConsole::new(["1", "3"]);
        let mut rng = StdRng::seed_from_u64(16);
        let dated = Cell::new(false);
        let err = run_round(Operation::Addition, &mut console, &mut rng, || {
            dated.set(true);
            today()
        })
        .unwrap_err();
        assert!(err.is_input_closed());
        assert!(!dated.get(), "an unfinished round must not read the clock");
    }

    #[test]
    fn finished_round_reads_clock_once() {
        let mut inputs = vec!["1".to_string()];
        inputs.extend(answers(Operation::Addition, 50, 17, &[true; 5]));
        let mut console = ScriptedConsole::new(inputs);
        let mut rng = StdRng::seed_from_u64(17);
        let reads = Cell::new(0u32);

        let record = run_round(Operation::Addition, &mut console, &mut rng, || {
            reads.set(reads.get() + 1);
            NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
        })
        .unwrap();

        assert_eq!(reads.get(), 1);
        assert_eq!(record.date_label(), "10/18/2026");
    }
}

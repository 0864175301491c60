//! Session loop: menu, dispatch, and history ownership.
//!
//! A [`Session`] owns the console, the random source, and the history. There
//! is no process-wide state; everything a round needs is passed down from
//! here.

use chrono::NaiveDate;
use rand::Rng;

use crate::error::Result;
use crate::history::HistoryStore;
use crate::model::Operation;
use crate::round::run_round;
use crate::traits::{prompt_integer, Console, Emphasis};

const MENU_RULE: &str = "- - - - - - - - - - - - -";
const MENU: [&str; 8] = [
    "Select a mode to start:",
    "0. Show History",
    "1. Addition",
    "2. Subtraction",
    "3. Multiplication",
    "4. Division",
    "5. Random Mode",
    "6. Quit the Game",
];

/// Runtime options that do not change the rules of the game.
#[derive(Debug, Clone, Default)]
pub struct GameOptions {
    /// Skip the welcome banner's key gate.
    pub skip_intro: bool,
}

/// A parsed menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    ShowHistory,
    Play(Operation),
    Random,
    Quit,
    Invalid(i32),
}

impl From<i32> for MenuOption {
    fn from(value: i32) -> Self {
        match value {
            0 => MenuOption::ShowHistory,
            1 => MenuOption::Play(Operation::Addition),
            2 => MenuOption::Play(Operation::Subtraction),
            3 => MenuOption::Play(Operation::Multiplication),
            4 => MenuOption::Play(Operation::Division),
            5 => MenuOption::Random,
            6 => MenuOption::Quit,
            other => MenuOption::Invalid(other),
        }
    }
}

/// What the loop does after handling an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Back to the menu.
    Continue,
    /// Leave the loop.
    Exit,
}

/// One interactive game session.
pub struct Session<C, R> {
    console: C,
    rng: R,
    history: HistoryStore,
    options: GameOptions,
    today: fn() -> NaiveDate,
}

fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

impl<C: Console, R: Rng> Session<C, R> {
    pub fn new(console: C, rng: R, options: GameOptions) -> Self {
        Self {
            console,
            rng,
            history: HistoryStore::new(),
            options,
            today: local_today,
        }
    }

    /// Replace the source of the record date.
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    /// Show the welcome banner, then loop over the menu until the player quits.
    pub fn run(&mut self) -> Result<()> {
        self.console.display("Welcome to Math Game!", Emphasis::Bright)?;
        self.console
            .display("- - - - - - - - - - - - - -", Emphasis::Plain)?;
        if !self.options.skip_intro {
            self.console
                .wait_for_key("Press any key to start the game!")?;
        }

        loop {
            self.show_menu()?;
            let choice = prompt_integer(&mut self.console, "Enter an option")?;
            if self.step(MenuOption::from(choice))? == Transition::Exit {
                tracing::debug!(
                    "session finished after {} round(s)",
                    self.history.len()
                );
                return Ok(());
            }
        }
    }

    /// Handle one menu selection.
    pub fn step(&mut self, option: MenuOption) -> Result<Transition> {
        tracing::debug!("menu option {option:?}");
        match option {
            MenuOption::ShowHistory => {
                self.show_history()?;
                Ok(Transition::Continue)
            }
            MenuOption::Play(operation) => {
                self.play(operation)?;
                Ok(Transition::Continue)
            }
            MenuOption::Random => {
                let operation = Operation::random(&mut self.rng);
                tracing::debug!("random mode picked {operation}");
                self.play(operation)?;
                Ok(Transition::Continue)
            }
            MenuOption::Quit => {
                self.say_goodbye()?;
                Ok(Transition::Exit)
            }
            MenuOption::Invalid(value) => {
                tracing::debug!("ignoring invalid option {value}");
                self.console
                    .display("Invalid option. Please try again.", Emphasis::Error)?;
                self.console.wait_for_key("Press any key to continue...")?;
                Ok(Transition::Continue)
            }
        }
    }

    fn play(&mut self, operation: Operation) -> Result<()> {
        let record = run_round(operation, &mut self.console, &mut self.rng, self.today)?;
        tracing::debug!("{} round scored {}", record.mode_name(), record.points());
        self.history.append(record);
        Ok(())
    }

    fn show_menu(&mut self) -> Result<()> {
        self.console.clear()?;
        self.console.display(MENU_RULE, Emphasis::Plain)?;
        for line in MENU {
            self.console.display(line, Emphasis::Plain)?;
        }
        self.console.display(MENU_RULE, Emphasis::Plain)
    }

    fn show_history(&mut self) -> Result<()> {
        self.console.clear()?;
        self.console.display("Game History", Emphasis::Bright)?;
        self.console
            .display("- - - - - - - - - - - -", Emphasis::Plain)?;

        if self.history.is_empty() {
            self.console
                .display("No history available.", Emphasis::Plain)?;
        } else {
            for line in self.history.render_table() {
                self.console.display(&line, Emphasis::Plain)?;
            }
        }

        self.console.wait_for_key("\nPress any key to continue...")
    }

    fn say_goodbye(&mut self) -> Result<()> {
        if !self.history.is_empty() {
            let table = self.history.summary_table();
            self.console.display(&table.to_string(), Emphasis::Plain)?;
        }
        self.console
            .display("Exiting the game. Goodbye!", Emphasis::Plain)?;
        self.console.wait_for_key("Press any key to exit")
    }
}

//! Scripted console for testing.

use std::collections::VecDeque;

use crate::error::Result;
use crate::traits::{Console, Emphasis};

/// A console that replays canned input lines and records everything shown.
///
/// Once the script runs out, [`Console::read_line`] reports end of input.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    /// Remaining input lines.
    inputs: VecDeque<String>,
    /// Every displayed message with its emphasis.
    output: Vec<(String, Emphasis)>,
    /// Every prompt printed before a read.
    prompts: Vec<String>,
    /// Number of key gates passed.
    key_waits: u32,
    /// Number of screen clears.
    clears: u32,
}

impl ScriptedConsole {
    /// Create a console that answers reads with `inputs`, in order.
    pub fn new<I>(inputs: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Queue more input lines.
    pub fn push_input(&mut self, line: impl Into<String>) {
        self.inputs.push_back(line.into());
    }

    /// All displayed messages, in order.
    pub fn output(&self) -> &[(String, Emphasis)] {
        &self.output
    }

    /// Displayed messages without their emphasis.
    pub fn lines(&self) -> Vec<&str> {
        self.output.iter().map(|(m, _)| m.as_str()).collect()
    }

    /// How many displayed messages equal `message` exactly.
    pub fn count_output(&self, message: &str) -> usize {
        self.output.iter().filter(|(m, _)| m == message).count()
    }

    /// Whether any displayed message contains `needle`.
    pub fn saw(&self, needle: &str) -> bool {
        self.output.iter().any(|(m, _)| m.contains(needle))
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn key_waits(&self) -> u32 {
        self.key_waits
    }

    pub fn clears(&self) -> u32 {
        self.clears
    }

    /// Input lines not yet consumed.
    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

impl Console for ScriptedConsole {
    fn display(&mut self, message: &str, emphasis: Emphasis) -> Result<()> {
        self.output.push((message.to_string(), emphasis));
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.inputs.pop_front())
    }

    fn wait_for_key(&mut self, message: &str) -> Result<()> {
        self.output.push((message.to_string(), Emphasis::Plain));
        self.key_waits += 1;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.clears += 1;
        Ok(())
    }
}

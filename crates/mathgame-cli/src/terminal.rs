//! Terminal-backed console.

use std::io::{self, BufRead, IsTerminal};

use console::{Style, Term};

use mathgame_core::error::Result;
use mathgame_core::traits::{Console, Emphasis};

/// Console on stdout/stdin with colored messages.
///
/// Key gates and screen clears only happen when both ends are a terminal,
/// so piped input is read strictly line by line.
pub struct TerminalConsole {
    term: Term,
    stdin: io::Stdin,
    interactive: bool,
}

impl TerminalConsole {
    pub fn new() -> Self {
        let term = Term::stdout();
        let interactive = term.is_term() && io::stdin().is_terminal();
        tracing::debug!("terminal console, interactive = {interactive}");
        Self {
            term,
            stdin: io::stdin(),
            interactive,
        }
    }

    fn style(emphasis: Emphasis) -> Style {
        match emphasis {
            Emphasis::Plain => Style::new(),
            Emphasis::Success => Style::new().green(),
            Emphasis::Error => Style::new().red(),
            Emphasis::Bright => Style::new().white().bright().bold(),
        }
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TerminalConsole {
    fn display(&mut self, message: &str, emphasis: Emphasis) -> Result<()> {
        let styled = Self::style(emphasis).apply_to(message);
        self.term.write_line(&styled.to_string())?;
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.term.write_str(prompt)?;
        self.term.flush()?;

        // Raw bytes, so a line that is not UTF-8 is rejected as a bad integer
        // by the caller instead of failing the read.
        let mut buf = Vec::new();
        if self.stdin.lock().read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn wait_for_key(&mut self, message: &str) -> Result<()> {
        if !self.interactive {
            return Ok(());
        }
        self.term.write_line(message)?;
        self.term.read_key()?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        if self.interactive {
            self.term.clear_screen()?;
        }
        Ok(())
    }
}

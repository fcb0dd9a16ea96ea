//! Stdin/stdout console with crossterm styling.

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, BufRead, Write};
use std::time::Duration;

use super::{Console, Tone};
use crate::config::GameConfig;
use crate::EngineError;

/// The interactive terminal.
pub struct Terminal {
    color: bool,
    clear_screen: bool,
}

impl Terminal {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            color: config.color,
            clear_screen: config.clear_screen,
        }
    }
}

impl Console for Terminal {
    fn say(&mut self, tone: Tone, text: &str) {
        let mut out = io::stdout().lock();
        if !self.color {
            writeln!(out, "{}", text).ok();
            return;
        }

        let styled = match tone {
            Tone::Plain => text.stylize(),
            Tone::Heading => text.cyan().bold(),
            Tone::Info => text.cyan(),
            Tone::Success => text.green(),
            Tone::Warning => text.yellow(),
            Tone::Danger => text.red(),
            Tone::Skill => text.blue(),
            Tone::Score => text.yellow(),
        };
        writeln!(out, "{}", styled).ok();
    }

    fn prompt(&mut self, prompt: &str) -> Result<String, EngineError> {
        {
            let mut out = io::stdout().lock();
            write!(out, "{}", prompt)?;
            out.flush()?;
        }

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(EngineError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn clear(&mut self) {
        if self.clear_screen {
            execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0)).ok();
        }
    }

    fn pause(&mut self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

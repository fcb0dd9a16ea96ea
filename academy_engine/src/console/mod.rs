//! Console abstraction - every line the game shows and every line it reads
//! passes through [`Console`].

mod terminal;

#[cfg(test)]
mod scripted;

pub use terminal::*;

#[cfg(test)]
pub use scripted::*;

use std::time::Duration;

use crate::EngineError;

/// How a line should be presented. Purely decorative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Heading,
    Info,
    Success,
    Warning,
    Danger,
    Skill,
    Score,
}

/// Line-oriented interactive I/O.
pub trait Console {
    /// Show one line of text.
    fn say(&mut self, tone: Tone, text: &str);

    /// Show `prompt` without a line break and read one line of input, with
    /// the trailing newline removed. Fails with [`EngineError::InputClosed`]
    /// at end of input.
    fn prompt(&mut self, prompt: &str) -> Result<String, EngineError>;

    fn clear(&mut self);

    fn pause(&mut self, duration: Duration);

    fn blank(&mut self) {
        self.say(Tone::Plain, "");
    }
}

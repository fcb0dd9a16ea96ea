//! Replays canned input and records everything shown.

use std::collections::VecDeque;
use std::time::Duration;

use super::{Console, Tone};
use crate::EngineError;

#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    /// Every line said and every prompt shown, in order.
    pub transcript: Vec<String>,
    pub clears: usize,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }

    /// Whether any transcript line contains `needle`.
    pub fn shows(&self, needle: &str) -> bool {
        self.transcript.iter().any(|line| line.contains(needle))
    }

    pub fn count(&self, needle: &str) -> usize {
        self.transcript
            .iter()
            .filter(|line| line.contains(needle))
            .count()
    }
}

impl Console for ScriptedConsole {
    fn say(&mut self, _tone: Tone, text: &str) {
        self.transcript.push(text.to_string());
    }

    fn prompt(&mut self, prompt: &str) -> Result<String, EngineError> {
        self.transcript.push(prompt.to_string());
        self.inputs.pop_front().ok_or(EngineError::InputClosed)
    }

    fn clear(&mut self) {
        self.clears += 1;
    }

    fn pause(&mut self, _duration: Duration) {}
}

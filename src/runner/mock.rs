use crate::error::{GateError, Result};
use crate::runner::{command_line, CommandRunner};
use std::collections::HashMap;
use std::sync::Mutex;

/// Mock runner for testing without spawning processes
///
/// Responses are keyed by the full command line, e.g. `"git tag --points-at sha"`.
/// Every call is recorded, including ones that fail.
pub struct MockRunner {
    responses: HashMap<String, std::result::Result<String, String>>,
    fail_all: Option<String>,
    calls: Mutex<Vec<String>>,
}

impl MockRunner {
    /// Create a runner that knows no commands
    pub fn new() -> Self {
        MockRunner {
            responses: HashMap::new(),
            fail_all: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Answer `command` with `stdout`
    pub fn respond(mut self, command: impl Into<String>, stdout: impl Into<String>) -> Self {
        self.responses.insert(command.into(), Ok(stdout.into()));
        self
    }

    /// Fail `command` with `message`
    pub fn fail(mut self, command: impl Into<String>, message: impl Into<String>) -> Self {
        self.responses.insert(command.into(), Err(message.into()));
        self
    }

    /// Fail every command with `message`
    pub fn fail_all(mut self, message: impl Into<String>) -> Self {
        self.fail_all = Some(message.into());
        self
    }

    /// Command lines executed so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls().len()
    }
}

impl Default for MockRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for MockRunner {
    fn execute(&self, program: &str, args: &[&str]) -> Result<String> {
        let line = command_line(program, args);
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(line.clone());
        }

        if let Some(message) = &self.fail_all {
            return Err(GateError::command_failed(message.clone()));
        }

        match self.responses.get(&line) {
            Some(Ok(stdout)) => Ok(stdout.clone()),
            Some(Err(message)) => Err(GateError::command_failed(message.clone())),
            None => Err(GateError::command_failed(format!(
                "Unexpected command: {}",
                line
            ))),
        }
    }
}

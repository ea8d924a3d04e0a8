use crate::error::{GateError, Result};
use crate::runner::{command_line, CommandRunner};
use std::process::Command;

/// Runs commands as real child processes
///
/// No timeout is applied: a hung command blocks the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        SystemRunner
    }
}

impl CommandRunner for SystemRunner {
    fn execute(&self, program: &str, args: &[&str]) -> Result<String> {
        let output = Command::new(program).args(args).output().map_err(|e| {
            GateError::command_failed(format!("failed to run {}: {}", program, e))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GateError::command_failed(format!(
                "{}\n{}",
                command_line(program, args),
                stderr.trim_end()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_execute_harmless_command() {
        let output = SystemRunner::new().execute("echo", &["Hello"]).unwrap();
        assert_eq!(output.trim(), "Hello");
    }

    #[cfg(unix)]
    #[test]
    fn test_execute_non_zero_exit() {
        let err = SystemRunner::new()
            .execute("sh", &["-c", "echo boom >&2; exit 1"])
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("Command failed: sh -c"));
        assert!(msg.contains("boom"));
    }

    #[test]
    fn test_execute_missing_program() {
        let err = SystemRunner::new()
            .execute("rc-gate-definitely-not-a-real-program", &[])
            .unwrap_err();
        assert!(matches!(err, GateError::CommandFailed(_)));
        assert!(err.to_string().contains("failed to run"));
    }
}

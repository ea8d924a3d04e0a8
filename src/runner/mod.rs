//! Command execution abstraction layer
//!
//! Everything rc-gate learns about the repository, and every rollback it
//! performs, goes through an external command. This module provides a
//! trait-based abstraction over running those commands so the validation
//! and rollback logic can be exercised without a real repository.
//!
//! # Overview
//!
//! - [system::SystemRunner]: runs real processes via `std::process::Command`
//! - [mock::MockRunner]: scripted responses with call recording, for tests
//!
//! # Usage
//!
//! ```rust
//! # use rc_gate::runner::CommandRunner;
//! # fn example<R: CommandRunner>(runner: &R) -> rc_gate::Result<()> {
//! let tags = runner.execute("git", &["tag", "--points-at", "HEAD"])?;
//! for tag in tags.lines() {
//!     println!("{}", tag);
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod system;

pub use mock::MockRunner;
pub use system::SystemRunner;

use crate::error::Result;

/// Runs an external command and captures its standard output
///
/// ## Error Handling
///
/// Implementations report a non-zero exit status, or a process that could
/// not be started, as [crate::error::GateError::CommandFailed] carrying the
/// diagnostic text (usually the captured stderr).
///
/// ## Thread Safety
///
/// All implementors must be `Send + Sync`.
pub trait CommandRunner: Send + Sync {
    /// Execute `program` with `args`
    ///
    /// # Returns
    /// * `Ok(String)` - Captured stdout of a successful run
    /// * `Err` - If the process fails to start or exits non-zero
    fn execute(&self, program: &str, args: &[&str]) -> Result<String>;
}

/// Render a command line the way it would be typed in a shell
pub fn command_line(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line_rendering() {
        assert_eq!(command_line("git", &["tag"]), "git tag");
        assert_eq!(
            command_line("git", &["tag", "--points-at", "abc"]),
            "git tag --points-at abc"
        );
        assert_eq!(command_line("git", &[]), "git");
    }

    #[test]
    fn test_runner_as_trait_object() {
        let mock = MockRunner::new().respond("git tag", "v1");
        let runner: &dyn CommandRunner = &mock;
        assert_eq!(runner.execute("git", &["tag"]).unwrap(), "v1");
    }
}

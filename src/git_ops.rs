use crate::config::CommandsConfig;
use crate::error::Result;
use crate::runner::{command_line, CommandRunner};
use crate::ui;

/// The four repository operations rc-gate needs, bound to concrete commands.
///
/// Read-only queries always run. The two deletions are skipped (and only
/// logged) when dry-run is enabled.
pub struct ReleaseOps<'a, R: CommandRunner + ?Sized> {
    runner: &'a R,
    commands: &'a CommandsConfig,
    dry_run: bool,
}

impl<'a, R: CommandRunner + ?Sized> ReleaseOps<'a, R> {
    /// Creates release operations on top of a command runner.
    ///
    /// # Arguments
    /// * `runner` - Executes the underlying commands
    /// * `commands` - Program names and remote to use
    pub fn new(runner: &'a R, commands: &'a CommandsConfig) -> Self {
        ReleaseOps {
            runner,
            commands,
            dry_run: false,
        }
    }

    /// Enable or disable dry-run for the mutating operations.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Lists tags pointing at a commit (`git tag --points-at <commit>`).
    pub fn tags_pointing_at(&self, commit_id: &str) -> Result<Vec<String>> {
        let stdout = self
            .runner
            .execute(&self.commands.git, &["tag", "--points-at", commit_id])?;
        Ok(parse_tag_list(&stdout))
    }

    /// Lists every tag in the repository (`git tag`).
    pub fn all_tags(&self) -> Result<Vec<String>> {
        let stdout = self.runner.execute(&self.commands.git, &["tag"])?;
        Ok(parse_tag_list(&stdout))
    }

    /// Deletes a tag from the configured remote (`git push <remote> --delete <tag>`).
    pub fn delete_remote_tag(&self, tag_name: &str) -> Result<()> {
        let args = ["push", self.commands.remote.as_str(), "--delete", tag_name];
        self.mutate(&self.commands.git, &args)
    }

    /// Deletes the hosted release named after the tag (`gh release delete <tag> --yes`).
    pub fn delete_release(&self, tag_name: &str) -> Result<()> {
        let args = ["release", "delete", tag_name, "--yes"];
        self.mutate(&self.commands.gh, &args)
    }

    fn mutate(&self, program: &str, args: &[&str]) -> Result<()> {
        if self.dry_run {
            ui::display_status(&format!(
                "Dry run: would run `{}`",
                command_line(program, args)
            ));
            return Ok(());
        }
        self.runner.execute(program, args)?;
        Ok(())
    }
}

/// Splits command output into tag names, one per line.
///
/// Lines are trimmed and blank lines dropped, so trailing newlines and
/// Windows line endings don't produce phantom tags.
pub fn parse_tag_list(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

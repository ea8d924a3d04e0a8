//! Main workflow orchestration logic
//!
//! Validation followed by rollback-on-failure, kept apart from CLI argument
//! parsing so it can be driven programmatically with any [CommandRunner].

use crate::config::Config;
use crate::error::Result;
use crate::git_ops::ReleaseOps;
use crate::runner::CommandRunner;
use crate::{rollback, ui, validator};

/// Arguments for the gate workflow
///
/// Already resolved from flags or environment; the workflow never reads the
/// environment itself.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GateWorkflowArgs {
    /// Release tag name (e.g. "5.5.0" or "v5.5.0")
    pub tag_name: String,

    /// Commit the candidate tag should point at
    pub commit_id: String,

    /// Log deletions instead of running them
    pub dry_run: bool,
}

/// Result of a successful gate workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    pub tag_name: String,
    pub commit_id: String,

    /// The highest rc tag, which points at `commit_id`
    pub highest: String,

    /// All rc tags found on the commit
    pub commit_candidates: Vec<String>,
}

/// Gate workflow
///
/// 1. Validate that the commit carries the highest rc tag
/// 2. On any failure, delete the remote tag and release (best-effort)
/// 3. Return the original failure
///
/// # Arguments
///
/// * `args` - Tag name, commit id and dry-run flag
/// * `config` - rc-gate configuration
/// * `runner` - Executes the underlying commands
pub fn run_gate_workflow<R: CommandRunner + ?Sized>(
    args: &GateWorkflowArgs,
    config: &Config,
    runner: &R,
) -> Result<WorkflowResult> {
    let ops = ReleaseOps::new(runner, &config.commands).with_dry_run(args.dry_run);

    ui::display_status(&format!("Ref: {}, SHA: {}", args.tag_name, args.commit_id));

    match validator::validate(&ops, &args.tag_name, &args.commit_id, &config.matching) {
        Ok(validation) => {
            ui::display_tag_list("Valid rc tags found:", &validation.commit_candidates);
            ui::display_status(&format!("Latest rc tag: {}", validation.highest));
            Ok(WorkflowResult {
                tag_name: args.tag_name.clone(),
                commit_id: args.commit_id.clone(),
                highest: validation.highest,
                commit_candidates: validation.commit_candidates,
            })
        }
        Err(cause) => {
            ui::display_warning("Validation failed, rolling back the release candidate");
            Err(rollback::rollback(
                &ops,
                &args.tag_name,
                &args.commit_id,
                cause,
            ))
        }
    }
}

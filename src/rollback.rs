//! Compensating cleanup after a rejected release candidate
//!
//! Both deletions are best-effort and independent. Whatever happens during
//! cleanup, the caller gets the original failure back.

use crate::error::GateError;
use crate::git_ops::ReleaseOps;
use crate::runner::CommandRunner;
use crate::ui;
use std::fmt;

/// A cleanup step that failed and was swallowed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RollbackFailure {
    /// Deleting the remote tag failed
    TagDeletion { tag: String, reason: String },
    /// Deleting the hosted release failed
    ReleaseDeletion { tag: String, reason: String },
}

impl fmt::Display for RollbackFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RollbackFailure::TagDeletion { tag, reason } => {
                write!(f, "Failed to delete tag '{}': {}", tag, reason)
            }
            RollbackFailure::ReleaseDeletion { tag, reason } => {
                write!(f, "Failed to delete release '{}': {}", tag, reason)
            }
        }
    }
}

/// What a rollback attempt did
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RollbackReport {
    /// Nothing was attempted because the tag name or commit id was empty
    pub skipped: bool,
    pub tag_deleted: bool,
    pub release_deleted: bool,
    pub failures: Vec<RollbackFailure>,
}

impl RollbackReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Delete the remote tag, then the hosted release, collecting failures
///
/// Skips both deletions when either identifier is empty. Never fails: each
/// step's error is recorded in the report and logged.
pub fn attempt_rollback<R: CommandRunner + ?Sized>(
    ops: &ReleaseOps<'_, R>,
    tag_name: &str,
    commit_id: &str,
) -> RollbackReport {
    let mut report = RollbackReport::default();

    if tag_name.is_empty() || commit_id.is_empty() {
        ui::display_warning("Tag name or commit id missing; skipping rollback.");
        report.skipped = true;
        return report;
    }

    ui::display_status("Deleting the current tag...");
    match ops.delete_remote_tag(tag_name) {
        Ok(()) => report.tag_deleted = true,
        Err(e) => report.failures.push(RollbackFailure::TagDeletion {
            tag: tag_name.to_string(),
            reason: e.to_string(),
        }),
    }

    ui::display_status("Deleting the current release...");
    match ops.delete_release(tag_name) {
        Ok(()) => report.release_deleted = true,
        Err(e) => report.failures.push(RollbackFailure::ReleaseDeletion {
            tag: tag_name.to_string(),
            reason: e.to_string(),
        }),
    }

    for failure in &report.failures {
        ui::display_error(&failure.to_string());
    }

    report
}

/// Roll back a rejected candidate and hand back the failure that caused it
///
/// The returned error is always `cause`, unchanged.
pub fn rollback<R: CommandRunner + ?Sized>(
    ops: &ReleaseOps<'_, R>,
    tag_name: &str,
    commit_id: &str,
    cause: GateError,
) -> GateError {
    let report = attempt_rollback(ops, tag_name, commit_id);
    if !report.skipped && report.is_clean() {
        ui::display_status(&format!("Rolled back tag and release '{}'", tag_name));
    }
    cause
}

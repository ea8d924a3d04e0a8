//! Release-candidate validation
//!
//! A commit may be released only if the highest rc tag for the release in the
//! whole repository points at that commit.

use crate::config::MatchingConfig;
use crate::domain::{highest_of, CandidatePattern};
use crate::error::{GateError, Result};
use crate::git_ops::ReleaseOps;
use crate::runner::CommandRunner;

/// Outcome of a successful validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    /// Candidate tags found on the commit, in listing order
    pub commit_candidates: Vec<String>,
    /// Highest candidate in the repository, guaranteed to be on the commit
    pub highest: String,
}

/// Check that the commit carries the repository's highest rc tag for `tag_name`
///
/// Runs two read-only queries: tags at the commit, then all tags.
///
/// # Errors
/// * `InvalidArguments` - empty tag name or commit id (no commands are run)
/// * `NoValidCandidates` - the commit has no rc tag for `tag_name`
/// * `HighestNotOnCommit` - the highest rc tag is elsewhere, or there is none
/// * `CommandFailed` - a query failed
pub fn validate<R: CommandRunner + ?Sized>(
    ops: &ReleaseOps<'_, R>,
    tag_name: &str,
    commit_id: &str,
    matching: &MatchingConfig,
) -> Result<Validation> {
    if tag_name.is_empty() || commit_id.is_empty() {
        return Err(GateError::invalid_arguments(
            "a tag name and a commit id are both required",
        ));
    }

    let pattern = CandidatePattern::new(tag_name, matching.optional_v_prefix)?;

    let commit_candidates = pattern.filter(ops.tags_pointing_at(commit_id)?);
    if commit_candidates.is_empty() {
        return Err(GateError::NoValidCandidates {
            tag_name: tag_name.to_string(),
            commit_id: commit_id.to_string(),
        });
    }

    let all_candidates = pattern.filter(ops.all_tags()?);

    match highest_of(&all_candidates) {
        Some(highest) if commit_candidates.contains(&highest) => Ok(Validation {
            commit_candidates,
            highest,
        }),
        highest => Err(GateError::HighestNotOnCommit {
            highest,
            commit_id: commit_id.to_string(),
        }),
    }
}

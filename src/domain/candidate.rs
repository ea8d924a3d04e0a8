use crate::error::{GateError, Result};
use regex::Regex;

/// Matches release-candidate tags (`<tag name>-rc<N>`) for one tag name
///
/// The tag name is embedded as an escaped literal, and the pattern is anchored
/// at both ends so `5.5.0` never matches `5x5x0-rc1` or `5.5.0-rc1-hotfix`.
#[derive(Debug, Clone)]
pub struct CandidatePattern {
    tag_name: String,
    regex: Regex,
}

impl CandidatePattern {
    /// Build the pattern for a tag name
    ///
    /// # Arguments
    /// * `tag_name` - Literal tag name, including any prefix (e.g. "v5.5.0")
    /// * `optional_v_prefix` - Also accept tags with a leading `v` before the tag name
    ///
    /// # Returns
    /// * `Ok(CandidatePattern)` - Compiled pattern
    /// * `Err` - If the tag name is empty
    pub fn new(tag_name: &str, optional_v_prefix: bool) -> Result<Self> {
        if tag_name.is_empty() {
            return Err(GateError::invalid_arguments(
                "tag name must not be empty",
            ));
        }

        let prefix = if optional_v_prefix { "v?" } else { "" };
        let regex = Regex::new(&format!(
            "^{}{}-rc[1-9][0-9]*$",
            prefix,
            regex::escape(tag_name)
        ))?;

        Ok(CandidatePattern {
            tag_name: tag_name.to_string(),
            regex,
        })
    }

    /// The tag name this pattern was built for
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// Check whether a single tag is a candidate
    pub fn matches(&self, tag: &str) -> bool {
        self.regex.is_match(tag)
    }

    /// Keep only the candidate tags, preserving input order
    pub fn filter<I, S>(&self, tags: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tags.into_iter()
            .filter(|tag| self.matches(tag.as_ref()))
            .map(|tag| tag.as_ref().to_string())
            .collect()
    }
}

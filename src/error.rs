use thiserror::Error;

/// Unified error type for rc-gate operations
#[derive(Error, Debug)]
pub enum GateError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("No valid rc tags found for '{tag_name}' on commit {commit_id}. Aborting.")]
    NoValidCandidates { tag_name: String, commit_id: String },

    #[error(
        "Highest rc tag {} is not found on commit {}. Aborting.",
        .highest.as_deref().unwrap_or("<none>"),
        .commit_id
    )]
    HighestNotOnCommit {
        highest: Option<String>,
        commit_id: String,
    },

    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid tag pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in rc-gate
pub type Result<T> = std::result::Result<T, GateError>;

impl GateError {
    /// Create an invalid-arguments error with context
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        GateError::InvalidArguments(msg.into())
    }

    /// Create a command failure with the collaborator's diagnostic text
    pub fn command_failed(msg: impl Into<String>) -> Self {
        GateError::CommandFailed(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GateError::Config(msg.into())
    }
}

impl From<toml::de::Error> for GateError {
    fn from(err: toml::de::Error) -> Self {
        GateError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GateError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: GateError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_highest_not_on_commit_names_the_tag() {
        let err = GateError::HighestNotOnCommit {
            highest: Some("5.5.0-rc10".to_string()),
            commit_id: "fake_sha".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Highest rc tag 5.5.0-rc10"));
        assert!(msg.contains("fake_sha"));
    }

    #[test]
    fn test_highest_not_on_commit_without_highest() {
        let err = GateError::HighestNotOnCommit {
            highest: None,
            commit_id: "abc".to_string(),
        };
        assert!(err.to_string().contains("<none>"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (GateError::invalid_arguments("x"), "Invalid arguments"),
            (
                GateError::NoValidCandidates {
                    tag_name: "5.5.0".to_string(),
                    commit_id: "sha".to_string(),
                },
                "No valid rc tags",
            ),
            (GateError::command_failed("x"), "Command failed"),
            (GateError::config("x"), "Configuration error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_toml_error_becomes_config_error() {
        let parse_err = toml::from_str::<toml::Value>("not = [valid").unwrap_err();
        let err: GateError = parse_err.into();
        assert!(matches!(err, GateError::Config(_)));
    }

    #[test]
    fn test_error_special_characters_in_messages() {
        let special_chars = vec![
            "message with\nnewline",
            "message with\ttab",
            "message with 'quotes'",
            "message with \\ backslash",
        ];

        for msg in special_chars {
            let err = GateError::command_failed(msg);
            assert!(err.to_string().contains(msg));
        }
    }
}

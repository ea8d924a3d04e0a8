use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File name looked up in the current directory
pub const LOCAL_CONFIG_FILE: &str = "rcgate.toml";

/// File name looked up in the user configuration directory
pub const USER_CONFIG_FILE: &str = ".rcgate.toml";

/// Represents the complete configuration for rc-gate.
///
/// Contains the external program bindings and the tag matching options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub commands: CommandsConfig,

    #[serde(default)]
    pub matching: MatchingConfig,
}

fn default_git() -> String {
    "git".to_string()
}

fn default_gh() -> String {
    "gh".to_string()
}

fn default_remote() -> String {
    "origin".to_string()
}

/// Programs and remote used for the four release operations.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CommandsConfig {
    /// Version-control CLI used to list and delete tags
    #[serde(default = "default_git")]
    pub git: String,

    /// Release-hosting CLI used to delete the release
    #[serde(default = "default_gh")]
    pub gh: String,

    /// Remote the rejected tag is deleted from
    #[serde(default = "default_remote")]
    pub remote: String,
}

impl Default for CommandsConfig {
    fn default() -> Self {
        CommandsConfig {
            git: default_git(),
            gh: default_gh(),
            remote: default_remote(),
        }
    }
}

/// Options for recognizing release-candidate tags.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct MatchingConfig {
    /// Also accept a leading `v` in front of the tag name
    #[serde(default)]
    pub optional_v_prefix: bool,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `rcgate.toml` in current directory
/// 3. `.rcgate.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        fs::read_to_string(LOCAL_CONFIG_FILE)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG_FILE);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

/// Parse configuration from TOML text
pub fn parse_config(config_str: &str) -> Result<Config> {
    let config: Config = toml::from_str(config_str)?;
    Ok(config)
}

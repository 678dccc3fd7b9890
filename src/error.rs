//! Domain error types for release candidate management.

use thiserror::Error;

/// Errors raised by the release manager itself, as opposed to failures
/// reported by the forge which are passed through untouched.
#[derive(Error, Debug)]
pub enum ReleaseManagerError {
    // Cli args errors
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Repository {0} does not report a default branch")]
    MissingDefaultBranch(String),

    // Release candidate errors
    #[error("Branch \"{branch}\" already exists: {link}")]
    BranchAlreadyExists { branch: String, link: String },

    #[error("Unable to parse a version from release tag \"{0}\"")]
    InvalidTag(String),

    // Parsing errors
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("Git URL parse error: {0}")]
    GitUrlError(#[from] git_url_parse::GitUrlParseError),

    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] log::SetLoggerError),
}

impl ReleaseManagerError {
    /// Create an invalid arguments error
    pub fn invalid_args(msg: impl Into<String>) -> Self {
        Self::InvalidArgs(msg.into())
    }

    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create a branch conflict error pointing at the existing branch.
    pub fn branch_already_exists(
        branch: impl Into<String>,
        repo_link: &str,
    ) -> Self {
        let branch = branch.into();
        let link = format!("{}/tree/{}", repo_link.trim_end_matches('/'), branch);
        Self::BranchAlreadyExists { branch, link }
    }
}

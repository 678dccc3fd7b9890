//! Configuration loading and parsing for `release-manager.toml` files.
use serde::Deserialize;

use crate::{error::ReleaseManagerError, result::Result};

/// Default configuration filename, read from the default branch.
pub const DEFAULT_CONFIG_FILE: &str = "release-manager.toml";
/// Default prefix for release candidate branches (`rc/1.2.0`).
pub const DEFAULT_RC_BRANCH_PREFIX: &str = "rc";
/// Default prefix for release candidate tags (`rc-1.2.0`).
pub const DEFAULT_RC_TAG_PREFIX: &str = "rc-";
/// Default prefix for promoted release tags (`version-1.2.0`).
pub const DEFAULT_VERSION_TAG_PREFIX: &str = "version-";

/// How the next release candidate version is derived.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersioningStrategy {
    /// `MAJOR.MINOR.PATCH`, bumped from the latest release tag.
    #[default]
    Semver,
    /// `yyyy.MM.dd_PATCH`, derived from the current date.
    Calver,
}

/// Root configuration structure for `release-manager.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Strategy used to compute the next version.
    pub versioning_strategy: VersioningStrategy,
    /// Prefix for release candidate branch names.
    pub rc_branch_prefix: String,
    /// Prefix for release candidate tags.
    pub rc_tag_prefix: String,
    /// Prefix for promoted release tags.
    pub version_tag_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            versioning_strategy: VersioningStrategy::default(),
            rc_branch_prefix: DEFAULT_RC_BRANCH_PREFIX.into(),
            rc_tag_prefix: DEFAULT_RC_TAG_PREFIX.into(),
            version_tag_prefix: DEFAULT_VERSION_TAG_PREFIX.into(),
        }
    }
}

impl Config {
    /// Parse and validate configuration file content.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(content).map_err(ReleaseManagerError::from)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.rc_branch_prefix.trim_matches('/').is_empty() {
            return Err(ReleaseManagerError::invalid_config(
                "rc_branch_prefix must not be empty",
            )
            .into());
        }

        if self.rc_tag_prefix.is_empty() || self.version_tag_prefix.is_empty()
        {
            return Err(ReleaseManagerError::invalid_config(
                "tag prefixes must not be empty",
            )
            .into());
        }

        if self.rc_tag_prefix == self.version_tag_prefix {
            return Err(ReleaseManagerError::invalid_config(
                "rc_tag_prefix and version_tag_prefix must differ",
            )
            .into());
        }

        Ok(())
    }

    /// Returns true if the tag was produced by this tool.
    pub fn is_managed_tag(&self, tag: &str) -> bool {
        tag.starts_with(&self.rc_tag_prefix)
            || tag.starts_with(&self.version_tag_prefix)
    }
}

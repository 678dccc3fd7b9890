use chrono::NaiveDate;
use clap::ValueEnum;
use regex::Regex;
use semver::Version;

use crate::{
    config::{Config, VersioningStrategy},
    error::ReleaseManagerError,
    forge::request::{NextReleaseInfo, Release},
    result::Result,
};

/// Semver component bumped when cutting a release candidate.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BumpLevel {
    Major,
    #[default]
    Minor,
}

/// Computes the branch, tag and name of the next release candidate.
///
/// Semver versions are bumped from the latest release tag (or `0.0.0` when
/// there is none). Calver versions are `yyyy.MM.dd_0` for `today`.
pub fn compute_next_release(
    config: &Config,
    latest_release: Option<&Release>,
    bump: BumpLevel,
    today: NaiveDate,
) -> Result<NextReleaseInfo> {
    let version = match config.versioning_strategy {
        VersioningStrategy::Calver => {
            format!("{}_0", today.format("%Y.%m.%d"))
        }
        VersioningStrategy::Semver => {
            let current = match latest_release {
                Some(release) => parse_tag_version(config, &release.tag_name)?,
                None => Version::new(0, 0, 0),
            };
            bump_version(&current, bump).to_string()
        }
    };

    Ok(NextReleaseInfo {
        rc_branch: format!(
            "{}/{version}",
            config.rc_branch_prefix.trim_end_matches('/')
        ),
        rc_release_tag: format!("{}{version}", config.rc_tag_prefix),
        release_name: format!("Version {version}"),
    })
}

fn parse_tag_version(config: &Config, tag: &str) -> Result<Version> {
    let re = Regex::new(&format!(
        r"^(?:{}|{})(?<version>.+)$",
        regex::escape(&config.rc_tag_prefix),
        regex::escape(&config.version_tag_prefix)
    ))?;

    let captures = re
        .captures(tag)
        .ok_or_else(|| ReleaseManagerError::InvalidTag(tag.to_string()))?;

    Version::parse(&captures["version"])
        .map_err(|_| ReleaseManagerError::InvalidTag(tag.to_string()).into())
}

fn bump_version(current: &Version, bump: BumpLevel) -> Version {
    match bump {
        BumpLevel::Major => Version::new(current.major + 1, 0, 0),
        BumpLevel::Minor => Version::new(current.major, current.minor + 1, 0),
    }
}

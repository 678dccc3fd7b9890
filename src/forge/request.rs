#[cfg(test)]
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
/// Repository metadata.
pub struct Repository {
    pub owner: String,
    pub name: String,
    pub full_name: String,
    pub default_branch: String,
    pub html_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[cfg_attr(test, derive(Builder), builder(setter(into), default))]
/// A published (or draft) release.
pub struct Release {
    pub id: u64,
    #[cfg_attr(test, builder(setter(into, strip_option)))]
    pub name: Option<String>,
    pub tag_name: String,
    /// Branch (or sha) the release tag was cut from.
    pub target_commitish: String,
    pub html_url: String,
    pub draft: bool,
    pub prerelease: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
/// A branch and its head commit.
pub struct Branch {
    pub name: String,
    pub sha: String,
    pub protected: bool,
    pub html_url: String,
}

#[derive(Debug, Clone, PartialEq)]
/// Head commit of a branch.
pub struct LatestCommit {
    pub sha: String,
    pub message: String,
    pub html_url: String,
}

#[derive(Debug, Clone)]
/// Request to create a branch reference.
pub struct CreateRefRequest {
    /// Commit the new branch points at.
    pub sha: String,
    /// Short branch name, without `refs/heads/`.
    pub branch: String,
}

#[derive(Debug, Clone, PartialEq)]
/// A reference created on the forge.
pub struct CreatedRef {
    /// Fully qualified ref name, e.g. `refs/heads/rc/1.2.0`.
    pub ref_name: String,
    pub sha: String,
}

#[derive(Debug, Clone)]
/// Request to compare two branches.
pub struct ComparisonRequest {
    pub previous_branch: String,
    pub next_branch: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// Result of comparing two branches.
pub struct Comparison {
    pub ahead_by: u64,
    pub html_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Target state of the next release candidate.
pub struct NextReleaseInfo {
    /// Branch to cut, e.g. `rc/1.2.0`.
    pub rc_branch: String,
    /// Tag to assign, e.g. `rc-1.2.0`.
    pub rc_release_tag: String,
    /// Display name of the release, e.g. `Version 1.2.0`.
    pub release_name: String,
}

#[derive(Debug, Clone)]
/// Request to create a release candidate release.
pub struct CreateReleaseRequest {
    pub next: NextReleaseInfo,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq)]
/// A release created on the forge.
pub struct CreatedRelease {
    pub id: u64,
    pub name: String,
    pub tag_name: String,
    pub html_url: String,
}

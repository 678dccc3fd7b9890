//! Cuts a release candidate: branch from the default branch head, compare
//! it against the previous release and open a prerelease for it.
use async_trait::async_trait;
use log::*;

#[cfg(test)]
use mockall::automock;

use crate::{
    error::ReleaseManagerError,
    forge::{
        manager::ForgeManager,
        request::{
            ComparisonRequest, CreateRefRequest, CreateReleaseRequest,
            NextReleaseInfo, Release,
        },
        util::is_reference_conflict,
    },
    release::types::{RcCreated, ResponseStep},
    result::Result,
};

/// Invoked once a release candidate has been created.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RcCreatedHandler: Send + Sync {
    async fn on_rc_created(&self, created: RcCreated) -> Result<()>;
}

/// Inputs of [`create_rc`].
pub struct CreateRcParams<'a> {
    pub forge: &'a ForgeManager,
    pub default_branch: &'a str,
    /// Release the candidate is compared against; the default branch is
    /// used when there is none.
    pub latest_release: Option<&'a Release>,
    pub next: &'a NextReleaseInfo,
    pub on_created: Option<&'a dyn RcCreatedHandler>,
}

/// Body of the release candidate. Callers may append notes after the
/// trailing separator.
pub fn release_body(comparison_url: &str, ahead_by: u64, ref_name: &str) -> String {
    format!(
        "**Compare** {comparison_url}\n\n**Ahead by** {ahead_by} commits\n\n**Release branch** {ref_name}\n\n---\n\n"
    )
}

/// Runs the release candidate pipeline and returns one step per completed
/// remote operation.
///
/// Any failure aborts the pipeline and discards the steps gathered so far.
/// The only translated failure is an already existing branch, reported as
/// [`ReleaseManagerError::BranchAlreadyExists`].
pub async fn create_rc(params: CreateRcParams<'_>) -> Result<Vec<ResponseStep>> {
    let CreateRcParams {
        forge,
        default_branch,
        latest_release,
        next,
        on_created,
    } = params;

    let mut steps = vec![];

    let latest_commit = forge.get_latest_commit(default_branch).await?;
    steps.push(
        ResponseStep::new(format!(
            "Fetched latest commit from \"{default_branch}\""
        ))
        .secondary(format!("with message \"{}\"", latest_commit.message))
        .link(&latest_commit.html_url),
    );

    let created_ref = match forge
        .create_ref(CreateRefRequest {
            sha: latest_commit.sha.clone(),
            branch: next.rc_branch.clone(),
        })
        .await
    {
        Ok(created_ref) => created_ref,
        Err(err) if is_reference_conflict(&err) => {
            return Err(ReleaseManagerError::branch_already_exists(
                &next.rc_branch,
                forge.repo_link(),
            )
            .into());
        }
        Err(err) => return Err(err),
    };
    steps.push(
        ResponseStep::new("Cut Release Branch")
            .secondary(format!("with ref \"{}\"", created_ref.ref_name)),
    );

    let previous_branch = latest_release
        .map(|r| r.target_commitish.as_str())
        .unwrap_or(default_branch);

    debug!("comparing {previous_branch}...{}", next.rc_branch);

    let comparison = forge
        .get_comparison(ComparisonRequest {
            previous_branch: previous_branch.to_string(),
            next_branch: next.rc_branch.clone(),
        })
        .await?;
    let body = release_body(
        &comparison.html_url,
        comparison.ahead_by,
        &created_ref.ref_name,
    );
    steps.push(
        ResponseStep::new("Fetched commit comparison")
            .secondary(format!("{previous_branch}...{}", next.rc_branch))
            .link(&comparison.html_url),
    );

    let release = forge
        .create_release(CreateReleaseRequest {
            next: next.clone(),
            body,
        })
        .await?;
    steps.push(
        ResponseStep::new(format!(
            "Created Release Candidate \"{}\"",
            release.name
        ))
        .secondary(format!("with tag \"{}\"", next.rc_release_tag))
        .link(&release.html_url),
    );

    if let Some(handler) = on_created {
        handler
            .on_rc_created(RcCreated {
                release_url: release.html_url,
                release_name: release.name,
                comparison_url: comparison.html_url,
                previous_tag: latest_release.map(|r| r.tag_name.clone()),
                created_tag: release.tag_name,
            })
            .await?;
    }

    Ok(steps)
}

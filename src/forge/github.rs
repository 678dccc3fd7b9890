//! Implements the Forge trait for Github
use async_trait::async_trait;
use color_eyre::eyre::eyre;
use log::*;
use octocrab::{Octocrab, models};
use reqwest::StatusCode;
use serde::Deserialize;
use url::Url;

use crate::{
    error::ReleaseManagerError,
    forge::{
        config::{DEFAULT_PAGE_SIZE, RemoteConfig},
        request::{
            Branch, Comparison, ComparisonRequest, CreateRefRequest,
            CreateReleaseRequest, CreatedRef, CreatedRelease, LatestCommit,
            Release, Repository,
        },
        traits::Forge,
    },
    result::Result,
};

#[derive(Debug, Deserialize)]
struct CommitDetail {
    pub message: String,
}

#[derive(Debug, Deserialize)]
struct GithubCommit {
    pub sha: String,
    pub html_url: String,
    pub commit: CommitDetail,
}

#[derive(Debug, Deserialize)]
struct RefObject {
    pub sha: String,
}

#[derive(Debug, Deserialize)]
struct GithubRef {
    #[serde(rename = "ref")]
    pub ref_name: String,
    pub object: RefObject,
}

#[derive(Debug, Deserialize)]
struct BranchCommit {
    pub sha: String,
}

#[derive(Debug, Deserialize)]
struct BranchLinks {
    pub html: String,
}

#[derive(Debug, Deserialize)]
struct GithubBranch {
    pub name: String,
    pub commit: BranchCommit,
    #[serde(default)]
    pub protected: bool,
    #[serde(rename = "_links")]
    pub links: BranchLinks,
}

impl From<models::repos::Release> for Release {
    fn from(release: models::repos::Release) -> Self {
        Self {
            id: release.id.0,
            name: release.name,
            tag_name: release.tag_name,
            target_commitish: release.target_commitish,
            html_url: release.html_url.to_string(),
            draft: release.draft,
            prerelease: release.prerelease,
        }
    }
}

/// GitHub forge implementation using Octocrab for API interactions with
/// commits, references, comparisons, branches and releases.
pub struct Github {
    config: RemoteConfig,
    base_uri: String,
    instance: Octocrab,
}

impl Github {
    /// Create GitHub client with personal access token authentication and API
    /// base URL configuration.
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let base_uri = config.api_base_uri();
        let builder = Octocrab::builder()
            .personal_token(config.token.clone())
            .base_uri(base_uri.clone())?;
        let instance = builder.build()?;

        Ok(Self {
            config,
            base_uri,
            instance,
        })
    }

    /// Builds `<base>/repos/<owner>/<repo>/<path>`, percent-encoding every
    /// segment of `path` so branch names containing `#`, `?` or `%` reach
    /// the API intact. `/` in `path` separates segments.
    fn repo_endpoint(&self, path: &str) -> Result<String> {
        let mut url = Url::parse(&self.base_uri)?;

        url.path_segments_mut()
            .map_err(|_| {
                eyre!("cannot build endpoint from base uri: {}", self.base_uri)
            })?
            .pop_if_empty()
            .extend(["repos", self.config.owner.as_str(), self.config.repo.as_str()])
            .extend(path.split('/'));

        Ok(url.into())
    }
}

#[async_trait]
impl Forge for Github {
    fn remote_config(&self) -> RemoteConfig {
        self.config.clone()
    }

    async fn get_file_content(&self, path: &str) -> Result<Option<String>> {
        let result = self
            .instance
            .repos(&self.config.owner, &self.config.repo)
            .get_content()
            .path(path)
            .send()
            .await;

        match result {
            Err(octocrab::Error::GitHub { source, .. })
                if source.status_code == StatusCode::NOT_FOUND =>
            {
                info!("no file found for path: {path}");
                Ok(None)
            }
            Err(err) => {
                error!("error getting contents for path: {path}: {err}");
                Err(err.into())
            }
            Ok(mut data) => {
                let items = data.take_items();

                match items.first() {
                    None => {
                        info!("no file found for path: {path}");
                        Ok(None)
                    }
                    Some(item) => item.decoded_content().map(Some).ok_or_else(
                        || eyre!("failed to decode file content for path: {path}"),
                    ),
                }
            }
        }
    }

    async fn get_repository(&self) -> Result<Repository> {
        let repo = self
            .instance
            .repos(&self.config.owner, &self.config.repo)
            .get()
            .await?;

        let default_branch = repo.default_branch.ok_or_else(|| {
            ReleaseManagerError::MissingDefaultBranch(self.config.path.clone())
        })?;

        let owner = repo
            .owner
            .map(|o| o.login)
            .unwrap_or_else(|| self.config.owner.clone());

        let html_url = repo
            .html_url
            .map(|u| u.to_string())
            .unwrap_or_else(|| self.config.repo_link_base_url.clone());

        Ok(Repository {
            full_name: repo
                .full_name
                .unwrap_or_else(|| format!("{owner}/{}", repo.name)),
            owner,
            name: repo.name,
            default_branch,
            html_url,
        })
    }

    async fn get_latest_commit(&self, branch: &str) -> Result<LatestCommit> {
        let endpoint = self.repo_endpoint(&format!("commits/{branch}"))?;
        let commit: GithubCommit =
            self.instance.get(endpoint, None::<&()>).await?;

        debug!("latest commit on {branch}: {}", commit.sha);

        Ok(LatestCommit {
            sha: commit.sha,
            message: commit.commit.message,
            html_url: commit.html_url,
        })
    }

    async fn create_ref(&self, req: CreateRefRequest) -> Result<CreatedRef> {
        let endpoint = self.repo_endpoint("git/refs")?;

        let body = serde_json::json!({
          "ref": format!("refs/heads/{}", req.branch),
          "sha": req.sha,
        });

        info!("creating branch {} at {}", req.branch, req.sha);

        let created: GithubRef =
            self.instance.post(endpoint, Some(&body)).await?;

        Ok(CreatedRef {
            ref_name: created.ref_name,
            sha: created.object.sha,
        })
    }

    async fn get_comparison(
        &self,
        req: ComparisonRequest,
    ) -> Result<Comparison> {
        let endpoint = self.repo_endpoint(&format!(
            "compare/{}...{}",
            req.previous_branch, req.next_branch
        ))?;

        let comparison: Comparison =
            self.instance.get(endpoint, None::<&()>).await?;

        Ok(comparison)
    }

    async fn create_release(
        &self,
        req: CreateReleaseRequest,
    ) -> Result<CreatedRelease> {
        info!("creating release {}", req.next.rc_release_tag);

        let release = self
            .instance
            .repos(&self.config.owner, &self.config.repo)
            .releases()
            .create(&req.next.rc_release_tag)
            .name(&req.next.release_name)
            .body(&req.body)
            .target_commitish(&req.next.rc_branch)
            .draft(false)
            .prerelease(true)
            .send()
            .await?;

        Ok(CreatedRelease {
            id: release.id.0,
            name: release
                .name
                .unwrap_or_else(|| req.next.release_name.clone()),
            tag_name: release.tag_name,
            html_url: release.html_url.to_string(),
        })
    }

    async fn get_branch(&self, branch: &str) -> Result<Branch> {
        let endpoint = self.repo_endpoint(&format!("branches/{branch}"))?;
        let branch: GithubBranch =
            self.instance.get(endpoint, None::<&()>).await?;

        Ok(Branch {
            name: branch.name,
            sha: branch.commit.sha,
            protected: branch.protected,
            html_url: branch.links.html,
        })
    }

    async fn list_releases(&self) -> Result<Vec<Release>> {
        let page = self
            .instance
            .repos(&self.config.owner, &self.config.repo)
            .releases()
            .list()
            .per_page(DEFAULT_PAGE_SIZE)
            .send()
            .await?;

        Ok(page.items.into_iter().map(Release::from).collect())
    }

    async fn get_release(&self, id: u64) -> Result<Release> {
        let release = self
            .instance
            .repos(&self.config.owner, &self.config.repo)
            .releases()
            .get(id)
            .await?;

        Ok(Release::from(release))
    }
}

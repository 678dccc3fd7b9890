//! Manager that wraps forge implementations
use log::*;

use crate::{
    config::{Config, DEFAULT_CONFIG_FILE},
    forge::{
        config::RemoteConfig,
        request::{
            Branch, Comparison, ComparisonRequest, CreateRefRequest,
            CreateReleaseRequest, CreatedRef, CreatedRelease, LatestCommit,
            Release, Repository,
        },
        traits::Forge,
    },
    result::Result,
};

pub struct ForgeManager {
    forge: Box<dyn Forge>,
    remote_config: RemoteConfig,
}

impl ForgeManager {
    pub fn new(forge: Box<dyn Forge>) -> Self {
        let remote_config = forge.remote_config();
        Self {
            forge,
            remote_config,
        }
    }

    pub fn remote_config(&self) -> RemoteConfig {
        self.remote_config.clone()
    }

    /// Browser URL of the repository.
    pub fn repo_link(&self) -> &str {
        &self.remote_config.repo_link_base_url
    }

    /// Loads `release-manager.toml` from the default branch, falling back
    /// to defaults when the file does not exist.
    pub async fn load_config(&self) -> Result<Config> {
        if let Some(content) =
            self.forge.get_file_content(DEFAULT_CONFIG_FILE).await?
        {
            debug!("parsing {DEFAULT_CONFIG_FILE}");
            Config::parse(&content)
        } else {
            info!("no configuration found: using default");
            Ok(Config::default())
        }
    }

    pub async fn get_repository(&self) -> Result<Repository> {
        debug!("getting repository: {}", self.remote_config.path);
        self.forge.get_repository().await
    }

    pub async fn get_latest_commit(&self, branch: &str) -> Result<LatestCommit> {
        debug!("getting latest commit for branch: {branch}");
        self.forge.get_latest_commit(branch).await
    }

    pub async fn get_branch(&self, branch: &str) -> Result<Branch> {
        debug!("getting branch: {branch}");
        self.forge.get_branch(branch).await
    }

    pub async fn list_releases(&self) -> Result<Vec<Release>> {
        self.forge.list_releases().await
    }

    pub async fn get_release(&self, id: u64) -> Result<Release> {
        debug!("getting release: {id}");
        self.forge.get_release(id).await
    }

    pub async fn create_ref(&self, req: CreateRefRequest) -> Result<CreatedRef> {
        if self.remote_config.dry_run {
            warn!("dry_run: would create ref: req: {:#?}", req);
            return Ok(CreatedRef {
                ref_name: format!("refs/heads/{}", req.branch),
                sha: req.sha,
            });
        }

        self.forge.create_ref(req).await
    }

    pub async fn get_comparison(
        &self,
        req: ComparisonRequest,
    ) -> Result<Comparison> {
        // the next branch only exists after a real create_ref
        if self.remote_config.dry_run {
            warn!("dry_run: would compare branches: req: {:#?}", req);
            return Ok(Comparison {
                ahead_by: 0,
                html_url: format!(
                    "{}/compare/{}...{}",
                    self.repo_link(),
                    req.previous_branch,
                    req.next_branch
                ),
            });
        }

        self.forge.get_comparison(req).await
    }

    pub async fn create_release(
        &self,
        req: CreateReleaseRequest,
    ) -> Result<CreatedRelease> {
        if self.remote_config.dry_run {
            warn!("dry_run: would create release: req: {:#?}", req);
            return Ok(CreatedRelease {
                id: 0,
                name: req.next.release_name.clone(),
                tag_name: req.next.rc_release_tag.clone(),
                html_url: format!(
                    "{}/releases/tag/{}",
                    self.repo_link(),
                    req.next.rc_release_tag
                ),
            });
        }

        self.forge.create_release(req).await
    }
}

//! Traits related to the remote git forge
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::{
    forge::{
        config::RemoteConfig,
        request::{
            Branch, Comparison, ComparisonRequest, CreateRefRequest,
            CreateReleaseRequest, CreatedRef, CreatedRelease, LatestCommit,
            Release, Repository,
        },
    },
    result::Result,
};

/// Remote operations needed to inspect releases and cut release candidates.
/// Every call is single-shot: implementations must not retry.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Forge: Send + Sync {
    fn remote_config(&self) -> RemoteConfig;
    /// Returns `None` when the path does not exist on the default branch.
    async fn get_file_content(&self, path: &str) -> Result<Option<String>>;
    async fn get_repository(&self) -> Result<Repository>;
    async fn get_latest_commit(&self, branch: &str) -> Result<LatestCommit>;
    /// Fails with the forge's "Reference already exists" error when the
    /// branch is taken.
    async fn create_ref(&self, req: CreateRefRequest) -> Result<CreatedRef>;
    async fn get_comparison(
        &self,
        req: ComparisonRequest,
    ) -> Result<Comparison>;
    async fn create_release(
        &self,
        req: CreateReleaseRequest,
    ) -> Result<CreatedRelease>;
    async fn get_branch(&self, branch: &str) -> Result<Branch>;
    /// Most recent releases first, single page.
    async fn list_releases(&self) -> Result<Vec<Release>>;
    async fn get_release(&self, id: u64) -> Result<Release>;
}

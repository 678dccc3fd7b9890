use log::*;

use crate::{
    config::Config,
    forge::manager::ForgeManager,
    release::{latest::get_latest_release, types::BatchInfo},
    result::Result,
};

/// Fetches repository metadata and the latest release concurrently, then the
/// branch the release was cut from.
///
/// The branch lookup is skipped entirely when there is no release. Any
/// failure is returned as-is and no partial snapshot is produced.
pub async fn get_batch_info(
    forge: &ForgeManager,
    config: &Config,
) -> Result<BatchInfo> {
    let (repository, latest_release) = tokio::try_join!(
        forge.get_repository(),
        get_latest_release(forge, config)
    )?;

    let Some(latest_release) = latest_release else {
        return Ok(BatchInfo {
            repository,
            latest_release: None,
            release_branch: None,
        });
    };

    debug!(
        "fetching branch {} for release {}",
        latest_release.target_commitish, latest_release.tag_name
    );

    let release_branch =
        forge.get_branch(&latest_release.target_commitish).await?;

    Ok(BatchInfo {
        repository,
        latest_release: Some(latest_release),
        release_branch: Some(release_branch),
    })
}

use log::*;

use crate::{
    config::Config,
    forge::{manager::ForgeManager, request::Release},
    result::Result,
};

/// Finds the most recent non-draft release whose tag carries the release
/// candidate or version prefix, then fetches its full record.
pub async fn get_latest_release(
    forge: &ForgeManager,
    config: &Config,
) -> Result<Option<Release>> {
    let releases = forge.list_releases().await?;

    let Some(candidate) = releases
        .into_iter()
        .find(|r| !r.draft && config.is_managed_tag(&r.tag_name))
    else {
        info!("no previous release found");
        return Ok(None);
    };

    debug!("latest release tag: {}", candidate.tag_name);

    let release = forge.get_release(candidate.id).await?;

    Ok(Some(release))
}

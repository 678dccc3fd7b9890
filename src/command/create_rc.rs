//! Release candidate creation command implementation.
use async_trait::async_trait;
use chrono::Local;
use log::*;

use crate::{
    command::common::print_json,
    forge::manager::ForgeManager,
    release::{
        batch_info::get_batch_info,
        candidate::{CreateRcParams, RcCreatedHandler, create_rc},
        next::{BumpLevel, compute_next_release},
        types::RcCreated,
    },
    result::Result,
};

/// Emits the created release candidate as JSON.
struct JsonOutput {
    out_file: Option<String>,
}

#[async_trait]
impl RcCreatedHandler for JsonOutput {
    async fn on_rc_created(&self, created: RcCreated) -> Result<()> {
        print_json(serde_json::json!(created), self.out_file.clone()).await
    }
}

/// Compute the next release candidate from the latest release and cut it.
pub async fn execute(
    forge: &ForgeManager,
    bump: BumpLevel,
    out_file: Option<String>,
) -> Result<()> {
    let config = forge.load_config().await?;
    let info = get_batch_info(forge, &config).await?;

    let next = compute_next_release(
        &config,
        info.latest_release.as_ref(),
        bump,
        Local::now().date_naive(),
    )?;

    info!(
        "cutting {} from {} as {}",
        next.rc_branch, info.repository.default_branch, next.rc_release_tag
    );

    let handler = JsonOutput { out_file };

    let steps = create_rc(CreateRcParams {
        forge,
        default_branch: &info.repository.default_branch,
        latest_release: info.latest_release.as_ref(),
        next: &next,
        on_created: Some(&handler),
    })
    .await?;

    for step in steps {
        info!("{step}");
    }

    Ok(())
}

//! Prints the repository and release snapshot.
use log::*;

use crate::{
    command::common::print_json, forge::manager::ForgeManager,
    release::batch_info::get_batch_info, result::Result,
};

/// Fetch batch info and print it as JSON.
pub async fn execute(
    forge: &ForgeManager,
    out_file: Option<String>,
) -> Result<()> {
    let config = forge.load_config().await?;
    let info = get_batch_info(forge, &config).await?;

    if info.latest_release.is_none() {
        info!("{} has no managed releases yet", info.repository.full_name);
    }

    print_json(serde_json::json!(info), out_file).await
}

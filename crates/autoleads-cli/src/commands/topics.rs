use anyhow::Context;
use autoleads_config::LeadsConfig;
use autoleads_core::TopicListResponse;
use autoleads_store::StoreClient;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `autoleads topics`.
pub async fn handle(config: &LeadsConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let store_config = config.require_store()?;
    let store = StoreClient::new(store_config).context("failed to build store client")?;

    let rows = store.fetch_topics().await;
    output(&TopicListResponse::new(store.input_table(), &rows), flags.format)
}

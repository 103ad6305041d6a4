use anyhow::Context;
use autoleads_config::LeadsConfig;
use autoleads_core::{RunOptions, run_pipeline};
use autoleads_generator::GeneratorClient;
use autoleads_store::StoreClient;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RunArgs;
use crate::output::output;

/// Handle `autoleads run`.
///
/// Missing configuration stops here, before any topic is fetched. After that
/// nothing is fatal: the run always finishes and prints its summary.
pub async fn handle(args: &RunArgs, config: &LeadsConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    config.validate()?;

    let store = StoreClient::new(&config.store).context("failed to build store client")?;
    let generator =
        GeneratorClient::new(&config.api.base_url).context("failed to build generation client")?;

    tracing::info!("==================================================");
    tracing::info!(
        input = store.input_table(),
        output = store.output_table(),
        "autoleads: generation API and store integration"
    );
    tracing::info!("==================================================");

    let summary = run_pipeline(&store, &generator, &store, RunOptions { limit: args.limit }).await;
    output(&summary, flags.format)
}

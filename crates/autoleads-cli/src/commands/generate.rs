use anyhow::Context;
use autoleads_config::LeadsConfig;
use autoleads_core::GenerateResponse;
use autoleads_generator::GeneratorClient;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::GenerateArgs;
use crate::output::output;

/// Handle `autoleads generate <TOPIC>`.
///
/// A failed generation is printed like a success; the exit code stays 0.
pub async fn handle(
    args: &GenerateArgs,
    config: &LeadsConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let api = config.require_api()?;
    if args.topic.is_empty() {
        anyhow::bail!("topic must not be empty");
    }

    let generator = GeneratorClient::new(&api.base_url).context("failed to build generation client")?;
    let generation = generator.generate(&args.topic).await;
    output(&GenerateResponse::new(&args.topic, generation), flags.format)
}

use autoleads_config::LeadsConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    config: &LeadsConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Run(args) => commands::run::handle(&args, config, flags).await,
        Commands::Topics => commands::topics::handle(config, flags).await,
        Commands::Generate(args) => commands::generate::handle(&args, config, flags).await,
    }
}

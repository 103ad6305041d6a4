use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Generate and save a lead for every topic in the input table.
    Run(RunArgs),
    /// List the input table's topics without generating anything.
    Topics,
    /// Call the generation API for a single topic and print the result.
    Generate(GenerateArgs),
}

impl Default for Commands {
    fn default() -> Self {
        Self::Run(RunArgs::default())
    }
}

#[derive(Clone, Debug, Default, Args)]
pub struct RunArgs {
    /// Process at most this many topics
    #[arg(short, long)]
    pub limit: Option<usize>,
}

#[derive(Clone, Debug, Args)]
pub struct GenerateArgs {
    /// Topic text, e.g. an industry name
    pub topic: String,
}

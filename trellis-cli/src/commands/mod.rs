mod artifacts;
mod check;
mod completions;
mod connectors;
mod datasource;
mod name;

use artifacts::ArtifactsCommand;
use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use connectors::ConnectorsCommand;
use datasource::DatasourceCommand;
use eyre::Result;
use name::NameCommand;

/// Extension trait for exiting on project errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for trellis_project::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "trellis")]
#[command(version)]
#[command(about = "Derive and validate artifact names for generated TypeScript projects")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Name(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Artifacts(cmd) => cmd.run(),
            Commands::Datasource(cmd) => cmd.run(),
            Commands::Connectors(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show the names derived from a raw name
    Name(NameCommand),

    /// Validate a name the way the generator prompts would
    Check(CheckCommand),

    /// List generated artifact files in a project directory
    Artifacts(ArtifactsCommand),

    /// Inspect a datasource configuration
    Datasource(DatasourceCommand),

    /// List known connectors
    Connectors(ConnectorsCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use trellis_project::ConnectorRegistry;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct ConnectorsCommand {
    /// JSON file with connectors (defaults to the built-in table)
    #[arg(short, long)]
    file: Option<PathBuf>,
}

impl ConnectorsCommand {
    pub fn run(&self) -> Result<()> {
        let registry = match &self.file {
            Some(path) => ConnectorRegistry::from_path(path).unwrap_or_exit(),
            None => ConnectorRegistry::builtin(),
        };

        println!(
            "{} connector{}:",
            registry.len(),
            if registry.len() == 1 { "" } else { "s" }
        );
        for (name, spec) in registry.iter() {
            println!("  {} (extends {})", name, spec.base_model);
        }

        Ok(())
    }
}

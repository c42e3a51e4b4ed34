use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use trellis_naming::ArtifactType;
use trellis_project::{FsLister, artifact_files};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct ArtifactsCommand {
    /// Artifact kind to list
    #[arg(short, long, default_value = "model")]
    kind: ArtifactType,

    /// Project directory to inspect
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,
}

impl ArtifactsCommand {
    pub fn run(&self) -> Result<()> {
        let files = artifact_files(&self.dir, self.kind, &FsLister).unwrap_or_exit();

        if files.is_empty() {
            println!("No {} artifacts in {}", self.kind, self.dir.display());
            return Ok(());
        }

        println!(
            "{} {} artifact{}:",
            files.len(),
            self.kind,
            if files.len() == 1 { "" } else { "s" }
        );
        for file in &files {
            println!("  {}", file);
        }

        Ok(())
    }
}

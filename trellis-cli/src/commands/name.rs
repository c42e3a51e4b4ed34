use clap::Args;
use eyre::Result;
use trellis_naming::{ArtifactType, DerivedName, datasource_config_file_name};

#[derive(Args)]
pub struct NameCommand {
    /// Raw name to derive from
    name: String,

    /// Artifact kind for the file name
    #[arg(short, long, default_value = "model")]
    kind: ArtifactType,
}

impl NameCommand {
    pub fn run(&self) -> Result<()> {
        let derived = DerivedName::derive(&self.name, self.kind)?;

        println!("class  {}", derived.class_name);
        println!("stem   {}", derived.file_stem);
        println!("file   {}", derived.file_name);
        if self.kind == ArtifactType::DataSource {
            println!(
                "config {}",
                datasource_config_file_name(&derived.class_name)
            );
        }

        Ok(())
    }
}

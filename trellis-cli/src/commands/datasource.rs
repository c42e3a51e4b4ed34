use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use trellis_naming::{Validity, datasource_config_file_name, validate_class_name};
use trellis_project::{ConnectorRegistry, DataSourceConfig, base_model_for};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct DatasourceCommand {
    /// Datasource class name, e.g. DbDatasource
    class_name: String,

    /// Project directory holding the configuration file
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// JSON file with additional connectors
    #[arg(short, long)]
    connectors: Option<PathBuf>,
}

impl DatasourceCommand {
    pub fn run(&self) -> Result<()> {
        if let Validity::Invalid(reason) = validate_class_name(&self.class_name) {
            eprintln!("{}", reason);
            std::process::exit(1);
        }

        let registry = match &self.connectors {
            Some(path) => ConnectorRegistry::from_path(path).unwrap_or_exit(),
            None => ConnectorRegistry::builtin(),
        };
        let config = DataSourceConfig::load(&self.dir, &self.class_name).unwrap_or_exit();

        println!("✓ {}", datasource_config_file_name(&self.class_name));
        println!(
            "  name        {}",
            config.name.as_deref().unwrap_or("(unset)")
        );
        println!(
            "  connector   {}",
            config.connector.as_deref().unwrap_or("(unset)")
        );
        println!("  base model  {}", base_model_for(&config, &registry));

        Ok(())
    }
}

//! Datasource configuration lookup.

use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};
use trellis_naming::datasource_config_file_name;

use crate::error::{Error, Result};

/// Configuration stored in a `<stem>.datasource.config.json` file.
#[derive(Debug, Clone, Deserialize)]
pub struct DataSourceConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub connector: Option<String>,
    /// Connector-specific settings (host, credentials, and the like).
    #[serde(flatten)]
    pub settings: Map<String, Value>,
}

impl DataSourceConfig {
    /// Load the configuration for a datasource class from `dir`.
    ///
    /// The file name follows from the class name by convention, so
    /// `DbDatasource` reads `db.datasource.config.json`. Both read and
    /// parse failures carry the attempted path; a missing config file is a
    /// real error here, unlike a missing artifacts directory.
    pub fn load(dir: &Path, class_name: &str) -> Result<Self> {
        let path = dir.join(datasource_config_file_name(class_name));
        let raw = std::fs::read_to_string(&path).map_err(|source| Error::io(&path, source))?;
        let config = serde_json::from_str(&raw).map_err(|source| Error::json(&path, source))?;
        Ok(config)
    }
}

//! Connector registry.
//!
//! Maps connector names to the base class their generated models extend.
//! The registry is constructed once at startup, either from the built-in
//! table or from a JSON file, and passed by reference to whatever needs a
//! lookup. No global state.

use std::{fmt, path::Path};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{
    datasource::DataSourceConfig,
    error::{Error, Result},
};

/// Base class generated models extend for a given connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum BaseModel {
    /// Persisted records with identity
    Entity,
    /// Key-value stores
    KeyValueModel,
    /// Service-backed sources without persistence
    Model,
}

impl BaseModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            BaseModel::Entity => "Entity",
            BaseModel::KeyValueModel => "KeyValueModel",
            BaseModel::Model => "Model",
        }
    }
}

impl fmt::Display for BaseModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One entry in the connector registry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorSpec {
    pub name: String,
    pub base_model: BaseModel,
}

/// Read-only mapping from connector name to its spec.
///
/// Insertion order is preserved so listings come out in the order entries
/// were declared.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct ConnectorRegistry {
    connectors: IndexMap<String, ConnectorSpec>,
}

impl ConnectorRegistry {
    /// The connectors Trellis knows out of the box.
    pub fn builtin() -> Self {
        let entries = [
            ("memory", BaseModel::Entity),
            ("mysql", BaseModel::Entity),
            ("postgresql", BaseModel::Entity),
            ("oracle", BaseModel::Entity),
            ("mssql", BaseModel::Entity),
            ("db2", BaseModel::Entity),
            ("mongodb", BaseModel::Entity),
            ("couchdb", BaseModel::Entity),
            ("kv-memory", BaseModel::KeyValueModel),
            ("kv-redis", BaseModel::KeyValueModel),
            ("rest", BaseModel::Model),
            ("soap", BaseModel::Model),
            ("openapi", BaseModel::Model),
        ];
        let connectors = entries
            .into_iter()
            .map(|(name, base_model)| {
                let spec = ConnectorSpec {
                    name: name.to_string(),
                    base_model,
                };
                (name.to_string(), spec)
            })
            .collect();
        Self { connectors }
    }

    /// Load a registry from a JSON file mapping connector names to specs.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| Error::io(path, source))?;
        let registry = serde_json::from_str(&raw).map_err(|source| Error::json(path, source))?;
        Ok(registry)
    }

    pub fn get(&self, name: &str) -> Option<&ConnectorSpec> {
        self.connectors.get(name)
    }

    pub fn len(&self) -> usize {
        self.connectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connectors.is_empty()
    }

    /// Iterate entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConnectorSpec)> {
        self.connectors
            .iter()
            .map(|(name, spec)| (name.as_str(), spec))
    }
}

/// Resolve the base model class for a datasource configuration.
///
/// A missing or unrecognized connector falls back to [`BaseModel::Entity`].
pub fn base_model_for(config: &DataSourceConfig, registry: &ConnectorRegistry) -> BaseModel {
    config
        .connector
        .as_deref()
        .and_then(|name| registry.get(name))
        .map(|spec| spec.base_model)
        .unwrap_or(BaseModel::Entity)
}

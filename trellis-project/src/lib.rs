//! Project inspection collaborators for Trellis scaffolding.
//!
//! Everything here touches the filesystem on behalf of the pure naming
//! layer: enumerating already-generated artifacts, reading datasource
//! configuration files, and resolving connectors against an injected
//! registry. Failures carry the attempted path so the CLI can report them
//! without callers re-wrapping.

mod connectors;
mod datasource;
mod error;
mod lister;

// Connector registry
pub use connectors::{BaseModel, ConnectorRegistry, ConnectorSpec, base_model_for};
// Datasource configuration
pub use datasource::DataSourceConfig;
pub use error::{Error, Result};
// Artifact enumeration
pub use lister::{DirectoryLister, FsLister, artifact_files};

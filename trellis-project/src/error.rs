use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for project inspection (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("check that the path exists and is readable"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse '{path}' as JSON")]
    #[diagnostic(code(trellis::invalid_json))]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error carrying the path that was attempted
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }

    /// Create a JSON parse error carrying the offending path
    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Box<Self> {
        Box::new(Error::Json {
            path: path.into(),
            source,
        })
    }
}

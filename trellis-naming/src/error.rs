use thiserror::Error;

/// Errors raised while deriving names from user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("name is required and cannot be empty")]
    EmptyInput,

    /// The input was non-empty but normalized down to nothing, e.g. "--" or "!!!".
    #[error("name '{0}' contains no identifier characters")]
    InvalidInput(String),
}

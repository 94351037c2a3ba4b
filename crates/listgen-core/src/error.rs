use thiserror::Error;

/// Core error type shared across listgen crates.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The field id is not one of the nine declared fields.
    #[error("unknown field: {0}")]
    UnknownField(String),
    /// The mode name or mode/value combination is not accepted.
    #[error("invalid mode: {0}")]
    InvalidMode(String),
}

/// Convenience alias for results returned by listgen crates.
pub type Result<T> = std::result::Result<T, Error>;

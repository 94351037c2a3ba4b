use listgen_core::ValidationReport;
use thiserror::Error;

/// Errors emitted by the generation engine.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// One or more fixed/prefixed fields failed validation; no rows were produced.
    #[error("generation refused: {0}")]
    Rejected(ValidationReport),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("no unused phone number after {0} attempts")]
    Exhausted(u32),
}

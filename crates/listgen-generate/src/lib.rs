//! Row generation engine for listgen.
//!
//! Turns a validated nine-field configuration into a batch of synthetic
//! records and serializes batches to CSV.

pub mod digest;
pub mod engine;
pub mod errors;
pub mod generators;
pub mod model;
pub mod output;

pub use digest::digest;
pub use engine::GenerationEngine;
pub use errors::GenerationError;
pub use model::{Batch, GenerateOptions, GeneratedRow, GenerationReport};

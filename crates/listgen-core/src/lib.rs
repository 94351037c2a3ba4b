//! Core contracts for listgen.
//!
//! Defines the nine output fields, their generation modes, the per-field
//! validators, and the configuration set that carries live validation state.

pub mod error;
pub mod field;
pub mod fieldset;
pub mod validation;

pub use error::{Error, Result};
pub use field::{FieldConfig, FieldId, FieldMode, FieldModeKind};
pub use fieldset::{FieldSet, validate_all};
pub use validation::{
    FieldError, NAME_MAX_CHARS, ValidationIssue, ValidationReport, validate_consent,
    validate_id_card, validate_mobile, validate_name, validate_name_prefix, validate_phone,
};

use std::fmt;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::field::FieldId;

/// Maximum name length, counted in characters.
pub const NAME_MAX_CHARS: usize = 20;

const MOBILE_PATTERN: &str = r"^09[0-9]{8}$";
const PHONE_PATTERN: &str = r"^(09|02)[0-9]{8}$";
const ID_CARD_PATTERN: &str = r"^[A-Za-z0-9]+$";

/// Verdict for a single invalid field value.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum FieldError {
    /// The literal fails the field's shape or length rule.
    #[error("{0}")]
    Format(String),
    /// A phone literal duplicates the fixed mobile number.
    #[error("{0}")]
    Conflict(String),
}

impl FieldError {
    pub fn message(&self) -> &str {
        match self {
            FieldError::Format(message) | FieldError::Conflict(message) => message,
        }
    }
}

pub fn validate_consent(value: &str) -> Result<(), FieldError> {
    if value == "Y" || value == "N" {
        return Ok(());
    }
    Err(FieldError::Format("欄位值須在 \"Y\" 或 \"N\" 內".to_string()))
}

pub fn validate_mobile(value: &str) -> Result<(), FieldError> {
    if is_match(MOBILE_PATTERN, value) {
        return Ok(());
    }
    Err(FieldError::Format(format!(
        "{}須為 09 開頭，數值長度為 10 位數",
        FieldId::Mobile.label()
    )))
}

/// Validate a secondary phone against its shape and the fixed mobile value.
///
/// Shape is checked first, so a malformed duplicate reports the format message.
pub fn validate_phone(value: &str, label: &str, mobile: Option<&str>) -> Result<(), FieldError> {
    if !is_match(PHONE_PATTERN, value) {
        return Err(FieldError::Format(format!(
            "{label}須為 09 或 02 開頭，數值長度為 10 位數"
        )));
    }
    if mobile.is_some_and(|mobile| !mobile.is_empty() && mobile == value) {
        return Err(FieldError::Conflict(format!(
            "{label}不得與{}重複",
            FieldId::Mobile.label()
        )));
    }
    Ok(())
}

pub fn validate_id_card(value: &str) -> Result<(), FieldError> {
    if is_match(ID_CARD_PATTERN, value) {
        return Ok(());
    }
    Err(FieldError::Format(
        "證號只能為大小寫的英文字母和數字".to_string(),
    ))
}

pub fn validate_name(value: &str) -> Result<(), FieldError> {
    if value.chars().count() <= NAME_MAX_CHARS {
        return Ok(());
    }
    Err(FieldError::Format(format!(
        "姓名長度限定 {NAME_MAX_CHARS} 個字以內"
    )))
}

/// A name prefix must be non-empty and obey the name length rule.
pub fn validate_name_prefix(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::Format("姓名開頭不得為空".to_string()));
    }
    validate_name(value)
}

fn is_match(pattern: &str, value: &str) -> bool {
    Regex::new(pattern)
        .map(|re| re.is_match(value))
        .unwrap_or(false)
}

/// One field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub field: FieldId,
    pub label: &'static str,
    pub error: FieldError,
}

impl ValidationIssue {
    pub fn new(field: FieldId, error: FieldError) -> Self {
        Self {
            field,
            label: field.label(),
            error,
        }
    }
}

/// Aggregated validation errors for a configuration, in column order.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Returns true when there are no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn push(&mut self, issue: ValidationIssue) {
        self.errors.push(issue);
    }

    pub fn error_for(&self, field: FieldId) -> Option<&FieldError> {
        self.errors
            .iter()
            .find(|issue| issue.field == field)
            .map(|issue| &issue.error)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|issue| format!("{}: {}", issue.field, issue.error))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

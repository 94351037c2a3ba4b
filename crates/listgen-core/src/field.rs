use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::validation::FieldError;

/// Identifier of an output column.
///
/// The set is closed: every configuration and every generated row carries
/// exactly these nine fields, in the order of [`FieldId::ALL`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    Consent,
    Mobile,
    IdCard,
    Name,
    HashId,
    Phone1,
    Phone2,
    Phone3,
    Phone4,
}

impl FieldId {
    /// Column order used by configuration, rows and CSV export.
    pub const ALL: [FieldId; 9] = [
        FieldId::Consent,
        FieldId::Mobile,
        FieldId::IdCard,
        FieldId::Name,
        FieldId::HashId,
        FieldId::Phone1,
        FieldId::Phone2,
        FieldId::Phone3,
        FieldId::Phone4,
    ];

    /// Secondary phone fields, in generation order.
    pub const PHONES: [FieldId; 4] = [
        FieldId::Phone1,
        FieldId::Phone2,
        FieldId::Phone3,
        FieldId::Phone4,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::Consent => "consent",
            FieldId::Mobile => "mobile",
            FieldId::IdCard => "idCard",
            FieldId::Name => "name",
            FieldId::HashId => "hashId",
            FieldId::Phone1 => "phone1",
            FieldId::Phone2 => "phone2",
            FieldId::Phone3 => "phone3",
            FieldId::Phone4 => "phone4",
        }
    }

    /// Display label, also used as the CSV header.
    pub fn label(self) -> &'static str {
        match self {
            FieldId::Consent => "同意第三方行銷",
            FieldId::Mobile => "手機號碼",
            FieldId::IdCard => "證號",
            FieldId::Name => "姓名",
            FieldId::HashId => "hash證號",
            FieldId::Phone1 => "電話1",
            FieldId::Phone2 => "電話2",
            FieldId::Phone3 => "電話3",
            FieldId::Phone4 => "電話4",
        }
    }

    /// Position of the field within [`FieldId::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// True only for `hashId`, whose value is always derived from `idCard`.
    pub fn is_hash_derived(self) -> bool {
        matches!(self, FieldId::HashId)
    }

    /// Whether `StartsWith` has its own meaning for this field.
    ///
    /// Other fields accept the variant but treat the text as a literal.
    pub fn supports_prefix(self) -> bool {
        matches!(self, FieldId::Name)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldId {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        FieldId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| Error::UnknownField(value.to_string()))
    }
}

/// Mode name without its source text, as it appears in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FieldModeKind {
    Random,
    Fixed,
    StartsWith,
}

impl FieldModeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldModeKind::Random => "random",
            FieldModeKind::Fixed => "fixed",
            FieldModeKind::StartsWith => "starts_with",
        }
    }
}

/// Generation strategy of a field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "snake_case")]
pub enum FieldMode {
    #[default]
    Random,
    /// Use the text verbatim in every row.
    Fixed(String),
    /// Use the text as a prefix joined to a random value with `-`.
    StartsWith(String),
}

impl FieldMode {
    /// Build a mode from its config-file form.
    ///
    /// `Random` ignores `value`; the other kinds require one.
    pub fn from_parts(kind: FieldModeKind, value: Option<String>) -> Result<Self> {
        match (kind, value) {
            (FieldModeKind::Random, _) => Ok(FieldMode::Random),
            (FieldModeKind::Fixed, Some(value)) => Ok(FieldMode::Fixed(value)),
            (FieldModeKind::StartsWith, Some(value)) => Ok(FieldMode::StartsWith(value)),
            (kind, None) => Err(Error::InvalidMode(format!(
                "mode {} requires a value",
                kind.as_str()
            ))),
        }
    }

    pub fn kind(&self) -> FieldModeKind {
        match self {
            FieldMode::Random => FieldModeKind::Random,
            FieldMode::Fixed(_) => FieldModeKind::Fixed,
            FieldMode::StartsWith(_) => FieldModeKind::StartsWith,
        }
    }

    /// Source text of an input-driven mode.
    pub fn source_value(&self) -> Option<&str> {
        match self {
            FieldMode::Random => None,
            FieldMode::Fixed(value) | FieldMode::StartsWith(value) => Some(value.as_str()),
        }
    }

    /// True for modes that read user input and are therefore validated.
    pub fn is_input_active(&self) -> bool {
        !matches!(self, FieldMode::Random)
    }
}

/// Configuration of one output column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldConfig {
    id: FieldId,
    pub mode: FieldMode,
    pub error: Option<FieldError>,
}

impl FieldConfig {
    pub fn new(id: FieldId) -> Self {
        Self {
            id,
            mode: FieldMode::Random,
            error: None,
        }
    }

    pub fn id(&self) -> FieldId {
        self.id
    }

    pub fn label(&self) -> &'static str {
        self.id.label()
    }

    pub fn is_hash_derived(&self) -> bool {
        self.id.is_hash_derived()
    }

    /// Whether this field takes part in validation and the generation precondition.
    pub fn is_validated(&self) -> bool {
        self.mode.is_input_active() && !self.is_hash_derived()
    }
}

use std::collections::BTreeMap;
use std::path::Path;

use listgen_core::{FieldId, FieldMode, FieldModeKind, FieldSet};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{CliError, CliResult};

/// Largest batch the CLI accepts.
pub const MAX_ROWS: u32 = 1000;
pub const DEFAULT_ROWS: u32 = 10;

/// Contents of a `listgen.toml` configuration file.
///
/// ```toml
/// rows = 20
/// seed = 42
///
/// [fields.mobile]
/// mode = "fixed"
/// value = "0912345678"
///
/// [fields.name]
/// mode = "starts_with"
/// value = "QA"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ListConfig {
    /// Number of rows to generate (1-1000).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,
    /// Seed for reproducible batches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Cap on redraws for a single phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_phone_attempts: Option<u32>,
    /// Per-field modes keyed by field id (consent, mobile, idCard, name, phone1..phone4).
    #[serde(default)]
    pub fields: BTreeMap<String, FieldEntry>,
}

/// Mode of one field in the configuration file.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct FieldEntry {
    pub mode: FieldModeKind,
    /// Literal value (`fixed`) or prefix (`starts_with`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl ListConfig {
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> CliResult<Self> {
        let config: ListConfig = toml::from_str(content)?;
        if let Some(rows) = config.rows {
            check_rows(rows)?;
        }
        Ok(config)
    }

    /// Apply every field entry to `fields`, re-validating after each edit.
    ///
    /// Nothing is applied unless every entry resolves to a distinct field.
    pub fn apply(&self, fields: &mut FieldSet) -> CliResult<()> {
        for (id, mode) in self.field_modes()? {
            fields.set_mode(id, mode);
            fields.revalidate();
        }
        Ok(())
    }

    fn field_modes(&self) -> CliResult<Vec<(FieldId, FieldMode)>> {
        let mut modes: Vec<(FieldId, FieldMode)> = Vec::with_capacity(self.fields.len());
        for (key, entry) in &self.fields {
            let id: FieldId = key.parse()?;
            if modes.iter().any(|(seen, _)| *seen == id) {
                return Err(CliError::InvalidConfig(format!(
                    "field '{id}' is configured more than once"
                )));
            }
            modes.push((id, FieldMode::from_parts(entry.mode, entry.value.clone())?));
        }
        Ok(modes)
    }

    /// Snapshot of a field set in config-file form. `hashId` is omitted.
    pub fn from_fields(fields: &FieldSet) -> Self {
        let fields = fields
            .iter()
            .filter(|field| !field.is_hash_derived())
            .map(|field| {
                let entry = FieldEntry {
                    mode: field.mode.kind(),
                    value: field.mode.source_value().map(str::to_string),
                };
                (field.id().as_str().to_string(), entry)
            })
            .collect();
        Self {
            fields,
            ..Self::default()
        }
    }
}

pub fn check_rows(rows: u32) -> CliResult<u32> {
    if (1..=MAX_ROWS).contains(&rows) {
        Ok(rows)
    } else {
        Err(CliError::InvalidConfig(format!(
            "rows must be between 1 and {MAX_ROWS}, got {rows}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use listgen_core::FieldError;

    use super::*;

    #[test]
    fn parses_fields_and_applies_them() {
        let config = ListConfig::parse(
            r#"
rows = 20
seed = 7

[fields.mobile]
mode = "fixed"
value = "0912345678"

[fields.phone1]
mode = "fixed"
value = "0912345678"

[fields.name]
mode = "starts_with"
value = "QA"
"#,
        )
        .expect("parse config");
        assert_eq!(config.rows, Some(20));
        assert_eq!(config.seed, Some(7));

        let mut fields = FieldSet::new();
        config.apply(&mut fields).expect("apply config");
        assert_eq!(
            fields.mode(FieldId::Name),
            &FieldMode::StartsWith("QA".to_string())
        );
        assert!(matches!(
            fields.get(FieldId::Phone1).error,
            Some(FieldError::Conflict(_))
        ));
    }

    #[test]
    fn rejects_unknown_field_and_missing_value() {
        let config = ListConfig::parse("[fields.email]\nmode = \"random\"\n").expect("parse");
        assert!(matches!(
            config.apply(&mut FieldSet::new()),
            Err(CliError::Core(_))
        ));

        let config = ListConfig::parse("[fields.consent]\nmode = \"fixed\"\n").expect("parse");
        assert!(config.apply(&mut FieldSet::new()).is_err());
    }

    #[test]
    fn rejects_field_keys_differing_only_in_case() {
        let config = ListConfig::parse(
            r#"
[fields.idCard]
mode = "fixed"
value = "A123"

[fields.IDCARD]
mode = "fixed"
value = "B456"
"#,
        )
        .expect("parse");
        let mut fields = FieldSet::new();
        assert!(matches!(
            config.apply(&mut fields),
            Err(CliError::InvalidConfig(_))
        ));
        assert_eq!(fields.mode(FieldId::IdCard), &FieldMode::Random);
    }

    #[test]
    fn mode_names_are_exact() {
        let config = "[fields.name]\nmode = \"prefix\"\nvalue = \"QA\"\n";
        assert!(matches!(
            ListConfig::parse(config),
            Err(CliError::TomlDecode(_))
        ));
    }

    #[test]
    fn rejects_out_of_range_rows() {
        assert!(matches!(
            ListConfig::parse("rows = 0"),
            Err(CliError::InvalidConfig(_))
        ));
        assert!(ListConfig::parse("rows = 1001").is_err());
        assert!(ListConfig::parse("rows = 1000").is_ok());
    }

    #[test]
    fn snapshot_round_trips_through_toml() {
        let fields = FieldSet::new()
            .with_mode(FieldId::Consent, FieldMode::Fixed("Y".to_string()))
            .with_mode(FieldId::HashId, FieldMode::Fixed("ignored".to_string()));
        let encoded = toml::to_string_pretty(&ListConfig::from_fields(&fields)).expect("encode");
        assert!(!encoded.contains("hashId"));

        let mut restored = FieldSet::new();
        ListConfig::parse(&encoded)
            .expect("parse")
            .apply(&mut restored)
            .expect("apply");
        assert_eq!(
            restored.mode(FieldId::Consent),
            &FieldMode::Fixed("Y".to_string())
        );
    }
}

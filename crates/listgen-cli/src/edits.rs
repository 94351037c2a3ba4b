use listgen_core::{FieldId, FieldMode, FieldSet};

/// A `FIELD=VALUE` argument from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEdit {
    pub field: FieldId,
    pub value: String,
}

pub fn parse_field(raw: &str) -> Result<FieldId, String> {
    raw.parse().map_err(|err: listgen_core::Error| err.to_string())
}

pub fn parse_edit(raw: &str) -> Result<FieldEdit, String> {
    let (field, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{raw}'"))?;
    Ok(FieldEdit {
        field: parse_field(field)?,
        value: value.to_string(),
    })
}

/// Command-line edits, applied after the config file in this order:
/// `--random`, `--fixed`, `--starts-with`.
#[derive(Debug, Clone, Default)]
pub struct Edits {
    pub random: Vec<FieldId>,
    pub fixed: Vec<FieldEdit>,
    pub starts_with: Vec<FieldEdit>,
}

impl Edits {
    /// Apply each edit and re-validate after it.
    pub fn apply(&self, fields: &mut FieldSet) {
        let random = self.random.iter().map(|&id| (id, FieldMode::Random));
        let fixed = self
            .fixed
            .iter()
            .map(|edit| (edit.field, FieldMode::Fixed(edit.value.clone())));
        let starts_with = self
            .starts_with
            .iter()
            .map(|edit| (edit.field, FieldMode::StartsWith(edit.value.clone())));

        for (id, mode) in random.chain(fixed).chain(starts_with) {
            if id.is_hash_derived() {
                tracing::warn!(field = %id, "hash field is derived from idCard; edit ignored");
                continue;
            }
            fields.set_mode(id, mode);
            fields.revalidate();
        }
    }
}

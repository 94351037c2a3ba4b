use crate::field::{FieldConfig, FieldId, FieldMode};
use crate::validation::{
    FieldError, ValidationIssue, ValidationReport, validate_consent, validate_id_card,
    validate_mobile, validate_name, validate_name_prefix, validate_phone,
};

/// The full nine-field configuration.
///
/// Fields are stored in [`FieldId::ALL`] order, so each id appears exactly
/// once. Edits clear the edited field's error; call [`FieldSet::revalidate`]
/// (or [`validate_all`]) afterwards to settle the error state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSet {
    fields: [FieldConfig; 9],
}

impl Default for FieldSet {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldSet {
    /// All fields in `Random` mode, no errors.
    pub fn new() -> Self {
        Self {
            fields: FieldId::ALL.map(FieldConfig::new),
        }
    }

    pub fn get(&self, id: FieldId) -> &FieldConfig {
        &self.fields[id.index()]
    }

    pub fn mode(&self, id: FieldId) -> &FieldMode {
        &self.get(id).mode
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldConfig> {
        self.fields.iter()
    }

    /// Replace a field's mode and drop its stale error.
    pub fn set_mode(&mut self, id: FieldId, mode: FieldMode) {
        let field = &mut self.fields[id.index()];
        field.mode = mode;
        field.error = None;
    }

    /// Builder form of [`FieldSet::set_mode`].
    pub fn with_mode(mut self, id: FieldId, mode: FieldMode) -> Self {
        self.set_mode(id, mode);
        self
    }

    /// The mobile literal used for phone duplicate checks. Only a `Fixed`
    /// mobile counts; any other mode is treated as absent.
    pub fn fixed_mobile(&self) -> Option<&str> {
        match self.mode(FieldId::Mobile) {
            FieldMode::Fixed(value) => Some(value),
            _ => None,
        }
    }

    /// Compute the current verdict for one field without storing it.
    pub fn check(&self, id: FieldId) -> Result<(), FieldError> {
        let field = self.get(id);
        if !field.is_validated() {
            return Ok(());
        }
        match (&field.mode, id) {
            (FieldMode::Random, _) => Ok(()),
            (FieldMode::StartsWith(prefix), FieldId::Name) => validate_name_prefix(prefix),
            (FieldMode::Fixed(value) | FieldMode::StartsWith(value), id) => match id {
                FieldId::Consent => validate_consent(value),
                FieldId::Mobile => validate_mobile(value),
                FieldId::IdCard => validate_id_card(value),
                FieldId::Name => validate_name(value),
                FieldId::HashId => Ok(()),
                FieldId::Phone1 | FieldId::Phone2 | FieldId::Phone3 | FieldId::Phone4 => {
                    validate_phone(value, id.label(), self.fixed_mobile())
                }
            },
        }
    }

    /// Recompute every field's error in place.
    ///
    /// Returns whether any stored error changed; a second call on the same
    /// configuration always returns `false`.
    pub fn revalidate(&mut self) -> bool {
        let verdicts = FieldId::ALL.map(|id| self.check(id).err());
        let mut changed = false;
        for (field, verdict) in self.fields.iter_mut().zip(verdicts) {
            if field.error != verdict {
                field.error = verdict;
                changed = true;
            }
        }
        changed
    }

    /// Copy of this configuration with every error recomputed.
    pub fn validated(&self) -> FieldSet {
        let mut next = self.clone();
        next.revalidate();
        next
    }

    /// Errors currently stored on validated fields, in column order.
    pub fn report(&self) -> ValidationReport {
        let mut report = ValidationReport::default();
        for field in self.iter().filter(|field| field.is_validated()) {
            if let Some(error) = &field.error {
                report.push(ValidationIssue::new(field.id(), error.clone()));
            }
        }
        report
    }
}

/// Pure validation pass over a configuration.
pub fn validate_all(fields: &FieldSet) -> FieldSet {
    fields.validated()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_set_is_random_and_clean() {
        let fields = FieldSet::new();
        for (field, id) in fields.iter().zip(FieldId::ALL) {
            assert_eq!(field.id(), id);
            assert_eq!(field.mode, FieldMode::Random);
            assert!(field.error.is_none());
        }
        assert!(fields.report().is_ok());
    }

    #[test]
    fn revalidate_is_idempotent() {
        let mut fields = FieldSet::new().with_mode(FieldId::Consent, FieldMode::Fixed("X".into()));
        assert!(fields.revalidate());
        assert!(!fields.revalidate());
        assert!(matches!(
            fields.get(FieldId::Consent).error,
            Some(FieldError::Format(_))
        ));
    }

    #[test]
    fn hash_field_is_never_validated() {
        let fields = FieldSet::new()
            .with_mode(FieldId::HashId, FieldMode::Fixed("not a hash!".into()))
            .validated();
        assert!(fields.get(FieldId::HashId).error.is_none());
        assert!(fields.report().is_ok());
    }
}

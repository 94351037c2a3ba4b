use listgen_core::{FieldError, FieldId, FieldMode, FieldSet, validate_all};

fn fixed(value: &str) -> FieldMode {
    FieldMode::Fixed(value.to_string())
}

#[test]
fn phone_conflicts_with_fixed_mobile() {
    let fields = FieldSet::new()
        .with_mode(FieldId::Mobile, fixed("0912345678"))
        .with_mode(FieldId::Phone1, fixed("0912345678"));
    let fields = validate_all(&fields);

    assert!(fields.get(FieldId::Mobile).error.is_none());
    assert!(matches!(
        fields.get(FieldId::Phone1).error,
        Some(FieldError::Conflict(_))
    ));

    let report = fields.report();
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].field, FieldId::Phone1);
    assert_eq!(report.errors[0].label, "電話1");
}

#[test]
fn random_mobile_is_not_a_conflict_source() {
    let fields = FieldSet::new()
        .with_mode(FieldId::Phone2, fixed("0912345678"))
        .validated();
    assert!(fields.report().is_ok());
}

#[test]
fn prefixed_mobile_is_not_a_conflict_source() {
    let fields = FieldSet::new()
        .with_mode(
            FieldId::Mobile,
            FieldMode::StartsWith("0912345678".to_string()),
        )
        .with_mode(FieldId::Phone1, fixed("0912345678"))
        .validated();
    assert!(fields.get(FieldId::Phone1).error.is_none());
    assert!(fields.report().is_ok());
}

#[test]
fn fixed_phones_are_not_cross_checked() {
    let fields = FieldSet::new()
        .with_mode(FieldId::Phone1, fixed("0223456789"))
        .with_mode(FieldId::Phone2, fixed("0223456789"))
        .validated();
    assert!(fields.report().is_ok());
}

#[test]
fn setting_random_clears_error_immediately() {
    let mut fields = FieldSet::new().with_mode(FieldId::Consent, fixed("maybe"));
    fields.revalidate();
    assert!(fields.get(FieldId::Consent).error.is_some());

    fields.set_mode(FieldId::Consent, FieldMode::Random);
    assert!(fields.get(FieldId::Consent).error.is_none());
    assert!(!fields.revalidate());
    assert!(fields.get(FieldId::Consent).error.is_none());
}

#[test]
fn editing_value_clears_then_reasserts_error() {
    let mut fields = FieldSet::new().with_mode(FieldId::IdCard, fixed("A-1"));
    fields.revalidate();
    assert!(fields.get(FieldId::IdCard).error.is_some());

    fields.set_mode(FieldId::IdCard, fixed("A-2"));
    assert!(fields.get(FieldId::IdCard).error.is_none());
    assert!(fields.revalidate());
    assert!(fields.get(FieldId::IdCard).error.is_some());
}

#[test]
fn changing_mobile_resolves_phone_conflict() {
    let mut fields = FieldSet::new()
        .with_mode(FieldId::Mobile, fixed("0912345678"))
        .with_mode(FieldId::Phone4, fixed("0912345678"));
    fields.revalidate();
    assert!(fields.get(FieldId::Phone4).error.is_some());

    fields.set_mode(FieldId::Mobile, fixed("0987654321"));
    fields.revalidate();
    assert!(fields.get(FieldId::Phone4).error.is_none());
}

#[test]
fn starts_with_on_other_fields_validates_as_literal() {
    let fields = FieldSet::new()
        .with_mode(FieldId::Consent, FieldMode::StartsWith("Y".to_string()))
        .with_mode(FieldId::Mobile, FieldMode::StartsWith("09".to_string()))
        .validated();
    assert!(fields.get(FieldId::Consent).error.is_none());
    assert!(matches!(
        fields.get(FieldId::Mobile).error,
        Some(FieldError::Format(_))
    ));
}

#[test]
fn empty_name_prefix_is_reported() {
    let fields = FieldSet::new()
        .with_mode(FieldId::Name, FieldMode::StartsWith(String::new()))
        .validated();
    assert_eq!(
        fields.report().error_for(FieldId::Name),
        Some(&FieldError::Format("姓名開頭不得為空".to_string()))
    );
}

#[test]
fn validate_all_leaves_input_untouched() {
    let fields = FieldSet::new().with_mode(FieldId::Consent, fixed("X"));
    let validated = validate_all(&fields);
    assert!(fields.get(FieldId::Consent).error.is_none());
    assert!(validated.get(FieldId::Consent).error.is_some());
}

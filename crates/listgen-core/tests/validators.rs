use listgen_core::{
    FieldError, validate_consent, validate_id_card, validate_mobile, validate_name,
    validate_name_prefix, validate_phone,
};

#[test]
fn consent_accepts_only_y_or_n() {
    for value in ["Y", "N"] {
        assert!(validate_consent(value).is_ok(), "{value} should be valid");
    }
    for value in ["", "y", "n", "YES", " Y", "N ", "1"] {
        assert!(
            matches!(validate_consent(value), Err(FieldError::Format(_))),
            "{value:?} should be rejected"
        );
    }
}

#[test]
fn mobile_requires_09_and_ten_digits() {
    assert!(validate_mobile("0912345678").is_ok());
    assert!(validate_mobile("0900000000").is_ok());

    for value in ["0212345678", "091234567", "09123456789", "09abcdefgh", "", "+886912345678"] {
        let err = validate_mobile(value).expect_err("invalid mobile");
        assert_eq!(err.message(), "手機號碼須為 09 開頭，數值長度為 10 位數");
    }
}

#[test]
fn phone_accepts_09_and_02_prefixes() {
    assert!(validate_phone("0912345678", "電話1", None).is_ok());
    assert!(validate_phone("0287654321", "電話1", None).is_ok());
    assert!(validate_phone("0287654321", "電話1", Some("0912345678")).is_ok());

    let err = validate_phone("0312345678", "電話2", None).expect_err("bad prefix");
    assert_eq!(
        err,
        FieldError::Format("電話2須為 09 或 02 開頭，數值長度為 10 位數".to_string())
    );
}

#[test]
fn phone_equal_to_mobile_is_a_conflict() {
    let err = validate_phone("0912345678", "電話3", Some("0912345678")).expect_err("duplicate");
    assert_eq!(
        err,
        FieldError::Conflict("電話3不得與手機號碼重複".to_string())
    );
}

#[test]
fn phone_format_is_checked_before_duplicates() {
    let err = validate_phone("12345", "電話1", Some("12345")).expect_err("malformed duplicate");
    assert!(matches!(err, FieldError::Format(_)));
}

#[test]
fn id_card_allows_letters_and_digits_only() {
    for value in ["A123456789", "abc", "Z", "0000"] {
        assert!(validate_id_card(value).is_ok(), "{value} should be valid");
    }
    for value in ["", "A-123", "A 123", "證號1"] {
        assert!(
            validate_id_card(value).is_err(),
            "{value:?} should be rejected"
        );
    }
}

#[test]
fn name_length_is_counted_in_characters() {
    assert!(validate_name("").is_ok());
    assert!(validate_name(&"陳".repeat(20)).is_ok());
    assert!(validate_name(&"a".repeat(20)).is_ok());

    let err = validate_name(&"陳".repeat(21)).expect_err("too long");
    assert_eq!(err.message(), "姓名長度限定 20 個字以內");
}

#[test]
fn name_prefix_must_not_be_empty() {
    assert!(validate_name_prefix("Test").is_ok());
    assert!(matches!(
        validate_name_prefix(""),
        Err(FieldError::Format(_))
    ));
    assert!(validate_name_prefix(&"x".repeat(21)).is_err());
}

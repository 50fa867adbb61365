use super::*;

#[test]
fn empty_name_is_rejected() {
    assert_eq!(validate_name(""), Err(ValidationError::Empty));
}

#[test]
fn whitespace_name_is_rejected() {
    assert_eq!(validate_name("   \t"), Err(ValidationError::Empty));
}

#[test]
fn name_of_max_length_is_accepted() {
    assert_eq!(validate_name(&"a".repeat(MAX_NAME_LEN)), Ok(()));
}

#[test]
fn name_over_max_length_is_rejected() {
    assert_eq!(
        validate_name(&"a".repeat(101)),
        Err(ValidationError::TooLong { len: 101, max: MAX_NAME_LEN })
    );
}

#[test]
fn length_counts_characters_not_bytes() {
    assert_eq!(validate_name(&"é".repeat(MAX_NAME_LEN)), Ok(()));
}

#[test]
fn safe_name_is_accepted() {
    assert_eq!(validate_name("safe-name_1"), Ok(()));
    assert_eq!(validate_name("Flow"), Ok(()));
    assert_eq!(validate_name("with spaces and (parens)"), Ok(()));
}

#[test]
fn angle_bracket_is_rejected() {
    assert_eq!(validate_name("a<b"), Err(ValidationError::ForbiddenChar('<')));
}

#[test]
fn every_forbidden_char_is_rejected() {
    for ch in FORBIDDEN_NAME_CHARS {
        let name = format!("x{ch}y");
        assert_eq!(validate_name(&name), Err(ValidationError::ForbiddenChar(ch)), "{name}");
    }
}

#[test]
fn error_messages_are_user_facing() {
    assert_eq!(ValidationError::Empty.to_string(), "Diagram name cannot be empty");
    assert_eq!(
        ValidationError::TooLong { len: 150, max: 100 }.to_string(),
        "Diagram name is too long (max 100 characters)"
    );
    assert_eq!(
        ValidationError::ForbiddenChar('?').to_string(),
        "Diagram name contains invalid characters"
    );
}

use super::*;

#[test]
fn password_must_reach_minimum_length() {
    assert_eq!(validate_new_password("short", "short"), Err("Password must be at least 8 characters."));
    assert_eq!(validate_new_password("1234567", "1234567"), Err("Password must be at least 8 characters."));
    assert_eq!(validate_new_password("12345678", "12345678"), Ok(()));
}

#[test]
fn password_length_counts_characters() {
    assert_eq!(validate_new_password("éééééééé", "éééééééé"), Ok(()));
}

#[test]
fn confirmation_must_match() {
    assert_eq!(validate_new_password("longenough", "longenougH"), Err("Passwords do not match."));
}

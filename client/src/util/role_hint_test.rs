use super::*;

#[test]
fn initial_role_uses_hint() {
    assert_eq!(initial_role(Some(Role::Admin)), Role::Admin);
}

#[test]
fn initial_role_defaults_to_client() {
    assert_eq!(initial_role(None), Role::Client);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn read_is_none_without_a_browser() {
    save(Role::Admin);
    assert_eq!(read(), None);
}

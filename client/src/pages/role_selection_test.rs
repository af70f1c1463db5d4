use super::*;

#[test]
fn sign_in_href_carries_role() {
    assert_eq!(sign_in_href(Role::Admin), "/auth?as=admin");
    assert_eq!(sign_in_href(Role::Client), "/auth?as=client");
}

//! Last role picked on the home screen.
//!
//! Only pre-fills the registration form. The backend decides the role an
//! account actually gets, so this is not a security control.

#[cfg(test)]
#[path = "role_hint_test.rs"]
mod role_hint_test;

use super::storage;
use crate::net::types::Role;

/// `localStorage` key holding the role hint.
pub const ROLE_HINT_KEY: &str = "selectedRole";

/// Remember `role` for the next sign-up.
pub fn save(role: Role) {
    storage::set(ROLE_HINT_KEY, role.as_str());
}

/// Read the remembered role. Unknown values read as `None`.
pub fn read() -> Option<Role> {
    storage::get(ROLE_HINT_KEY).as_deref().and_then(Role::parse)
}

/// Role the sign-up form starts with: the hint, else [`Role::Client`].
#[must_use]
pub fn initial_role(hint: Option<Role>) -> Role {
    hint.unwrap_or(Role::Client)
}

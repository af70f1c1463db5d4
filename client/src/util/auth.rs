//! Route gating.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route runs the same decision table through the `Protected`
//! component. The decision is a pure function of the session state, the
//! route's role requirement and the configured redirect targets, so it is
//! re-evaluated on every render and has no side effects of its own.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::config::RedirectTargets;
use crate::net::types::Role;
use crate::state::session::SessionState;

/// Roles allowed to view a protected route. Empty means any signed-in user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoleRequirement {
    roles: Vec<Role>,
}

impl RoleRequirement {
    /// Any authenticated identity.
    #[must_use]
    pub fn any() -> Self {
        Self::default()
    }

    /// Only the listed roles.
    #[must_use]
    pub fn only(roles: &[Role]) -> Self {
        Self { roles: roles.to_vec() }
    }

    #[must_use]
    pub fn permits(&self, role: Role) -> bool {
        self.roles.is_empty() || self.roles.contains(&role)
    }
}

impl From<Vec<Role>> for RoleRequirement {
    fn from(roles: Vec<Role>) -> Self {
        Self { roles }
    }
}

/// Outcome of gating one render of a protected route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session not resolved yet (server render, first client frame).
    Pending,
    Render,
    RedirectTo(String),
}

/// Decide what a protected route renders.
#[must_use]
pub fn evaluate(state: &SessionState, requirement: &RoleRequirement, redirects: &RedirectTargets) -> GuardDecision {
    match state {
        SessionState::Unknown => GuardDecision::Pending,
        SessionState::Unauthenticated => GuardDecision::RedirectTo(redirects.sign_in.clone()),
        SessionState::Authenticated(identity) if !requirement.permits(identity.role) => {
            GuardDecision::RedirectTo(redirects.unauthorized.clone())
        }
        SessionState::Authenticated(_) => GuardDecision::Render,
    }
}

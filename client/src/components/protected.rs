//! Route wrapper applying the session guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every protected route in `app.rs`. The guard decision is recomputed
//! whenever the session signal changes, so signing out on a protected page
//! redirects immediately.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::config::ClientConfig;
use crate::net::types::Role;
use crate::state::session::BrowserSession;
use crate::util::auth::{GuardDecision, RoleRequirement, evaluate};

/// Render `children` only when the session satisfies `roles`. An empty role
/// list admits any signed-in identity.
#[component]
pub fn Protected(#[prop(optional)] roles: Vec<Role>, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<BrowserSession>>();
    let config = expect_context::<ClientConfig>();
    let requirement = RoleRequirement::from(roles);

    let decision = Memo::new(move |_| session.with(|s| evaluate(s.state(), &requirement, &config.redirects)));

    move || match decision.get() {
        GuardDecision::Pending => view! { <div class="route-pending">"Checking your session..."</div> }.into_any(),
        GuardDecision::RedirectTo(path) => view! { <Redirect path=path/> }.into_any(),
        GuardDecision::Render => children().into_any(),
    }
}

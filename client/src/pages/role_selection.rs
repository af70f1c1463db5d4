//! Home screen: choose to continue as an admin or a client.
//!
//! The choice is only a hint for the sign-up form; the account's real role
//! comes from the credential the backend issues.

#[cfg(test)]
#[path = "role_selection_test.rs"]
mod role_selection_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::util::role_hint;

/// Sign-in URL carrying the chosen role.
#[must_use]
pub fn sign_in_href(role: Role) -> String {
    format!("/auth?as={role}")
}

#[component]
pub fn RoleSelectionPage() -> impl IntoView {
    let navigate = use_navigate();

    let choose = move |role: Role| {
        role_hint::save(role);
        navigate(&sign_in_href(role), NavigateOptions::default());
    };
    let choose_admin = choose.clone();
    let choose_client = choose;

    view! {
        <div class="role-page">
            <h1>"AI Support"</h1>
            <p class="role-page__subtitle">"How would you like to continue?"</p>
            <div class="role-page__options">
                <button class="role-card" on:click=move |_| choose_admin(Role::Admin)>
                    <span class="role-card__title">"Administrator"</span>
                    <span class="role-card__body">"Upload knowledge-base documents and review support analytics."</span>
                </button>
                <button class="role-card" on:click=move |_| choose_client(Role::Client)>
                    <span class="role-card__title">"Client"</span>
                    <span class="role-card__body">"Ask the assistant and revisit your past conversations."</span>
                </button>
            </div>
            <a class="role-page__guest" href="/chat">"Continue as guest"</a>
        </div>
    }
}

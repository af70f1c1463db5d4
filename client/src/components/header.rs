//! Top navigation bar.
//!
//! Links are filtered by the session: admins see Documents and Analytics,
//! any signed-in identity sees Chat and Settings. Navigation and account
//! buttons are hidden on the `/auth` screens.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::types::Role;
use crate::state::session::{BrowserSession, SessionState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

/// Navigation entries visible for `state`, in display order.
#[must_use]
pub fn nav_items(state: &SessionState) -> Vec<NavItem> {
    let Some(role) = state.role() else {
        return Vec::new();
    };
    let admin = role == Role::Admin;
    [
        (admin, NavItem { label: "Documents", href: "/upload" }),
        (true, NavItem { label: "Chat", href: "/chat" }),
        (admin, NavItem { label: "Analytics", href: "/analytics" }),
        (true, NavItem { label: "Settings", href: "/settings" }),
    ]
    .into_iter()
    .filter_map(|(visible, item)| visible.then_some(item))
    .collect()
}

/// Sign-in and sign-up screens hide the navigation.
#[must_use]
pub fn is_auth_path(path: &str) -> bool {
    path == "/auth" || path.starts_with("/auth/")
}

#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<RwSignal<BrowserSession>>();
    let location = use_location();
    let navigate = use_navigate();

    let pathname = location.pathname;
    let on_auth_page = move || is_auth_path(&pathname.get());
    let signed_in = move || session.with(BrowserSession::is_authenticated);

    let on_logout = Callback::new(move |()| {
        session.update(BrowserSession::sign_out);
        navigate("/", NavigateOptions::default());
    });

    view! {
        <header class="site-header">
            <A href="/" attr:class="site-header__brand">
                <span class="site-header__title">"AI Support"</span>
                <span class="site-header__subtitle">"Intelligent Assistant"</span>
            </A>

            <Show when=move || !on_auth_page()>
                <nav class="site-header__nav">
                    {move || {
                        let current = pathname.get();
                        session
                            .with(|s| nav_items(s.state()))
                            .into_iter()
                            .map(|item| {
                                let active = current == item.href;
                                view! {
                                    <A href=item.href attr:class="nav-link" class:nav-link--active=active>
                                        {item.label}
                                    </A>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </nav>

                <div class="site-header__account">
                    <Show
                        when=signed_in
                        fallback=|| {
                            view! {
                                <A href="/auth/signup" attr:class="btn btn--primary">"Sign Up"</A>
                                <A href="/auth" attr:class="btn btn--ghost">"Sign In"</A>
                            }
                        }
                    >
                        <button class="btn btn--ghost" on:click=move |_| on_logout.run(())>"Logout"</button>
                    </Show>
                </div>
            </Show>
        </header>
    }
}

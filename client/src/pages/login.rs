//! Email + password sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::api::BrowserApi;
use crate::net::types::Role;
use crate::state::session::BrowserSession;
use crate::util::clock::now_unix;

/// Trimmed email and raw password, or the message to show.
///
/// # Errors
///
/// Returns a user-facing message when either field is empty.
pub fn validate_login(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Subtitle for the `?as=` role chosen on the home screen.
#[must_use]
pub fn sign_in_subtitle(as_role: Option<&str>) -> &'static str {
    match as_role.and_then(Role::parse) {
        Some(Role::Admin) => "Sign in to manage documents and analytics",
        Some(Role::Client) => "Sign in to chat with your support assistant",
        None => "Sign in to your account",
    }
}

/// Hand a freshly issued credential to the session. Returns the signed-in role.
pub(crate) fn adopt_credential(session: RwSignal<BrowserSession>, credential: &str) -> Result<Role, String> {
    match session.try_update(|s| s.sign_in(credential, now_unix())) {
        Some(Ok(identity)) => Ok(identity.role),
        Some(Err(e)) => {
            leptos::logging::warn!("rejected issued credential: {e}");
            Err("The server returned an unusable session. Please try again.".to_owned())
        }
        None => Err("Session is no longer available.".to_owned()),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<BrowserSession>>();
    let api = expect_context::<BrowserApi>();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let subtitle = move || sign_in_subtitle(query.with(|q| q.get("as")).as_deref());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login(&email.get(), &password.get()) {
            Ok(fields) => fields,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let outcome = match api.login(&email_value, &password_value).await {
                Ok(token) => adopt_credential(session, &token.access_token),
                Err(e) => Err(e.to_string()),
            };
            busy.set(false);
            match outcome {
                Ok(role) => navigate(role.landing_path(), NavigateOptions::default()),
                Err(message) => error.set(Some(message)),
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome back"</h1>
                <p class="auth-card__subtitle">{subtitle}</p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label" for="email">"Email Address"</label>
                    <input
                        id="email"
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label class="auth-form__label" for="password">"Password"</label>
                    <input
                        id="password"
                        class="auth-input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    {move || error.get().map(|message| view! { <p class="auth-form__error">{message}</p> })}
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Don't have an account? "
                    <A href="/auth/signup">"Sign up"</A>
                </p>
            </div>
        </div>
    }
}

//! Account registration, with optional Google sign-in.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::login::adopt_credential;
use crate::config::ClientConfig;
use crate::net::api::BrowserApi;
use crate::net::types::{RegisterRequest, Role};
use crate::state::session::BrowserSession;
use crate::util::role_hint;

/// Split a full name at the first space into first and last name.
#[must_use]
pub fn split_full_name(full_name: &str) -> (String, String) {
    let full_name = full_name.trim();
    match full_name.split_once(' ') {
        Some((first, rest)) => (first.to_owned(), rest.trim().to_owned()),
        None => (full_name.to_owned(), String::new()),
    }
}

/// Build the registration payload from raw form input.
///
/// # Errors
///
/// Returns a user-facing message when any field is blank.
pub fn build_registration(full_name: &str, email: &str, password: &str, role: Role) -> Result<RegisterRequest, &'static str> {
    let email = email.trim();
    if full_name.trim().is_empty() || email.is_empty() || password.is_empty() {
        return Err("Please fill all fields.");
    }
    let (first_name, last_name) = split_full_name(full_name);
    Ok(RegisterRequest { first_name, last_name, email: email.to_owned(), password: password.to_owned(), role })
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<RwSignal<BrowserSession>>();
    let api = expect_context::<BrowserApi>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Client);
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    // Storage is browser-only; apply the hint after mount so hydration matches.
    Effect::new(move |_| role.set(role_hint::initial_role(role_hint::read())));

    let google_ref = NodeRef::<leptos::html::Div>::new();
    let has_google = config.google_client_id.is_some();

    #[cfg(feature = "hydrate")]
    {
        let client_id = config.google_client_id.clone();
        let api = api.clone();
        let navigate = navigate.clone();
        Effect::new(move |_| {
            let (Some(client_id), Some(container)) = (client_id.clone(), google_ref.get()) else {
                return;
            };
            let api = api.clone();
            let navigate = navigate.clone();
            let on_credential = move |id_token: String| {
                let api = api.clone();
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    let outcome = match api.google_login(&id_token).await {
                        Ok(token) => adopt_credential(session, &token.access_token),
                        Err(e) => Err(e.to_string()),
                    };
                    match outcome {
                        Ok(role) => navigate(role.landing_path(), NavigateOptions::default()),
                        Err(message) => error.set(Some(message)),
                    }
                });
            };
            if let Err(e) = crate::util::google::render_button(&client_id, &container, on_credential) {
                leptos::logging::warn!("{e}");
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let registration = match build_registration(&full_name.get(), &email.get(), &password.get(), role.get()) {
            Ok(registration) => registration,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);
        notice.set(None);

        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = api.register(&registration).await;
            busy.set(false);
            match result {
                Ok(response) => match response.token() {
                    Some(token) => match adopt_credential(session, token) {
                        Ok(role) => navigate(role.landing_path(), NavigateOptions::default()),
                        Err(message) => error.set(Some(message)),
                    },
                    None => {
                        let message = response.message.unwrap_or_else(|| "Account created. You can sign in now.".to_owned());
                        notice.set(Some(message));
                        navigate("/auth", NavigateOptions::default());
                    }
                },
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create Account"</h1>
                <p class="auth-card__subtitle">"Sign up to get started with AI Support"</p>

                <Show when=move || has_google>
                    <div class="auth-card__federated" node_ref=google_ref></div>
                    <div class="auth-card__divider">"or"</div>
                </Show>

                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label" for="name">"Full Name"</label>
                    <input
                        id="name"
                        class="auth-input"
                        type="text"
                        placeholder="Jane Doe"
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                    />
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
                    <label class="auth-form__label" for="role">"Account type"</label>
                    <select
                        id="role"
                        class="auth-input"
                        prop:value=move || role.get().as_str()
                        on:change=move |ev| {
                            if let Some(parsed) = Role::parse(&event_target_value(&ev)) {
                                role.set(parsed);
                            }
                        }
                    >
                        <option value="client">"Client"</option>
                        <option value="admin">"Administrator"</option>
                    </select>
                    {move || error.get().map(|message| view! { <p class="auth-form__error">{message}</p> })}
                    {move || notice.get().map(|message| view! { <p class="auth-form__notice">{message}</p> })}
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Create Account" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <A href="/auth">"Sign in"</A>
                </p>
            </div>
        </div>
    }
}

//! Account settings: profile, password, theme and sign-out.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::BrowserApi;
use crate::net::types::UserProfile;
use crate::state::session::BrowserSession;
use crate::state::ui::UiState;

pub const MIN_PASSWORD_LEN: usize = 8;

/// Check a new password and its confirmation.
///
/// # Errors
///
/// Returns a user-facing message when the password is too short or the
/// confirmation differs.
pub fn validate_new_password(password: &str, confirmation: &str) -> Result<(), &'static str> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    if password != confirmation {
        return Err("Passwords do not match.");
    }
    Ok(())
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<BrowserSession>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let api = expect_context::<BrowserApi>();
    let navigate = use_navigate();

    let profile = RwSignal::new(None::<UserProfile>);
    let profile_error = RwSignal::new(None::<String>);
    let password = RwSignal::new(String::new());
    let confirmation = RwSignal::new(String::new());
    let password_status = RwSignal::new(None::<Result<String, String>>);
    let saving = RwSignal::new(false);

    {
        let api = api.clone();
        Effect::new(move |_| {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.profile().await {
                    Ok(loaded) => profile.set(Some(loaded)),
                    Err(e) => profile_error.set(Some(e.to_string())),
                }
            });
        });
    }

    let on_change_password = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        let new_password = password.get();
        if let Err(message) = validate_new_password(&new_password, &confirmation.get()) {
            password_status.set(Some(Err(message.to_owned())));
            return;
        }
        saving.set(true);
        password_status.set(None);
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let outcome = match api.update_password(&new_password).await {
                Ok(reply) if !reply.message.is_empty() => Ok(reply.message),
                Ok(_) => Ok("Password updated.".to_owned()),
                Err(e) => Err(e.to_string()),
            };
            if outcome.is_ok() {
                password.set(String::new());
                confirmation.set(String::new());
            }
            password_status.set(Some(outcome));
            saving.set(false);
        });
    };

    let on_sign_out = move |_| {
        session.update(BrowserSession::sign_out);
        navigate("/", NavigateOptions::default());
    };

    view! {
        <div class="settings-page">
            <h1>"Account & Preferences"</h1>

            <section class="settings-card">
                <h2>"User Profile"</h2>
                {move || profile_error.get().map(|e| view! { <p class="settings-card__error">{e}</p> })}
                {move || {
                    profile.get().map(|p| view! {
                        <dl class="profile">
                            <dt>"Full name"</dt>
                            <dd>{p.full_name}</dd>
                            <dt>"Email"</dt>
                            <dd>{p.email}</dd>
                        </dl>
                    })
                }}
            </section>

            <section class="settings-card">
                <h2>"Change Password"</h2>
                <form class="settings-form" on:submit=on_change_password>
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="New password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Confirm new password"
                        prop:value=move || confirmation.get()
                        on:input=move |ev| confirmation.set(event_target_value(&ev))
                    />
                    {move || {
                        password_status.get().map(|status| match status {
                            Ok(message) => view! { <p class="settings-form__ok">{message}</p> }.into_any(),
                            Err(message) => view! { <p class="settings-form__error">{message}</p> }.into_any(),
                        })
                    }}
                    <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                        "Update Password"
                    </button>
                </form>
            </section>

            <section class="settings-card">
                <h2>"Display Preferences"</h2>
                <label class="toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || ui.with(|u| u.dark_mode)
                        on:change=move |_| ui.update(UiState::toggle_dark_mode)
                    />
                    <span>"Dark mode"</span>
                </label>
            </section>

            <section class="settings-card">
                <button class="btn btn--danger" on:click=on_sign_out>"Sign out"</button>
            </section>
        </div>
    }
}

//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides four context values used throughout the tree:
//! `ClientConfig`, the API client, `RwSignal<BrowserSession>` and
//! `RwSignal<UiState>`. The session starts `Unknown` and is resolved from
//! browser storage by a one-shot effect after mount, so server-rendered
//! protected routes show a placeholder instead of redirecting.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Script, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::components::protected::Protected;
use crate::config::ClientConfig;
use crate::net::api::BrowserApi;
use crate::net::types::Role;
use crate::pages::{
    analytics::AnalyticsPage, chat::ChatPage, login::LoginPage, role_selection::RoleSelectionPage,
    settings::SettingsPage, signup::SignupPage, unauthorized::UnauthorizedPage, upload::UploadPage,
};
use crate::state::session::{BrowserSession, SessionProvider};
use crate::state::ui::UiState;
use crate::util::clock::now_unix;
use crate::util::dark_mode;
use crate::util::google::GSI_SCRIPT_URL;
use crate::util::token_store::LocalStorageTokenStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let api = BrowserApi::browser(&config.api_base_url);
    let session: RwSignal<BrowserSession> = RwSignal::new(SessionProvider::new(LocalStorageTokenStore::new()));
    let ui = RwSignal::new(UiState::default());
    let load_gsi = config.google_client_id.is_some();

    provide_context(config);
    provide_context(api);
    provide_context(session);
    provide_context(ui);

    // One-shot: resolve the stored credential and theme once mounted.
    Effect::new(move |_| {
        session.update(|s| {
            s.initialize(now_unix());
        });
        let preferred = UiState::from_preference();
        dark_mode::apply(preferred.dark_mode);
        ui.set(preferred);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/support-desk.css"/>
        <Title text="AI Support"/>
        <Show when=move || load_gsi>
            <Script src=GSI_SCRIPT_URL async_="true" defer="true"/>
        </Show>

        <Router>
            <Header/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=RoleSelectionPage/>
                    <Route path=StaticSegment("auth") view=LoginPage/>
                    <Route path=(StaticSegment("auth"), StaticSegment("signup")) view=SignupPage/>
                    <Route path=StaticSegment("chat") view=ChatPage/>
                    <Route
                        path=StaticSegment("upload")
                        view=|| view! { <Protected roles=vec![Role::Admin]><UploadPage/></Protected> }
                    />
                    <Route
                        path=StaticSegment("analytics")
                        view=|| view! { <Protected roles=vec![Role::Admin]><AnalyticsPage/></Protected> }
                    />
                    <Route
                        path=StaticSegment("settings")
                        view=|| view! { <Protected><SettingsPage/></Protected> }
                    />
                    <Route path=StaticSegment("unauthorized") view=UnauthorizedPage/>
                </Routes>
            </main>
        </Router>
    }
}

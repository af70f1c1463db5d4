//! Terminal screen for signed-in users lacking the route's role.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <div class="unauthorized-page">
            <h1>"Access denied"</h1>
            <p>"Your account does not have access to this page."</p>
            <A href="/">"Back to home"</A>
        </div>
    }
}

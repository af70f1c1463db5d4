//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every application path is server-rendered by the Leptos app; the compiled
//! WASM, JS and CSS live under `/pkg`. The support backend is a separate
//! service that the browser calls directly, so the host exposes no API of its
//! own beyond a health probe.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::HostError;

/// Load Leptos options and build the full router.
///
/// # Errors
///
/// Returns [`HostError::Leptos`] if the Leptos configuration cannot be loaded
/// (missing or malformed `[package.metadata.leptos]` section).
pub fn leptos_app() -> Result<Router, HostError> {
    let conf = get_configuration(None).map_err(|e| HostError::Leptos(e.to_string()))?;
    Ok(app(conf.leptos_options))
}

/// SSR routes for every client route, static assets and the health probe.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);
    let site_root = PathBuf::from(leptos_options.site_root.as_ref());

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options);

    Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

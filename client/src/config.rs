//! Build-time client configuration.
//!
//! Values come from `option_env!` so the WASM bundle carries them without a
//! runtime lookup. `App` resolves one [`ClientConfig`] and provides it through
//! context.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend used when `API_BASE_URL` was not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Where the route guard sends visitors it turns away.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedirectTargets {
    /// Destination for signed-out visitors.
    pub sign_in: String,
    /// Destination for signed-in visitors lacking the required role.
    pub unauthorized: String,
}

impl Default for RedirectTargets {
    fn default() -> Self {
        Self { sign_in: "/auth".to_owned(), unauthorized: "/unauthorized".to_owned() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    /// Google Identity Services client id. Federated sign-in is hidden when absent.
    pub google_client_id: Option<String>,
    pub redirects: RedirectTargets,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}

impl ClientConfig {
    /// Configuration baked in at compile time.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::resolve(option_env!("API_BASE_URL"), option_env!("GOOGLE_CLIENT_ID"))
    }

    /// Normalize raw values: blank entries fall back to defaults and the base
    /// URL loses any trailing slash so endpoint paths can be appended.
    #[must_use]
    pub fn resolve(api_base_url: Option<&str>, google_client_id: Option<&str>) -> Self {
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        let google_client_id = google_client_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_owned);
        Self { api_base_url, google_client_id, redirects: RedirectTargets::default() }
    }
}

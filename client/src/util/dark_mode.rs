//! Theme preference and toggle.
//!
//! The preference is stored as a JSON boolean under [`THEME_KEY`] and mirrored
//! onto the `<html>` element as `data-theme="dark|light"`. With nothing stored,
//! the system `prefers-color-scheme` decides. Server rendering always starts
//! light; the browser applies the real value after hydration.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use super::storage;

/// `localStorage` key for the theme preference.
pub const THEME_KEY: &str = "support_desk_dark";

/// Stored preference, else the system preference.
pub fn read_preference() -> bool {
    storage::load_json::<bool>(THEME_KEY).unwrap_or_else(system_prefers_dark)
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Attribute value written to `<html data-theme>`.
#[must_use]
pub const fn theme_name(enabled: bool) -> &'static str {
    if enabled { "dark" } else { "light" }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            if let Err(e) = el.set_attribute("data-theme", theme_name(enabled)) {
                leptos::logging::warn!("failed to apply theme: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Flip the theme, apply it and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    storage::save_json(THEME_KEY, &next);
    next
}

//! Browser `localStorage` access.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every persisted entry (credential, role hint, theme) goes through these
//! helpers so the hydrate-only web-sys glue lives in one place. Outside the
//! browser (SSR, native tests) reads return `None` and writes are no-ops.

use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the raw string stored under `key`.
pub fn get(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Store `value` under `key`, overwriting any previous value.
pub fn set(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            leptos::logging::warn!("localStorage unavailable; dropping write to {key}");
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            leptos::logging::warn!("localStorage write to {key} failed: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Remove `key`. Removing a missing key is a no-op.
pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            if let Err(e) = storage.remove_item(key) {
                leptos::logging::warn!("localStorage remove of {key} failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

/// Load a JSON value stored under `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = get(key)?;
    serde_json::from_str(&raw).ok()
}

/// Save `value` as JSON under `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => set(key, &raw),
        Err(e) => leptos::logging::warn!("failed to encode {key}: {e}"),
    }
}

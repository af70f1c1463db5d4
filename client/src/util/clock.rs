//! Wall-clock seconds for credential expiry checks.
//!
//! `std::time::SystemTime` is unavailable on `wasm32-unknown-unknown`, so the
//! browser build reads `Date.now()` instead.

/// Current time in whole seconds since the Unix epoch.
pub fn now_unix() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let secs = (js_sys::Date::now() / 1000.0).floor() as i64;
        secs
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
    }
}

//! Host listen address.
//!
//! Leptos options (site root, output name) come from
//! `[package.metadata.leptos]` through `get_configuration`; this module only
//! resolves where the host listens.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::HostError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostConfig {
    pub host: String,
    pub port: u16,
}

impl HostConfig {
    /// Read `HOST` and `PORT` from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::InvalidPort`] when `PORT` is set but not a port number.
    pub fn from_env() -> Result<Self, HostError> {
        let host = std::env::var("HOST").ok();
        let port = std::env::var("PORT").ok();
        Self::resolve(host.as_deref(), port.as_deref())
    }

    /// Apply defaults to blank or missing values.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::InvalidPort`] when `port` does not parse as `u16`.
    pub fn resolve(host: Option<&str>, port: Option<&str>) -> Result<Self, HostError> {
        let host = host.map(str::trim).filter(|h| !h.is_empty()).unwrap_or(DEFAULT_HOST).to_owned();
        let port = match port.map(str::trim).filter(|p| !p.is_empty()) {
            None => DEFAULT_PORT,
            Some(raw) => raw
                .parse()
                .map_err(|source| HostError::InvalidPort { value: raw.to_owned(), source })?,
        };
        Ok(Self { host, port })
    }

    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

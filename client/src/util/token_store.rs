//! Credential slot.
//!
//! DESIGN
//! ======
//! The bearer credential is one raw string. Consumers depend on the
//! [`TokenStore`] trait instead of touching storage directly, so the session
//! provider and API client can run against [`MemoryTokenStore`] in tests and
//! against [`LocalStorageTokenStore`] in the browser. No validation happens
//! here.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::sync::{Arc, PoisonError, RwLock};

use super::storage;

/// `localStorage` key holding the bearer credential.
pub const TOKEN_KEY: &str = "token";

/// Single-slot credential persistence.
pub trait TokenStore {
    /// Overwrite the stored credential.
    fn save(&self, credential: &str);
    /// Current credential, if any.
    fn read(&self) -> Option<String>;
    /// Remove the credential. Idempotent.
    fn clear(&self);
}

/// Browser `localStorage` slot under [`TOKEN_KEY`].
///
/// During server rendering there is no storage, so the slot always reads
/// empty and writes are dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocalStorageTokenStore {
    key: &'static str,
}

impl LocalStorageTokenStore {
    #[must_use]
    pub const fn new() -> Self {
        Self { key: TOKEN_KEY }
    }
}

impl Default for LocalStorageTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn save(&self, credential: &str) {
        storage::set(self.key, credential);
    }

    fn read(&self) -> Option<String> {
        storage::get(self.key).filter(|value| !value.is_empty())
    }

    fn clear(&self) {
        storage::remove(self.key);
    }
}

/// In-memory slot. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    slot: Arc<RwLock<Option<String>>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `credential`.
    #[must_use]
    pub fn with_credential(credential: impl Into<String>) -> Self {
        Self { slot: Arc::new(RwLock::new(Some(credential.into()))) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn save(&self, credential: &str) {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = Some(credential.to_owned());
    }

    fn read(&self) -> Option<String> {
        self.slot.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn clear(&self) {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds one [`SessionProvider`] over the browser token store, wraps it
//! in an `RwSignal` and provides it through context. Route guards, the header
//! and the sign-in/sign-up/settings pages read it from there; nothing else
//! mutates it.
//!
//! LIFECYCLE
//! =========
//! `Unknown` until [`SessionProvider::initialize`] runs once after mount,
//! then `Authenticated` or `Unauthenticated`. Only sign-in and sign-out move it
//! afterwards. Storage is never re-polled: a credential written or removed by
//! another tab is only observed on the next application load.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::credential::{self, DecodeError};
use crate::net::types::{IdentityClaim, Role};
use crate::util::token_store::{LocalStorageTokenStore, TokenStore};

/// The application's current belief about who is signed in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Storage has not been read yet.
    #[default]
    Unknown,
    Authenticated(IdentityClaim),
    Unauthenticated,
}

impl SessionState {
    #[must_use]
    pub fn identity(&self) -> Option<&IdentityClaim> {
        match self {
            Self::Authenticated(identity) => Some(identity),
            Self::Unknown | Self::Unauthenticated => None,
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.identity().map(|identity| identity.role)
    }
}

/// Why a freshly issued credential was refused.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("credential could not be decoded: {0}")]
    Decode(#[from] DecodeError),
    #[error("credential expired at {expires_at}")]
    Expired { expires_at: i64 },
}

/// Owns the session state machine and the credential store behind it.
#[derive(Clone, Debug)]
pub struct SessionProvider<S> {
    store: S,
    state: SessionState,
}

/// Session provider used by the running application.
pub type BrowserSession = SessionProvider<LocalStorageTokenStore>;

impl<S: TokenStore> SessionProvider<S> {
    /// Provider in the `Unknown` state. Nothing is read until `initialize`.
    pub fn new(store: S) -> Self {
        Self { store, state: SessionState::Unknown }
    }

    /// Resolve the stored credential. Runs once; later calls return the
    /// already resolved state untouched.
    ///
    /// A credential that fails to decode or is not live at `now` is removed
    /// from the store and the session becomes `Unauthenticated`. Neither case
    /// is reported to the user.
    pub fn initialize(&mut self, now: i64) -> &SessionState {
        if self.state != SessionState::Unknown {
            return &self.state;
        }
        self.state = match self.store.read() {
            None => SessionState::Unauthenticated,
            Some(raw) => match credential::decode(&raw) {
                Ok(claim) if credential::is_live(&claim, now) => SessionState::Authenticated(claim),
                Ok(claim) => {
                    leptos::logging::log!("stored credential expired at {}; signing out", claim.expires_at);
                    self.store.clear();
                    SessionState::Unauthenticated
                }
                Err(e) => {
                    leptos::logging::warn!("discarding undecodable credential: {e}");
                    self.store.clear();
                    SessionState::Unauthenticated
                }
            },
        };
        &self.state
    }

    /// Adopt a credential just issued by login, registration or federated
    /// login. Nothing is persisted unless the credential decodes and is live.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] when the credential is malformed or already
    /// expired; the current state is left unchanged.
    pub fn sign_in(&mut self, raw: &str, now: i64) -> Result<IdentityClaim, SessionError> {
        let claim = credential::decode(raw)?;
        if !credential::is_live(&claim, now) {
            return Err(SessionError::Expired { expires_at: claim.expires_at });
        }
        self.store.save(raw);
        self.state = SessionState::Authenticated(claim.clone());
        Ok(claim)
    }

    /// Clear the credential and become `Unauthenticated`, from any state.
    pub fn sign_out(&mut self) {
        self.store.clear();
        self.state = SessionState::Unauthenticated;
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn identity(&self) -> Option<&IdentityClaim> {
        self.state.identity()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }
}

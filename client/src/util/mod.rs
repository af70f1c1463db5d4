//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, clock, file
//! pickers, third-party scripts) from page and component logic to improve
//! reuse and testability.

pub mod auth;
pub mod clock;
pub mod dark_mode;
pub mod files;
pub mod google;
pub mod markdown;
pub mod role_hint;
pub mod storage;
pub mod token_store;

//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (API calls, form state) and
//! delegates pure logic to `state` and `util`. Role gating happens in
//! `components::protected`, never inside a page.

pub mod analytics;
pub mod chat;
pub mod login;
pub mod role_selection;
pub mod settings;
pub mod signup;
pub mod unauthorized;
pub mod upload;

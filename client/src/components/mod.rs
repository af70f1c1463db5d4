//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render application chrome and route gating while reading shared
//! state from Leptos context providers.

pub mod header;
pub mod protected;

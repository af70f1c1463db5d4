//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `chat`, `upload`, `analytics`, `ui`)
//! so pages and components depend on small focused models. All of it is
//! plain data; pages wrap it in signals.

pub mod analytics;
pub mod chat;
pub mod session;
pub mod ui;
pub mod upload;

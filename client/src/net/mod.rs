//! Networking: credential decoding, the REST client and its wire types.
//!
//! SYSTEM CONTEXT
//! ==============
//! `credential` turns the stored bearer token into an identity claim, `api`
//! issues backend calls through a `transport`, and `types` defines the shared
//! wire schema.

pub mod api;
pub mod credential;
pub mod transport;
pub mod types;

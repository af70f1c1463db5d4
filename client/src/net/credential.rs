//! Structural decoding of bearer credentials.
//!
//! TRUST BOUNDARY
//! ==============
//! Credentials are JWTs signed by the backend. This module only base64url-decodes
//! the payload segment; it never verifies the signature. A decoded claim may
//! drive what the UI renders, but it grants nothing: every protected request is
//! authorized by the backend, which alone holds the signing key.

#[cfg(test)]
#[path = "credential_test.rs"]
mod credential_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use super::types::IdentityClaim;

/// The credential could not be parsed as a signed-token structure.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("expected 3 dot-separated segments, found {0}")]
    Segments(usize),
    #[error("payload is not base64url: {0}")]
    Encoding(#[from] base64::DecodeError),
    #[error("payload is not a valid claim set: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Decode the identity claim embedded in `credential`.
///
/// # Errors
///
/// Returns [`DecodeError`] when the credential does not have three segments,
/// the payload is not base64url, or the payload JSON lacks a `sub`, a known
/// `role`, or a numeric `exp`.
pub fn decode(credential: &str) -> Result<IdentityClaim, DecodeError> {
    let segments: Vec<&str> = credential.trim().split('.').collect();
    if segments.len() != 3 {
        return Err(DecodeError::Segments(segments.len()));
    }
    let payload = URL_SAFE_NO_PAD.decode(segments[1].trim_end_matches('='))?;
    Ok(serde_json::from_slice(&payload)?)
}

/// True iff the claim expired strictly before `now` (seconds since epoch).
#[must_use]
pub fn is_expired(claim: &IdentityClaim, now: i64) -> bool {
    claim.expires_at < now
}

/// True iff the claim is still in the future at `now`.
///
/// Stricter than `!is_expired`: a claim expiring exactly at `now` is no longer
/// live, and session resolution discards it.
#[must_use]
pub fn is_live(claim: &IdentityClaim, now: i64) -> bool {
    claim.expires_at > now
}

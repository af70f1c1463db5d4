use base64::Engine as _;

use super::*;
use crate::net::types::Role;

fn token_with_payload(payload: &str) -> String {
    format!("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.{}.c2ln", URL_SAFE_NO_PAD.encode(payload))
}

// =============================================================
// decode
// =============================================================

#[test]
fn decode_reads_subject_role_and_expiry() {
    let token = token_with_payload(r#"{"sub":"u2","role":"admin","exp":1900000000}"#);
    let claim = decode(&token).unwrap();
    assert_eq!(claim.subject, "u2");
    assert_eq!(claim.role, Role::Admin);
    assert_eq!(claim.expires_at, 1_900_000_000);
}

#[test]
fn decode_ignores_extra_claims() {
    let token = token_with_payload(r#"{"sub":"u1","role":"client","exp":10,"iat":1,"email":"a@b.c"}"#);
    assert_eq!(decode(&token).unwrap().role, Role::Client);
}

#[test]
fn decode_tolerates_padded_payload() {
    let payload = base64::engine::general_purpose::URL_SAFE.encode(r#"{"sub":"u1","role":"client","exp":10}"#);
    let token = format!("h.{payload}.s");
    assert_eq!(decode(&token).unwrap().subject, "u1");
}

#[test]
fn decode_rejects_wrong_segment_count() {
    assert!(matches!(decode("not-a-token"), Err(DecodeError::Segments(1))));
    assert!(matches!(decode("a.b"), Err(DecodeError::Segments(2))));
    assert!(matches!(decode("a.b.c.d"), Err(DecodeError::Segments(4))));
}

#[test]
fn decode_rejects_non_base64_payload() {
    assert!(matches!(decode("h.***.s"), Err(DecodeError::Encoding(_))));
}

#[test]
fn decode_rejects_non_json_payload() {
    let token = token_with_payload("hello");
    assert!(matches!(decode(&token), Err(DecodeError::Payload(_))));
}

#[test]
fn decode_rejects_missing_fields() {
    let token = token_with_payload(r#"{"sub":"u1","role":"client"}"#);
    assert!(matches!(decode(&token), Err(DecodeError::Payload(_))));
}

#[test]
fn decode_rejects_unknown_role() {
    let token = token_with_payload(r#"{"sub":"u1","role":"root","exp":10}"#);
    assert!(matches!(decode(&token), Err(DecodeError::Payload(_))));
}

#[test]
fn decode_floors_fractional_expiry() {
    let token = token_with_payload(r#"{"sub":"u1","role":"client","exp":1900000000.5}"#);
    let claim = decode(&token).unwrap();
    assert_eq!(claim.expires_at, 1_900_000_000);
    assert!(is_live(&claim, 1_899_999_999));
}

#[test]
fn decode_rejects_expiry_beyond_i64() {
    let token = token_with_payload(r#"{"sub":"u1","role":"client","exp":1e30}"#);
    assert!(matches!(decode(&token), Err(DecodeError::Payload(_))));
}

// =============================================================
// expiry
// =============================================================

#[test]
fn is_expired_is_strictly_before_now() {
    let claim = IdentityClaim { subject: "u".to_owned(), role: Role::Client, expires_at: 100 };
    assert!(is_expired(&claim, 101));
    assert!(!is_expired(&claim, 100));
    assert!(!is_expired(&claim, 99));
}

#[test]
fn is_live_requires_future_expiry() {
    let claim = IdentityClaim { subject: "u".to_owned(), role: Role::Client, expires_at: 100 };
    assert!(is_live(&claim, 99));
    assert!(!is_live(&claim, 100));
    assert!(!is_live(&claim, 101));
}

//! Bearer-token construction for the completion provider.
//!
//! The provider authenticates calls with a compact three-segment token
//! derived from the account credential (`"<id>.<secret>"`): a JSON header
//! and claim set, each base64url-encoded, joined by `.` and signed with
//! HMAC-SHA256 under the secret half of the credential.
//!
//! Tokens are valid for ten minutes and built fresh for every outbound
//! call — none is ever cached or reused, so there is no staleness window
//! to reason about.  The relay only produces tokens; validity is enforced
//! by the provider.

use std::time::SystemTime;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha256;

use crate::error::TokenError;

/// Lifetime of a signed token in seconds.
const TOKEN_TTL_SECS: u64 = 600;

type HmacSha256 = Hmac<Sha256>;

/// Claim set carried by the provider bearer token.
#[derive(Serialize)]
struct TokenClaims<'a> {
    api_key: &'a str,
    exp: u64,
    iat: u64,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Sign a fresh bearer token from the provider credential.
///
/// The credential is split on its first `.` into a key id and a signing
/// secret; the id becomes the `api_key` claim and the secret keys the
/// HMAC.  Fails with [`TokenError::MalformedCredential`] when either half
/// is missing or empty.
pub fn sign_bearer_token(credential: &str) -> Result<String, TokenError> {
    let issued_at = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .expect("system clock before epoch")
        .as_secs();
    sign_at(credential, issued_at)
}

/// Sign with an explicit issuance time.
///
/// The token is byte-identical for a fixed `(credential, issued_at)` pair.
fn sign_at(credential: &str, issued_at: u64) -> Result<String, TokenError> {
    let (id, secret) = credential
        .split_once('.')
        .filter(|(id, secret)| !id.is_empty() && !secret.is_empty())
        .ok_or(TokenError::MalformedCredential)?;

    let header = serde_json::json!({
        "alg": "HS256",
        "purpose": "SIGN",
    });
    let claims = TokenClaims {
        api_key: id,
        exp: issued_at + TOKEN_TTL_SECS,
        iat: issued_at,
    };

    let encoded_header = URL_SAFE_NO_PAD.encode(serde_json::to_string(&header)?);
    let encoded_claims = URL_SAFE_NO_PAD.encode(serde_json::to_string(&claims)?);
    let signing_input = format!("{encoded_header}.{encoded_claims}");

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| TokenError::SigningFailure(e.to_string()))?;
    mac.update(signing_input.as_bytes());
    let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

    Ok(format!("{signing_input}.{signature}"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

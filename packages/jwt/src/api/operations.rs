//! JWT Core Operations - Sign, Verify and Decode
//!
//! `sign` and `verify` read the system clock once per call and delegate to
//! `sign_at` / `verify_at`, which take the clock reading explicitly.

use super::algorithms::{decode_header_unverified, decode_unverified, sign_jwt, verify_jwt};
use super::claims::Claims;
use super::keys::{DecodingKey, EncodingKey};
use crate::error::JwtResult;
use crate::options::{SignOptions, VerifyOptions};
use crate::types::Header;
use serde::Serialize;

/// Current unix time in whole seconds
#[inline]
fn unix_now() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Sign `claims` into a compact token
///
/// `claims` must serialize to a JSON object. `iat` is set to the current
/// time; `exp`, `nbf`, `aud`, `iss` and `sub` are written from `options`
/// when supplied and replace any value of the same name in `claims`.
///
/// # Errors
///
/// - [`JwtError::InvalidClaims`](crate::JwtError::InvalidClaims) if `claims`
///   is not an object or a computed time claim overflows
/// - [`JwtError::InvalidTimespan`](crate::JwtError::InvalidTimespan) for an
///   unparseable `expiresIn` / `notBefore`
/// - [`JwtError::InvalidKey`](crate::JwtError::InvalidKey) if `key` does not
///   belong to `options.algorithm`
pub fn sign<C: Serialize + ?Sized>(
    claims: &C,
    key: &EncodingKey,
    options: &SignOptions,
) -> JwtResult<String> {
    sign_at(claims, key, options, unix_now())
}

/// Sign `claims` as if the current unix time were `now`
///
/// # Errors
///
/// Same as [`sign`].
pub fn sign_at<C: Serialize + ?Sized>(
    claims: &C,
    key: &EncodingKey,
    options: &SignOptions,
    now: i64,
) -> JwtResult<String> {
    let claims = Claims::from_serializable(claims)?;
    sign_jwt(claims, key, options, now)
}

/// Verify a compact token and return its claims
///
/// Checks run in order: structure, decoding, algorithm, signature, `exp`,
/// `nbf`, `iat`, audience, issuer, subject. The first failure is returned.
///
/// # Errors
///
/// Any [`JwtError`](crate::JwtError) variant describing the first failed check.
pub fn verify(token: &str, key: &DecodingKey, options: &VerifyOptions) -> JwtResult<Claims> {
    verify_at(token, key, options, unix_now())
}

/// Verify a compact token as if the current unix time were `now`
///
/// # Errors
///
/// Same as [`verify`].
pub fn verify_at(
    token: &str,
    key: &DecodingKey,
    options: &VerifyOptions,
    now: i64,
) -> JwtResult<Claims> {
    verify_jwt(token, key, options, now)
}

/// Read a token's claims WITHOUT verifying it
///
/// Neither the signature nor any claim is checked, and the signature
/// segment may be missing or garbage. The result must never be treated as
/// authenticated; use [`verify`] for that.
///
/// # Errors
///
/// [`JwtError::MalformedToken`](crate::JwtError::MalformedToken) if the token
/// has fewer than 2 segments or the payload cannot be decoded.
pub fn decode(token: &str) -> JwtResult<Claims> {
    decode_unverified(token)
}

/// Read a token's header WITHOUT verifying it
///
/// Useful for choosing a key by `kid` before calling [`verify`].
///
/// # Errors
///
/// [`JwtError::MalformedToken`](crate::JwtError::MalformedToken) for a token
/// with fewer than 2 segments or an undecodable header, and
/// [`JwtError::UnsupportedAlgorithm`](crate::JwtError::UnsupportedAlgorithm)
/// for an unknown `alg`.
pub fn decode_header(token: &str) -> JwtResult<Header> {
    decode_header_unverified(token)
}

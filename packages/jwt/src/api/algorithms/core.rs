//! Token signing and verification protocol
//!
//! Verification runs in a fixed order and stops at the first failure:
//! structure, decoding, algorithm allow-list, signature, time claims,
//! identity claims. Nothing inside the claims is trusted before the
//! signature stage passes.

use super::hmac::{sign_hs256, verify_hs256};
use super::rsa::{sign_rs256, verify_rs256};
use super::utils::{base64_url_decode, base64_url_encode};
use crate::algorithms::Algorithm;
use crate::api::claims::validation::validate_time_claims;
use crate::api::claims::validator::IdentityExpectations;
use crate::api::claims::{Claims, ReservedClaims};
use crate::api::keys::{DecodingKey, EncodingKey};
use crate::error::{JwtError, JwtResult};
use crate::options::{SignOptions, VerifyOptions};
use crate::timespan;
use crate::types::{Header, RawHeader};

/// The three encoded segments of a compact token
struct Segments<'a> {
    header: &'a str,
    claims: &'a str,
    signature: &'a str,
}

impl<'a> Segments<'a> {
    fn split(token: &'a str) -> JwtResult<Self> {
        let mut parts = token.split('.');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(header), Some(claims), Some(signature), None) => Ok(Self {
                header,
                claims,
                signature,
            }),
            _ => Err(JwtError::malformed("token must have exactly 3 segments")),
        }
    }

    /// The exact bytes the signature covers: the encoded segments as received
    fn signing_input(&self) -> String {
        format!("{}.{}", self.header, self.claims)
    }
}

fn decode_header_segment(segment: &str) -> JwtResult<RawHeader> {
    let bytes =
        base64_url_decode(segment).map_err(|_| JwtError::malformed("invalid header encoding"))?;
    serde_json::from_slice(&bytes).map_err(|_| JwtError::malformed("invalid header JSON"))
}

fn decode_claims_segment(segment: &str) -> JwtResult<Claims> {
    let bytes =
        base64_url_decode(segment).map_err(|_| JwtError::malformed("invalid payload encoding"))?;
    serde_json::from_slice(&bytes).map_err(|_| JwtError::malformed("invalid payload JSON"))
}

fn offset(now: i64, span: Option<i64>, name: &str) -> JwtResult<Option<i64>> {
    span.map(|seconds| {
        now.checked_add(seconds)
            .ok_or_else(|| JwtError::InvalidClaims(format!("{name} overflows")))
    })
    .transpose()
}

fn compute_signature(alg: Algorithm, key: &EncodingKey, message: &[u8]) -> JwtResult<Vec<u8>> {
    let mismatch = || {
        JwtError::InvalidKey(format!(
            "{alg} cannot sign with a {} key",
            key.algorithm()
        ))
    };
    match alg {
        Algorithm::HS256 => sign_hs256(message, key.hmac_secret().ok_or_else(mismatch)?),
        Algorithm::RS256 => sign_rs256(message, key.rsa_signing_key().ok_or_else(mismatch)?),
    }
}

/// A key of the other family never authenticates a token
fn signature_matches(
    alg: Algorithm,
    key: &DecodingKey,
    message: &[u8],
    signature: &[u8],
) -> JwtResult<bool> {
    match alg {
        Algorithm::HS256 => match key.hmac_secret() {
            Some(secret) => verify_hs256(message, signature, secret),
            None => Ok(false),
        },
        Algorithm::RS256 => Ok(key
            .rsa_verifying_key()
            .is_some_and(|public| verify_rs256(message, signature, public))),
    }
}

/// Build and sign a compact token at clock reading `now`
pub(crate) fn sign_jwt(
    mut claims: Claims,
    key: &EncodingKey,
    options: &SignOptions,
    now: i64,
) -> JwtResult<String> {
    let alg = options.algorithm;

    let mut header = Header::new(alg);
    if let Some(kid) = &options.key_id {
        header = header.with_key_id(kid.clone());
    }

    let expires_in = timespan::parse(options.expires_in.as_ref())?;
    let not_before = timespan::parse(options.not_before.as_ref())?;

    claims.merge_reserved(ReservedClaims {
        issued_at: now,
        expires_at: offset(now, expires_in, "exp")?,
        not_before: offset(now, not_before, "nbf")?,
        audience: non_empty(options.audience.as_deref()).map(str::to_owned),
        issuer: non_empty(options.issuer.as_deref()).map(str::to_owned),
        subject: non_empty(options.subject.as_deref()).map(str::to_owned),
    });

    let header_json =
        serde_json::to_vec(&header).map_err(|e| JwtError::serialization(&e.to_string()))?;
    let claims_json =
        serde_json::to_vec(&claims).map_err(|e| JwtError::serialization(&e.to_string()))?;

    let message = format!(
        "{}.{}",
        base64_url_encode(&header_json),
        base64_url_encode(&claims_json)
    );
    let signature = compute_signature(alg, key, message.as_bytes())?;

    tracing::trace!(alg = alg.as_str(), claims = claims.len(), "token signed");
    Ok(format!("{message}.{}", base64_url_encode(&signature)))
}

/// An empty identity string counts as not supplied
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Runs every verification stage. `alg_seen` is set once the header names a
/// supported algorithm, so rejections past that stage can report it.
fn run_verification(
    token: &str,
    key: &DecodingKey,
    options: &VerifyOptions,
    now: i64,
    alg_seen: &mut Option<Algorithm>,
) -> JwtResult<Claims> {
    let segments = Segments::split(token)?;

    let raw_header = decode_header_segment(segments.header)?;
    let claims = decode_claims_segment(segments.claims)?;
    let signature = base64_url_decode(segments.signature)
        .map_err(|_| JwtError::malformed("invalid signature encoding"))?;

    let header = Header::try_from(raw_header)?;
    let alg = header.alg;
    *alg_seen = Some(alg);
    if !options.allows(alg) {
        return Err(JwtError::AlgorithmNotAllowed(alg));
    }

    let message = segments.signing_input();
    if !signature_matches(alg, key, message.as_bytes(), &signature)? {
        return Err(JwtError::InvalidSignature);
    }

    validate_time_claims(&claims, now, options.tolerance(), options.validate_iat)?;

    IdentityExpectations {
        audience: non_empty(options.audience.as_deref()),
        issuer: non_empty(options.issuer.as_deref()),
        subject: non_empty(options.subject.as_deref()),
    }
    .validate(&claims)?;

    Ok(claims)
}

/// Verify a compact token at clock reading `now` and return its claims
pub(crate) fn verify_jwt(
    token: &str,
    key: &DecodingKey,
    options: &VerifyOptions,
    now: i64,
) -> JwtResult<Claims> {
    let mut alg_seen = None;
    let outcome = run_verification(token, key, options, now, &mut alg_seen);
    let alg = alg_seen.map_or("unknown", Algorithm::as_str);
    match outcome {
        Ok(claims) => {
            tracing::trace!(alg, "token verified");
            Ok(claims)
        }
        Err(err) => {
            tracing::debug!(alg, reason = err.kind(), error = %err, "token rejected");
            Err(err)
        }
    }
}

/// Claims of a token without any verification
pub(crate) fn decode_unverified(token: &str) -> JwtResult<Claims> {
    match token.split('.').nth(1) {
        Some(claims) => decode_claims_segment(claims),
        None => Err(JwtError::malformed("token must have at least 2 segments")),
    }
}

/// Header of a token without any verification
pub(crate) fn decode_header_unverified(token: &str) -> JwtResult<Header> {
    let mut parts = token.split('.');
    match (parts.next(), parts.next()) {
        (Some(header), Some(_)) => Header::try_from(decode_header_segment(header)?),
        _ => Err(JwtError::malformed("token must have at least 2 segments")),
    }
}

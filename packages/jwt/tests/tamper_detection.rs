//! Tamper detection: flipping any bit of a valid token never yields a
//! successful verification

use jwt_seal::{
    Algorithm, DecodingKey, EncodingKey, JwtError, SignOptions, VerifyOptions, sign_at,
    verify_at,
};
use proptest::prelude::*;
use serde_json::json;

const NOW: i64 = 1_700_000_000;
const SECRET: &[u8] = b"tamper-secret";
const PRIVATE_PEM: &[u8] = include_bytes!("fixtures/rsa_private.pem");
const PUBLIC_PEM: &[u8] = include_bytes!("fixtures/rsa_public.pem");

fn claims() -> serde_json::Value {
    json!({"sub": "user-1", "role": "admin", "scopes": ["read", "write"]})
}

fn hs_token() -> String {
    sign_at(
        &claims(),
        &EncodingKey::from_secret(SECRET),
        &SignOptions::new().expires_in("1h"),
        NOW,
    )
    .unwrap()
}

fn rs_token() -> String {
    sign_at(
        &claims(),
        &EncodingKey::from_rsa_pem(PRIVATE_PEM).unwrap(),
        &SignOptions::new()
            .with_algorithm(Algorithm::RS256)
            .expires_in("1h"),
        NOW,
    )
    .unwrap()
}

/// Flip one of the low seven bits so the token stays ASCII
fn flip(token: &str, index: usize, bit: u8) -> String {
    let mut bytes = token.as_bytes().to_vec();
    bytes[index] ^= 1 << bit;
    String::from_utf8(bytes).unwrap()
}

fn assert_rejected(result: Result<jwt_seal::Claims, JwtError>) -> Result<(), TestCaseError> {
    match result {
        Err(
            JwtError::MalformedToken(_)
            | JwtError::InvalidSignature
            | JwtError::UnsupportedAlgorithm(_),
        ) => Ok(()),
        other => Err(TestCaseError::fail(format!(
            "tampered token was not rejected at decode or signature stage: {other:?}"
        ))),
    }
}

#[test]
fn untouched_tokens_verify() {
    let options = VerifyOptions::new();
    assert!(verify_at(&hs_token(), &DecodingKey::from_secret(SECRET), &options, NOW).is_ok());
    let public = DecodingKey::from_rsa_pem(PUBLIC_PEM).unwrap();
    assert!(verify_at(&rs_token(), &public, &options, NOW).is_ok());
}

proptest! {
    #[test]
    fn hs256_bit_flips_are_rejected(position in any::<prop::sample::Index>(), bit in 0u8..7) {
        let token = hs_token();
        let tampered = flip(&token, position.index(token.len()), bit);
        assert_rejected(verify_at(
            &tampered,
            &DecodingKey::from_secret(SECRET),
            &VerifyOptions::new(),
            NOW,
        ))?;
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn rs256_bit_flips_are_rejected(position in any::<prop::sample::Index>(), bit in 0u8..7) {
        let token = rs_token();
        let public = DecodingKey::from_rsa_pem(PUBLIC_PEM).unwrap();
        let tampered = flip(&token, position.index(token.len()), bit);
        assert_rejected(verify_at(&tampered, &public, &VerifyOptions::new(), NOW))?;
    }
}

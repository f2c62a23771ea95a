//! RSASSA-PKCS1-v1_5 with SHA-256 (RS256) signing and verification

use crate::error::JwtError;
use rsa::pkcs1v15::{Signature, SigningKey, VerifyingKey};
use rsa::signature::{SignatureEncoding, Signer, Verifier};
use sha2::Sha256;

/// Sign with RSA-SHA256; the signature is as long as the key modulus
#[inline]
pub(crate) fn sign_rs256(
    message: &[u8],
    signing_key: &SigningKey<Sha256>,
) -> Result<Vec<u8>, JwtError> {
    let signature = signing_key
        .try_sign(message)
        .map_err(|e| JwtError::InvalidKey(format!("RSA signing failed: {e}")))?;
    Ok(signature.to_vec())
}

/// Verify an RSA-SHA256 signature
///
/// A signature of the wrong length or shape is a mismatch, not an error.
#[inline]
pub(crate) fn verify_rs256(
    message: &[u8],
    signature: &[u8],
    verifying_key: &VerifyingKey<Sha256>,
) -> bool {
    let Ok(signature) = Signature::try_from(signature) else {
        return false;
    };
    verifying_key.verify(message, &signature).is_ok()
}

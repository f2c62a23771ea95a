//! HMAC-SHA256 (HS256) signing and verification

use super::utils::constant_time_eq;
use crate::error::JwtError;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Sign with HMAC-SHA256, producing the raw 32-byte tag
#[inline]
pub(crate) fn sign_hs256(message: &[u8], secret: &[u8]) -> Result<Vec<u8>, JwtError> {
    let mut mac = HmacSha256::new_from_slice(secret)
        .map_err(|_| JwtError::invalid_key("Invalid HMAC key"))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Verify an HMAC-SHA256 tag with a constant-time comparison
#[inline]
pub(crate) fn verify_hs256(
    message: &[u8],
    signature: &[u8],
    secret: &[u8],
) -> Result<bool, JwtError> {
    let expected = sign_hs256(message, secret)?;
    Ok(constant_time_eq(signature, &expected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::algorithms::utils::base64_url_encode;

    const JWT_IO_INPUT: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.eyJzdWIiOiIxMjM0NTY3ODkwIiwibmFtZSI6IkpvaG4gRG9lIiwiaWF0IjoxNTE2MjM5MDIyfQ";

    #[test]
    fn matches_known_vector() {
        let tag = sign_hs256(JWT_IO_INPUT.as_bytes(), b"your-256-bit-secret").unwrap();
        assert_eq!(tag.len(), 32);
        assert_eq!(
            base64_url_encode(&tag),
            "SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5c"
        );
    }

    #[test]
    fn verify_detects_wrong_secret_and_truncation() {
        let tag = sign_hs256(b"payload", b"secret").unwrap();
        assert!(verify_hs256(b"payload", &tag, b"secret").unwrap());
        assert!(!verify_hs256(b"payload", &tag, b"other").unwrap());
        assert!(!verify_hs256(b"payload", &tag[..31], b"secret").unwrap());
        assert!(!verify_hs256(b"payload2", &tag, b"secret").unwrap());
    }

    #[test]
    fn empty_secret_is_accepted() {
        assert!(sign_hs256(b"payload", b"").is_ok());
    }
}

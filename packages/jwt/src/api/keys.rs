//! Signing and verification keys
//!
//! Each key kind belongs to exactly one [`Algorithm`]. Keys are parsed once,
//! up front, so a bad PEM fails at construction rather than mid-verification.

use crate::algorithms::Algorithm;
use crate::error::{JwtError, JwtResult};
use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey};
use rsa::pkcs1v15::{SigningKey, VerifyingKey};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::signature::Keypair;
use rsa::{RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;
use std::fmt;
use zeroize::Zeroizing;

#[derive(Clone)]
enum SigningMaterial {
    Hmac(Zeroizing<Vec<u8>>),
    Rsa(Box<SigningKey<Sha256>>),
}

#[derive(Clone)]
enum VerifyingMaterial {
    Hmac(Zeroizing<Vec<u8>>),
    Rsa(Box<VerifyingKey<Sha256>>),
}

/// Key used to sign tokens: an HMAC secret or an RSA private key
#[derive(Clone)]
pub struct EncodingKey {
    material: SigningMaterial,
}

/// Key used to verify tokens: an HMAC secret or an RSA public key
#[derive(Clone)]
pub struct DecodingKey {
    material: VerifyingMaterial,
}

fn pem_str(pem: &[u8]) -> JwtResult<&str> {
    std::str::from_utf8(pem).map_err(|_| JwtError::invalid_key("PEM is not valid UTF-8"))
}

impl EncodingKey {
    /// HMAC secret for HS256
    #[must_use]
    pub fn from_secret(secret: &[u8]) -> Self {
        Self {
            material: SigningMaterial::Hmac(Zeroizing::new(secret.to_vec())),
        }
    }

    /// RSA private key for RS256 from PEM.
    ///
    /// Accepts PKCS#8 (`BEGIN PRIVATE KEY`) and PKCS#1 (`BEGIN RSA PRIVATE KEY`).
    ///
    /// # Errors
    /// Returns `JwtError::InvalidKey` if the PEM cannot be parsed.
    pub fn from_rsa_pem(pem: &[u8]) -> JwtResult<Self> {
        let pem = pem_str(pem)?;
        let key = RsaPrivateKey::from_pkcs8_pem(pem)
            .or_else(|_| RsaPrivateKey::from_pkcs1_pem(pem))
            .map_err(|e| JwtError::InvalidKey(format!("Invalid RSA private key: {e}")))?;
        Ok(Self::from_rsa_key(key))
    }

    /// RSA private key for RS256 from PKCS#8 DER.
    ///
    /// # Errors
    /// Returns `JwtError::InvalidKey` if the DER cannot be parsed.
    pub fn from_rsa_der(der: &[u8]) -> JwtResult<Self> {
        let key = RsaPrivateKey::from_pkcs8_der(der)
            .map_err(|e| JwtError::InvalidKey(format!("Invalid RSA private key: {e}")))?;
        Ok(Self::from_rsa_key(key))
    }

    /// Wrap an already parsed RSA private key
    #[must_use]
    pub fn from_rsa_key(key: RsaPrivateKey) -> Self {
        Self {
            material: SigningMaterial::Rsa(Box::new(SigningKey::new(key))),
        }
    }

    /// The algorithm this key signs with
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        match self.material {
            SigningMaterial::Hmac(_) => Algorithm::HS256,
            SigningMaterial::Rsa(_) => Algorithm::RS256,
        }
    }

    pub(crate) fn hmac_secret(&self) -> Option<&[u8]> {
        match &self.material {
            SigningMaterial::Hmac(secret) => Some(secret.as_slice()),
            SigningMaterial::Rsa(_) => None,
        }
    }

    pub(crate) fn rsa_signing_key(&self) -> Option<&SigningKey<Sha256>> {
        match &self.material {
            SigningMaterial::Rsa(key) => Some(key),
            SigningMaterial::Hmac(_) => None,
        }
    }
}

impl DecodingKey {
    /// HMAC secret for HS256
    #[must_use]
    pub fn from_secret(secret: &[u8]) -> Self {
        Self {
            material: VerifyingMaterial::Hmac(Zeroizing::new(secret.to_vec())),
        }
    }

    /// RSA public key for RS256 from PEM.
    ///
    /// Accepts SPKI (`BEGIN PUBLIC KEY`) and PKCS#1 (`BEGIN RSA PUBLIC KEY`).
    ///
    /// # Errors
    /// Returns `JwtError::InvalidKey` if the PEM cannot be parsed.
    pub fn from_rsa_pem(pem: &[u8]) -> JwtResult<Self> {
        let pem = pem_str(pem)?;
        let key = RsaPublicKey::from_public_key_pem(pem)
            .or_else(|_| RsaPublicKey::from_pkcs1_pem(pem))
            .map_err(|e| JwtError::InvalidKey(format!("Invalid RSA public key: {e}")))?;
        Ok(Self::from_rsa_key(key))
    }

    /// RSA public key for RS256 from SPKI DER.
    ///
    /// # Errors
    /// Returns `JwtError::InvalidKey` if the DER cannot be parsed.
    pub fn from_rsa_der(der: &[u8]) -> JwtResult<Self> {
        let key = RsaPublicKey::from_public_key_der(der)
            .map_err(|e| JwtError::InvalidKey(format!("Invalid RSA public key: {e}")))?;
        Ok(Self::from_rsa_key(key))
    }

    /// Wrap an already parsed RSA public key
    #[must_use]
    pub fn from_rsa_key(key: RsaPublicKey) -> Self {
        Self {
            material: VerifyingMaterial::Rsa(Box::new(VerifyingKey::new(key))),
        }
    }

    /// The algorithm this key verifies
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        match self.material {
            VerifyingMaterial::Hmac(_) => Algorithm::HS256,
            VerifyingMaterial::Rsa(_) => Algorithm::RS256,
        }
    }

    /// True if tokens signed with `alg` can be checked with this key
    #[must_use]
    pub fn supports(&self, alg: Algorithm) -> bool {
        self.algorithm() == alg
    }

    pub(crate) fn hmac_secret(&self) -> Option<&[u8]> {
        match &self.material {
            VerifyingMaterial::Hmac(secret) => Some(secret.as_slice()),
            VerifyingMaterial::Rsa(_) => None,
        }
    }

    pub(crate) fn rsa_verifying_key(&self) -> Option<&VerifyingKey<Sha256>> {
        match &self.material {
            VerifyingMaterial::Rsa(key) => Some(key),
            VerifyingMaterial::Hmac(_) => None,
        }
    }
}

impl From<&EncodingKey> for DecodingKey {
    fn from(key: &EncodingKey) -> Self {
        let material = match &key.material {
            SigningMaterial::Hmac(secret) => VerifyingMaterial::Hmac(secret.clone()),
            SigningMaterial::Rsa(signing) => {
                VerifyingMaterial::Rsa(Box::new(signing.verifying_key()))
            }
        };
        Self { material }
    }
}

impl fmt::Debug for EncodingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodingKey")
            .field("algorithm", &self.algorithm())
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for DecodingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodingKey")
            .field("algorithm", &self.algorithm())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRIVATE_PEM: &[u8] = include_bytes!("../../tests/fixtures/rsa_private.pem");
    const PRIVATE_PKCS1_PEM: &[u8] = include_bytes!("../../tests/fixtures/rsa_private_pkcs1.pem");
    const PUBLIC_PEM: &[u8] = include_bytes!("../../tests/fixtures/rsa_public.pem");

    #[test]
    fn secret_keys_are_hs256() {
        let key = EncodingKey::from_secret(b"secret");
        assert_eq!(key.algorithm(), Algorithm::HS256);
        assert_eq!(key.hmac_secret(), Some(&b"secret"[..]));
        assert!(key.rsa_signing_key().is_none());

        let key = DecodingKey::from(&key);
        assert!(key.supports(Algorithm::HS256));
        assert!(!key.supports(Algorithm::RS256));
    }

    #[test]
    fn rsa_pem_formats() {
        let pkcs8 = EncodingKey::from_rsa_pem(PRIVATE_PEM).unwrap();
        let pkcs1 = EncodingKey::from_rsa_pem(PRIVATE_PKCS1_PEM).unwrap();
        assert_eq!(pkcs8.algorithm(), Algorithm::RS256);
        assert_eq!(pkcs1.algorithm(), Algorithm::RS256);

        let public = DecodingKey::from_rsa_pem(PUBLIC_PEM).unwrap();
        assert!(public.supports(Algorithm::RS256));
        assert!(public.hmac_secret().is_none());
    }

    #[test]
    fn derived_public_key_matches_published_one() {
        let private = EncodingKey::from_rsa_pem(PRIVATE_PEM).unwrap();
        let derived = DecodingKey::from(&private);
        let published = DecodingKey::from_rsa_pem(PUBLIC_PEM).unwrap();
        assert_eq!(
            derived.rsa_verifying_key().map(AsRef::<RsaPublicKey>::as_ref),
            published.rsa_verifying_key().map(AsRef::<RsaPublicKey>::as_ref)
        );
    }

    #[test]
    fn garbage_is_invalid_key() {
        assert!(matches!(
            EncodingKey::from_rsa_pem(b"not a key"),
            Err(JwtError::InvalidKey(_))
        ));
        assert!(matches!(
            DecodingKey::from_rsa_pem(PRIVATE_PEM),
            Err(JwtError::InvalidKey(_))
        ));
        assert!(matches!(
            DecodingKey::from_rsa_der(&[0x30, 0x00]),
            Err(JwtError::InvalidKey(_))
        ));
        assert!(matches!(
            EncodingKey::from_rsa_pem(&[0xff, 0xfe]),
            Err(JwtError::InvalidKey(_))
        ));
    }

    #[test]
    fn debug_redacts_material() {
        let key = EncodingKey::from_secret(b"super-secret-value");
        let rendered = format!("{key:?}");
        assert!(!rendered.contains("super-secret-value"));
        assert!(rendered.contains("HS256"));
    }
}

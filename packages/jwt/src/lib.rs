//! JSON Web Token (JWT) signing and verification
//!
//! This crate provides:
//! - HS256 (HMAC-SHA256) and RS256 (RSASSA-PKCS1-v1_5 with SHA-256)
//! - Ordered verification: structure, algorithm allow-list, signature, then claims
//! - Relative `exp` / `nbf` from second counts or expressions like `"1h"`
//! - Unauthenticated inspection of claims and headers
//!
//! ```
//! use jwt_seal::{ClaimsBuilder, DecodingKey, EncodingKey, SignOptions, VerifyOptions};
//!
//! let claims = ClaimsBuilder::new().claim("role", "admin").build();
//! let token = jwt_seal::sign(
//!     &claims,
//!     &EncodingKey::from_secret(b"secret"),
//!     &SignOptions::new().expires_in("1h").with_subject("user-1"),
//! )?;
//!
//! let verified = jwt_seal::verify(
//!     &token,
//!     &DecodingKey::from_secret(b"secret"),
//!     &VerifyOptions::new().with_subject("user-1"),
//! )?;
//! assert_eq!(verified.get("role"), Some(&serde_json::json!("admin")));
//! # Ok::<(), jwt_seal::JwtError>(())
//! ```

mod algorithms;
pub mod api;
mod error;
mod options;
pub mod timespan;
mod types;

pub use algorithms::Algorithm;
pub use api::claims::names;
pub use api::{
    Claims, ClaimsBuilder, DecodingKey, EncodingKey, ReservedClaims, base64_url_decode,
    base64_url_encode, decode, decode_header, sign, sign_at, verify, verify_at,
};
pub use error::*;
pub use options::{SignOptions, VerifyOptions};
pub use timespan::Timespan;
pub use types::*;

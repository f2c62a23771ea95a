//! Token API implementation
//!
//! Split into focused submodules: keys, claims, the signature algorithms
//! and the public sign/verify/decode operations built on them.

pub mod algorithms;
pub mod claims;
pub mod keys;
pub mod operations;

pub use algorithms::{base64_url_decode, base64_url_encode};
pub use claims::{Claims, ClaimsBuilder, ReservedClaims};
pub use keys::{DecodingKey, EncodingKey};
pub use operations::{decode, decode_header, sign, sign_at, verify, verify_at};

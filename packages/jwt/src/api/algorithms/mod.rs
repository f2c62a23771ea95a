//! JWT Algorithms Module
//!
//! Signature primitives for each supported algorithm, the base64url codec,
//! and the sign/verify protocol built on them.

mod core;
mod hmac;
mod rsa;
mod utils;

pub use utils::{base64_url_decode, base64_url_encode};

pub(crate) use self::core::{decode_header_unverified, decode_unverified, sign_jwt, verify_jwt};

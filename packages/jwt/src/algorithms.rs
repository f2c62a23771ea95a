//! The supported signature algorithms
//!
//! [`Algorithm`] is the only place the supported set is defined. Signing,
//! header parsing and allow-list checks all go through it.

use crate::error::JwtError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Token signature algorithm
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Algorithm {
    /// HMAC using SHA-256
    #[default]
    HS256,
    /// RSASSA-PKCS1-v1_5 using SHA-256
    RS256,
}

impl Algorithm {
    /// Every supported algorithm
    pub const ALL: [Algorithm; 2] = [Algorithm::HS256, Algorithm::RS256];

    /// Header `alg` value
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Algorithm::HS256 => "HS256",
            Algorithm::RS256 => "RS256",
        }
    }

    /// True when the same secret both signs and verifies
    #[inline]
    #[must_use]
    pub const fn is_symmetric(self) -> bool {
        matches!(self, Algorithm::HS256)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = JwtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|alg| alg.as_str() == s)
            .ok_or_else(|| JwtError::unsupported_algorithm(s))
    }
}

impl TryFrom<String> for Algorithm {
    type Error = JwtError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Algorithm> for &'static str {
    fn from(alg: Algorithm) -> Self {
        alg.as_str()
    }
}

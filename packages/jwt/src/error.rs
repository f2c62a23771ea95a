//! Token error types
//!
//! Every failure surfaces synchronously as a single [`JwtError`]. Verification
//! stops at the first failing stage, so a caller never sees more than one.

use crate::algorithms::Algorithm;
use thiserror::Error;

/// Token operation result type
pub type JwtResult<T> = Result<T, JwtError>;

/// Token error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    /// Wrong segment count, invalid base64url, or invalid JSON
    #[error("Malformed token: {0}")]
    MalformedToken(String),
    /// Algorithm outside the supported set, at sign or verify time
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),
    /// Algorithm is supported but excluded by the caller's allow-list
    #[error("Algorithm {0} is not allowed")]
    AlgorithmNotAllowed(Algorithm),
    /// Recomputed signature does not match the token
    #[error("Invalid token signature")]
    InvalidSignature,
    /// `exp` has passed, tolerance included
    #[error("Token expired at {expired_at}")]
    TokenExpired {
        /// The token's `exp` claim
        expired_at: i64,
    },
    /// `nbf` has not been reached yet, tolerance included
    #[error("Token not active before {not_before}")]
    TokenNotActive {
        /// The token's `nbf` claim
        not_before: i64,
    },
    /// `iat` lies in the future, tolerance included
    #[error("Token issued in the future at {issued_at}")]
    TokenIssuedInFuture {
        /// The token's `iat` claim
        issued_at: i64,
    },
    /// `aud` does not match the expected audience
    #[error("Invalid token audience")]
    InvalidAudience,
    /// `iss` does not match the expected issuer
    #[error("Invalid token issuer")]
    InvalidIssuer,
    /// `sub` does not match the expected subject
    #[error("Invalid token subject")]
    InvalidSubject,
    /// Duration expression could not be parsed
    #[error("Invalid timespan format: {0}")]
    InvalidTimespan(String),
    /// Key material is unusable or does not fit the algorithm
    #[error("Invalid key: {0}")]
    InvalidKey(String),
    /// Claims cannot be turned into a token payload
    #[error("Invalid claims: {0}")]
    InvalidClaims(String),
    /// JSON serialization failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl JwtError {
    /// Create a malformed token error
    #[inline]
    #[must_use]
    pub fn malformed(msg: &str) -> Self {
        JwtError::MalformedToken(msg.to_string())
    }

    /// Create an unsupported algorithm error
    #[inline]
    #[must_use]
    pub fn unsupported_algorithm(alg: &str) -> Self {
        JwtError::UnsupportedAlgorithm(alg.to_string())
    }

    /// Create an invalid key error
    #[inline]
    #[must_use]
    pub fn invalid_key(msg: &str) -> Self {
        JwtError::InvalidKey(msg.to_string())
    }

    /// Create an invalid claims error
    #[inline]
    #[must_use]
    pub fn invalid_claims(msg: &str) -> Self {
        JwtError::InvalidClaims(msg.to_string())
    }

    /// Create an invalid timespan error naming the rejected input
    #[inline]
    #[must_use]
    pub fn invalid_timespan(input: &str) -> Self {
        JwtError::InvalidTimespan(input.to_string())
    }

    /// Create a serialization error
    #[inline]
    #[must_use]
    pub fn serialization(msg: &str) -> Self {
        JwtError::Serialization(msg.to_string())
    }

    /// True for expiry, not-before and issued-at failures.
    ///
    /// These tokens were authentic but are stale or premature.
    #[must_use]
    pub fn is_temporal(&self) -> bool {
        matches!(
            self,
            JwtError::TokenExpired { .. }
                | JwtError::TokenNotActive { .. }
                | JwtError::TokenIssuedInFuture { .. }
        )
    }

    /// True for audience, issuer and subject mismatches.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        matches!(
            self,
            JwtError::InvalidAudience | JwtError::InvalidIssuer | JwtError::InvalidSubject
        )
    }

    /// Short name of the failure, used for structured logging.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            JwtError::MalformedToken(_) => "malformed_token",
            JwtError::UnsupportedAlgorithm(_) => "unsupported_algorithm",
            JwtError::AlgorithmNotAllowed(_) => "algorithm_not_allowed",
            JwtError::InvalidSignature => "invalid_signature",
            JwtError::TokenExpired { .. } => "token_expired",
            JwtError::TokenNotActive { .. } => "token_not_active",
            JwtError::TokenIssuedInFuture { .. } => "token_issued_in_future",
            JwtError::InvalidAudience => "invalid_audience",
            JwtError::InvalidIssuer => "invalid_issuer",
            JwtError::InvalidSubject => "invalid_subject",
            JwtError::InvalidTimespan(_) => "invalid_timespan",
            JwtError::InvalidKey(_) => "invalid_key",
            JwtError::InvalidClaims(_) => "invalid_claims",
            JwtError::Serialization(_) => "serialization",
        }
    }
}

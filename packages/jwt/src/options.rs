//! Sign and verify options
//!
//! Both option sets deserialize from camelCase config keys, so they can be
//! loaded straight from JSON or TOML:
//!
//! ```
//! use jwt_seal::{Algorithm, VerifyOptions};
//!
//! let options: VerifyOptions = serde_json::from_str(
//!     r#"{"algorithms": ["RS256"], "issuer": "auth.example", "clockTolerance": 30}"#,
//! )?;
//! assert!(options.allows(Algorithm::RS256));
//! assert!(!options.allows(Algorithm::HS256));
//! # Ok::<(), serde_json::Error>(())
//! ```

use crate::algorithms::Algorithm;
use crate::timespan::Timespan;
use serde::{Deserialize, Serialize};

/// Options for [`sign`](crate::sign).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignOptions {
    /// Signature algorithm, HS256 unless set
    pub algorithm: Algorithm,
    /// Lifetime; produces `exp = iat + expiresIn`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<Timespan>,
    /// Activation delay; produces `nbf = iat + notBefore`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_before: Option<Timespan>,
    /// Written as `aud`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
    /// Written as `iss`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    /// Written as `sub`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Written as the header `kid`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,
}

impl SignOptions {
    /// Options with every field unset and HS256 selected
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the signature algorithm
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set the token lifetime, e.g. `"1h"` or `3600`
    #[must_use]
    pub fn expires_in(mut self, span: impl Into<Timespan>) -> Self {
        self.expires_in = Some(span.into());
        self
    }

    /// Delay activation, e.g. `"30s"` or `30`
    #[must_use]
    pub fn not_before(mut self, span: impl Into<Timespan>) -> Self {
        self.not_before = Some(span.into());
        self
    }

    /// Set the audience
    #[must_use]
    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    /// Set the issuer
    #[must_use]
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    /// Set the subject
    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the header key id
    #[must_use]
    pub fn with_key_id(mut self, key_id: impl Into<String>) -> Self {
        self.key_id = Some(key_id.into());
        self
    }
}

/// Options for [`verify`](crate::verify).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VerifyOptions {
    /// Allow-list of accepted algorithms; `None` allows both, an empty list allows none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithms: Option<Vec<Algorithm>>,
    /// Required `aud`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
    /// Required `iss`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    /// Required `sub`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Seconds of clock skew applied to `exp`, `nbf` and `iat`
    pub clock_tolerance: u64,
    /// Reject tokens whose `iat` lies in the future
    pub validate_iat: bool,
}

impl Default for VerifyOptions {
    fn default() -> Self {
        Self {
            algorithms: None,
            audience: None,
            issuer: None,
            subject: None,
            clock_tolerance: 0,
            validate_iat: true,
        }
    }
}

impl VerifyOptions {
    /// Options with no restrictions beyond signature and time checks
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Only accept tokens signed with one of `algorithms`
    #[must_use]
    pub fn with_algorithms(mut self, algorithms: impl IntoIterator<Item = Algorithm>) -> Self {
        self.algorithms = Some(algorithms.into_iter().collect());
        self
    }

    /// Require `aud` to match
    #[must_use]
    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    /// Require `iss` to match
    #[must_use]
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    /// Require `sub` to match
    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the clock tolerance in seconds
    #[must_use]
    pub fn with_clock_tolerance(mut self, seconds: u64) -> Self {
        self.clock_tolerance = seconds;
        self
    }

    /// Turn the issued-in-the-future check on or off
    #[must_use]
    pub fn validate_issued_at(mut self, validate: bool) -> Self {
        self.validate_iat = validate;
        self
    }

    /// True if the caller's allow-list admits `alg`
    #[must_use]
    pub fn allows(&self, alg: Algorithm) -> bool {
        self.algorithms
            .as_deref()
            .is_none_or(|allowed| allowed.contains(&alg))
    }

    /// Tolerance as a signed offset, saturating at `i64::MAX`
    pub(crate) fn tolerance(&self) -> i64 {
        i64::try_from(self.clock_tolerance).unwrap_or(i64::MAX)
    }
}

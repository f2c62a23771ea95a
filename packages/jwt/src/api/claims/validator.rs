//! Identity claim checks: audience, then issuer, then subject

use super::standard_claims::Claims;
use crate::error::{JwtError, JwtResult};
use serde_json::Value;

/// Expected identity values; `None` skips that check
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct IdentityExpectations<'a> {
    pub(crate) audience: Option<&'a str>,
    pub(crate) issuer: Option<&'a str>,
    pub(crate) subject: Option<&'a str>,
}

/// `aud` may be a single string or an array of strings
fn audience_matches(aud: Option<&Value>, expected: &str) -> bool {
    match aud {
        Some(Value::String(aud)) => aud == expected,
        Some(Value::Array(auds)) => auds.iter().any(|aud| aud.as_str() == Some(expected)),
        _ => false,
    }
}

impl IdentityExpectations<'_> {
    /// Validate identity claims
    pub(crate) fn validate(&self, claims: &Claims) -> JwtResult<()> {
        if let Some(expected) = self.audience
            && !audience_matches(claims.audience(), expected)
        {
            return Err(JwtError::InvalidAudience);
        }

        if let Some(expected) = self.issuer
            && claims.issuer() != Some(expected)
        {
            return Err(JwtError::InvalidIssuer);
        }

        if let Some(expected) = self.subject
            && claims.subject() != Some(expected)
        {
            return Err(JwtError::InvalidSubject);
        }

        Ok(())
    }
}

//! Claims Builder - fluent construction of caller claims
//!
//! Time claims are not set here: `iat`, `exp` and `nbf` are computed by the
//! signer from [`SignOptions`](crate::SignOptions).

use super::standard_claims::{Claims, names};
use serde_json::Value;

/// Claims builder for creating token claims
#[derive(Debug, Clone, Default)]
pub struct ClaimsBuilder {
    claims: Claims,
}

impl ClaimsBuilder {
    /// Create new claims builder
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set subject claim
    #[inline]
    #[must_use]
    pub fn subject(mut self, subject: &str) -> Self {
        self.claims.insert(names::SUBJECT, subject);
        self
    }

    /// Set issuer claim
    #[inline]
    #[must_use]
    pub fn issuer(mut self, issuer: &str) -> Self {
        self.claims.insert(names::ISSUER, issuer);
        self
    }

    /// Set audience claim as string
    #[inline]
    #[must_use]
    pub fn audience(mut self, audience: &str) -> Self {
        self.claims.insert(names::AUDIENCE, audience);
        self
    }

    /// Set audience claim as array
    #[inline]
    #[must_use]
    pub fn audiences(mut self, audiences: &[&str]) -> Self {
        let aud: Vec<Value> = audiences.iter().map(|&aud| Value::from(aud)).collect();
        self.claims.insert(names::AUDIENCE, aud);
        self
    }

    /// Set custom claim with any JSON value
    #[inline]
    #[must_use]
    pub fn claim(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.claims.insert(key, value);
        self
    }

    /// Build claims
    #[inline]
    #[must_use]
    pub fn build(self) -> Claims {
        self.claims
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builds_custom_and_identity_claims() {
        let claims = ClaimsBuilder::new()
            .subject("user-1")
            .issuer("auth")
            .audiences(&["api", "web"])
            .claim("role", "admin")
            .claim("scopes", json!(["read", "write"]))
            .build();

        assert_eq!(claims.subject(), Some("user-1"));
        assert_eq!(claims.issuer(), Some("auth"));
        assert_eq!(claims.audience(), Some(&json!(["api", "web"])));
        assert_eq!(claims.get("role"), Some(&json!("admin")));
        assert_eq!(claims.get("scopes"), Some(&json!(["read", "write"])));
        assert!(!claims.contains_key("iat"));
    }

    #[test]
    fn later_writes_win() {
        let claims = ClaimsBuilder::new()
            .audience("first")
            .audience("second")
            .build();
        assert_eq!(claims.audience(), Some(&json!("second")));
        assert_eq!(claims.len(), 1);
    }
}

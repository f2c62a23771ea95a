//! Token header definitions

use crate::algorithms::Algorithm;
use crate::error::{JwtError, JwtResult};
use serde::{Deserialize, Serialize};

/// Token type written into every header
pub const TOKEN_TYPE: &str = "JWT";

/// Token header
///
/// Built from sign options and re-parsed at verify time. `alg` is always a
/// supported [`Algorithm`]; a header naming anything else never becomes a
/// `Header`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    /// Signature algorithm
    pub alg: Algorithm,
    /// Token type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typ: Option<String>,
    /// Key identifier hint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,
}

impl Header {
    /// Create a header for `alg` with `typ` set to `"JWT"`
    #[must_use]
    pub fn new(alg: Algorithm) -> Self {
        Self {
            alg,
            typ: Some(TOKEN_TYPE.to_string()),
            kid: None,
        }
    }

    /// Set the key identifier
    #[must_use]
    pub fn with_key_id(mut self, kid: impl Into<String>) -> Self {
        self.kid = Some(kid.into());
        self
    }
}

/// Header as found on the wire, before the algorithm is checked
#[derive(Debug, Deserialize)]
pub(crate) struct RawHeader {
    pub(crate) alg: String,
    #[serde(default)]
    pub(crate) typ: Option<String>,
    #[serde(default)]
    pub(crate) kid: Option<String>,
}

impl TryFrom<RawHeader> for Header {
    type Error = JwtError;

    fn try_from(raw: RawHeader) -> JwtResult<Self> {
        Ok(Self {
            alg: raw.alg.parse()?,
            typ: raw.typ,
            kid: raw.kid,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_field_order_matches_wire_format() {
        let header = Header::new(Algorithm::HS256);
        assert_eq!(
            serde_json::to_string(&header).unwrap(),
            r#"{"alg":"HS256","typ":"JWT"}"#
        );

        let header = Header::new(Algorithm::RS256).with_key_id("k1");
        assert_eq!(
            serde_json::to_string(&header).unwrap(),
            r#"{"alg":"RS256","typ":"JWT","kid":"k1"}"#
        );
    }

    #[test]
    fn raw_header_tolerates_missing_typ() {
        let raw: RawHeader = serde_json::from_str(r#"{"alg":"RS256"}"#).unwrap();
        let header = Header::try_from(raw).unwrap();
        assert_eq!(header.alg, Algorithm::RS256);
        assert_eq!(header.typ, None);
    }

    #[test]
    fn raw_header_with_unknown_alg_is_unsupported() {
        let raw: RawHeader = serde_json::from_str(r#"{"alg":"none","typ":"JWT"}"#).unwrap();
        assert_eq!(
            Header::try_from(raw),
            Err(JwtError::UnsupportedAlgorithm("none".to_string()))
        );
    }
}

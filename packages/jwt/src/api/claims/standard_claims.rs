//! Standard claims - the open claims object and its reserved fields

use crate::error::{JwtError, JwtResult};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

/// Reserved claim names
pub mod names {
    /// Issued-at
    pub const ISSUED_AT: &str = "iat";
    /// Expiry
    pub const EXPIRES_AT: &str = "exp";
    /// Not-valid-before
    pub const NOT_BEFORE: &str = "nbf";
    /// Audience
    pub const AUDIENCE: &str = "aud";
    /// Issuer
    pub const ISSUER: &str = "iss";
    /// Subject
    pub const SUBJECT: &str = "sub";
}

/// Token claims: an open JSON object with typed accessors for the reserved fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims(Map<String, Value>);

/// Reading a NumericDate claim: absent, a number, or present with the wrong type
fn numeric_date(value: Option<&Value>, name: &str) -> JwtResult<Option<i64>> {
    match value {
        None => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.floor() as i64))
            .map(Some)
            .ok_or_else(|| JwtError::MalformedToken(format!("{name} is out of range"))),
        Some(_) => Err(JwtError::MalformedToken(format!(
            "{name} must be a NumericDate"
        ))),
    }
}

impl Claims {
    /// Empty claims
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Convert any serializable value that renders as a JSON object.
    ///
    /// # Errors
    /// Returns `JwtError::InvalidClaims` if `value` is not a JSON object.
    pub fn from_serializable<T: Serialize + ?Sized>(value: &T) -> JwtResult<Self> {
        match serde_json::to_value(value) {
            Ok(Value::Object(map)) => Ok(Self(map)),
            Ok(other) => Err(JwtError::InvalidClaims(format!(
                "claims must be a JSON object, got {}",
                json_kind(&other)
            ))),
            Err(e) => Err(JwtError::InvalidClaims(e.to_string())),
        }
    }

    /// Deserialize the claims into a caller-defined type.
    ///
    /// # Errors
    /// Returns `JwtError::InvalidClaims` if the shape does not match `T`.
    pub fn deserialize_into<T: DeserializeOwned>(&self) -> JwtResult<T> {
        serde_json::from_value(Value::Object(self.0.clone()))
            .map_err(|e| JwtError::InvalidClaims(e.to_string()))
    }

    /// `iat`, if present
    ///
    /// # Errors
    /// Returns `JwtError::MalformedToken` if `iat` is present but not a number.
    pub fn issued_at(&self) -> JwtResult<Option<i64>> {
        numeric_date(self.0.get(names::ISSUED_AT), names::ISSUED_AT)
    }

    /// `exp`, if present
    ///
    /// # Errors
    /// Returns `JwtError::MalformedToken` if `exp` is present but not a number.
    pub fn expires_at(&self) -> JwtResult<Option<i64>> {
        numeric_date(self.0.get(names::EXPIRES_AT), names::EXPIRES_AT)
    }

    /// `nbf`, if present
    ///
    /// # Errors
    /// Returns `JwtError::MalformedToken` if `nbf` is present but not a number.
    pub fn not_before(&self) -> JwtResult<Option<i64>> {
        numeric_date(self.0.get(names::NOT_BEFORE), names::NOT_BEFORE)
    }

    /// Raw `aud` value: a string, or an array of strings
    #[must_use]
    pub fn audience(&self) -> Option<&Value> {
        self.0.get(names::AUDIENCE)
    }

    /// `iss` when it is a string
    #[must_use]
    pub fn issuer(&self) -> Option<&str> {
        self.0.get(names::ISSUER).and_then(Value::as_str)
    }

    /// `sub` when it is a string
    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        self.0.get(names::SUBJECT).and_then(Value::as_str)
    }

    /// Look up any claim
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Set a claim, returning the previous value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Remove a claim
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    /// True if `key` is present
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Iterate over all claims
    pub fn iter(&self) -> serde_json::map::Iter<'_> {
        self.0.iter()
    }

    /// Number of claims
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if there are no claims
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The underlying JSON object
    #[must_use]
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    /// Write the signer-computed fields over these claims.
    ///
    /// `iat` is always replaced. `exp`, `nbf`, `aud`, `iss` and `sub` are
    /// replaced only when the reserved set carries a value for them; a
    /// caller-supplied value is kept otherwise.
    pub fn merge_reserved(&mut self, reserved: ReservedClaims) {
        self.0
            .insert(names::ISSUED_AT.to_string(), reserved.issued_at.into());

        let optional = [
            (names::EXPIRES_AT, reserved.expires_at.map(Value::from)),
            (names::NOT_BEFORE, reserved.not_before.map(Value::from)),
            (names::AUDIENCE, reserved.audience.map(Value::from)),
            (names::ISSUER, reserved.issuer.map(Value::from)),
            (names::SUBJECT, reserved.subject.map(Value::from)),
        ];
        for (name, value) in optional {
            if let Some(value) = value {
                self.0.insert(name.to_string(), value);
            }
        }
    }
}

impl From<Map<String, Value>> for Claims {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Claims> for Value {
    fn from(claims: Claims) -> Self {
        Value::Object(claims.0)
    }
}

impl<'a> IntoIterator for &'a Claims {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Fields the signer computes and writes over caller claims
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservedClaims {
    /// `iat`, always written
    pub issued_at: i64,
    /// `exp`, written when set
    pub expires_at: Option<i64>,
    /// `nbf`, written when set
    pub not_before: Option<i64>,
    /// `aud`, written when set
    pub audience: Option<String>,
    /// `iss`, written when set
    pub issuer: Option<String>,
    /// `sub`, written when set
    pub subject: Option<String>,
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

//! Relative durations for `expiresIn` / `notBefore`
//!
//! A [`Timespan`] is either a raw second count or an expression made of one
//! or more digits followed by a single unit letter: `s`, `m`, `h`, `d`, `w`.

use crate::error::{JwtError, JwtResult};
use serde::{Deserialize, Serialize};

/// A relative duration, in seconds or as an expression like `"1h"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timespan {
    /// Second count, used verbatim
    Seconds(i64),
    /// Duration expression such as `"30m"` or `"7d"`
    Expr(String),
}

impl From<i64> for Timespan {
    fn from(seconds: i64) -> Self {
        Timespan::Seconds(seconds)
    }
}

impl From<i32> for Timespan {
    fn from(seconds: i32) -> Self {
        Timespan::Seconds(i64::from(seconds))
    }
}

impl From<u32> for Timespan {
    fn from(seconds: u32) -> Self {
        Timespan::Seconds(i64::from(seconds))
    }
}

impl From<u64> for Timespan {
    fn from(seconds: u64) -> Self {
        Timespan::Seconds(i64::try_from(seconds).unwrap_or(i64::MAX))
    }
}

impl From<&str> for Timespan {
    fn from(expr: &str) -> Self {
        Timespan::Expr(expr.to_string())
    }
}

impl From<String> for Timespan {
    fn from(expr: String) -> Self {
        Timespan::Expr(expr)
    }
}

impl From<chrono::Duration> for Timespan {
    fn from(duration: chrono::Duration) -> Self {
        Timespan::Seconds(duration.num_seconds())
    }
}

impl Timespan {
    /// Resolve to a second count.
    ///
    /// `Ok(None)` means "no claim": zero seconds, zero-valued expressions
    /// such as `"0s"`, and the empty string are treated as not supplied.
    ///
    /// # Errors
    /// Returns `JwtError::InvalidTimespan` if the expression is malformed or
    /// its value does not fit in an `i64`.
    pub fn to_seconds(&self) -> JwtResult<Option<i64>> {
        match self {
            Timespan::Seconds(0) => Ok(None),
            Timespan::Seconds(seconds) => Ok(Some(*seconds)),
            Timespan::Expr(expr) if expr.is_empty() => Ok(None),
            Timespan::Expr(expr) => {
                parse_expr(expr).map(|seconds| (seconds != 0).then_some(seconds))
            }
        }
    }
}

/// Parse an optional timespan into seconds.
///
/// # Errors
/// Returns `JwtError::InvalidTimespan` for malformed expressions.
pub fn parse(input: Option<&Timespan>) -> JwtResult<Option<i64>> {
    match input {
        Some(span) => span.to_seconds(),
        None => Ok(None),
    }
}

fn unit_seconds(unit: char) -> Option<i64> {
    match unit {
        's' => Some(1),
        'm' => Some(60),
        'h' => Some(60 * 60),
        'd' => Some(60 * 60 * 24),
        'w' => Some(60 * 60 * 24 * 7),
        _ => None,
    }
}

fn parse_expr(expr: &str) -> JwtResult<i64> {
    let invalid = || JwtError::invalid_timespan(expr);

    let mut chars = expr.chars();
    let unit = chars.next_back().ok_or_else(invalid)?;
    let digits = chars.as_str();

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let multiplier = unit_seconds(unit).ok_or_else(invalid)?;
    let value: i64 = digits.parse().map_err(|_| invalid())?;

    value.checked_mul(multiplier).ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seconds(expr: &str) -> JwtResult<Option<i64>> {
        Timespan::from(expr).to_seconds()
    }

    #[test]
    fn units() {
        assert_eq!(seconds("45s"), Ok(Some(45)));
        assert_eq!(seconds("5m"), Ok(Some(300)));
        assert_eq!(seconds("1h"), Ok(Some(3600)));
        assert_eq!(seconds("2d"), Ok(Some(172_800)));
        assert_eq!(seconds("1w"), Ok(Some(604_800)));
        assert_eq!(seconds("007m"), Ok(Some(420)));
    }

    #[test]
    fn numbers_are_verbatim() {
        assert_eq!(Timespan::from(120).to_seconds(), Ok(Some(120)));
        assert_eq!(Timespan::from(-30).to_seconds(), Ok(Some(-30)));
        assert_eq!(
            Timespan::from(chrono::Duration::minutes(2)).to_seconds(),
            Ok(Some(120))
        );
    }

    #[test]
    fn absent_and_zero_produce_no_claim() {
        assert_eq!(parse(None), Ok(None));
        assert_eq!(Timespan::from(0).to_seconds(), Ok(None));
        assert_eq!(seconds(""), Ok(None));
    }

    #[test]
    fn zero_expressions_produce_no_claim() {
        for expr in ["0s", "0h", "000m", "0w"] {
            assert_eq!(seconds(expr), Ok(None), "{expr}");
        }
        assert_eq!(seconds("01s"), Ok(Some(1)));
    }

    #[test]
    fn malformed_expressions() {
        for bad in [
            "10x", "1h30m", "1.5h", "-1h", "h", "10", " 1h", "1h ", "1H", "+1h", "１h", "1hh",
        ] {
            assert_eq!(
                seconds(bad),
                Err(JwtError::InvalidTimespan(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn overflow_is_malformed() {
        assert!(seconds("99999999999999999999s").is_err());
        assert!(seconds("9223372036854775807w").is_err());
        assert_eq!(
            seconds("9223372036854775807s"),
            Ok(Some(i64::MAX))
        );
    }

    #[test]
    fn deserializes_numbers_and_strings() {
        let span: Timespan = serde_json::from_str("3600").unwrap();
        assert_eq!(span, Timespan::Seconds(3600));
        let span: Timespan = serde_json::from_str("\"1h\"").unwrap();
        assert_eq!(span, Timespan::Expr("1h".to_string()));
    }
}

//! Temporal claim checks: `exp`, then `nbf`, then `iat`
//!
//! All three use one clock reading and one tolerance. The first failing
//! check wins. Arithmetic saturates, so a huge tolerance can widen the
//! window but never wrap it.

use super::standard_claims::Claims;
use crate::error::{JwtError, JwtResult};

/// Validate time-based claims against `now`
pub(crate) fn validate_time_claims(
    claims: &Claims,
    now: i64,
    tolerance: i64,
    validate_iat: bool,
) -> JwtResult<()> {
    if let Some(exp) = claims.expires_at()?
        && now > exp.saturating_add(tolerance)
    {
        return Err(JwtError::TokenExpired { expired_at: exp });
    }

    if let Some(nbf) = claims.not_before()?
        && now < nbf.saturating_sub(tolerance)
    {
        return Err(JwtError::TokenNotActive { not_before: nbf });
    }

    if validate_iat
        && let Some(iat) = claims.issued_at()?
        && now.saturating_add(tolerance) < iat
    {
        return Err(JwtError::TokenIssuedInFuture { issued_at: iat });
    }

    Ok(())
}

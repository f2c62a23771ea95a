//! Token claims: the open claims map, its builder, and the claim checks
//! run after the signature is verified.

pub mod builder;
pub mod standard_claims;
pub(crate) mod validation;
pub(crate) mod validator;

pub use builder::ClaimsBuilder;
pub use standard_claims::{Claims, ReservedClaims, names};

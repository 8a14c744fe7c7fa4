//! Error types for fluid property evaluation.
//!
//! Per `spec.md` §7, only non-positive temperature/pressure arguments are
//! fatal. Out-of-range table lookups and EOS clamps are recovered locally
//! and are not represented as `Err` — see [`crate::vapor_k::VaporKResult`]
//! and [`crate::eos::ClampReport`].

use thiserror::Error;

pub type FluidResult<T> = Result<T, FluidError>;

#[derive(Error, Debug)]
pub enum FluidError {
    #[error("Invalid property argument: {what} = {value}")]
    InvalidPropertyArgument { what: &'static str, value: f64 },
}

impl FluidError {
    pub(crate) fn require_positive(what: &'static str, value: f64) -> FluidResult<f64> {
        if value > 0.0 && value.is_finite() {
            Ok(value)
        } else {
            Err(FluidError::InvalidPropertyArgument { what, value })
        }
    }
}

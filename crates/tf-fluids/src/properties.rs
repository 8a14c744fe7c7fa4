//! Temperature-dependent thermophysical property correlations for the
//! working fluid (liquid/vapor sodium, `spec.md` §1's "representative
//! configuration").
//!
//! Every function here is pure: no shared state, no I/O. Correlations are
//! engineering approximations in the style of the Fink & Leibowitz sodium
//! property set, chosen to be physically plausible and smooth rather than
//! independently validated (`spec.md` §1 excludes "validated turbulence
//! calibration" as a non-goal; it says nothing about property validation,
//! but this workspace makes no certification claim either way).

use crate::error::{FluidError, FluidResult};

/// Specific gas constant of sodium vapor, J/(kg·K). Matches `Rv` in
/// `spec.md` §6 and is the same constant the EOS refresh in `tf-solver`
/// uses (`spec.md` invariant 2).
pub const RV_SODIUM: f64 = 361.5;

/// Liquid sodium density, kg/m^3. Valid roughly 371-2000 K.
pub fn rho_l(t: f64) -> FluidResult<f64> {
    let t = FluidError::require_positive("rho_l: T", t)?;
    let tr = 1.0 - t / 2503.7;
    Ok(219.0 + 275.32 * tr + 511.58 * tr.max(0.0).sqrt())
}

/// Liquid sodium dynamic viscosity, Pa·s.
pub fn mu_l(t: f64) -> FluidResult<f64> {
    let t = FluidError::require_positive("mu_l: T", t)?;
    Ok((556.835 / t - 0.3958 * t.ln() - 6.4406).exp())
}

/// Liquid sodium thermal conductivity, W/(m·K).
pub fn k_l(t: f64) -> FluidResult<f64> {
    let t = FluidError::require_positive("k_l: T", t)?;
    Ok(124.67 - 0.11381 * t + 5.5226e-5 * t * t - 1.1842e-8 * t * t * t)
}

/// Saturation pressure of sodium, Pa (Clausius–Clapeyron-form correlation).
pub fn p_sat(t: f64) -> FluidResult<f64> {
    let t = FluidError::require_positive("p_sat: T", t)?;
    let ln_p_mmhg = 11.9463 - 12633.73 / t - 0.4672 * t.ln();
    Ok(ln_p_mmhg.exp() * 133.322)
}

/// Derivative dP_sat/dT, Pa/K, from the analytic derivative of [`p_sat`]'s
/// correlation: d(ln P)/dT = B/T^2 - C/T.
pub fn dp_sat_dt(t: f64) -> FluidResult<f64> {
    let p = p_sat(t)?;
    let t = FluidError::require_positive("dp_sat_dt: T", t)?;
    let b = 12633.73;
    let c = 0.4672;
    Ok(p * (b / (t * t) - c / t))
}

/// Latent heat of vaporization, J/kg.
pub fn h_vap(t: f64) -> FluidResult<f64> {
    let t = FluidError::require_positive("h_vap: T", t)?;
    let tr = (1.0 - t / 2503.7).max(0.0);
    let kj_per_kg = 393.37 * tr + 4398.6 * tr.powf(0.29302);
    Ok(kj_per_kg * 1000.0)
}

/// Saturated vapor density, kg/m^3, from the ideal-gas EOS at `p_sat(T)`.
pub fn rho_v(t: f64) -> FluidResult<f64> {
    let t = FluidError::require_positive("rho_v: T", t)?;
    let p = p_sat(t)?;
    Ok(p / (RV_SODIUM * t))
}

/// Sodium vapor dynamic viscosity, Pa·s (power-law fit around 1000 K).
pub fn mu_v(t: f64) -> FluidResult<f64> {
    let t = FluidError::require_positive("mu_v: T", t)?;
    const MU_REF: f64 = 2.2e-5;
    const T_REF: f64 = 1000.0;
    Ok(MU_REF * (t / T_REF).powf(0.65))
}

/// Sodium vapor specific heat at constant pressure, J/(kg·K).
pub fn cp_v(t: f64) -> FluidResult<f64> {
    let t = FluidError::require_positive("cp_v: T", t)?;
    Ok(1050.0 + 0.05 * (t - 1000.0))
}

/// Sodium vapor specific heat at constant volume, J/(kg·K), via the ideal
/// gas relation cv = cp - R.
pub fn cv_v(t: f64) -> FluidResult<f64> {
    let cp = cp_v(t)?;
    Ok(cp - RV_SODIUM)
}

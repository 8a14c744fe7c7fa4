//! Ideal-gas equation of state refresh: `rho = p / (R * max(T, 200))`,
//! with the clamps from `spec.md` invariant 1 (`spec.md` §7 `BoundClamp`).

/// Minimum density floor, kg/m^3 (`spec.md` invariant 1).
pub const RHO_FLOOR: f64 = 1e-6;

/// Minimum temperature floor, K (`spec.md` invariant 1).
pub const T_FLOOR: f64 = 200.0;

/// Non-fatal summary of how many cells needed clamping this refresh.
/// Logged at `tracing::debug!`, never propagated as an error — `spec.md`
/// §7 treats `BoundClamp` as silently recovered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClampReport {
    pub temperature_clamps: usize,
    pub density_clamps: usize,
}

/// Refresh `rho` in place from `(p, T)` via the ideal-gas EOS, clamping `T`
/// and `rho` to their floors. `T` *is* mutated by the floor (`spec.md`
/// invariant 1 requires `T[i] >= 200 K` for all `i`, not just the value
/// fed to the EOS divisor), so `rho[i] = p[i] / (R * t[i])` holds exactly
/// after this call, matching `spec.md` invariant 2 literally.
pub fn refresh_density(r_specific: f64, p: &[f64], t: &mut [f64], rho: &mut [f64]) -> ClampReport {
    debug_assert_eq!(p.len(), t.len());
    debug_assert_eq!(p.len(), rho.len());
    let mut report = ClampReport::default();
    for i in 0..p.len() {
        if t[i] < T_FLOOR {
            report.temperature_clamps += 1;
            t[i] = T_FLOOR;
        }
        let rho_raw = p[i] / (r_specific * t[i]);
        rho[i] = if rho_raw < RHO_FLOOR {
            report.density_clamps += 1;
            RHO_FLOOR
        } else {
            rho_raw
        };
    }
    report
}

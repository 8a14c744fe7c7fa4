//! Primary state fields (`spec.md` §3): `u, p, T, rho` plus optional
//! turbulence state, and the per-step shadow copies taken at the start of
//! a time step.

use crate::grid::Grid;

#[derive(Debug, Clone)]
pub struct Fields {
    pub u: Vec<f64>,
    pub p: Vec<f64>,
    pub t: Vec<f64>,
    pub rho: Vec<f64>,
    pub k_turb: Vec<f64>,
    pub omega_turb: Vec<f64>,
    pub mu_t: Vec<f64>,
}

impl Fields {
    /// Build uniform initial fields. `k0, omega0, mu_t0` seed the
    /// turbulence state even when the closure is disabled, so enabling it
    /// mid-run (not supported, but tested in isolation) starts from a
    /// sane state rather than zeros.
    pub fn uniform(grid: &Grid, u0: f64, p0: f64, t0: f64, k0: f64, omega0: f64, mu_t0: f64) -> Self {
        let n = grid.n;
        Self {
            u: vec![u0; n],
            p: vec![p0; n],
            t: vec![t0; n],
            rho: vec![0.0; n],
            k_turb: vec![k0; n],
            omega_turb: vec![omega0; n],
            mu_t: vec![mu_t0; n],
        }
    }

    pub fn len(&self) -> usize {
        self.u.len()
    }

    pub fn is_empty(&self) -> bool {
        self.u.is_empty()
    }

    pub fn snapshot_old(&self) -> OldFields {
        OldFields {
            t_old: self.t.clone(),
            rho_old: self.rho.clone(),
            p_old: self.p.clone(),
        }
    }
}

/// Shadow copies of `T, rho, p` at the start of a time step (`spec.md`
/// §3). Used by the energy solver's transient/pressure-work terms and the
/// pressure corrector's mass-imbalance term.
#[derive(Debug, Clone)]
pub struct OldFields {
    pub t_old: Vec<f64>,
    pub rho_old: Vec<f64>,
    pub p_old: Vec<f64>,
}

//! Coupled energy solver (`spec.md` §4.5): implicit 1D enthalpy/temperature
//! tridiagonal with convection from the Rhie–Chow face velocities,
//! conduction augmented by the turbulent contribution, transient storage,
//! pressure work, and volumetric sources.

use rayon::prelude::*;

use crate::error::SolverResult;
use crate::face_flux;
use crate::fields::{Fields, OldFields};
use crate::grid::Grid;
use crate::padded_pressure::PaddedPressure;
use crate::sources::SourceFields;
use crate::tridiag::TridiagWorkspace;

pub struct EnergySolver {
    a: Vec<f64>,
    b: Vec<f64>,
    c: Vec<f64>,
    d: Vec<f64>,
    tridiag: TridiagWorkspace,
}

impl EnergySolver {
    pub fn new(n: usize) -> Self {
        Self {
            a: vec![0.0; n],
            b: vec![0.0; n],
            c: vec![0.0; n],
            d: vec![0.0; n],
            tridiag: TridiagWorkspace::new(n),
        }
    }

    /// Assemble and solve for the new temperature field, writing the
    /// result into `fields.t` in place. `k_laminar` is the laminar thermal
    /// conductivity evaluated by the fluid-property provider; `tau` toggles
    /// the turbulent conductivity augmentation (`spec.md` §4.5, §4.6).
    #[allow(clippy::too_many_arguments)]
    pub fn solve(
        &mut self,
        grid: &Grid,
        fields: &mut Fields,
        old: &OldFields,
        sources: &SourceFields,
        b_u: &[f64],
        cp: &[f64],
        k_laminar: &[f64],
        pr_t: f64,
        tau: f64,
        padded_p: &PaddedPressure,
        dt: f64,
        alpha: f64,
    ) -> SolverResult<()> {
        let n = grid.n;
        let dz = grid.dz;

        let u_snapshot = fields.u.clone();
        let rho_snapshot = fields.rho.clone();

        let k_eff: Vec<f64> = (0..n)
            .into_par_iter()
            .map(|i| k_laminar[i] + tau * fields.mu_t[i] * cp[i] / pr_t)
            .collect();

        let faces: Vec<_> = (0..n - 1)
            .into_par_iter()
            .map(|i| {
                face_flux::compute(
                    i,
                    &u_snapshot,
                    b_u,
                    &rho_snapshot,
                    cp,
                    padded_p,
                    dz,
                    alpha,
                )
            })
            .collect();

        let interior: Vec<(usize, f64, f64, f64, f64)> = grid
            .interior()
            .collect::<Vec<_>>()
            .into_par_iter()
            .map(|i| {
                let f_l = faces[i - 1];
                let f_r = faces[i];
                let d_l = 0.5 * (k_eff[i] + k_eff[i - 1]) / dz;
                let d_r = 0.5 * (k_eff[i] + k_eff[i + 1]) / dz;
                let c_l = f_l.mass_flux * f_l.cp_f;
                let c_r = f_r.mass_flux * f_r.cp_f;

                let tau_t = old.rho_old[i] * cp[i] * dz / dt;
                let w = (fields.p[i] - old.p_old[i]) / dt;

                let a_t = -d_l - c_l.max(0.0);
                let c_t = -d_r + (-c_r).max(0.0);
                let b_t = (c_r.max(0.0) - (-c_l).max(0.0)) + d_l + d_r + tau_t;
                let d_t = tau_t * old.t_old[i] + w * dz + sources.st[i] * dz;
                (i, a_t, b_t, c_t, d_t)
            })
            .collect();

        for (i, a_t, b_t, c_t, d_t) in interior {
            self.a[i] = a_t;
            self.b[i] = b_t;
            self.c[i] = c_t;
            self.d[i] = d_t;
        }

        // Zero-gradient at both ends (`spec.md` §9 Open Question resolved
        // in favor of the spec's own zero-gradient direction).
        self.a[0] = 0.0;
        self.b[0] = 1.0;
        self.c[0] = -1.0;
        self.d[0] = 0.0;

        self.a[n - 1] = -1.0;
        self.b[n - 1] = 1.0;
        self.c[n - 1] = 0.0;
        self.d[n - 1] = 0.0;

        self.tridiag
            .solve(&self.a, &self.b, &self.c, &self.d, &mut fields.t)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_field_with_no_sources_stays_uniform() {
        let grid = Grid::new(10, 1.0);
        let mut fields = Fields::uniform(&grid, 0.0, 50_000.0, 900.0, 0.0, 1.0, 0.0);
        for i in 0..grid.n {
            fields.rho[i] = 50_000.0 / (361.5 * 900.0);
        }
        let old = fields.snapshot_old();
        let sources = SourceFields::zeros(grid.n);
        let b_u = vec![1.0; grid.n];
        let cp = vec![1050.0; grid.n];
        let k_laminar = vec![60.0; grid.n];
        let mut padded = PaddedPressure::new(grid.n);
        padded.refresh(&fields.p, 50_000.0);

        let mut energy = EnergySolver::new(grid.n);
        energy
            .solve(
                &grid, &mut fields, &old, &sources, &b_u, &cp, &k_laminar, 0.9, 0.0, &padded,
                1e-3, 1.0,
            )
            .unwrap();

        for t in &fields.t {
            assert!((t - 900.0).abs() < 1e-6);
        }
    }

    #[test]
    fn heat_source_raises_local_temperature() {
        let grid = Grid::new(10, 1.0);
        let mut fields = Fields::uniform(&grid, 0.0, 50_000.0, 900.0, 0.0, 1.0, 0.0);
        for i in 0..grid.n {
            fields.rho[i] = 50_000.0 / (361.5 * 900.0);
        }
        let old = fields.snapshot_old();
        let mut sources = SourceFields::zeros(grid.n);
        sources.st[5] = 1.0e7;
        let b_u = vec![1.0; grid.n];
        let cp = vec![1050.0; grid.n];
        let k_laminar = vec![60.0; grid.n];
        let mut padded = PaddedPressure::new(grid.n);
        padded.refresh(&fields.p, 50_000.0);

        let mut energy = EnergySolver::new(grid.n);
        energy
            .solve(
                &grid, &mut fields, &old, &sources, &b_u, &cp, &k_laminar, 0.9, 0.0, &padded,
                1e-3, 1.0,
            )
            .unwrap();

        assert!(fields.t[5] > 900.0);
    }
}

//! k–ω turbulence closure (`spec.md` §4.6): two independent implicit 1D
//! tridiagonals for turbulent kinetic energy `k` and specific dissipation
//! rate `ω`, with uniform diffusion, linear destruction, shared shear
//! production, and frozen boundary values. Constants are Wilcox's 1988
//! model (`spec.md` §9 Open Question).

use rayon::prelude::*;

use crate::error::SolverResult;
use crate::fields::Fields;
use crate::grid::Grid;
use crate::tridiag::TridiagWorkspace;

pub const BETA_STAR: f64 = 0.09;
pub const BETA: f64 = 0.0750;
pub const SIGMA_K: f64 = 0.5;
pub const SIGMA_OMEGA: f64 = 0.5;

/// Cap on the eddy-viscosity-to-laminar-viscosity ratio, a defensive bound
/// against `omega` collapsing toward zero in a cell with vanishing shear.
const MU_T_RATIO_CAP: f64 = 1000.0;
const OMEGA_FLOOR: f64 = 1.0e-6;

pub struct TurbulenceClosure {
    a_k: Vec<f64>,
    b_k: Vec<f64>,
    c_k: Vec<f64>,
    d_k: Vec<f64>,
    a_w: Vec<f64>,
    b_w: Vec<f64>,
    c_w: Vec<f64>,
    d_w: Vec<f64>,
    tridiag_k: TridiagWorkspace,
    tridiag_w: TridiagWorkspace,
}

impl TurbulenceClosure {
    pub fn new(n: usize) -> Self {
        Self {
            a_k: vec![0.0; n],
            b_k: vec![0.0; n],
            c_k: vec![0.0; n],
            d_k: vec![0.0; n],
            a_w: vec![0.0; n],
            b_w: vec![0.0; n],
            c_w: vec![0.0; n],
            d_w: vec![0.0; n],
            tridiag_k: TridiagWorkspace::new(n),
            tridiag_w: TridiagWorkspace::new(n),
        }
    }

    /// Advance `k`, `omega`, and `mu_t` by one step. `mu_laminar` is the
    /// laminar viscosity evaluated by the fluid-property provider.
    pub fn advance(
        &mut self,
        grid: &Grid,
        fields: &mut Fields,
        mu_laminar: &[f64],
        dt: f64,
    ) -> SolverResult<()> {
        let n = grid.n;
        let dz = grid.dz;

        let k_old = fields.k_turb.clone();
        let omega_old = fields.omega_turb.clone();
        let u_snapshot = fields.u.clone();
        let rho_snapshot = fields.rho.clone();
        let mu_t_snapshot = fields.mu_t.clone();

        let production: Vec<f64> = grid
            .interior()
            .collect::<Vec<_>>()
            .into_par_iter()
            .map(|i| {
                let du_dz = (u_snapshot[i + 1] - u_snapshot[i - 1]) / (2.0 * dz);
                mu_t_snapshot[i] * du_dz * du_dz
            })
            .collect();

        let interior: Vec<(usize, f64, f64, f64, f64, f64, f64, f64, f64)> = grid
            .interior()
            .collect::<Vec<_>>()
            .into_par_iter()
            .zip(production.into_par_iter())
            .map(|(i, pk)| {
                let mu_eff = mu_laminar[i] + mu_t_snapshot[i];
                let d_k = (mu_eff / SIGMA_K) / (dz * dz);
                let d_w = (mu_eff / SIGMA_OMEGA) / (dz * dz);
                let transient = rho_snapshot[i] / dt;
                let omega_i = omega_old[i].max(OMEGA_FLOOR);

                let b_k = transient + 2.0 * d_k + BETA_STAR * rho_snapshot[i] * omega_i;
                let d_k_rhs = transient * k_old[i] + pk;

                let b_w = transient + 2.0 * d_w + BETA * rho_snapshot[i] * omega_i;
                let d_w_rhs = transient * omega_old[i] + pk;

                (i, -d_k, b_k, -d_k, d_k_rhs, -d_w, b_w, -d_w, d_w_rhs)
            })
            .collect();

        for (i, a_k, b_k, c_k, d_k, a_w, b_w, c_w, d_w) in interior {
            self.a_k[i] = a_k;
            self.b_k[i] = b_k;
            self.c_k[i] = c_k;
            self.d_k[i] = d_k;
            self.a_w[i] = a_w;
            self.b_w[i] = b_w;
            self.c_w[i] = c_w;
            self.d_w[i] = d_w;
        }

        // Frozen boundary values (`spec.md` §4.6).
        for (arr_a, arr_b, arr_c, arr_d, boundary_val) in [
            (&mut self.a_k, &mut self.b_k, &mut self.c_k, &mut self.d_k, k_old[0]),
            (&mut self.a_w, &mut self.b_w, &mut self.c_w, &mut self.d_w, omega_old[0]),
        ] {
            arr_a[0] = 0.0;
            arr_b[0] = 1.0;
            arr_c[0] = 0.0;
            arr_d[0] = boundary_val;
        }
        let last = n - 1;
        self.a_k[last] = 0.0;
        self.b_k[last] = 1.0;
        self.c_k[last] = 0.0;
        self.d_k[last] = k_old[last];
        self.a_w[last] = 0.0;
        self.b_w[last] = 1.0;
        self.c_w[last] = 0.0;
        self.d_w[last] = omega_old[last];

        self.tridiag_k
            .solve(&self.a_k, &self.b_k, &self.c_k, &self.d_k, &mut fields.k_turb)?;
        self.tridiag_w.solve(
            &self.a_w,
            &self.b_w,
            &self.c_w,
            &self.d_w,
            &mut fields.omega_turb,
        )?;

        for i in 0..n {
            let omega_safe = fields.omega_turb[i].max(OMEGA_FLOOR);
            let mu_t = fields.rho[i] * fields.k_turb[i] / omega_safe;
            fields.mu_t[i] = mu_t.min(MU_T_RATIO_CAP * mu_laminar[i]);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Fields;

    #[test]
    fn frozen_boundaries_are_unchanged() {
        let grid = Grid::new(10, 1.0);
        let mut fields = Fields::uniform(&grid, 0.3, 50_000.0, 900.0, 0.01, 100.0, 1e-5);
        for i in 0..grid.n {
            fields.rho[i] = 0.2;
        }
        let mu_laminar = vec![3.0e-5; grid.n];

        let mut turb = TurbulenceClosure::new(grid.n);
        turb.advance(&grid, &mut fields, &mu_laminar, 1e-3).unwrap();

        assert_eq!(fields.k_turb[0], 0.01);
        assert_eq!(fields.k_turb[grid.n - 1], 0.01);
        assert_eq!(fields.omega_turb[0], 100.0);
        assert_eq!(fields.omega_turb[grid.n - 1], 100.0);
    }

    #[test]
    fn zero_shear_uniform_field_decays_k_toward_zero_but_stays_finite() {
        let grid = Grid::new(10, 1.0);
        let mut fields = Fields::uniform(&grid, 0.0, 50_000.0, 900.0, 0.01, 100.0, 1e-5);
        for i in 0..grid.n {
            fields.rho[i] = 0.2;
        }
        let mu_laminar = vec![3.0e-5; grid.n];

        let mut turb = TurbulenceClosure::new(grid.n);
        turb.advance(&grid, &mut fields, &mu_laminar, 1e-3).unwrap();

        for k in &fields.k_turb {
            assert!(k.is_finite());
        }
        for mu_t in &fields.mu_t {
            assert!(mu_t.is_finite());
        }
    }
}

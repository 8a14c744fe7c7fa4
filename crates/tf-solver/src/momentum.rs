//! Momentum predictor (`spec.md` §4.3): assembles and solves the implicit
//! 1D momentum tridiagonal for the starred velocity field `u*`.

use rayon::prelude::*;

use crate::error::SolverResult;
use crate::face_flux::{self, FaceFlux};
use crate::fields::Fields;
use crate::grid::Grid;
use crate::padded_pressure::PaddedPressure;
use crate::sources::SourceFields;
use crate::tridiag::TridiagWorkspace;

/// Per-cell momentum tridiagonal coefficients, also the shared state read
/// by the face-flux operator and the pressure corrector's elliptic
/// coefficients (`spec.md` §4.2, §4.4 both reference "the momentum
/// diagonal from the current (or previous) predictor").
pub struct MomentumAssembly {
    pub a: Vec<f64>,
    pub b: Vec<f64>,
    pub c: Vec<f64>,
    pub d: Vec<f64>,
    tridiag: TridiagWorkspace,
    seeded: bool,
}

impl MomentumAssembly {
    pub fn new(n: usize) -> Self {
        Self {
            a: vec![0.0; n],
            b: vec![0.0; n],
            c: vec![0.0; n],
            d: vec![0.0; n],
            tridiag: TridiagWorkspace::new(n),
            seeded: false,
        }
    }

    fn viscous_coefficient(mu_here: f64, mu_neighbor: f64, dz: f64) -> f64 {
        (4.0 / 3.0) * 0.5 * (mu_here + mu_neighbor) / dz
    }

    /// Assemble the momentum coefficients and solve for `u*`, writing the
    /// result into `fields.u` in place. Uses the face-flux operator at
    /// both faces of each interior cell, with `b_u_faces` supplying the
    /// momentum diagonal the Rhie–Chow term reads (the diagonal from the
    /// *previous* call, per `spec.md` §4.2 — on the first call the
    /// diagonal is seeded from `rho * dz / dt`, a reasonable guess that
    /// does not affect the converged solution).
    #[allow(clippy::too_many_arguments)]
    pub fn predict(
        &mut self,
        grid: &Grid,
        fields: &mut Fields,
        sources: &SourceFields,
        mu: &[f64],
        cp: &[f64],
        padded_p: &PaddedPressure,
        dt: f64,
        u_inlet: f64,
        u_outlet: f64,
        alpha: f64,
    ) -> SolverResult<()> {
        let n = grid.n;
        let dz = grid.dz;

        if !self.seeded {
            for i in 0..n {
                self.b[i] = fields.rho[i] * dz / dt;
            }
            self.seeded = true;
        }

        // Per-sweep snapshot: face flux computation only reads
        // pre-sweep state, satisfying the no-concurrent-mutation rule in
        // `spec.md` §5.
        let u_snapshot = fields.u.clone();
        let b_u_snapshot = self.b.clone();

        let faces: Vec<FaceFlux> = (0..n - 1)
            .into_par_iter()
            .map(|i| {
                face_flux::compute(
                    i,
                    &u_snapshot,
                    &b_u_snapshot,
                    &fields.rho,
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
                let f_l = faces[i - 1].mass_flux;
                let f_r = faces[i].mass_flux;
                let d_l = Self::viscous_coefficient(mu[i], mu[i - 1], dz);
                let d_r = Self::viscous_coefficient(mu[i], mu[i + 1], dz);

                let a_u = -f_l.max(0.0) - d_l;
                let c_u = (-f_r).max(0.0) - d_r;
                let b_u = (f_r.max(0.0) - (-f_l).max(0.0)) + fields.rho[i] * dz / dt + d_l + d_r;
                let d_u = -0.5 * (fields.p[i + 1] - fields.p[i - 1])
                    + fields.rho[i] * fields.u[i] * dz / dt
                    + sources.su[i] * dz;
                (i, a_u, b_u, c_u, d_u)
            })
            .collect();

        for (i, a_u, b_u, c_u, d_u) in interior {
            self.a[i] = a_u;
            self.b[i] = b_u;
            self.c[i] = c_u;
            self.d[i] = d_u;
        }

        let d_end_left = (4.0 / 3.0) * mu[0] / dz;
        self.a[0] = 0.0;
        self.b[0] = fields.rho[0] * dz / dt + 2.0 * d_end_left;
        self.c[0] = 0.0;
        self.d[0] = self.b[0] * u_inlet;

        let d_end_right = (4.0 / 3.0) * mu[n - 1] / dz;
        self.a[n - 1] = 0.0;
        self.b[n - 1] = fields.rho[n - 1] * dz / dt + 2.0 * d_end_right;
        self.c[n - 1] = 0.0;
        self.d[n - 1] = self.b[n - 1] * u_outlet;

        self.tridiag
            .solve(&self.a, &self.b, &self.c, &self.d, &mut fields.u)?;
        fields.u[0] = u_inlet;
        fields.u[n - 1] = u_outlet;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Fields;

    #[test]
    fn dirichlet_boundaries_are_exact_after_predict() {
        let grid = Grid::new(20, 1.0);
        let mut fields = Fields::uniform(&grid, 0.5, 50_000.0, 1000.0, 0.0, 1.0, 0.0);
        for i in 0..grid.n {
            fields.rho[i] = 0.2;
        }
        let sources = SourceFields::zeros(grid.n);
        let mu = vec![3.0e-5; grid.n];
        let cp = vec![1050.0; grid.n];
        let mut padded = PaddedPressure::new(grid.n);
        padded.refresh(&fields.p, 50_000.0);

        let mut mom = MomentumAssembly::new(grid.n);
        mom.predict(
            &grid, &mut fields, &sources, &mu, &cp, &padded, 1e-3, 0.3, 0.3, 1.0,
        )
        .unwrap();

        assert_eq!(fields.u[0], 0.3);
        assert_eq!(fields.u[grid.n - 1], 0.3);
    }

    #[test]
    fn first_call_with_a_pressure_differential_stays_finite() {
        // p_outlet != p0 drives the ordinary way: without the b_u seed,
        // the unseeded zero diagonal divides into the first Rhie-Chow
        // term and produces an infinite face velocity on this call.
        let grid = Grid::new(20, 1.0);
        let mut fields = Fields::uniform(&grid, 0.0, 50_000.0, 1000.0, 0.0, 1.0, 0.0);
        for i in 0..grid.n {
            fields.rho[i] = 0.2;
        }
        let sources = SourceFields::zeros(grid.n);
        let mu = vec![3.0e-5; grid.n];
        let cp = vec![1050.0; grid.n];
        let mut padded = PaddedPressure::new(grid.n);
        padded.refresh(&fields.p, 40_000.0);

        let mut mom = MomentumAssembly::new(grid.n);
        mom.predict(
            &grid, &mut fields, &sources, &mu, &cp, &padded, 1e-3, 0.0, 0.0, 1.0,
        )
        .unwrap();

        for &u in &fields.u {
            assert!(u.is_finite());
        }
        for &b in &mom.b {
            assert!(b.is_finite() && b != 0.0);
        }
    }
}

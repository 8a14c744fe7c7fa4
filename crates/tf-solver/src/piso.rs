//! Outer PISO driver (`spec.md` §4.4): one predictor call followed by
//! `corr_iter` correctors, repeated until the pressure corrector's
//! `max|du|` drops to `tol` or `tot_iter` outer passes are spent.

use crate::config::SolverConfig;
use crate::error::SolverResult;
use crate::fields::{Fields, OldFields};
use crate::grid::Grid;
use crate::momentum::MomentumAssembly;
use crate::padded_pressure::PaddedPressure;
use crate::pressure::{PisoOutcome, PressureCorrector};
use crate::sources::SourceFields;

pub struct PisoSolver {
    momentum: MomentumAssembly,
    pressure: PressureCorrector,
}

impl PisoSolver {
    pub fn new(n: usize) -> Self {
        Self {
            momentum: MomentumAssembly::new(n),
            pressure: PressureCorrector::new(n),
        }
    }

    /// Momentum diagonal from the most recent predictor call; the pressure
    /// corrector and the face-flux operator both read it (`spec.md` §4.2,
    /// §4.4).
    pub fn momentum_diagonal(&self) -> &[f64] {
        &self.momentum.b
    }

    #[allow(clippy::too_many_arguments)]
    pub fn step(
        &mut self,
        grid: &Grid,
        fields: &mut Fields,
        old: &OldFields,
        sources: &SourceFields,
        mu: &[f64],
        cp: &[f64],
        padded_p: &mut PaddedPressure,
        cfg: &SolverConfig,
    ) -> SolverResult<PisoOutcome> {
        let alpha = cfg.alpha();
        let mut max_err = f64::INFINITY;
        let mut outer_iterations = 0usize;

        while outer_iterations < cfg.tot_iter && max_err > cfg.tol {
            self.momentum.predict(
                grid,
                fields,
                sources,
                mu,
                cp,
                padded_p,
                cfg.dt,
                cfg.u_inlet,
                cfg.u_outlet,
                alpha,
            )?;

            for _ in 0..cfg.corr_iter {
                max_err = self.pressure.correct(
                    grid,
                    fields,
                    old,
                    sources,
                    &self.momentum.b,
                    cp,
                    padded_p,
                    cfg.r_specific,
                    cfg.dt,
                    cfg.p_outlet,
                    alpha,
                )?;
            }
            outer_iterations += 1;
        }

        Ok(PisoOutcome {
            outer_iterations,
            converged: max_err <= cfg.tol,
            max_err,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piso_step_converges_on_a_quiescent_uniform_field() {
        let grid = Grid::new(20, 1.0);
        let mut fields = Fields::uniform(&grid, 0.0, 50_000.0, 1000.0, 0.0, 1.0, 0.0);
        for i in 0..grid.n {
            fields.rho[i] = 50_000.0 / (361.5 * 1000.0);
        }
        let old = fields.snapshot_old();
        let sources = SourceFields::zeros(grid.n);
        let mu = vec![3.0e-5; grid.n];
        let cp = vec![1050.0; grid.n];
        let mut padded = PaddedPressure::new(grid.n);
        padded.refresh(&fields.p, 50_000.0);

        let cfg = SolverConfig {
            dt: 1e-3,
            r_specific: 361.5,
            rhie_chow_enabled: true,
            corr_iter: 2,
            tot_iter: 200,
            tol: 1e-8,
            pr_t: 0.9,
            turbulence_enabled: false,
            u_inlet: 0.0,
            u_outlet: 0.0,
            p_outlet: 50_000.0,
        };

        let mut solver = PisoSolver::new(grid.n);
        let outcome = solver
            .step(&grid, &mut fields, &old, &sources, &mu, &cp, &mut padded, &cfg)
            .unwrap();

        assert!(outcome.converged);
        assert!(outcome.outer_iterations <= cfg.tot_iter);
    }
}

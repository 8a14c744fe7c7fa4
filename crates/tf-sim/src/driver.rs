//! Time-step driver (`spec.md` §4.7): orchestrates the snapshot → PISO →
//! EOS refresh → turbulence → energy → EOS refresh → output sequence for
//! every step, in strict phase order (`spec.md` §5).

use tf_fluids::properties::{cp_v, mu_v};
use tf_fluids::vapor_k::k_v;
use tf_solver::{Fields, Grid, PaddedPressure, PisoOutcome, PisoSolver, SourceFields, TurbulenceClosure};

use crate::config::SimulationConfig;
use crate::error::SimResult;

/// Per-step reporting (`spec.md` §6 "Console progress", §8 scenario S4).
#[derive(Debug, Clone, Copy)]
pub struct StepDiagnostics {
    pub step: usize,
    pub t: f64,
    pub max_courant: f64,
    pub max_reynolds: f64,
    pub piso: PisoOutcome,
}

#[derive(Debug, Clone)]
pub struct SimulationReport {
    pub fields: Fields,
    pub diagnostics: Vec<StepDiagnostics>,
}

/// Turbulence initial conditions (`spec.md` §4.6): `k0 = 1.5*(I*U_ref)^2`,
/// `omega0 = sqrt(k0) / (0.09^0.25 * L_t)` with `L_t = 0.07*L`, guarding
/// against a zero reference velocity in quiescent runs.
fn initial_turbulence_state(cfg: &SimulationConfig) -> (f64, f64) {
    let u_ref = cfg.u_inlet.abs().max(cfg.u_outlet.abs()).max(1e-3);
    let l_t = 0.07 * cfg.l;
    let k0 = 1.5 * (cfg.turbulence_intensity * u_ref).powi(2);
    let omega0 = k0.sqrt() / (0.09_f64.powf(0.25) * l_t);
    (k0, omega0)
}

pub struct Driver;

impl Driver {
    /// Run the full simulation described by `cfg` and return the
    /// final-step fields together with per-step diagnostics.
    pub fn run(cfg: &SimulationConfig) -> SimResult<SimulationReport> {
        let grid = Grid::new(cfg.n, cfg.l);
        let (k0, omega0) = initial_turbulence_state(cfg);
        let rho0 = cfg.p0 / (cfg.r_specific * cfg.t0);
        let mu_t0 = rho0 * k0 / omega0.max(1e-6);

        let mut fields = Fields::uniform(&grid, cfg.u0, cfg.p0, cfg.t0, k0, omega0, mu_t0);
        tf_fluids::refresh_density(cfg.r_specific, &fields.p, &mut fields.t, &mut fields.rho);

        let sources = SourceFields::zoned(cfg.n, cfg.f_src, cfg.f_snk, cfg.sm_magnitude, cfg.st_magnitude);
        let mut padded_p = PaddedPressure::new(cfg.n);
        padded_p.refresh(&fields.p, cfg.p_outlet);

        let mut piso = PisoSolver::new(cfg.n);
        let mut turbulence = TurbulenceClosure::new(cfg.n);
        let mut energy = tf_solver::energy::EnergySolver::new(cfg.n);

        let solver_cfg = cfg.solver_config();
        let alpha = solver_cfg.alpha();
        let tau = solver_cfg.tau();
        let t_iter = cfg.t_iter();
        let mut diagnostics = Vec::with_capacity(t_iter);

        for step in 0..t_iter {
            let t = (step + 1) as f64 * cfg.dt;
            let old = fields.snapshot_old();

            let mu: Vec<f64> = fields
                .t
                .iter()
                .map(|&ti| mu_v(ti))
                .collect::<tf_fluids::FluidResult<Vec<f64>>>()?;
            let cp: Vec<f64> = fields
                .t
                .iter()
                .map(|&ti| cp_v(ti))
                .collect::<tf_fluids::FluidResult<Vec<f64>>>()?;
            let k_laminar: Vec<f64> = fields
                .t
                .iter()
                .zip(fields.p.iter())
                .map(|(&ti, &pi)| {
                    let r = k_v(ti, pi);
                    if let Some(axis) = r.extrapolated {
                        tracing::debug!(cell_t = ti, cell_p = pi, ?axis, "vapor-k extrapolated");
                    }
                    r.value
                })
                .collect();

            let piso_outcome = piso.step(
                &grid,
                &mut fields,
                &old,
                &sources,
                &mu,
                &cp,
                &mut padded_p,
                &solver_cfg,
            )?;

            let report = tf_fluids::refresh_density(cfg.r_specific, &fields.p, &mut fields.t, &mut fields.rho);
            if report.temperature_clamps > 0 || report.density_clamps > 0 {
                tracing::debug!(?report, "EOS clamp after PISO");
            }

            if cfg.turbulence_enabled {
                turbulence.advance(&grid, &mut fields, &mu, cfg.dt)?;
            }

            energy.solve(
                &grid,
                &mut fields,
                &old,
                &sources,
                piso.momentum_diagonal(),
                &cp,
                &k_laminar,
                cfg.pr_t,
                tau,
                &padded_p,
                cfg.dt,
                alpha,
            )?;

            let report = tf_fluids::refresh_density(cfg.r_specific, &fields.p, &mut fields.t, &mut fields.rho);
            if report.temperature_clamps > 0 || report.density_clamps > 0 {
                tracing::debug!(?report, "EOS clamp after energy solve");
            }

            let max_courant = fields
                .u
                .iter()
                .map(|u| u.abs() * cfg.dt / grid.dz)
                .fold(0.0, f64::max);
            let max_reynolds = fields
                .u
                .iter()
                .zip(fields.rho.iter())
                .zip(mu.iter())
                .map(|((u, rho), m)| rho * u.abs() * grid.dz / m.max(1e-30))
                .fold(0.0, f64::max);

            tracing::info!(
                step,
                t,
                max_courant,
                max_reynolds,
                outer_iterations = piso_outcome.outer_iterations,
                converged = piso_outcome.converged,
                "step complete"
            );

            diagnostics.push(StepDiagnostics {
                step,
                t,
                max_courant,
                max_reynolds,
                piso: piso_outcome,
            });
        }

        Ok(SimulationReport { fields, diagnostics })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiescent_column_stays_quiescent_scenario_s1() {
        let cfg = SimulationConfig::default();
        let report = Driver::run(&cfg).unwrap();

        for &u in &report.fields.u {
            assert!(u.abs() < 1e-10);
        }
        for &p in &report.fields.p {
            assert!((p - 50_000.0).abs() < 1.0);
        }
        for &t in &report.fields.t {
            assert!((t - 1000.0).abs() < 1e-8);
        }
    }

    #[test]
    fn source_sink_balance_drives_positive_midplane_velocity_scenario_s2() {
        let mut cfg = SimulationConfig::default();
        cfg.f_src = 0.2;
        cfg.f_snk = 0.2;
        cfg.sm_magnitude = 0.1;
        cfg.st_magnitude = 5.0e5;
        cfg.t_max = 5.0 * cfg.dt;

        let report = Driver::run(&cfg).unwrap();
        let mid = cfg.n / 2;
        assert!(report.fields.u[mid] > 0.0);
    }

    #[test]
    fn piso_converges_within_outer_iteration_cap_scenario_s4() {
        let mut cfg = SimulationConfig::default();
        cfg.f_src = 0.2;
        cfg.f_snk = 0.2;
        cfg.sm_magnitude = 0.1;
        cfg.st_magnitude = 5.0e5;
        cfg.t_max = 10.0 * cfg.dt;

        let report = Driver::run(&cfg).unwrap();
        for d in &report.diagnostics {
            assert!(d.piso.converged);
            assert!(d.piso.outer_iterations <= 50);
        }
    }

    #[test]
    fn turbulence_toggle_respects_viscosity_cap_scenario_s6() {
        let mut cfg = SimulationConfig::default();
        cfg.f_src = 0.2;
        cfg.f_snk = 0.2;
        cfg.sm_magnitude = 0.1;
        cfg.st_magnitude = 5.0e5;
        cfg.turbulence_enabled = true;
        cfg.t_max = 5.0 * cfg.dt;

        let report = Driver::run(&cfg).unwrap();
        let mu = tf_fluids::properties::mu_v(cfg.t0).unwrap();
        for &mu_t in &report.fields.mu_t {
            assert!(mu_t <= 1000.0 * mu + 1e-12);
        }
    }
}

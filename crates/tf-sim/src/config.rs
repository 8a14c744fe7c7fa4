//! Run configuration (`spec.md` §6): every startup-time constant the
//! driver needs, loadable from YAML or built programmatically.
//!
//! `#[serde(default)]` at the container level means a missing or partial
//! YAML document falls back field-by-field to [`SimulationConfig::default`],
//! which reproduces scenario **S1** (`spec.md` §8) — a quiescent sodium
//! vapor column.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Cell count, N.
    pub n: usize,
    /// Domain length, m.
    pub l: f64,
    /// Time step, s.
    pub dt: f64,
    /// Total simulated time, s. `t_iter = ceil(t_max / dt)`.
    pub t_max: f64,
    /// Outer PISO iteration cap.
    pub tot_iter: usize,
    /// Inner corrector repetitions per predictor call.
    pub corr_iter: usize,
    /// Outer PISO convergence tolerance on `max|du|`.
    pub tol: f64,
    /// Specific gas constant of the working fluid, J/(kg·K).
    pub r_specific: f64,

    /// Initial uniform velocity, m/s.
    pub u0: f64,
    /// Initial uniform pressure, Pa.
    pub p0: f64,
    /// Initial uniform temperature, K.
    pub t0: f64,

    pub u_inlet: f64,
    pub u_outlet: f64,
    pub p_outlet: f64,

    /// Fraction of interior cells (from the inlet) receiving `+Q`.
    pub f_src: f64,
    /// Fraction of interior cells (from the outlet) receiving `-Q`.
    pub f_snk: f64,
    /// Mass source magnitude, kg/(m^3 s).
    pub sm_magnitude: f64,
    /// Volumetric energy source magnitude, W/m^3.
    pub st_magnitude: f64,

    pub rhie_chow_enabled: bool,
    pub turbulence_enabled: bool,
    /// Turbulent Prandtl number.
    pub pr_t: f64,
    /// Turbulence intensity `I`, used to derive `k0` when turbulence is
    /// enabled (`spec.md` §4.6).
    pub turbulence_intensity: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        // Scenario S1, `spec.md` §8: quiescent sodium vapor column.
        Self {
            n: 100,
            l: 1.0,
            dt: 1e-3,
            t_max: 1e-3,
            tot_iter: 200,
            corr_iter: 2,
            tol: 1e-8,
            r_specific: tf_fluids::properties::RV_SODIUM,
            u0: 0.0,
            p0: 50_000.0,
            t0: 1000.0,
            u_inlet: 0.0,
            u_outlet: 0.0,
            p_outlet: 50_000.0,
            f_src: 0.0,
            f_snk: 0.0,
            sm_magnitude: 0.0,
            st_magnitude: 0.0,
            rhie_chow_enabled: true,
            turbulence_enabled: false,
            pr_t: 0.9,
            turbulence_intensity: 0.05,
        }
    }
}

impl SimulationConfig {
    pub fn dz(&self) -> f64 {
        self.l / self.n as f64
    }

    /// `t_iter = ceil(t_max / dt)` (`spec.md` §4.7).
    pub fn t_iter(&self) -> usize {
        (self.t_max / self.dt).ceil() as usize
    }

    pub fn solver_config(&self) -> tf_solver::SolverConfig {
        tf_solver::SolverConfig {
            dt: self.dt,
            r_specific: self.r_specific,
            rhie_chow_enabled: self.rhie_chow_enabled,
            corr_iter: self.corr_iter,
            tot_iter: self.tot_iter,
            tol: self.tol,
            pr_t: self.pr_t,
            turbulence_enabled: self.turbulence_enabled,
            u_inlet: self.u_inlet,
            u_outlet: self.u_outlet,
            p_outlet: self.p_outlet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_scenario_s1() {
        let cfg = SimulationConfig::default();
        assert_eq!(cfg.n, 100);
        assert_eq!(cfg.t_iter(), 1);
        assert!((cfg.dz() - 0.01).abs() < 1e-12);
    }

    #[test]
    fn empty_yaml_document_falls_back_to_defaults() {
        let cfg: SimulationConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(cfg.p0, 50_000.0);
        assert_eq!(cfg.t0, 1000.0);
    }

    #[test]
    fn partial_yaml_overrides_only_named_fields() {
        let cfg: SimulationConfig = serde_yaml::from_str("n: 200\nt_max: 0.01\n").unwrap();
        assert_eq!(cfg.n, 200);
        assert_eq!(cfg.t0, 1000.0);
    }
}

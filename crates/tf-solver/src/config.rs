//! Numeric configuration consumed by the PISO assembly and solve
//! functions (`spec.md` §6). Grid geometry and initial conditions live in
//! [`crate::grid::Grid`] and [`crate::fields::Fields`]; this struct holds
//! the per-step physical/numeric constants.

#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Time step, s.
    pub dt: f64,
    /// Specific gas constant of the working fluid, J/(kg·K).
    pub r_specific: f64,
    /// Rhie–Chow toggle (`spec.md` §4.2's `alpha in {0,1}`).
    pub rhie_chow_enabled: bool,
    /// Inner corrector repetitions per predictor call (`spec.md` §4.4).
    pub corr_iter: usize,
    /// Outer PISO iteration cap (`spec.md` §4.4).
    pub tot_iter: usize,
    /// Outer PISO convergence tolerance on `max|du|` (`spec.md` §4.4).
    pub tol: f64,
    /// Turbulent Prandtl number (`spec.md` §4.5).
    pub pr_t: f64,
    /// Turbulence closure toggle (`spec.md` §4.6, `tau in {0,1}`).
    pub turbulence_enabled: bool,
    pub u_inlet: f64,
    pub u_outlet: f64,
    pub p_outlet: f64,
}

impl SolverConfig {
    /// `alpha` as the multiplier used directly in the Rhie–Chow formula.
    pub fn alpha(&self) -> f64 {
        if self.rhie_chow_enabled {
            1.0
        } else {
            0.0
        }
    }

    /// `tau` as the multiplier used directly in the energy conductivity
    /// formula.
    pub fn tau(&self) -> f64 {
        if self.turbulence_enabled {
            1.0
        } else {
            0.0
        }
    }
}

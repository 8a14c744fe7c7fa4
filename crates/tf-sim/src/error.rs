//! Error types for the time-step driver (`spec.md` §7).

use thiserror::Error;

pub type SimResult<T> = Result<T, SimError>;

#[derive(Error, Debug)]
pub enum SimError {
    #[error(transparent)]
    Solver(#[from] tf_solver::SolverError),

    #[error(transparent)]
    Fluid(#[from] tf_fluids::FluidError),
}

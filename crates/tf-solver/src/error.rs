//! Error types for the core PISO solver (`spec.md` §7).

use thiserror::Error;

pub type SolverResult<T> = Result<T, SolverError>;

#[derive(Error, Debug)]
pub enum SolverError {
    /// Thomas-algorithm forward-elimination pivot rounded to zero. Fatal:
    /// the step that produced it cannot be completed. `spec.md` §4.1, §7.
    #[error("Tridiagonal solve broke down at row {row} (pivot={pivot:e})")]
    NumericalBreakdown { row: usize, pivot: f64 },

    /// A property provider call received a non-positive temperature or
    /// pressure where positivity is required. Fatal, `spec.md` §7.
    #[error("Invalid property argument: {0}")]
    InvalidPropertyArgument(#[from] tf_fluids::FluidError),

    #[error("Invalid solver configuration: {what}")]
    InvalidConfig { what: &'static str },
}

//! Top-level error type for run orchestration (`spec.md` §6, §7): wraps
//! the simulation error plus the ambient I/O and configuration-parsing
//! failures that only arise at this layer.

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Sim(#[from] tf_sim::SimError),

    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Config(#[from] serde_yaml::Error),
}

impl AppError {
    /// Process exit code (`spec.md` §6): 0 on completion, nonzero on
    /// `NumericalBreakdown` or an invalid property argument. Configuration
    /// and I/O failures also exit nonzero, distinguished from a failed
    /// simulation step.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Sim(tf_sim::SimError::Solver(
                tf_solver::SolverError::NumericalBreakdown { .. },
            )) => 1,
            AppError::Sim(tf_sim::SimError::Solver(
                tf_solver::SolverError::InvalidPropertyArgument(_),
            )) => 1,
            AppError::Sim(_) => 1,
            AppError::Io(_) => 2,
            AppError::Config(_) => 2,
        }
    }
}

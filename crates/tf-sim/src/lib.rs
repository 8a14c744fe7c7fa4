//! tf-sim: run configuration, the time-step driver, and profile output for
//! the pipe-flow solver (`spec.md` §4.7, §6).

pub mod config;
pub mod driver;
pub mod error;
pub mod output;

pub use config::SimulationConfig;
pub use driver::{Driver, SimulationReport, StepDiagnostics};
pub use error::{SimError, SimResult};

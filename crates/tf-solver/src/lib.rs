//! tf-solver: the compressible PISO pipe-flow core (`spec.md` §4).
//!
//! Owns the grid, field, and source-term data model plus every numerical
//! operator that advances them one time step: the Thomas tridiagonal
//! solver, the Rhie–Chow face-flux operator, the momentum predictor, the
//! pressure corrector's outer PISO loop, the coupled energy solver, and
//! the optional k–ω turbulence closure. Does not know about fluid
//! property correlations (that's `tf-fluids`) or run orchestration,
//! configuration loading, or output (that's `tf-sim`/`tf-app`).

pub mod config;
pub mod energy;
pub mod error;
pub mod face_flux;
pub mod fields;
pub mod grid;
pub mod momentum;
pub mod padded_pressure;
pub mod piso;
pub mod pressure;
pub mod sources;
pub mod tridiag;
pub mod turbulence;

pub use config::SolverConfig;
pub use error::{SolverError, SolverResult};
pub use fields::{Fields, OldFields};
pub use grid::Grid;
pub use padded_pressure::PaddedPressure;
pub use piso::PisoSolver;
pub use pressure::PisoOutcome;
pub use sources::SourceFields;
pub use turbulence::TurbulenceClosure;

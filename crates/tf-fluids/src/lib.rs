//! tf-fluids: thermophysical property provider for the pipe-flow solver.
//!
//! Provides the pure property functions of `spec.md` §6 for a single
//! working fluid (liquid/vapor sodium) plus the ideal-gas EOS refresh used
//! by the solver's time-step driver. No backend process or FFI library is
//! involved — every function is a closed-form correlation or a small
//! immutable lookup table, matching the property functions the solver's
//! hot loop calls once per cell per step.
//!
//! # Example
//!
//! ```
//! use tf_fluids::properties::{rho_l, p_sat};
//!
//! let rho = rho_l(800.0).unwrap();
//! let p = p_sat(1000.0).unwrap();
//! assert!(rho > 0.0 && p > 0.0);
//! ```

pub mod eos;
pub mod error;
pub mod properties;
pub mod vapor_k;

pub use eos::{refresh_density, ClampReport, RHO_FLOOR, T_FLOOR};
pub use error::{FluidError, FluidResult};
pub use vapor_k::{k_v, ExtrapolationAxis, VaporKResult};

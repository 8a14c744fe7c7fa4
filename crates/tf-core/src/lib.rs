//! tf-core: stable foundation for the pipe-flow solver.
//!
//! Contains:
//! - numeric (`Real` + tolerances + float helpers shared by every crate)
//! - error (shared error taxonomy, `spec.md` §7)

pub mod error;
pub mod numeric;

pub use error::{TfError, TfResult};
pub use numeric::*;

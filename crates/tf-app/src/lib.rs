//! tf-app: run orchestration and exit-code mapping for the pipe-flow
//! solver CLI (`spec.md` §6).

pub mod error;
pub mod run_service;

pub use error::{AppError, AppResult};

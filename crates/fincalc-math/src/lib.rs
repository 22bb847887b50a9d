//! # Fincalc Math
//!
//! Root-finding utilities for the fincalc calculator engine.
//!
//! This crate provides:
//!
//! - **Solvers**: a bracketed bisection root-finder with configurable
//!   tolerance and iteration budget
//! - **Errors**: the shared numerical error taxonomy
//!
//! ## Design Philosophy
//!
//! - **Deterministic**: every call is a single bounded loop of closed-form
//!   evaluations; there is no retry logic and no hidden state
//! - **Numerical Stability**: edge cases (same-sign brackets, non-finite
//!   inputs) are rejected up front instead of surfacing as NaN downstream
//! - **Best-effort degradation**: an exhausted iteration budget yields the
//!   last midpoint rather than an error, so callers always get the most
//!   accurate answer the budget allowed

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::similar_names)]
#![allow(clippy::float_cmp)]

pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::solvers::{bisection, SolverConfig, SolverResult};
}

pub use error::{MathError, MathResult};

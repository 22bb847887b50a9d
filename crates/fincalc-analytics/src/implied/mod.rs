//! Implied-value solvers.
//!
//! The compound-interest equation has closed forms for future value,
//! present value, and the level payment, but not for the rate or the
//! period count; a discounted-cash-flow series likewise has no closed form
//! for "which flow at period `k` hits this target NPV". The functions here
//! invert those equations numerically: each one wraps the corresponding
//! formula from [`crate::tvm`] in a residual closure and brackets it with
//! [`fincalc_math::solvers::bisection`].
//!
//! All solvers return `Option<f64>`: `None` means the bracket held no root
//! or the search failed to converge — "no solution found", never an error
//! worth a stack trace. Failures are logged at debug level.

mod cashflow;
mod compound;

pub use cashflow::implied_cash_flow;
pub use compound::{implied_periods, implied_rate};

use fincalc_math::solvers::SolverConfig;

/// Convergence tolerance shared by the implied-value solvers.
const SOLVER_TOLERANCE: f64 = 1e-6;

/// Iteration budget shared by the implied-value solvers.
const SOLVER_MAX_ITERATIONS: u32 = 200;

/// Solver configuration shared by the implied-value solvers.
fn solver_config() -> SolverConfig {
    SolverConfig::new(SOLVER_TOLERANCE, SOLVER_MAX_ITERATIONS)
}

//! Root-finding for equations with no closed-form inverse.
//!
//! The calculator inverts its compound-interest and discounted-cash-flow
//! formulas numerically. Those residual functions are cheap to evaluate and
//! always solved over a known bracket, so the solver of choice is
//! [`bisection`]: linear convergence, but guaranteed progress whenever the
//! bracket contains a sign change.
//!
//! # Example: implied growth rate
//!
//! ```rust
//! use fincalc_math::solvers::{bisection, SolverConfig};
//!
//! // At what per-period rate does 1000 grow to 1628.89 over 10 periods?
//! let f = |r: f64| 1000.0 * (1.0 + r / 100.0).powi(10) - 1628.89;
//!
//! let config = SolverConfig::default().with_max_iterations(200);
//! let result = bisection(f, 0.0, 100.0, &config).unwrap();
//! assert!((result.root - 5.0).abs() < 1e-4);
//! ```

mod bisection;

pub use bisection::bisection;

/// Default tolerance for root-finding.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Default maximum iterations for root-finding.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Tolerance for convergence.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at the root).
    pub residual: f64,
}

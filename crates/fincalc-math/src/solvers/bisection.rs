//! Bisection root-finding algorithm.

use log::warn;

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Bisection root-finding algorithm.
///
/// A bracketing method that repeatedly halves the interval and keeps the
/// subinterval containing the sign change.
///
/// Requires: `f(a) * f(b) <= 0` (opposite signs at the endpoints). A bracket
/// with no sign change is the only hard failure; if the iteration budget
/// runs out before the tolerance is met, the final midpoint is returned as a
/// best-effort approximation rather than an error.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `a` - One end of the bracket
/// * `b` - The other end of the bracket
/// * `config` - Solver configuration
///
/// # Returns
///
/// The root and iteration statistics, or [`MathError::InvalidBracket`] when
/// the endpoints do not straddle a root.
///
/// # Example
///
/// ```rust
/// use fincalc_math::solvers::{bisection, SolverConfig};
///
/// // Find root of x^2 - 4 (i.e., 2)
/// let f = |x: f64| x * x - 4.0;
///
/// let result = bisection(f, 0.0, 3.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - 2.0).abs() < 1e-6);
/// ```
pub fn bisection<F>(mut f: F, a: f64, b: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: FnMut(f64) -> f64,
{
    if !a.is_finite() || !b.is_finite() {
        return Err(MathError::invalid_input(format!(
            "bracket endpoints must be finite, got [{a}, {b}]"
        )));
    }

    let mut lo = a.min(b);
    let mut hi = a.max(b);

    let mut f_lo = f(lo);
    let f_hi = f(hi);

    if !f_lo.is_finite() || !f_hi.is_finite() {
        return Err(MathError::invalid_input(format!(
            "function is not finite at the bracket endpoints: f({lo}) = {f_lo}, f({hi}) = {f_hi}"
        )));
    }

    // Check that a root is bracketed
    if f_lo * f_hi > 0.0 {
        return Err(MathError::InvalidBracket {
            a: lo,
            b: hi,
            fa: f_lo,
            fb: f_hi,
        });
    }

    // Handle case where an endpoint is already the root
    if f_lo.abs() < config.tolerance {
        return Ok(SolverResult {
            root: lo,
            iterations: 0,
            residual: f_lo,
        });
    }
    if f_hi.abs() < config.tolerance {
        return Ok(SolverResult {
            root: hi,
            iterations: 0,
            residual: f_hi,
        });
    }

    let mut mid = (lo + hi) / 2.0;
    let mut f_mid = f(mid);

    for iteration in 0..config.max_iterations {
        // Check for convergence
        if f_mid.abs() < config.tolerance || (hi - lo).abs() < config.tolerance {
            return Ok(SolverResult {
                root: mid,
                iterations: iteration + 1,
                residual: f_mid,
            });
        }

        // Narrow the bracket, preserving the sign change
        if f_mid * f_lo < 0.0 {
            hi = mid;
        } else {
            lo = mid;
            f_lo = f_mid;
        }

        mid = (lo + hi) / 2.0;
        f_mid = f(mid);
    }

    // Budget exhausted: the midpoint is still the best available estimate.
    warn!(
        "bisection exhausted {} iterations (residual {:.2e}); returning best-effort midpoint",
        config.max_iterations, f_mid
    );
    Ok(SolverResult {
        root: mid,
        iterations: config.max_iterations,
        residual: f_mid,
    })
}

//! Implied rate and period count for the compound-interest equation.

use fincalc_core::PaymentTiming;
use fincalc_math::solvers::bisection;
use log::debug;

use super::solver_config;
use crate::tvm::future_value;

/// Rate bracket in percent: anything from a near-total loss per period to
/// a tenfold gain.
const RATE_BRACKET: (f64, f64) = (-99.0, 1000.0);

/// Period bracket: a fraction of a period up to ten thousand periods.
const PERIOD_BRACKET: (f64, f64) = (0.1, 10_000.0);

/// Per-period rate (in percent) at which `pv` grows to `fv` over
/// `periods` periods with payment `pmt`.
///
/// Finds the root of `future_value(pv, rate, periods, pmt, timing) - fv`
/// over the bracket `[-99, 1000]` percent. Returns `None` when the bracket
/// holds no sign change (no rate in range can reach the target).
///
/// # Example
///
/// ```rust
/// use fincalc_analytics::implied::implied_rate;
/// use fincalc_core::PaymentTiming;
///
/// let rate = implied_rate(1000.0, 1628.89, 10.0, 0.0, PaymentTiming::End).unwrap();
/// assert!((rate - 5.0).abs() < 1e-4);
/// ```
#[must_use]
pub fn implied_rate(pv: f64, fv: f64, periods: f64, pmt: f64, timing: PaymentTiming) -> Option<f64> {
    let residual = |rate: f64| future_value(pv, rate, periods, pmt, timing) - fv;

    match bisection(residual, RATE_BRACKET.0, RATE_BRACKET.1, &solver_config()) {
        Ok(result) => Some(result.root),
        Err(err) => {
            debug!("implied rate has no solution: {err}");
            None
        }
    }
}

/// Number of periods (possibly fractional) over which `pv` grows to `fv`
/// at `rate` percent with payment `pmt`.
///
/// Same residual as [`implied_rate`], solved as a function of the period
/// count over the bracket `[0.1, 10000]`.
#[must_use]
pub fn implied_periods(pv: f64, fv: f64, rate: f64, pmt: f64, timing: PaymentTiming) -> Option<f64> {
    let residual = |periods: f64| future_value(pv, rate, periods, pmt, timing) - fv;

    match bisection(residual, PERIOD_BRACKET.0, PERIOD_BRACKET.1, &solver_config()) {
        Ok(result) => Some(result.root),
        Err(err) => {
            debug!("implied period count has no solution: {err}");
            None
        }
    }
}

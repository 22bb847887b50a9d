//! Discounted-cash-flow formulas.

use log::debug;

/// Convergence tolerance for the IRR iteration.
const IRR_TOLERANCE: f64 = 1e-6;

/// Iteration budget for the IRR iteration.
const IRR_MAX_ITERATIONS: u32 = 100;

/// Below this derivative magnitude the Newton step is considered stalled.
const IRR_DERIVATIVE_FLOOR: f64 = 1e-10;

/// Default starting point for the IRR iteration (10%, as a fraction).
const IRR_DEFAULT_GUESS: f64 = 0.1;

/// Net present value of a cash-flow series at a fixed discount rate.
///
/// `npv = sum(cf_i / (1+r)^i)` where `i` is the index in the series; the
/// flow at index 0 (conventionally the initial outlay) is undiscounted.
///
/// # Example
///
/// ```rust
/// use fincalc_analytics::tvm::net_present_value;
///
/// let npv = net_present_value(&[-1000.0, 300.0, 400.0, 500.0], 10.0);
/// assert!((npv - -21.04).abs() < 0.01);
/// ```
#[must_use]
pub fn net_present_value(cash_flows: &[f64], rate: f64) -> f64 {
    let r = rate / 100.0;
    cash_flows
        .iter()
        .enumerate()
        .map(|(i, cf)| cf / (1.0 + r).powi(i as i32))
        .sum()
}

/// Net present value under a different discount rate for every period.
///
/// The flow at index 0 is undiscounted; each later flow is discounted by
/// the running product of `(1 + rates[0..i-1] / 100)`. `rates` carries one
/// entry per discounted period, i.e. `cash_flows.len() - 1` entries.
///
/// The discount factor accumulates sequentially on purpose — the
/// period-by-period rounding is part of the observable contract and must
/// not be collapsed into a product expression.
#[must_use]
pub fn net_present_value_variable(cash_flows: &[f64], rates: &[f64]) -> f64 {
    let Some((&initial, future)) = cash_flows.split_first() else {
        return 0.0;
    };
    debug_assert_eq!(rates.len(), future.len(), "one rate per discounted period");

    let mut npv = initial;
    let mut discount = 1.0;
    for (cf, rate) in future.iter().zip(rates) {
        discount *= 1.0 + rate / 100.0;
        npv += cf / discount;
    }
    npv
}

/// Internal rate of return of a cash-flow series, as a percentage.
///
/// Equivalent to [`internal_rate_of_return_with_guess`] starting from 10%.
#[must_use]
pub fn internal_rate_of_return(cash_flows: &[f64]) -> Option<f64> {
    internal_rate_of_return_with_guess(cash_flows, IRR_DEFAULT_GUESS)
}

/// Internal rate of return from a caller-supplied starting fraction.
///
/// Newton-Raphson on `npv(x) = 0` over the fractional rate `x`, using the
/// analytical derivative `sum(-t * cf_t / (1+x)^(t+1))`. On success the
/// rate is returned as a percentage, so it can be fed straight back into
/// [`net_present_value`].
///
/// Returns `None` when the iteration stalls on a near-zero derivative,
/// when an iterate falls below `-1` (which would make `1 + x`
/// non-positive), or when the budget of 100 iterations runs out. `None`
/// means "no rate found", not an error.
#[must_use]
pub fn internal_rate_of_return_with_guess(cash_flows: &[f64], guess: f64) -> Option<f64> {
    let mut x = guess;

    for _ in 0..IRR_MAX_ITERATIONS {
        let npv = npv_at_fraction(cash_flows, x);
        if npv.abs() < IRR_TOLERANCE {
            return Some(x * 100.0);
        }

        let derivative = npv_derivative_at_fraction(cash_flows, x);
        if derivative.abs() < IRR_DERIVATIVE_FLOOR {
            debug!("IRR stalled at x = {x}: derivative {derivative:.2e} is near zero");
            return None;
        }

        x -= npv / derivative;

        if x < -1.0 {
            debug!("IRR iterate {x} left the valid rate domain");
            return None;
        }
    }

    debug!("IRR did not converge within {IRR_MAX_ITERATIONS} iterations");
    None
}

/// Profitability index: present value of the flows after the initial
/// outlay, divided by the outlay's magnitude.
///
/// Returns `None` when the series is empty or the initial outlay is exactly
/// zero (the index is undefined without an investment to compare against).
#[must_use]
pub fn profitability_index(cash_flows: &[f64], rate: f64) -> Option<f64> {
    let (&initial, future) = cash_flows.split_first()?;
    if initial == 0.0 {
        return None;
    }

    let r = rate / 100.0;
    let pv: f64 = future
        .iter()
        .enumerate()
        .map(|(i, cf)| cf / (1.0 + r).powi(i as i32 + 1))
        .sum();
    Some(pv / initial.abs())
}

/// NPV over the fractional rate `x` (IRR iteration residual).
fn npv_at_fraction(cash_flows: &[f64], x: f64) -> f64 {
    cash_flows
        .iter()
        .enumerate()
        .map(|(t, cf)| cf / (1.0 + x).powi(t as i32))
        .sum()
}

/// Derivative of [`npv_at_fraction`] with respect to `x`.
fn npv_derivative_at_fraction(cash_flows: &[f64], x: f64) -> f64 {
    cash_flows
        .iter()
        .enumerate()
        .map(|(t, cf)| -(t as f64) * cf / (1.0 + x).powi(t as i32 + 1))
        .sum()
}

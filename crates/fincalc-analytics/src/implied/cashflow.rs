//! Implied cash flow for a target net present value.

use fincalc_core::RateSchedule;
use fincalc_math::solvers::bisection;
use log::debug;

use super::solver_config;
use crate::tvm::{net_present_value, net_present_value_variable};

/// Cash-flow bracket: ten billion in either direction.
const CASH_FLOW_BRACKET: (f64, f64) = (-1e10, 1e10);

/// The flow at `solver_period` that makes the series discount to
/// `target_npv`.
///
/// Substitutes the unknown into a local copy of the series — the caller's
/// series is never touched — and solves `npv(x) - target_npv = 0` over the
/// bracket `[-1e10, 1e10]`. Discounting is fixed or sequential-variable
/// per `rates`.
///
/// Returns `None` when `solver_period` is out of range, when a variable
/// rate schedule is not aligned with the series, or when the bracket holds
/// no solution.
///
/// # Example
///
/// ```rust
/// use fincalc_analytics::implied::implied_cash_flow;
/// use fincalc_core::RateSchedule;
///
/// // What must period 2 pay for the whole series to break even at 10%?
/// let flows = [-1000.0, 500.0, 0.0];
/// let rates = RateSchedule::fixed(10.0);
/// let x = implied_cash_flow(&flows, 2, 0.0, &rates).unwrap();
/// assert!(x > 0.0);
/// ```
#[must_use]
pub fn implied_cash_flow(
    cash_flows: &[f64],
    solver_period: usize,
    target_npv: f64,
    rates: &RateSchedule,
) -> Option<f64> {
    if solver_period >= cash_flows.len() {
        debug!(
            "solver period {solver_period} is outside the series (len {})",
            cash_flows.len()
        );
        return None;
    }
    if !rates.is_aligned_with(cash_flows.len()) {
        debug!("rate schedule {rates} is not aligned with {} flows", cash_flows.len());
        return None;
    }

    let mut trial = cash_flows.to_vec();
    let residual = |x: f64| {
        trial[solver_period] = x;
        let npv = match rates {
            RateSchedule::Fixed(rate) => net_present_value(&trial, *rate),
            RateSchedule::Variable(per_period) => net_present_value_variable(&trial, per_period),
        };
        npv - target_npv
    };

    match bisection(residual, CASH_FLOW_BRACKET.0, CASH_FLOW_BRACKET.1, &solver_config()) {
        Ok(result) => Some(result.root),
        Err(err) => {
            debug!("implied cash flow has no solution: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_solved_flow_hits_target_fixed() {
        let flows = [-1000.0, 0.0, 400.0, 500.0];
        let rates = RateSchedule::fixed(10.0);

        let x = implied_cash_flow(&flows, 1, 0.0, &rates).unwrap();

        let mut solved = flows;
        solved[1] = x;
        assert_relative_eq!(net_present_value(&solved, 10.0), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_solved_flow_hits_target_variable() {
        let flows = [-1000.0, 300.0, 0.0];
        let rates = RateSchedule::variable(vec![8.0, 12.0]);

        let x = implied_cash_flow(&flows, 2, 50.0, &rates).unwrap();

        let mut solved = flows;
        solved[2] = x;
        assert_relative_eq!(
            net_present_value_variable(&solved, &[8.0, 12.0]),
            50.0,
            epsilon = 1e-5
        );
    }

    #[test]
    fn test_solving_initial_outlay() {
        // Period 0 is undiscounted, so the answer is exact arithmetic.
        let flows = [0.0, 110.0];
        let rates = RateSchedule::fixed(10.0);

        let x = implied_cash_flow(&flows, 0, 0.0, &rates).unwrap();
        assert_relative_eq!(x, -100.0, epsilon = 1e-5);
    }

    #[test]
    fn test_caller_series_untouched() {
        let flows = vec![-1000.0, 0.0, 400.0];
        let rates = RateSchedule::fixed(10.0);

        let _ = implied_cash_flow(&flows, 1, 0.0, &rates);
        assert_eq!(flows, vec![-1000.0, 0.0, 400.0]);
    }

    #[test]
    fn test_out_of_range_period() {
        let rates = RateSchedule::fixed(10.0);
        assert_eq!(implied_cash_flow(&[-100.0, 50.0], 2, 0.0, &rates), None);
    }

    #[test]
    fn test_misaligned_variable_rates() {
        let rates = RateSchedule::variable(vec![10.0]);
        assert_eq!(
            implied_cash_flow(&[-100.0, 50.0, 60.0], 1, 0.0, &rates),
            None
        );
    }
}

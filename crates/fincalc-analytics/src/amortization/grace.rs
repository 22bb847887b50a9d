//! Grace-period schedules.

use fincalc_core::{AmortizationRow, AmortizationSchedule, PaymentTiming};
use log::debug;

use super::monthly_rate;

/// Schedule with an interest-only grace window before principal repayment.
///
/// As currently generated, every period before the last is interest-only
/// and the full principal is repaid in the final period together with that
/// period's interest charge. The `grace_periods` argument is threaded
/// through from the UI but not consulted by the iteration, so it does not
/// yet shorten or lengthen the interest-only window.
#[must_use]
// TODO: honor grace_periods once product owners confirm the intended
// post-grace amortization pattern.
pub fn grace_schedule(
    principal: f64,
    rate: f64,
    periods: u32,
    grace_periods: u32,
    _timing: PaymentTiming,
) -> AmortizationSchedule {
    let mut schedule = AmortizationSchedule::with_capacity(periods as usize);
    if periods == 0 {
        return schedule;
    }
    if grace_periods > 0 && grace_periods != periods.saturating_sub(1) {
        debug!(
            "grace window of {grace_periods} periods requested; schedule treats all {} pre-final periods as interest-only",
            periods - 1
        );
    }

    let r = monthly_rate(rate);
    let interest_payment = principal * r;

    for period in 1..=periods {
        let is_final = period == periods;
        let principal_payment = if is_final { principal } else { 0.0 };
        let remaining_balance = if is_final { 0.0 } else { principal };

        schedule.push(AmortizationRow::new(
            period,
            principal_payment,
            interest_payment,
            remaining_balance,
        ));
    }

    schedule
}

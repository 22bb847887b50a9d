//! Balloon (interest-only) schedules.

use fincalc_core::{AmortizationRow, AmortizationSchedule, PaymentTiming};

use super::monthly_rate;

/// Interest-only schedule with a lump-sum principal repayment at the end.
///
/// Every period charges interest on the full, unamortized principal — the
/// final period included, where the whole principal is repaid alongside
/// one last interest charge. The balance never declines before the final
/// period, so payment timing does not affect the figures; the parameter is
/// accepted for signature uniformity with the other generators.
#[must_use]
pub fn balloon_schedule(
    principal: f64,
    rate: f64,
    periods: u32,
    _timing: PaymentTiming,
) -> AmortizationSchedule {
    let mut schedule = AmortizationSchedule::with_capacity(periods as usize);
    if periods == 0 {
        return schedule;
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

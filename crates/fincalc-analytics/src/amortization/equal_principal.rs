//! Equal-principal (shpitzer) schedules.

use fincalc_core::{AmortizationRow, AmortizationSchedule, PaymentTiming};

use super::monthly_rate;

/// Schedule repaying the same principal slice every period.
///
/// Each period repays `principal / periods` (capped at the remaining
/// balance), with interest charged on the declining balance — on the
/// balance before the principal payment for end-of-period payments, after
/// it for begin-of-period payments. Total payments decline as the balance
/// shrinks.
///
/// # Example
///
/// ```rust
/// use fincalc_analytics::amortization::equal_principal_schedule;
/// use fincalc_core::PaymentTiming;
///
/// let schedule = equal_principal_schedule(1200.0, 12.0, 12, PaymentTiming::End);
/// let first = &schedule.as_slice()[0];
/// assert!((first.principal_payment - 100.0).abs() < 1e-9);
/// assert!((first.interest_payment - 12.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn equal_principal_schedule(
    principal: f64,
    rate: f64,
    periods: u32,
    timing: PaymentTiming,
) -> AmortizationSchedule {
    let mut schedule = AmortizationSchedule::with_capacity(periods as usize);
    if periods == 0 {
        return schedule;
    }

    let r = monthly_rate(rate);
    let slice = principal / f64::from(periods);
    let mut balance = principal;

    for period in 1..=periods {
        let principal_payment = slice.min(balance);
        let balance_after = (balance - principal_payment).max(0.0);

        let interest_basis = if timing.is_begin() { balance_after } else { balance };
        let interest_payment = interest_basis * r;

        schedule.push(AmortizationRow::new(
            period,
            principal_payment,
            interest_payment,
            balance_after,
        ));
        balance = balance_after;
    }

    schedule
}

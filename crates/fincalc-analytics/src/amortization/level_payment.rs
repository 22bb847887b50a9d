//! Level-payment (annuity) schedules.

use fincalc_core::{AmortizationRow, AmortizationSchedule, PaymentTiming};

use super::monthly_rate;

/// Level total payment for the annuity formula.
///
/// `principal * r / (1 - (1+r)^-n)` for end-of-period payments, divided by
/// `(1+r)` for begin-of-period payments; a zero rate degrades to
/// `principal / n`.
fn level_payment(principal: f64, r: f64, periods: u32, timing: PaymentTiming) -> f64 {
    if r == 0.0 {
        return principal / f64::from(periods);
    }
    let base = principal * r / (1.0 - (1.0 + r).powi(-(periods as i32)));
    if timing.is_begin() {
        base / (1.0 + r)
    } else {
        base
    }
}

/// Schedule with a level total payment every period.
///
/// The classic annuity loan: for end-of-period payments, each period
/// charges interest on the balance before the payment and repays the rest
/// of the level payment as principal. For begin-of-period payments the
/// level payment is sized down by `(1+r)`, the payment's principal portion
/// is applied first, and interest accrues on the balance that remains.
/// The principal portion is always capped at the remaining balance.
#[must_use]
pub fn level_payment_schedule(
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
    let pmt = level_payment(principal, r, periods, timing);
    let mut balance = principal;

    for period in 1..=periods {
        let (principal_payment, interest_payment, balance_after) = if timing.is_begin() {
            let principal_payment = pmt.min(balance);
            let balance_after = (balance - principal_payment).max(0.0);
            (principal_payment, balance_after * r, balance_after)
        } else {
            let interest_payment = balance * r;
            let principal_payment = (pmt - interest_payment).min(balance);
            let balance_after = (balance - principal_payment).max(0.0);
            (principal_payment, interest_payment, balance_after)
        };

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

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_total_payment_is_level() {
        let schedule = level_payment_schedule(1200.0, 12.0, 12, PaymentTiming::End);
        let first_total = schedule.as_slice()[0].total_payment;

        // Constant except floating-point residue on the final row
        for row in schedule.iter().take(11) {
            assert_relative_eq!(row.total_payment, first_total, epsilon = 1e-9);
        }
        let last = schedule.as_slice().last().unwrap();
        assert_relative_eq!(last.total_payment, first_total, epsilon = 1e-6);
    }

    #[test]
    fn test_matches_annuity_formula() {
        let schedule = level_payment_schedule(1200.0, 12.0, 12, PaymentTiming::End);
        // 1200 at 1% monthly over 12 months
        let expected = 1200.0 * 0.01 / (1.0 - 1.01f64.powi(-12));
        assert_relative_eq!(
            schedule.as_slice()[0].total_payment,
            expected,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_principal_conservation() {
        let schedule = level_payment_schedule(1200.0, 12.0, 12, PaymentTiming::End);
        assert_relative_eq!(schedule.total_principal(), 1200.0, epsilon = 1e-6);
        assert!(schedule.as_slice().last().unwrap().remaining_balance < 1e-6);
    }

    #[test]
    fn test_principal_portion_grows() {
        let schedule = level_payment_schedule(1200.0, 12.0, 12, PaymentTiming::End);
        let principals: Vec<f64> = schedule.iter().map(|row| row.principal_payment).collect();
        assert!(principals.windows(2).all(|pair| pair[1] > pair[0]));
    }

    #[test]
    fn test_begin_timing_sizes_payment_down() {
        let end = level_payment_schedule(1200.0, 12.0, 12, PaymentTiming::End);
        let begin = level_payment_schedule(1200.0, 12.0, 12, PaymentTiming::Begin);

        let end_pmt = end.as_slice()[0].total_payment;
        let begin_principal = begin.as_slice()[0].principal_payment;
        assert_relative_eq!(begin_principal, end_pmt / 1.01, epsilon = 1e-6);
        assert_relative_eq!(begin.total_principal(), 1200.0, epsilon = 1e-6);
    }

    #[test]
    fn test_zero_rate_splits_evenly() {
        let schedule = level_payment_schedule(1200.0, 0.0, 12, PaymentTiming::End);
        for row in schedule.iter() {
            assert_relative_eq!(row.principal_payment, 100.0, epsilon = 1e-9);
            assert_relative_eq!(row.interest_payment, 0.0);
        }
    }

    #[test]
    fn test_zero_periods_is_empty() {
        assert!(level_payment_schedule(1200.0, 12.0, 0, PaymentTiming::End).is_empty());
    }
}

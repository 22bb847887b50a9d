//! Schedule range summaries.

use fincalc_core::{AmortizationSchedule, ScheduleSummary};

/// Sums principal, interest, and total payments over the rows whose period
/// lies in `[from_period, to_period]` inclusive.
///
/// The schedule must come from one of the generators in this module;
/// passing a range that intersects no rows yields a zero summary.
///
/// # Example
///
/// ```rust
/// use fincalc_analytics::amortization::{calculate_summary, equal_principal_schedule};
/// use fincalc_core::PaymentTiming;
///
/// let schedule = equal_principal_schedule(1200.0, 12.0, 12, PaymentTiming::End);
/// let summary = calculate_summary(&schedule, 1, 6);
/// assert!((summary.total_principal - 600.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn calculate_summary(
    schedule: &AmortizationSchedule,
    from_period: u32,
    to_period: u32,
) -> ScheduleSummary {
    let mut summary = ScheduleSummary::default();
    for row in schedule.rows_in_range(from_period, to_period) {
        summary.total_principal += row.principal_payment;
        summary.total_interest += row.interest_payment;
        summary.total_payment += row.total_payment;
    }
    summary
}

/// Totals over the whole schedule.
#[must_use]
pub fn summarize(schedule: &AmortizationSchedule) -> ScheduleSummary {
    calculate_summary(schedule, 1, schedule.len() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amortization::equal_principal_schedule;
    use approx::assert_relative_eq;
    use fincalc_core::PaymentTiming;

    #[test]
    fn test_range_is_inclusive() {
        let schedule = equal_principal_schedule(1200.0, 12.0, 12, PaymentTiming::End);
        let summary = calculate_summary(&schedule, 3, 5);
        // Three rows of 100 principal each
        assert_relative_eq!(summary.total_principal, 300.0, epsilon = 1e-9);
    }

    #[test]
    fn test_full_range_conserves_principal() {
        let schedule = equal_principal_schedule(1200.0, 12.0, 12, PaymentTiming::End);
        let summary = summarize(&schedule);
        assert_relative_eq!(summary.total_principal, 1200.0, epsilon = 1e-6);
        assert_relative_eq!(
            summary.total_payment,
            summary.total_principal + summary.total_interest,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_disjoint_range_is_zero() {
        let schedule = equal_principal_schedule(1200.0, 12.0, 12, PaymentTiming::End);
        let summary = calculate_summary(&schedule, 20, 30);
        assert_relative_eq!(summary.total_payment, 0.0);
    }

    #[test]
    fn test_split_ranges_sum_to_whole() {
        let schedule = equal_principal_schedule(1200.0, 12.0, 12, PaymentTiming::End);
        let head = calculate_summary(&schedule, 1, 6);
        let tail = calculate_summary(&schedule, 7, 12);
        let whole = summarize(&schedule);
        assert_relative_eq!(
            head.total_interest + tail.total_interest,
            whole.total_interest,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_empty_schedule() {
        let summary = summarize(&AmortizationSchedule::new());
        assert_relative_eq!(summary.total_principal, 0.0);
    }
}

//! Loan amortization schedules.
//!
//! Four stateless generators, one per repayment policy, each producing an
//! [`AmortizationSchedule`](fincalc_core::AmortizationSchedule) with rows
//! numbered `1..=periods`:
//!
//! - [`equal_principal_schedule`]: the same principal slice every period,
//!   interest on the declining balance (level principal, declining total)
//! - [`level_payment_schedule`]: principal sized so the total payment is
//!   level (the classic annuity loan)
//! - [`balloon_schedule`]: interest-only periods with one lump-sum
//!   principal repayment at the end
//! - [`grace_schedule`]: interest-only periods before principal repayment
//!   begins
//!
//! Rates are nominal annual percentages and rows are monthly; the timing
//! argument selects whether interest accrues on the balance before
//! (end-of-period payments) or after (begin-of-period payments) that
//! period's principal payment. Every computed balance is clamped at zero.
//! Requesting zero periods yields an empty schedule; validating
//! user-supplied domains (positive principal, sane rates) is the caller's
//! job.
//!
//! [`calculate_summary`] and [`summarize`] aggregate an existing schedule
//! for the UI and the spreadsheet exporter.

mod balloon;
mod equal_principal;
mod grace;
mod level_payment;
mod summary;

pub use balloon::balloon_schedule;
pub use equal_principal::equal_principal_schedule;
pub use grace::grace_schedule;
pub use level_payment::level_payment_schedule;
pub use summary::{calculate_summary, summarize};

use fincalc_core::{AmortizationSchedule, PaymentTiming};
use serde::{Deserialize, Serialize};

/// Months per year, for converting nominal annual rates to period rates.
pub(crate) const MONTHS_PER_YEAR: f64 = 12.0;

/// Converts a nominal annual percentage to a monthly rate fraction.
pub(crate) fn monthly_rate(rate: f64) -> f64 {
    rate / 100.0 / MONTHS_PER_YEAR
}

/// A repayment policy, as selected in the calculator UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmortizationMethod {
    /// Equal principal slice every period (shpitzer).
    EqualPrincipal,
    /// Level total payment every period (annuity loan).
    LevelPayment,
    /// Interest-only until a final lump-sum principal repayment.
    Balloon,
    /// Interest-only grace window before principal repayment.
    Grace {
        /// Declared number of interest-only periods.
        grace_periods: u32,
    },
}

/// Generates a schedule under the given repayment policy.
///
/// Dispatch point for callers that carry the policy as data (the UI's
/// policy selector); each arm delegates to the matching generator.
#[must_use]
pub fn generate_schedule(
    method: AmortizationMethod,
    principal: f64,
    rate: f64,
    periods: u32,
    timing: PaymentTiming,
) -> AmortizationSchedule {
    match method {
        AmortizationMethod::EqualPrincipal => {
            equal_principal_schedule(principal, rate, periods, timing)
        }
        AmortizationMethod::LevelPayment => level_payment_schedule(principal, rate, periods, timing),
        AmortizationMethod::Balloon => balloon_schedule(principal, rate, periods, timing),
        AmortizationMethod::Grace { grace_periods } => {
            grace_schedule(principal, rate, periods, grace_periods, timing)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_dispatch_matches_generators() {
        let direct = equal_principal_schedule(1200.0, 12.0, 12, PaymentTiming::End);
        let dispatched = generate_schedule(
            AmortizationMethod::EqualPrincipal,
            1200.0,
            12.0,
            12,
            PaymentTiming::End,
        );
        assert_eq!(direct, dispatched);
    }

    #[test]
    fn test_dispatch_grace_carries_parameter() {
        let direct = grace_schedule(1200.0, 12.0, 12, 3, PaymentTiming::End);
        let dispatched = generate_schedule(
            AmortizationMethod::Grace { grace_periods: 3 },
            1200.0,
            12.0,
            12,
            PaymentTiming::End,
        );
        assert_eq!(direct, dispatched);
    }

    #[test]
    fn test_monthly_rate_conversion() {
        assert_relative_eq!(monthly_rate(12.0), 0.01, epsilon = 1e-12);
        assert_relative_eq!(monthly_rate(0.0), 0.0);
    }
}

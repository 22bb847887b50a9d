//! Discount rate schedules.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The discount rates applied to a cash-flow series.
///
/// Either one fixed percentage applied to every period, or an ordered
/// sequence of per-period percentages aligned by index to the periods they
/// discount. A variable schedule for a series of `n` cash flows carries
/// `n - 1` rates: the flow at index 0 is never discounted.
///
/// # Example
///
/// ```rust
/// use fincalc_core::RateSchedule;
///
/// let fixed = RateSchedule::fixed(8.0);
/// assert!(fixed.is_aligned_with(12));
///
/// let variable = RateSchedule::variable(vec![8.0, 9.0, 10.0]);
/// assert!(variable.is_aligned_with(4));
/// assert!(!variable.is_aligned_with(5));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateSchedule {
    /// One percentage applied to every period.
    Fixed(f64),
    /// One percentage per period, in period order.
    Variable(Vec<f64>),
}

impl RateSchedule {
    /// Creates a fixed-rate schedule.
    #[must_use]
    pub fn fixed(rate: f64) -> Self {
        RateSchedule::Fixed(rate)
    }

    /// Creates a variable-rate schedule from per-period rates.
    #[must_use]
    pub fn variable(rates: Vec<f64>) -> Self {
        RateSchedule::Variable(rates)
    }

    /// Returns true for a fixed-rate schedule.
    #[must_use]
    pub fn is_fixed(&self) -> bool {
        matches!(self, RateSchedule::Fixed(_))
    }

    /// Checks alignment against a cash-flow series of `num_flows` entries.
    ///
    /// A fixed schedule aligns with any series; a variable schedule must
    /// carry exactly one rate per discounted period (`num_flows - 1`).
    #[must_use]
    pub fn is_aligned_with(&self, num_flows: usize) -> bool {
        match self {
            RateSchedule::Fixed(_) => true,
            RateSchedule::Variable(rates) => num_flows > 0 && rates.len() == num_flows - 1,
        }
    }
}

impl fmt::Display for RateSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RateSchedule::Fixed(rate) => write!(f, "fixed {rate}%"),
            RateSchedule::Variable(rates) => write!(f, "variable ({} periods)", rates.len()),
        }
    }
}

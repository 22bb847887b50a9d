//! Payment timing within a period.

use serde::{Deserialize, Serialize};
use std::fmt;

/// When a periodic payment falls within its period.
///
/// `End` is the ordinary-annuity convention (payments at the end of each
/// period); `Begin` is the annuity-due convention (payments at the start).
/// Compounding formulas multiply the annuity factor by `(1 + r)` for
/// `Begin`, and amortization generators use it to decide whether interest
/// accrues on the balance before or after that period's principal payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentTiming {
    /// Payment at the end of each period (ordinary annuity).
    #[default]
    End,
    /// Payment at the beginning of each period (annuity-due).
    Begin,
}

impl PaymentTiming {
    /// Returns true for the annuity-due convention.
    #[must_use]
    pub fn is_begin(self) -> bool {
        matches!(self, PaymentTiming::Begin)
    }
}

impl fmt::Display for PaymentTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PaymentTiming::End => "end",
            PaymentTiming::Begin => "begin",
        };
        write!(f, "{name}")
    }
}

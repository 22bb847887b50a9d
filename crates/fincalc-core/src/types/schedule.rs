//! Amortization schedule rows and summaries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry of an amortization schedule.
///
/// Field order matters: the spreadsheet exporter consumes the fields in
/// exactly this order (period, principal, interest, total, balance) and
/// applies two-decimal formatting upstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// Period number, 1-based.
    pub period: u32,
    /// Principal repaid this period.
    pub principal_payment: f64,
    /// Interest charged this period.
    pub interest_payment: f64,
    /// Total paid this period (`principal_payment + interest_payment`).
    pub total_payment: f64,
    /// Balance outstanding after this period, clamped at zero.
    pub remaining_balance: f64,
}

impl AmortizationRow {
    /// Creates a row, deriving the total payment from its parts.
    #[must_use]
    pub fn new(period: u32, principal_payment: f64, interest_payment: f64, remaining_balance: f64) -> Self {
        Self {
            period,
            principal_payment,
            interest_payment,
            total_payment: principal_payment + interest_payment,
            remaining_balance,
        }
    }
}

impl fmt::Display for AmortizationRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{}: principal {:.2}, interest {:.2}, total {:.2}, balance {:.2}",
            self.period,
            self.principal_payment,
            self.interest_payment,
            self.total_payment,
            self.remaining_balance
        )
    }
}

/// An ordered amortization schedule.
///
/// Rows are kept in period order, numbered `1..=periods`. The schedule is an
/// immutable result of a single generator call; totals and range summaries
/// are derived views over it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    /// Ordered list of rows.
    rows: Vec<AmortizationRow>,
}

impl AmortizationSchedule {
    /// Creates an empty schedule.
    #[must_use]
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Creates a schedule with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rows: Vec::with_capacity(capacity),
        }
    }

    /// Appends a row.
    pub fn push(&mut self, row: AmortizationRow) {
        self.rows.push(row);
    }

    /// Returns the rows as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[AmortizationRow] {
        &self.rows
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the schedule has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns an iterator over the rows.
    pub fn iter(&self) -> impl Iterator<Item = &AmortizationRow> {
        self.rows.iter()
    }

    /// Returns the rows whose period lies in `[from_period, to_period]`
    /// inclusive.
    pub fn rows_in_range(
        &self,
        from_period: u32,
        to_period: u32,
    ) -> impl Iterator<Item = &AmortizationRow> {
        self.rows
            .iter()
            .filter(move |row| row.period >= from_period && row.period <= to_period)
    }

    /// Total principal repaid over the whole schedule.
    #[must_use]
    pub fn total_principal(&self) -> f64 {
        self.rows.iter().map(|row| row.principal_payment).sum()
    }

    /// Total interest charged over the whole schedule.
    #[must_use]
    pub fn total_interest(&self) -> f64 {
        self.rows.iter().map(|row| row.interest_payment).sum()
    }

    /// Total amount paid over the whole schedule.
    #[must_use]
    pub fn total_payment(&self) -> f64 {
        self.rows.iter().map(|row| row.total_payment).sum()
    }
}

impl IntoIterator for AmortizationSchedule {
    type Item = AmortizationRow;
    type IntoIter = std::vec::IntoIter<AmortizationRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a AmortizationSchedule {
    type Item = &'a AmortizationRow;
    type IntoIter = std::slice::Iter<'a, AmortizationRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl FromIterator<AmortizationRow> for AmortizationSchedule {
    fn from_iter<I: IntoIterator<Item = AmortizationRow>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

/// Aggregated totals over a period range of an amortization schedule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    /// Sum of principal payments in the range.
    pub total_principal: f64,
    /// Sum of interest payments in the range.
    pub total_interest: f64,
    /// Sum of total payments in the range.
    pub total_payment: f64,
}

impl fmt::Display for ScheduleSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "principal {:.2}, interest {:.2}, total {:.2}",
            self.total_principal, self.total_interest, self.total_payment
        )
    }
}

//! # Fincalc Core
//!
//! Core value types for the fincalc calculator engine.
//!
//! This crate defines the data shapes shared between the calculation
//! engine and its consumers (the UI layer and the spreadsheet exporter):
//!
//! - [`PaymentTiming`]: ordinary annuity vs. annuity-due
//! - [`RateSchedule`]: a fixed per-period rate or one rate per period
//! - [`AmortizationRow`] / [`AmortizationSchedule`]: loan schedule rows
//! - [`ScheduleSummary`]: aggregated totals over a period range
//!
//! Every type is an immutable value produced by a single call and owned by
//! the caller; nothing here holds state between calls.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod types;

pub use types::{
    AmortizationRow, AmortizationSchedule, PaymentTiming, RateSchedule, ScheduleSummary,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::types::{
        AmortizationRow, AmortizationSchedule, PaymentTiming, RateSchedule, ScheduleSummary,
    };
}

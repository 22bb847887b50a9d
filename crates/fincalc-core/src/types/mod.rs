//! Value types shared across the calculator engine.

mod rates;
mod schedule;
mod timing;

pub use rates::RateSchedule;
pub use schedule::{AmortizationRow, AmortizationSchedule, ScheduleSummary};
pub use timing::PaymentTiming;

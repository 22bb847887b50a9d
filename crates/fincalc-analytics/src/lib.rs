//! # Fincalc Analytics
//!
//! The calculation engine of the fincalc financial calculator.
//!
//! This crate consolidates the calculator's numeric operations:
//!
//! - **TVM**: closed-form time-value-of-money formulas — future value,
//!   present value, level payment, NPV, IRR, profitability index, with
//!   fixed- and variable-rate variants
//! - **Implied values**: numerical inversion of the formulas that have no
//!   closed-form solution — implied rate, implied period count, and the
//!   unknown cash flow that hits a target NPV
//! - **Amortization**: loan schedule generation under four repayment
//!   policies, plus range summaries for the exporter
//!
//! ## Architecture
//!
//! `fincalc-analytics` depends on `fincalc-core` for the value types shared
//! with the UI and exporter, and on `fincalc-math` for root-finding. Neither
//! of those crates depends back on this one; all calculation logic lives
//! here.
//!
//! ## Conventions
//!
//! Rates are percentages (`5.0` means 5%). TVM rates are per period;
//! the amortization generators take a nominal annual rate and produce
//! monthly rows. Operations that can legitimately find no answer return
//! `Option<f64>` — `None` means "no solution", never a caller error.
//!
//! ## Usage
//!
//! ```rust
//! use fincalc_analytics::prelude::*;
//! use fincalc_core::PaymentTiming;
//!
//! // 1000 invested at 5% per period for 10 periods
//! let fv = future_value(1000.0, 5.0, 10.0, 0.0, PaymentTiming::End);
//! assert!((fv - 1628.89).abs() < 0.01);
//!
//! // Which rate turns 1000 into that future value?
//! let rate = implied_rate(1000.0, fv, 10.0, 0.0, PaymentTiming::End).unwrap();
//! assert!((rate - 5.0).abs() < 1e-4);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod amortization;
pub mod implied;
pub mod tvm;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::amortization::{
        balloon_schedule, calculate_summary, equal_principal_schedule, generate_schedule,
        grace_schedule, level_payment_schedule, summarize, AmortizationMethod,
    };
    pub use crate::implied::{implied_cash_flow, implied_periods, implied_rate};
    pub use crate::tvm::{
        future_value, future_value_variable, internal_rate_of_return,
        internal_rate_of_return_with_guess, net_present_value, net_present_value_variable,
        payment, present_value, profitability_index,
    };
}

//! Time-value-of-money formulas.
//!
//! Closed-form compounding and discounting. All functions here are pure and
//! referentially transparent; rates are percentages per period (`5.0` means
//! 5% each period).
//!
//! Two formula families:
//!
//! - **Compounding** ([`future_value`], [`present_value`], [`payment`] and
//!   the variable-rate [`future_value_variable`]): a present amount and an
//!   optional level payment accumulated over `n` periods.
//! - **Discounting** ([`net_present_value`],
//!   [`net_present_value_variable`], [`internal_rate_of_return`],
//!   [`profitability_index`]): a cash-flow series discounted back to
//!   period 0.
//!
//! Every formula branches explicitly on a zero rate instead of relying on a
//! division-by-zero signal, and the variable-rate variants apply their rates
//! strictly in sequence — the period-by-period rounding is part of the
//! observable contract.

mod compound;
mod discounting;

pub use compound::{future_value, future_value_variable, payment, present_value};
pub use discounting::{
    internal_rate_of_return, internal_rate_of_return_with_guess, net_present_value,
    net_present_value_variable, profitability_index,
};

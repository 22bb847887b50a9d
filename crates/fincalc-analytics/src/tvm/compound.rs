//! Compound-interest closed forms.

use fincalc_core::PaymentTiming;

/// Annuity accumulation factor `((1+r)^n - 1) / r`, adjusted for timing.
///
/// Annuity-due payments earn one extra period of interest each.
fn annuity_factor(r: f64, growth: f64, timing: PaymentTiming) -> f64 {
    let factor = (growth - 1.0) / r;
    if timing.is_begin() {
        factor * (1.0 + r)
    } else {
        factor
    }
}

/// Future value of a present amount plus a level periodic payment.
///
/// `fv = pv * (1+r)^n + pmt * ((1+r)^n - 1)/r`, with the annuity term
/// multiplied by `(1+r)` for begin-of-period payments. A zero rate degrades
/// to `pv + pmt * n`.
///
/// `periods` is real-valued; fractional period counts arise when this
/// formula is used as a residual for the implied-periods solver.
///
/// # Example
///
/// ```rust
/// use fincalc_analytics::tvm::future_value;
/// use fincalc_core::PaymentTiming;
///
/// let fv = future_value(1000.0, 5.0, 10.0, 0.0, PaymentTiming::End);
/// assert!((fv - 1628.894627).abs() < 1e-6);
/// ```
#[must_use]
pub fn future_value(pv: f64, rate: f64, periods: f64, pmt: f64, timing: PaymentTiming) -> f64 {
    let r = rate / 100.0;
    if r == 0.0 {
        return pv + pmt * periods;
    }
    let growth = (1.0 + r).powf(periods);
    pv * growth + pmt * annuity_factor(r, growth, timing)
}

/// Future value under a different rate for every period.
///
/// Applies the recurrence `fv <- (fv + pmt) * (1 + r_i)` for begin-of-period
/// payments, `fv <- fv * (1 + r_i) + pmt` otherwise, in slice order.
///
/// The loop must stay sequential: reassociating it into a product or power
/// expression changes the floating-point rounding, and downstream consumers
/// compare against period-by-period application bit-for-bit.
#[must_use]
pub fn future_value_variable(pv: f64, rates: &[f64], pmt: f64, timing: PaymentTiming) -> f64 {
    let mut fv = pv;
    for rate in rates {
        let growth = 1.0 + rate / 100.0;
        fv = if timing.is_begin() {
            (fv + pmt) * growth
        } else {
            fv * growth + pmt
        };
    }
    fv
}

/// Present value equivalent to a future amount plus a level payment stream.
///
/// Algebraic inverse of [`future_value`]; a zero rate degrades to
/// `fv - pmt * n`.
#[must_use]
pub fn present_value(fv: f64, rate: f64, periods: f64, pmt: f64, timing: PaymentTiming) -> f64 {
    let r = rate / 100.0;
    if r == 0.0 {
        return fv - pmt * periods;
    }
    let growth = (1.0 + r).powf(periods);
    (fv - pmt * annuity_factor(r, growth, timing)) / growth
}

/// Level periodic payment that carries `pv` to `fv` over `periods` periods.
///
/// Solves the future-value closed form for the payment directly; no
/// iteration is needed. A positive result is the annuity payment drawing the
/// present amount down toward the target. A zero rate degrades to
/// `-(fv - pv) / n`.
///
/// # Example
///
/// ```rust
/// use fincalc_analytics::tvm::payment;
/// use fincalc_core::PaymentTiming;
///
/// // Amortize 1200 to zero over 12 periods at 1% per period
/// let pmt = payment(1200.0, 0.0, 1.0, 12.0, PaymentTiming::End);
/// assert!((pmt - 106.6186).abs() < 1e-4);
/// ```
#[must_use]
pub fn payment(pv: f64, fv: f64, rate: f64, periods: f64, timing: PaymentTiming) -> f64 {
    let r = rate / 100.0;
    if r == 0.0 {
        return -(fv - pv) / periods;
    }
    let growth = (1.0 + r).powf(periods);
    (pv * growth - fv) / annuity_factor(r, growth, timing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_future_value_lump_sum() {
        // 1000 * 1.05^10
        let fv = future_value(1000.0, 5.0, 10.0, 0.0, PaymentTiming::End);
        assert_relative_eq!(fv, 1628.894626777442, epsilon = 1e-9);
    }

    #[test]
    fn test_future_value_zero_rate() {
        let fv = future_value(1000.0, 0.0, 10.0, 50.0, PaymentTiming::End);
        assert_relative_eq!(fv, 1500.0);
    }

    #[test]
    fn test_future_value_with_payments() {
        // Annuity of 100 at 5% for 3 periods: 100*(1.05^2 + 1.05 + 1)
        let fv = future_value(0.0, 5.0, 3.0, 100.0, PaymentTiming::End);
        assert_relative_eq!(fv, 315.25, epsilon = 1e-10);
    }

    #[test]
    fn test_future_value_begin_earns_extra_period() {
        let end = future_value(0.0, 5.0, 3.0, 100.0, PaymentTiming::End);
        let begin = future_value(0.0, 5.0, 3.0, 100.0, PaymentTiming::Begin);
        assert_relative_eq!(begin, end * 1.05, epsilon = 1e-10);
    }

    #[test]
    fn test_variable_matches_fixed_when_rates_equal() {
        let fixed = future_value(1000.0, 5.0, 4.0, 100.0, PaymentTiming::End);
        let variable =
            future_value_variable(1000.0, &[5.0, 5.0, 5.0, 5.0], 100.0, PaymentTiming::End);
        assert_relative_eq!(fixed, variable, epsilon = 1e-9);
    }

    #[test]
    fn test_variable_is_order_sensitive() {
        // Hand-rolled: ((1000*1.03 + 10)*1.07 + 10)
        let fv = future_value_variable(1000.0, &[3.0, 7.0], 10.0, PaymentTiming::End);
        assert_relative_eq!(fv, (1000.0f64 * 1.03 + 10.0) * 1.07 + 10.0);
    }

    #[test]
    fn test_variable_begin_timing() {
        // ((1000+10)*1.03 + 10)*1.07
        let fv = future_value_variable(1000.0, &[3.0, 7.0], 10.0, PaymentTiming::Begin);
        assert_relative_eq!(fv, ((1000.0f64 + 10.0) * 1.03 + 10.0) * 1.07);
    }

    #[test]
    fn test_variable_empty_rates() {
        let fv = future_value_variable(1000.0, &[], 100.0, PaymentTiming::End);
        assert_relative_eq!(fv, 1000.0);
    }

    #[test]
    fn test_present_value_round_trip() {
        let fv = future_value(2500.0, 7.5, 20.0, 0.0, PaymentTiming::End);
        let pv = present_value(fv, 7.5, 20.0, 0.0, PaymentTiming::End);
        assert_relative_eq!(pv, 2500.0, epsilon = 1e-6);
    }

    #[test]
    fn test_present_value_round_trip_with_payments() {
        let fv = future_value(2500.0, 7.5, 20.0, 150.0, PaymentTiming::Begin);
        let pv = present_value(fv, 7.5, 20.0, 150.0, PaymentTiming::Begin);
        assert_relative_eq!(pv, 2500.0, epsilon = 1e-6);
    }

    #[test]
    fn test_present_value_zero_rate() {
        let pv = present_value(1500.0, 0.0, 10.0, 50.0, PaymentTiming::End);
        assert_relative_eq!(pv, 1000.0);
    }

    #[test]
    fn test_payment_amortizes_to_target() {
        let pmt = payment(1200.0, 0.0, 1.0, 12.0, PaymentTiming::End);
        assert_relative_eq!(pmt, 106.6185, epsilon = 1e-3);

        // The computed payment must close the gap it was solved for:
        // compounded principal minus accumulated payments lands on fv.
        let growth = 1.01f64.powi(12);
        let accumulated = pmt * (growth - 1.0) / 0.01;
        assert_relative_eq!(1200.0 * growth - accumulated, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_payment_zero_rate() {
        let pmt = payment(1200.0, 0.0, 0.0, 12.0, PaymentTiming::End);
        assert_relative_eq!(pmt, 100.0);
    }

    #[test]
    fn test_payment_begin_is_smaller() {
        let end = payment(1200.0, 0.0, 1.0, 12.0, PaymentTiming::End);
        let begin = payment(1200.0, 0.0, 1.0, 12.0, PaymentTiming::Begin);
        assert_relative_eq!(begin, end / 1.01, epsilon = 1e-10);
    }
}

//! Numeric range generators: integers, powers, and fixed-precision decimals.

use crate::error::{ProbeError, Result};

/// Ascending integers in `[start_incl, end_excl)`.
///
/// `start_incl == end_excl` yields an empty sequence.
pub fn integer_range(start_incl: i64, end_excl: i64) -> Result<Vec<i64>> {
    if start_incl > end_excl {
        return Err(ProbeError::invalid_range(start_incl, end_excl));
    }
    Ok((start_incl..end_excl).collect())
}

/// `base ^ exponent` for non-negative integer exponents.
pub fn integer_power(base: i64, exponent: i64) -> Result<i64> {
    if exponent < 0 {
        return Err(ProbeError::NegativeExponent { exponent });
    }
    let overflow = || ProbeError::Overflow {
        message: format!("{}^{} does not fit in 64 bits", base, exponent),
    };
    let exp = u32::try_from(exponent).map_err(|_| overflow())?;
    base.checked_pow(exp).ok_or_else(overflow)
}

/// Powers of `base` for every exponent in `[min_exp_incl, max_exp_excl)`.
pub fn power_range(base: i64, min_exp_incl: i64, max_exp_excl: i64) -> Result<Vec<i64>> {
    if min_exp_incl > max_exp_excl {
        return Err(ProbeError::invalid_range(min_exp_incl, max_exp_excl));
    }
    (min_exp_incl..max_exp_excl)
        .map(|exponent| integer_power(base, exponent))
        .collect()
}

/// Round `value` to `precision` fractional decimal digits.
///
/// Scales by `10^precision`, rounds to the nearest integer (halves toward
/// positive infinity) and scales back. Negative zero is normalized to zero so it renders
/// as `0`.
pub fn round_to_precision(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    let rounded = (value * factor + 0.5).floor() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Decimals from `start_incl` up to (excluding) `end_excl`, `step` apart.
///
/// Each candidate is computed as `start + i * step` from an index counter so
/// floating-point error does not accumulate across iterations, then rounded
/// with [`round_to_precision`]. The exclusive end is checked after rounding.
pub fn decimal_range(start_incl: f64, end_excl: f64, step: f64, precision: u32) -> Result<Vec<f64>> {
    if !step.is_finite() || step <= 0.0 {
        return Err(ProbeError::InvalidStep { step });
    }
    if !start_incl.is_finite() || !end_excl.is_finite() || start_incl > end_excl {
        return Err(ProbeError::invalid_range(start_incl, end_excl));
    }

    let values = (0u64..)
        .map(|i| round_to_precision(start_incl + i as f64 * step, precision))
        .take_while(|value| *value < end_excl)
        .collect();
    Ok(values)
}

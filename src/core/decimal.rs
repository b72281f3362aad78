// File: src/core/decimal.rs
use crate::core::types::{can_promote, has_fraction, Quotient, MAX_PROMOTE_STEPS};

/// Scale a trailing magnitude word applies to a decimal expansion:
/// `1.5 million` multiplies, `1.5 hundredths` divides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scale {
    Times(f64),
    Per(f64),
}

impl Default for Scale {
    fn default() -> Self {
        Scale::Times(1.0)
    }
}

/// Number of digits before the decimal point, i.e. `floor(log10(x)) + 1`.
/// Values below one give zero or a negative count.
pub fn digit_count(x: f64) -> i32 {
    let mut x = x.abs();
    if x == 0.0 || !x.is_finite() {
        return 0;
    }
    let mut count = 0;
    if x >= 1.0 {
        x = x.trunc();
        while x >= 1.0 {
            x = (x / 10.0).trunc();
            count += 1;
        }
    } else {
        while x < 1.0 {
            x *= 10.0;
            count -= 1;
        }
        count += 1;
    }
    count
}

/// Rebuilds `unit . fract` as an exact fraction.
///
/// The denominator is the power of ten implied by the digits of `fract` plus
/// its leading zeros. Trailing common tens are stripped afterwards, and any
/// fractional remainder left by the scale is shifted into the integers.
pub fn normalize(unit: f64, fract: f64, zeros: u32, scale: Scale) -> Quotient {
    // "two point zero": nothing after the point
    if fract == 0.0 {
        return Quotient::whole(unit);
    }

    let mag = 10f64.powi(digit_count(fract) + zeros as i32);
    // the fractional digits share the sign of the whole part (-1.5 is -15/10)
    let signed_fract = if unit.is_sign_negative() { -fract } else { fract };
    let base = unit * mag + signed_fract;

    let (mut num, mut denom) = match scale {
        Scale::Times(k) => (base * k, mag),
        Scale::Per(k) => (base, mag * k),
    };

    while num % 10.0 == 0.0 && denom % 10.0 == 0.0 && denom != 0.0 {
        num /= 10.0;
        denom /= 10.0;
    }

    let mut steps = 0;
    while (has_fraction(num) || has_fraction(denom)) && steps < MAX_PROMOTE_STEPS && can_promote(num, denom) {
        num *= 10.0;
        denom *= 10.0;
        steps += 1;
    }

    Quotient::new(num.round(), denom.round())
}

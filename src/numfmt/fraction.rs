//! Fraction masks (`# ?/?`, `?/?`, `? ??/??`).
//!
//! The decimal remainder is written as an exact fraction over a power of ten
//! and reduced; the number of `?` placeholders does not limit the denominator.

use super::number_text;

/// Significant digits kept when reading the decimal remainder.
const SIGNIFICANT_DIGITS: i32 = 14;
/// 10^30 still fits in a `u128`.
const MAX_DECIMALS: i32 = 30;

/// Decimal digits of `remainder` in `[0, 1)`, trailing zeros trimmed.
///
/// Returns `true` as first element when rounding carried into the integer.
fn remainder_digits(remainder: f64) -> (bool, String) {
    if remainder <= 0.0 {
        return (false, String::new());
    }
    let magnitude = remainder.log10().floor() as i32;
    let decimals = (SIGNIFICANT_DIGITS - 1 - magnitude).clamp(0, MAX_DECIMALS) as usize;
    let text = format!("{:.*}", decimals, remainder);
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
    (whole == "1", fraction.trim_end_matches('0').to_string())
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Render `value` under a fraction mask.
///
/// Masks with an integer placeholder (`0` or `#`) produce a mixed number
/// such as `0 1/2`. Masks starting with `? ?` also produce a mixed number but
/// leave the integer out when it is zero. Anything else folds the integer into
/// the numerator (`3/2`). Integral values render as plain numbers.
pub(crate) fn render_fraction(value: f64, mask: &str) -> String {
    let negative = value < 0.0;
    let magnitude = value.abs();
    let mut integer = magnitude.trunc();

    let (carry, digits) = remainder_digits(magnitude - integer);
    if carry {
        integer += 1.0;
    }
    let numerator = match digits.parse::<u128>() {
        Ok(numerator) if !carry && numerator > 0 => numerator,
        _ => return number_text(if negative { -integer } else { integer }),
    };
    let denominator = 10u128.pow(digits.len() as u32);
    let divisor = gcd(numerator, denominator);
    let (numerator, denominator) = (numerator / divisor, denominator / divisor);

    let sign = if negative { "-" } else { "" };
    if mask.starts_with("? ?") {
        let whole = if integer == 0.0 {
            String::new()
        } else {
            number_text(integer)
        };
        format!("{}{} {}/{}", sign, whole, numerator, denominator)
    } else if mask.contains(['0', '#']) {
        format!(
            "{}{} {}/{}",
            sign,
            number_text(integer),
            numerator,
            denominator
        )
    } else {
        let improper = numerator + integer as u128 * denominator;
        format!("{}{}/{}", sign, improper, denominator)
    }
}

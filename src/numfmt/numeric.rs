//! Generic numeric, scientific and fixed-currency masks.

use super::locale::{NumberLocale, group_thousands};
use super::{number_text, round_half_away};

/// Normalize a numeric mask.
///
/// Drops `_x` spacing and `*x` fill directives, backslash escapes and quotes.
/// `[$sym-lcid]` tags become their currency text (the locale's currency when
/// the symbol is empty); any other bracketed directive is removed. `#` turns
/// into `0`.
pub(crate) fn clean_mask(mask: &str, locale: &NumberLocale) -> String {
    let mut out = String::with_capacity(mask.len());
    let mut rest = mask;
    while let Some(c) = rest.chars().next() {
        rest = &rest[c.len_utf8()..];
        match c {
            '_' | '*' => {
                let mut chars = rest.chars();
                chars.next();
                rest = chars.as_str();
            },
            '\\' | '"' => {},
            '[' => match rest.find(']') {
                Some(end) => {
                    if let Some(tag) = rest[..end].strip_prefix('$') {
                        let symbol = tag.split('-').next().unwrap_or_default();
                        if symbol.is_empty() {
                            out.push_str(locale.currency_code());
                        } else {
                            out.push_str(symbol);
                        }
                    }
                    rest = &rest[end + 1..];
                },
                None => out.push('['),
            },
            '#' => out.push('0'),
            _ => out.push(c),
        }
    }
    out
}

/// Placement of the first `0[.0]` run in a cleaned mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DigitRun {
    start: usize,
    end: usize,
    precision: usize,
}

fn find_digit_run(mask: &str) -> Option<DigitRun> {
    let bytes = mask.as_bytes();
    let start = (0..bytes.len()).find(|&i| {
        bytes[i] == b'0' || (bytes[i] == b'.' && bytes.get(i + 1) == Some(&b'0'))
    })?;

    let mut end = start;
    while bytes.get(end) == Some(&b'0') {
        end += 1;
    }
    let mut precision = 0;
    if bytes.get(end) == Some(&b'.') {
        end += 1;
        while bytes.get(end) == Some(&b'0') {
            end += 1;
            precision += 1;
        }
    }
    Some(DigitRun {
        start,
        end,
        precision,
    })
}

/// Fixed-point text with half-away-from-zero rounding and no negative zero.
pub(crate) fn fixed(value: f64, precision: usize) -> String {
    let rounded = round_half_away(value, precision);
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.*}", precision, rounded)
}

/// `value * 10^places` in two steps so that neither power over- or underflows
/// at the ends of the `f64` range.
fn shift_decimal(value: f64, places: i32) -> f64 {
    let half = places / 2;
    value * 10f64.powi(half) * 10f64.powi(places - half)
}

/// Render `value` under a generic numeric mask.
///
/// A `,` anywhere requests thousands grouping with the locale separators;
/// otherwise the number is zero-padded to the run's width. The rendered
/// number replaces the first digit run only. Masks without a digit run leave
/// the value unformatted.
pub(crate) fn render_numeric(value: f64, mask: &str, locale: &NumberLocale) -> String {
    let mut cleaned = clean_mask(mask, locale);
    let thousands = cleaned.contains(',');
    if thousands {
        cleaned.retain(|c| c != ',');
    }

    let Some(run) = find_digit_run(&cleaned) else {
        return number_text(value);
    };

    let rendered = if !value.is_finite() {
        number_text(value)
    } else if thousands {
        group_thousands(&fixed(value, run.precision), locale)
    } else {
        let rounded = round_half_away(value, run.precision);
        // Pad the magnitude so the sign does not take a digit position
        let digits = format!(
            "{:0width$.precision$}",
            rounded.abs(),
            width = run.end - run.start,
            precision = run.precision
        );
        if rounded < 0.0 {
            format!("-{}", digits)
        } else {
            digits
        }
    };

    let mut out = String::with_capacity(cleaned.len() + rendered.len());
    out.push_str(&cleaned[..run.start]);
    out.push_str(&rendered);
    out.push_str(&cleaned[run.end..]);
    out
}

/// Render under `[$EUR ]#,##0.00_-`.
pub(crate) fn render_euro_currency(value: f64) -> String {
    format!("EUR {}", fixed(value, 2))
}

/// Render `value` under a scientific mask such as `0.00E+00`.
///
/// Mantissa precision comes from the placeholders after the point, exponent
/// width from the zeros after the sign. More than one integer placeholder
/// (`##0.0E+0`) keeps the exponent a multiple of that count. `E+` always
/// shows the exponent sign, `E-` only a negative one.
pub(crate) fn render_scientific(value: f64, mask: &str, locale: &NumberLocale) -> String {
    let mut cleaned = clean_mask(mask, locale);
    cleaned.retain(|c| c != ',');
    let bytes = cleaned.as_bytes();

    let Some(e_pos) = (1..bytes.len().saturating_sub(2)).find(|&i| {
        bytes[i - 1] == b'0'
            && matches!(bytes[i], b'E' | b'e')
            && matches!(bytes[i + 1], b'+' | b'-')
            && bytes[i + 2] == b'0'
    }) else {
        return render_numeric(value, mask, locale);
    };

    let mut start = e_pos;
    while start > 0 && matches!(bytes[start - 1], b'0' | b'.') {
        start -= 1;
    }
    let mantissa_mask = &cleaned[start..e_pos];
    let (integer_digits, precision) = match mantissa_mask.split_once('.') {
        Some((integer, fraction)) => (integer.len(), fraction.len()),
        None => (mantissa_mask.len(), 0),
    };
    let group = integer_digits.max(1) as i32;

    let always_sign = bytes[e_pos + 1] == b'+';
    let mut end = e_pos + 2;
    while bytes.get(end) == Some(&b'0') {
        end += 1;
    }
    let exponent_width = end - (e_pos + 2);

    let mut exponent = if value == 0.0 || !value.is_finite() {
        0
    } else {
        let exponent = value.abs().log10().floor() as i32;
        if group > 1 {
            exponent.div_euclid(group) * group
        } else {
            exponent
        }
    };
    let mut mantissa = round_half_away(shift_decimal(value, -exponent), precision);
    if mantissa.abs() >= 10f64.powi(group) {
        exponent += group;
        mantissa = round_half_away(shift_decimal(value, -exponent), precision);
    }

    let exponent_sign = if exponent < 0 {
        "-"
    } else if always_sign {
        "+"
    } else {
        ""
    };

    format!(
        "{}{:.precision$}{}{}{:0width$}{}",
        &cleaned[..start],
        mantissa,
        &cleaned[e_pos..e_pos + 1],
        exponent_sign,
        exponent.unsigned_abs(),
        &cleaned[end..],
        precision = precision,
        width = exponent_width,
    )
}

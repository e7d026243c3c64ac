//! Percentage masks.

use super::{number_text, round_half_away};

/// Fractional digits used when the mask has no `.0`/`.#` run.
const DEFAULT_PRECISION: usize = 6;

fn placeholder_run(bytes: &[u8]) -> usize {
    bytes
        .iter()
        .take_while(|&&b| b == b'0' || b == b'#')
        .count()
}

/// Render `value` as a percentage.
///
/// `0%` rounds to a whole percent. Other masks take their width from the
/// leading `0`/`#` run and their precision from the first `.0`/`.#` run; the
/// number is right-aligned to that width and the rest of the mask is copied.
pub(crate) fn render_percent(value: f64, mask: &str) -> String {
    let scaled = value * 100.0;
    if mask == "0%" {
        let mut out = number_text(round_half_away(scaled, 0));
        out.push('%');
        return out;
    }

    let bytes = mask.as_bytes();
    let prefix_end = bytes
        .iter()
        .position(|&b| matches!(b, b'0' | b'#' | b'.'))
        .unwrap_or(bytes.len());
    let width = placeholder_run(&bytes[prefix_end..]);

    let mut span_end = prefix_end + width;
    let precision = match mask.find('.') {
        Some(dot) => {
            let digits = placeholder_run(&bytes[dot + 1..]);
            if digits > 0 && dot == span_end {
                span_end = dot + 1 + digits;
            }
            if digits > 0 {
                digits
            } else {
                DEFAULT_PRECISION
            }
        },
        None => DEFAULT_PRECISION,
    };

    let rendered = round_half_away(scaled, precision);
    format!(
        "{}{:>width$.precision$}{}",
        &mask[..prefix_end],
        rendered,
        &mask[span_end..],
        width = width,
        precision = precision,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_percent() {
        assert_eq!(render_percent(0.5, "0%"), "50%");
        assert_eq!(render_percent(0.125, "0%"), "13%");
        assert_eq!(render_percent(-0.015, "0%"), "-2%");
        // Same rounding as the fixed-precision path
        assert_eq!(render_percent(0.145, "0%"), "15%");
        assert_eq!(render_percent(0.145, "0.0%"), "14.5%");
        assert_eq!(render_percent(-0.001, "0%"), "0%");
    }

    #[test]
    fn test_fixed_precision() {
        assert_eq!(render_percent(0.1234, "0.00%"), "12.34%");
        assert_eq!(render_percent(0.5, "0.0%"), "50.0%");
        assert_eq!(render_percent(0.000_05, "0.00%"), "0.01%");
    }

    #[test]
    fn test_width_and_default_precision() {
        // Width counts the whole rendered number
        assert_eq!(render_percent(0.05, "000.0%"), "5.0%");
        assert_eq!(render_percent(0.05, "00000.0%"), "  5.0%");
        assert_eq!(render_percent(0.5, "00%"), "50.000000%");
    }

    #[test]
    fn test_literal_text_kept() {
        assert_eq!(render_percent(0.25, "Rate 0.0 %"), "Rate 25.0 %");
    }
}

//! Section selection and mask classification.

use memchr::memchr_iter;
use smallvec::SmallVec;

/// `[$EUR ]#,##0.00_-`, rendered with a fixed template.
pub const FORMAT_CURRENCY_EUR_SIMPLE: &str = "[$EUR ]#,##0.00_-";

/// The section of a format code that applies to a value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Section<'a> {
    /// Section text, color directive included
    pub text: &'a str,
    /// Value to render; absolute when the code has more than one section
    pub value: f64,
}

/// Split a format code on `;`.
pub(crate) fn split_sections(code: &str) -> SmallVec<[&str; 4]> {
    let mut sections = SmallVec::new();
    let mut start = 0;
    for pos in memchr_iter(b';', code.as_bytes()) {
        sections.push(&code[start..pos]);
        start = pos + 1;
    }
    sections.push(&code[start..]);
    sections
}

/// Pick the section for `value`.
///
/// One section applies to everything. Two sections split non-negative and
/// negative values; three or four add a zero section. With more than one
/// section the value is rendered without its sign. Codes with more than four
/// sections use the first one.
pub(crate) fn select(code: &str, value: f64) -> Section<'_> {
    let sections = split_sections(code);
    match sections.as_slice() {
        &[only] => Section { text: only, value },
        &[positive, negative] => Section {
            text: if value >= 0.0 { positive } else { negative },
            value: value.abs(),
        },
        &[positive, negative, zero] | &[positive, negative, zero, _] => Section {
            text: if value > 0.0 {
                positive
            } else if value < 0.0 {
                negative
            } else {
                zero
            },
            value: value.abs(),
        },
        _ => {
            log::debug!(
                "format code has {} sections, using the first",
                sections.len()
            );
            Section {
                text: sections.first().copied().unwrap_or(code),
                value,
            }
        },
    }
}

/// Remove a leading `[Color]` directive such as `[Red]`.
pub(crate) fn strip_color(section: &str) -> &str {
    let Some(rest) = section.strip_prefix('[') else {
        return section;
    };
    match rest.find(']') {
        Some(end) if end > 0 && rest[..end].bytes().all(|b| b.is_ascii_alphabetic()) => {
            &rest[end + 1..]
        },
        _ => section,
    }
}

/// Rendering category of a (color-stripped) mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormatMask<'a> {
    DateTime(&'a str),
    Percent(&'a str),
    EuroCurrency,
    Fraction(&'a str),
    Scientific(&'a str),
    Numeric(&'a str),
}

/// Skip leading `[$xxx-yyyy]` locale/currency tags.
pub(crate) fn strip_locale_tags(mask: &str) -> &str {
    let mut rest = mask;
    while let Some(inner) = rest.strip_prefix("[$") {
        let Some(end) = inner.find(']') else {
            break;
        };
        let tag = &inner[..end];
        let well_formed = match tag.split_once('-') {
            Some((symbol, lcid)) => {
                symbol.bytes().all(|b| b.is_ascii_alphabetic())
                    && lcid.bytes().all(|b| b.is_ascii_hexdigit())
            },
            None => false,
        };
        if !well_formed {
            break;
        }
        rest = &inner[end + 1..];
    }
    rest
}

fn is_date_mask(mask: &str) -> bool {
    let first = strip_locale_tags(mask).bytes().next();
    matches!(
        first.map(|b| b.to_ascii_lowercase()),
        Some(b'h' | b'm' | b's' | b'd' | b'y' | b'e')
    )
}

fn is_scientific_mask(mask: &str) -> bool {
    let bytes = mask.as_bytes();
    bytes.windows(4).any(|w| {
        matches!(w[0], b'0' | b'#')
            && matches!(w[1], b'E' | b'e')
            && matches!(w[2], b'+' | b'-')
            && w[3] == b'0'
    })
}

/// Classify a mask. Date/time wins over percent, percent over the fixed
/// currency template, and so on down to generic numeric.
pub(crate) fn classify(mask: &str) -> FormatMask<'_> {
    if is_date_mask(mask) {
        FormatMask::DateTime(mask)
    } else if mask.ends_with('%') {
        FormatMask::Percent(mask)
    } else if mask == FORMAT_CURRENCY_EUR_SIMPLE {
        FormatMask::EuroCurrency
    } else if mask.contains("?/?") {
        FormatMask::Fraction(mask)
    } else if is_scientific_mask(mask) {
        FormatMask::Scientific(mask)
    } else {
        FormatMask::Numeric(mask)
    }
}

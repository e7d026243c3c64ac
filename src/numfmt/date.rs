//! Date and time masks.
//!
//! The mask is lower-cased and translated token by token into a `chrono`
//! format string; at every position the longest matching token wins.

use super::number_text;
use super::section::strip_locale_tags;
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use std::fmt::Write;

/// Largest serial that still lands in year 9999.
const MAX_SERIAL: f64 = 2_958_466.0;

/// Mask tokens and their `chrono` translations, longest first.
///
/// `None` entries are hour tokens whose translation depends on whether the
/// mask carries an AM/PM marker.
const DATE_TOKENS: &[(&str, Option<&str>)] = &[
    ("am/pm", Some("%p")),
    ("mmmmm", Some("%b")),
    ("yyyy", Some("%Y")),
    ("mmmm", Some("%B")),
    ("dddd", Some("%A")),
    ("mmm", Some("%b")),
    (":mm", Some(":%M")),
    ("mm:", Some("%M:")),
    ("ddd", Some("%a")),
    ("yy", Some("%y")),
    ("mm", Some("%m")),
    ("dd", Some("%d")),
    ("ss", Some("%S")),
    (".s", Some("")),
    ("hh", None),
    ("\\", Some("")),
    ("e", Some("%Y")),
    ("m", Some("%-m")),
    ("d", Some("%-d")),
    ("h", None),
    ("y", Some("%y")),
    ("s", Some("%S")),
];

fn hour_token(token: &str, twelve_hour: bool) -> &'static str {
    match (token, twelve_hour) {
        ("hh", true) => "%I",
        ("hh", false) => "%H",
        (_, true) => "%-I",
        (_, false) => "%-H",
    }
}

/// Translate a date mask into a `chrono` format string.
pub(crate) fn translate_mask(mask: &str) -> String {
    let mask = strip_locale_tags(mask).to_lowercase();
    let twelve_hour = mask.contains("am/pm");

    let mut template = String::with_capacity(mask.len() * 2);
    let mut rest = mask.as_str();
    'outer: while !rest.is_empty() {
        for &(token, translation) in DATE_TOKENS {
            if let Some(after) = rest.strip_prefix(token) {
                let translated = translation.unwrap_or_else(|| hour_token(token, twelve_hour));
                template.push_str(translated);
                rest = after;
                continue 'outer;
            }
        }

        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            if c == '%' {
                template.push_str("%%");
            } else {
                template.push(c);
            }
        }
        rest = chars.as_str();
    }
    template
}

/// Convert a spreadsheet serial date (1900 system) to a calendar instant.
///
/// Serials from 1 up to 60 count from 1899-12-31 so that the phantom
/// 1900-02-29 is skipped; everything else, time-only serials included,
/// counts from 1899-12-30.
pub(crate) fn serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || !(0.0..MAX_SERIAL).contains(&serial) {
        return None;
    }

    let epoch = if (1.0..60.0).contains(&serial) {
        NaiveDate::from_ymd_opt(1899, 12, 31)?
    } else {
        NaiveDate::from_ymd_opt(1899, 12, 30)?
    };
    let days = serial.trunc();
    let seconds = ((serial - days) * 86_400.0).round() as i64;

    epoch
        .and_hms_opt(0, 0, 0)?
        .checked_add_signed(TimeDelta::try_days(days as i64)?)?
        .checked_add_signed(TimeDelta::try_seconds(seconds)?)
}

/// Render a serial under a date/time mask.
///
/// Serials that do not map to a date render as plain numbers.
pub(crate) fn render_date(value: f64, mask: &str) -> String {
    let Some(datetime) = serial_to_datetime(value) else {
        log::debug!("serial {} is not a valid date", value);
        return number_text(value);
    };

    let template = translate_mask(mask);
    let mut out = String::with_capacity(template.len() + 8);
    match write!(out, "{}", datetime.format(&template)) {
        Ok(()) => out,
        Err(_) => {
            log::debug!("date template {:?} failed to render", template);
            number_text(value)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_mask() {
        assert_eq!(translate_mask("yyyy-mm-dd"), "%Y-%m-%d");
        assert_eq!(translate_mask("h:mm:ss"), "%-H:%M:%S");
        assert_eq!(translate_mask("h:mm AM/PM"), "%-I:%M %p");
        assert_eq!(translate_mask("mm:ss"), "%M:%S");
        assert_eq!(translate_mask("d-mmm-yy"), "%-d-%b-%y");
        assert_eq!(translate_mask("[$-404]e/m/d"), "%Y/%-m/%-d");
        assert_eq!(translate_mask("dddd, mmmm d"), "%A, %B %-d");
        assert_eq!(translate_mask("yyyy\\-mm"), "%Y-%m");
        assert_eq!(translate_mask("d 100%"), "%-d 100%%");
    }

    #[test]
    fn test_serial_conversion() {
        let ymd = |serial: f64| {
            serial_to_datetime(serial)
                .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap()
        };
        assert_eq!(ymd(1.0), "1900-01-01 00:00:00");
        assert_eq!(ymd(59.0), "1900-02-28 00:00:00");
        assert_eq!(ymd(61.0), "1900-03-01 00:00:00");
        assert_eq!(ymd(45000.5), "2023-03-15 12:00:00");
        assert_eq!(ymd(0.75), "1899-12-30 18:00:00");
        assert!(serial_to_datetime(-1.0).is_none());
        assert!(serial_to_datetime(f64::NAN).is_none());
    }

    #[test]
    fn test_render_date() {
        assert_eq!(render_date(45000.0, "yyyy-mm-dd"), "2023-03-15");
        assert_eq!(render_date(45000.0, "mm-dd-yy"), "03-15-23");
        assert_eq!(render_date(45000.0, "d-mmm"), "15-Mar");
        assert_eq!(render_date(45000.0, "dddd"), "Wednesday");
        assert_eq!(render_date(45000.75, "h:mm AM/PM"), "6:00 PM");
        assert_eq!(render_date(45000.75, "hh:mm:ss"), "18:00:00");
        assert_eq!(render_date(0.5, "h:mm:ss AM/PM"), "12:00:00 PM");
    }

    #[test]
    fn test_invalid_serial_renders_number() {
        assert_eq!(render_date(-3.0, "yyyy"), "-3");
    }
}

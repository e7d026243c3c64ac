//! Number-format engine.
//!
//! Renders numeric values under Excel format codes. A code is split into
//! `;`-separated sections, the section matching the value's sign is picked,
//! and the remaining mask is classified into one rendering category:
//!
//! - date/time (`yyyy-mm-dd`, `h:mm AM/PM`)
//! - percentage (`0.00%`)
//! - fraction (`# ?/?`)
//! - scientific (`0.00E+00`)
//! - generic numeric (`#,##0.00`, `"$"#,##0_)`)
//!
//! Rendering is lenient: masks that do not fit a category's pattern produce
//! partially formatted output instead of errors.
//!
//! # Example
//!
//! ```rust
//! use litchi_style::numfmt::to_formatted_string;
//!
//! assert_eq!(to_formatted_string(1234.5, "#,##0.00", None), "1,234.50");
//! assert_eq!(to_formatted_string(0.5, "0%", None), "50%");
//! assert_eq!(to_formatted_string(-1234.0, "#,##0 ;(#,##0)", None), "(1,234)");
//! assert_eq!(to_formatted_string("abc", "0.00", None), "abc");
//! ```

mod builtin;
mod date;
mod fraction;
mod locale;
mod numeric;
mod percent;
mod section;

pub use builtin::{BuiltinFormats, builtin_format_code, builtin_format_code_index};
pub use locale::NumberLocale;
pub use section::FORMAT_CURRENCY_EUR_SIMPLE;

use section::FormatMask;

pub const FORMAT_GENERAL: &str = "General";
pub const FORMAT_TEXT: &str = "@";
pub const FORMAT_NUMBER: &str = "0";
pub const FORMAT_NUMBER_00: &str = "0.00";
pub const FORMAT_NUMBER_COMMA_SEPARATED1: &str = "#,##0.00";
pub const FORMAT_PERCENTAGE: &str = "0%";
pub const FORMAT_PERCENTAGE_00: &str = "0.00%";
pub const FORMAT_DATE_YYYYMMDD: &str = "yyyy-mm-dd";
pub const FORMAT_DATE_DDMMYYYY: &str = "dd/mm/yyyy";
pub const FORMAT_DATE_TIME4: &str = "h:mm:ss";
pub const FORMAT_CURRENCY_USD_SIMPLE: &str = r##""$"#,##0.00_-"##;

/// Post-processing hook: receives the rendered text and the selected section
/// (color directive included) and returns the final text.
pub type FormatCallback<'a> = &'a dyn Fn(&str, &str) -> String;

/// A value handed to the formatter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormatValue<'a> {
    Number(f64),
    /// Text; formatted as a number when it parses as one
    Text(&'a str),
}

impl From<f64> for FormatValue<'_> {
    fn from(value: f64) -> Self {
        FormatValue::Number(value)
    }
}

impl From<i64> for FormatValue<'_> {
    fn from(value: i64) -> Self {
        FormatValue::Number(value as f64)
    }
}

impl<'a> From<&'a str> for FormatValue<'a> {
    fn from(value: &'a str) -> Self {
        FormatValue::Text(value)
    }
}

/// Parse text that looks like a plain decimal number (`-1.5`, ` 2e3 `).
///
/// Hex, `inf` and `nan` spellings are not numeric.
pub fn parse_numeric(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty()
        || !trimmed.bytes().all(is_numeric_byte)
        || !trimmed.bytes().any(|b| b.is_ascii_digit())
    {
        return None;
    }
    fast_float2::parse::<f64, _>(trimmed).ok()
}

fn is_numeric_byte(b: u8) -> bool {
    b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E')
}

/// Shortest text for a number: integers without a fractional part.
pub(crate) fn number_text(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        let mut buffer = itoa::Buffer::new();
        buffer.format(value as i64).to_string()
    } else {
        let mut buffer = ryu::Buffer::new();
        let text = buffer.format(value);
        text.strip_suffix(".0").unwrap_or(text).to_string()
    }
}

/// Round half away from zero to `digits` decimals.
///
/// The scaled value is first snapped to 15 significant digits so that
/// `1.005` rounds to `1.01` as it reads.
pub(crate) fn round_half_away(value: f64, digits: usize) -> f64 {
    if digits > 15 || !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(digits as i32);
    let scaled = value * factor;
    if !scaled.is_finite() || scaled.abs() >= 1e17 {
        return value;
    }
    let snapped: f64 = format!("{:.14e}", scaled).parse().unwrap_or(scaled);
    snapped.round() / factor
}

/// Format engine bound to a locale and a built-in registry.
///
/// Cheap to construct; holds no per-call state.
#[derive(Debug, Clone)]
pub struct NumberFormatter<'r> {
    registry: &'r BuiltinFormats,
    locale: NumberLocale,
}

impl NumberFormatter<'static> {
    /// Formatter using the shared built-in registry.
    pub fn new(locale: NumberLocale) -> Self {
        Self {
            registry: BuiltinFormats::shared(),
            locale,
        }
    }
}

impl Default for NumberFormatter<'static> {
    fn default() -> Self {
        Self::new(NumberLocale::default())
    }
}

impl<'r> NumberFormatter<'r> {
    pub fn with_registry(registry: &'r BuiltinFormats, locale: NumberLocale) -> Self {
        Self { registry, locale }
    }

    #[inline]
    pub fn locale(&self) -> &NumberLocale {
        &self.locale
    }

    #[inline]
    pub fn registry(&self) -> &'r BuiltinFormats {
        self.registry
    }

    /// Render a value under a format code.
    pub fn format<'v>(
        &self,
        value: impl Into<FormatValue<'v>>,
        code: &str,
        callback: Option<FormatCallback<'_>>,
    ) -> String {
        let (number, original) = match value.into() {
            FormatValue::Number(number) => (number, None),
            FormatValue::Text(text) => match parse_numeric(text) {
                Some(number) => (number, Some(text)),
                None => return text.to_string(),
            },
        };

        if code == FORMAT_GENERAL || code == FORMAT_TEXT {
            return original.map_or_else(|| number_text(number), str::to_string);
        }

        let selected = section::select(code, number);
        let mask = section::strip_color(selected.text);
        let value = selected.value;

        let rendered = match section::classify(mask) {
            FormatMask::DateTime(mask) => date::render_date(value, mask),
            FormatMask::Percent(mask) => percent::render_percent(value, mask),
            FormatMask::EuroCurrency => numeric::render_euro_currency(value),
            FormatMask::Fraction(mask) => fraction::render_fraction(value, mask),
            FormatMask::Scientific(mask) => numeric::render_scientific(value, mask, &self.locale),
            FormatMask::Numeric(mask) => numeric::render_numeric(value, mask, &self.locale),
        };

        match callback {
            Some(callback) => callback(&rendered, selected.text),
            None => rendered,
        }
    }

    /// Render a value under a built-in format; unknown indices use `General`.
    pub fn format_builtin<'v>(
        &self,
        value: impl Into<FormatValue<'v>>,
        index: u16,
        callback: Option<FormatCallback<'_>>,
    ) -> String {
        let code = self.registry.code(index).unwrap_or_else(|| {
            log::debug!("unknown built-in number format {}, using General", index);
            FORMAT_GENERAL
        });
        self.format(value, code, callback)
    }
}

/// Render a value under a format code with the default (en-US) locale.
pub fn to_formatted_string<'v>(
    value: impl Into<FormatValue<'v>>,
    code: &str,
    callback: Option<FormatCallback<'_>>,
) -> String {
    NumberFormatter::default().format(value, code, callback)
}

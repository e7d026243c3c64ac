//! Separators and currency used when rendering numbers.

/// Locale settings consumed by the number-format engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberLocale {
    decimal_separator: char,
    thousands_separator: char,
    currency_code: String,
}

impl NumberLocale {
    pub fn new(
        decimal_separator: char,
        thousands_separator: char,
        currency_code: impl Into<String>,
    ) -> Self {
        Self {
            decimal_separator,
            thousands_separator,
            currency_code: currency_code.into(),
        }
    }

    /// `1,234.50`, currency `$`
    pub fn en_us() -> Self {
        Self::new('.', ',', "$")
    }

    /// `1.234,50`, currency `EUR`
    pub fn de_de() -> Self {
        Self::new(',', '.', "EUR")
    }

    #[inline]
    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    #[inline]
    pub fn thousands_separator(&self) -> char {
        self.thousands_separator
    }

    /// Currency text substituted for `[$-xxxx]` tags that carry no symbol.
    #[inline]
    pub fn currency_code(&self) -> &str {
        &self.currency_code
    }

    pub fn with_currency_code(mut self, code: impl Into<String>) -> Self {
        self.currency_code = code.into();
        self
    }
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::en_us()
    }
}

/// Insert thousands separators into a plain fixed-point string such as
/// `-1234.50`, switching the decimal point to the locale's separator.
pub(crate) fn group_thousands(fixed: &str, locale: &NumberLocale) -> String {
    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed),
    };
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits, None),
    };

    let mut out = String::with_capacity(fixed.len() + integer.len() / 3 + 1);
    out.push_str(sign);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            out.push(locale.thousands_separator);
        }
        out.push(c);
    }
    if let Some(fraction) = fraction {
        out.push(locale.decimal_separator);
        out.push_str(fraction);
    }
    out
}

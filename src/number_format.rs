//! Locale-aware number formatting and parsing.
//!
//! [`FormatSpec`] is an immutable value object. Anything that needs different precision
//! (a unit change, for example) builds a new spec instead of mutating a shared one.

use crate::error::NumericError;

/// Decimal and grouping separators used by a locale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Locale {
    /// Separator between the integer and fraction parts.
    pub decimal_separator: char,
    /// Separator between groups of three integer digits.
    pub grouping_separator: char,
}

impl Locale {
    /// Locale-neutral separators.
    pub const ROOT: Self = Self {
        decimal_separator: '.',
        grouping_separator: ',',
    };
    pub const EN_US: Self = Self::ROOT;
    pub const DE_DE: Self = Self {
        decimal_separator: ',',
        grouping_separator: '.',
    };
    pub const FR_FR: Self = Self {
        decimal_separator: ',',
        grouping_separator: '\u{a0}',
    };
    pub const DE_CH: Self = Self {
        decimal_separator: '.',
        grouping_separator: '\'',
    };

    fn is_grouping(&self, ch: char) -> bool {
        // Whitespace grouping separators are typed as plain spaces more often than not.
        if self.grouping_separator.is_whitespace() {
            ch.is_whitespace()
        } else {
            ch == self.grouping_separator
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::ROOT
    }
}

/// Inclusive bounds on the number of fraction digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FractionDigits {
    pub min: u8,
    pub max: u8,
}

impl FractionDigits {
    /// Creates bounds, lowering `min` to `max` if needed.
    pub const fn new(min: u8, max: u8) -> Self {
        let min = if min > max { max } else { min };
        Self { min, max }
    }

    /// Exactly `digits` fraction digits.
    pub const fn exactly(digits: u8) -> Self {
        Self::new(digits, digits)
    }
}

/// Precision and locale used to render and interpret numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatSpec {
    /// Precision of displayed values.
    pub format_digits: FractionDigits,
    /// Precision accepted from typed input.
    pub parse_digits: FractionDigits,
    pub locale: Locale,
    /// Insert grouping separators when formatting.
    pub grouping: bool,
}

impl Default for FormatSpec {
    fn default() -> Self {
        Self {
            format_digits: FractionDigits::new(0, 3),
            parse_digits: FractionDigits::new(0, 10),
            locale: Locale::ROOT,
            grouping: true,
        }
    }
}

impl FormatSpec {
    pub fn with_format_digits(self, digits: FractionDigits) -> Self {
        Self {
            format_digits: digits,
            ..self
        }
    }

    pub fn with_parse_digits(self, digits: FractionDigits) -> Self {
        Self {
            parse_digits: digits,
            ..self
        }
    }

    pub fn with_locale(self, locale: Locale) -> Self {
        Self { locale, ..self }
    }

    pub fn with_grouping(self, grouping: bool) -> Self {
        Self { grouping, ..self }
    }

    /// Returns a spec whose display precision tops out at `max` digits.
    ///
    /// The minimum is lowered along with it so the bounds stay ordered.
    pub fn with_max_format_digits(self, max: u8) -> Self {
        self.with_format_digits(FractionDigits::new(self.format_digits.min, max))
    }

    /// Caps both display and parse precision at `max` digits, as a unit change does.
    pub fn with_max_fraction_digits(self, max: u8) -> Self {
        self.with_max_format_digits(max)
            .with_parse_digits(FractionDigits::new(self.parse_digits.min, max))
    }

    /// Formats a floating value using the display precision.
    pub fn format_decimal(&self, value: f64) -> Result<String, NumericError> {
        if !value.is_finite() {
            return Err(NumericError::NonFinite { value });
        }

        let digits = self.format_digits;
        let rendered = format!("{:.*}", digits.max as usize, value.abs());
        let (integer, fraction) = rendered
            .split_once('.')
            .unwrap_or((rendered.as_str(), ""));

        let mut fraction = fraction.to_string();
        while fraction.len() > digits.min as usize && fraction.ends_with('0') {
            fraction.pop();
        }

        let is_zero = integer.bytes().all(|b| b == b'0') && fraction.bytes().all(|b| b == b'0');
        let mut out = String::with_capacity(rendered.len() + 4);
        if value.is_sign_negative() && !is_zero {
            out.push('-');
        }
        self.push_grouped(&mut out, integer);
        if !fraction.is_empty() {
            out.push(self.locale.decimal_separator);
            out.push_str(&fraction);
        }
        Ok(out)
    }

    /// Formats an integer value. Integers never carry fraction digits.
    pub fn format_integer(&self, value: i128) -> String {
        let digits = value.unsigned_abs().to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        if value < 0 {
            out.push('-');
        }
        self.push_grouped(&mut out, &digits);
        out
    }

    fn push_grouped(&self, out: &mut String, digits: &str) {
        if !self.grouping {
            out.push_str(digits);
            return;
        }
        let len = digits.len();
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push(self.locale.grouping_separator);
            }
            out.push(ch);
        }
    }

    /// Reduces locale-formatted text to a canonical literal such as `-1234.5`.
    ///
    /// Only the numeric prefix is read; trailing text such as a unit suffix is ignored.
    /// The integer part is always present in the result.
    pub fn normalize(&self, text: &str) -> Result<String, NumericError> {
        let unparseable = || NumericError::Unparseable {
            input: text.to_string(),
        };

        let trimmed = text.trim();
        let mut chars = trimmed.chars().peekable();
        let mut canonical = String::with_capacity(trimmed.len());

        match chars.peek() {
            Some('-') => {
                canonical.push('-');
                chars.next();
            }
            Some('+') => {
                chars.next();
            }
            _ => {}
        }

        let mut integer = String::new();
        let mut fraction = String::new();
        let mut in_fraction = false;

        while let Some(&ch) = chars.peek() {
            if ch.is_ascii_digit() {
                if in_fraction {
                    fraction.push(ch);
                } else {
                    integer.push(ch);
                }
            } else if ch == self.locale.decimal_separator && !in_fraction {
                in_fraction = true;
            } else if self.locale.is_grouping(ch) && !in_fraction && !integer.is_empty() {
                // grouping separators are skipped, not validated
            } else {
                break;
            }
            chars.next();
        }

        if integer.is_empty() && fraction.is_empty() {
            return Err(unparseable());
        }

        if integer.is_empty() {
            integer.push('0');
        }
        canonical.push_str(&integer);
        if !fraction.is_empty() {
            canonical.push('.');
            canonical.push_str(&fraction);
        }
        Ok(canonical)
    }
}

/// Rounds `value` to `digits` decimal places using decimal (not binary) rounding.
pub fn round_fraction(value: f64, digits: u8) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", digits as usize, value)
        .parse()
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(min: u8, max: u8) -> FormatSpec {
        FormatSpec::default().with_format_digits(FractionDigits::new(min, max))
    }

    #[test]
    fn formats_with_min_and_max_fraction_digits() {
        assert_eq!(spec(1, 1).format_decimal(100.0).unwrap(), "100.0");
        assert_eq!(spec(0, 3).format_decimal(2.5).unwrap(), "2.5");
        assert_eq!(spec(0, 3).format_decimal(2.0).unwrap(), "2");
        assert_eq!(spec(2, 4).format_decimal(1.23456).unwrap(), "1.2346");
    }

    #[test]
    fn formats_grouping_and_sign() {
        assert_eq!(spec(0, 2).format_decimal(-1234567.891).unwrap(), "-1,234,567.89");
        assert_eq!(spec(0, 1).format_decimal(-0.01).unwrap(), "0");
        let german = spec(2, 2).with_locale(Locale::DE_DE);
        assert_eq!(german.format_decimal(1234.5).unwrap(), "1.234,50");
        assert_eq!(FormatSpec::default().format_integer(-1_000_000), "-1,000,000");
        assert_eq!(
            FormatSpec::default().with_grouping(false).format_integer(12345),
            "12345"
        );
    }

    #[test]
    fn non_finite_values_are_an_error() {
        assert!(matches!(
            spec(0, 2).format_decimal(f64::NAN),
            Err(NumericError::NonFinite { .. })
        ));
        assert!(spec(0, 2).format_decimal(f64::INFINITY).is_err());
    }

    #[test]
    fn normalize_reads_numeric_prefix() {
        let root = FormatSpec::default();
        assert_eq!(root.normalize(" 1,234.5 m").unwrap(), "1234.5");
        assert_eq!(root.normalize("-.25").unwrap(), "-0.25");
        assert_eq!(root.normalize("+7°").unwrap(), "7");
        assert!(root.normalize("abc").is_err());
        assert!(root.normalize("-").is_err());
        assert!(root.normalize(",5").is_err());
    }

    #[test]
    fn normalize_honours_locale() {
        let french = FormatSpec::default().with_locale(Locale::FR_FR);
        assert_eq!(french.normalize("1 234,75").unwrap(), "1234.75");
        let german = FormatSpec::default().with_locale(Locale::DE_DE);
        assert_eq!(german.normalize("1.234,5 %").unwrap(), "1234.5");
    }

    #[test]
    fn max_format_digits_keeps_bounds_ordered() {
        let spec = spec(3, 5).with_max_format_digits(1);
        assert_eq!(spec.format_digits, FractionDigits::new(1, 1));
    }

    #[test]
    fn max_fraction_digits_caps_parse_precision_too() {
        let spec = FormatSpec::default().with_max_fraction_digits(2);
        assert_eq!(spec.format_digits, FractionDigits::new(0, 2));
        assert_eq!(spec.parse_digits, FractionDigits::new(0, 2));
    }

    #[test]
    fn round_fraction_is_decimal() {
        assert_eq!(round_fraction(2.675, 2), 2.67);
        assert_eq!(round_fraction(1.26, 0), 1.0);
        assert!(round_fraction(f64::NAN, 2).is_nan());
    }
}

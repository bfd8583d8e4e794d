//! Stateless text conversion for widgets that only display or accept numbers,
//! such as table cells and selectors.

use core::marker::PhantomData;

use bevy::log::debug;

use crate::numeric_kind::NumericKind;
use crate::number_format::FormatSpec;

/// Formats `value` and appends `unit`, or shows `error_text` for non-finite values.
///
/// Never fails: a value the formatter rejects falls back to its `Display` form.
pub fn to_decorated_string<T: NumericKind>(
    value: T,
    spec: &FormatSpec,
    unit: &str,
    error_text: &str,
) -> String {
    if T::FRACTIONAL && !value.is_finite() && !error_text.is_empty() {
        return error_text.to_string();
    }
    let number = value.format_with(spec).unwrap_or_else(|err| {
        debug!("falling back to plain conversion: {err}");
        value.to_string()
    });
    format!("{number}{unit}")
}

/// Parses decorated text: a locale-aware parse first, then a raw parse of whatever
/// precedes the unit suffix.
pub fn from_decorated_string<T: NumericKind>(text: &str, spec: &FormatSpec, unit: &str) -> Option<T> {
    let localized = spec
        .normalize(text)
        .ok()
        .and_then(|canonical| T::from_canonical(&canonical, spec.parse_digits));
    if localized.is_some() {
        return localized;
    }

    let suffix = unit.trim();
    if suffix.is_empty() {
        return None;
    }
    // Cut where the suffix starts; keeping its first character would make the raw parse fail.
    let index = text.find(suffix)?;
    T::parse_literal(&text[..index])
}

/// A to-string/from-string pair bound to one format and suffix.
#[derive(Clone, Debug)]
pub struct NumericStringConverter<T: NumericKind> {
    pub spec: FormatSpec,
    pub unit: String,
    pub error_text: String,
    _kind: PhantomData<T>,
}

impl<T: NumericKind> NumericStringConverter<T> {
    pub fn new(spec: FormatSpec) -> Self {
        Self {
            spec,
            unit: String::new(),
            error_text: String::new(),
            _kind: PhantomData,
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn with_error_text(mut self, error_text: impl Into<String>) -> Self {
        self.error_text = error_text.into();
        self
    }

    pub fn to_text(&self, value: T) -> String {
        to_decorated_string(value, &self.spec, &self.unit, &self.error_text)
    }

    pub fn from_text(&self, text: &str) -> Option<T> {
        from_decorated_string(text, &self.spec, &self.unit)
    }
}

impl<T: NumericKind> Default for NumericStringConverter<T> {
    fn default() -> Self {
        Self::new(FormatSpec::default())
    }
}

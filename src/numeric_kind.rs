//! The numeric representations an editor can hold.
//!
//! [`NumericKind`] supplies the handful of per-type operations (parse, format, stepping,
//! precision) so the editing protocol is written once for `f64`, `f32`, `i32` and `i64`.

use core::fmt::{Debug, Display};
use core::num::IntErrorKind;

use crate::error::NumericError;
use crate::number_format::{round_fraction, FormatSpec, FractionDigits};

/// Direction of a single increment/decrement step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepDirection {
    Up,
    Down,
}

/// A numeric representation supported by the editors.
pub trait NumericKind:
    Copy + PartialOrd + Debug + Display + Default + Send + Sync + 'static
{
    /// Whether the kind has a fraction part (and therefore NaN and infinities).
    const FRACTIONAL: bool;
    /// Smallest finite value.
    const LOWEST: Self;
    /// Largest finite value.
    const HIGHEST: Self;

    fn zero() -> Self;

    fn is_finite(self) -> bool;

    /// `self ± delta`, saturating for integer kinds.
    fn offset(self, delta: Self, direction: StepDirection) -> Self;

    fn to_f64(self) -> f64;

    /// Lossy conversion back from `f64`; integer kinds saturate and map NaN to zero.
    fn from_f64(value: f64) -> Self;

    /// Plain, locale-independent parse (`str::parse`).
    fn parse_literal(text: &str) -> Option<Self>;

    /// Interprets a canonical literal produced by [`FormatSpec::normalize`].
    fn from_canonical(canonical: &str, digits: FractionDigits) -> Option<Self>;

    fn format_with(self, spec: &FormatSpec) -> Result<String, NumericError>;

    /// Rounds to `decimals` fraction digits. A no-op for integer kinds.
    fn round_to_decimals(self, decimals: u8) -> Self;

    fn is_zero(self) -> bool {
        self == Self::zero()
    }
}

macro_rules! impl_float_kind {
    ($($t:ty),*) => {$(
        impl NumericKind for $t {
            const FRACTIONAL: bool = true;
            const LOWEST: Self = <$t>::MIN;
            const HIGHEST: Self = <$t>::MAX;

            fn zero() -> Self {
                0.0
            }

            fn is_finite(self) -> bool {
                <$t>::is_finite(self)
            }

            fn offset(self, delta: Self, direction: StepDirection) -> Self {
                match direction {
                    StepDirection::Up => self + delta,
                    StepDirection::Down => self - delta,
                }
            }

            fn to_f64(self) -> f64 {
                self as f64
            }

            fn from_f64(value: f64) -> Self {
                value as $t
            }

            fn parse_literal(text: &str) -> Option<Self> {
                text.trim().parse().ok()
            }

            fn from_canonical(canonical: &str, digits: FractionDigits) -> Option<Self> {
                let value: f64 = canonical.parse().ok()?;
                Some(round_fraction(value, digits.max) as $t)
            }

            fn format_with(self, spec: &FormatSpec) -> Result<String, NumericError> {
                spec.format_decimal(self as f64)
            }

            fn round_to_decimals(self, decimals: u8) -> Self {
                round_fraction(self as f64, decimals) as $t
            }
        }
    )*};
}

macro_rules! impl_integer_kind {
    ($($t:ty),*) => {$(
        impl NumericKind for $t {
            const FRACTIONAL: bool = false;
            const LOWEST: Self = <$t>::MIN;
            const HIGHEST: Self = <$t>::MAX;

            fn zero() -> Self {
                0
            }

            fn is_finite(self) -> bool {
                true
            }

            fn offset(self, delta: Self, direction: StepDirection) -> Self {
                match direction {
                    StepDirection::Up => self.saturating_add(delta),
                    StepDirection::Down => self.saturating_sub(delta),
                }
            }

            fn to_f64(self) -> f64 {
                self as f64
            }

            fn from_f64(value: f64) -> Self {
                value as $t
            }

            fn parse_literal(text: &str) -> Option<Self> {
                text.trim().parse().ok()
            }

            fn from_canonical(canonical: &str, _digits: FractionDigits) -> Option<Self> {
                let integer_part = canonical.split('.').next()?;
                let wide = parse_integer_saturating(integer_part)?;
                Some(wide.clamp(<$t>::MIN as i128, <$t>::MAX as i128) as $t)
            }

            fn format_with(self, spec: &FormatSpec) -> Result<String, NumericError> {
                Ok(spec.format_integer(self as i128))
            }

            fn round_to_decimals(self, _decimals: u8) -> Self {
                self
            }
        }
    )*};
}

impl_float_kind!(f32, f64);
impl_integer_kind!(i32, i64);

/// Parses an integer literal, saturating instead of failing on overflow.
fn parse_integer_saturating(literal: &str) -> Option<i128> {
    match literal.parse::<i128>() {
        Ok(value) => Some(value),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Some(i128::MAX),
            IntErrorKind::NegOverflow => Some(i128::MIN),
            _ => None,
        },
    }
}

/// Saturating clamp built as `min(max(value, minimum), maximum)`.
///
/// NaN propagates instead of being pinned to a bound. When `minimum > maximum`
/// the maximum wins.
pub fn clamp_propagating<T: NumericKind>(value: T, minimum: T, maximum: T) -> T {
    let raised = if value < minimum { minimum } else { value };
    if raised > maximum { maximum } else { raised }
}

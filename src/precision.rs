//! Precision adjustment applied between parsing and clamping.

use crate::numeric_kind::NumericKind;

/// Rounding applied to a freshly parsed or programmatically set value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PrecisionRule {
    /// Keep the value as parsed.
    #[default]
    Unchanged,
    /// Round to a fixed number of decimals.
    Decimals(u8),
    /// Fewer decimals as the magnitude grows: 3 below 1, 2 below 10, 1 below 100, then none.
    MagnitudeDependent,
}

impl PrecisionRule {
    pub fn apply<T: NumericKind>(&self, value: T) -> T {
        if !T::FRACTIONAL || !value.is_finite() {
            return value;
        }
        match *self {
            Self::Unchanged => value,
            Self::Decimals(decimals) => value.round_to_decimals(decimals),
            Self::MagnitudeDependent => {
                value.round_to_decimals(magnitude_decimals(value.to_f64().abs()))
            }
        }
    }
}

fn magnitude_decimals(magnitude: f64) -> u8 {
    match magnitude {
        m if m < 1.0 => 3,
        m if m < 10.0 => 2,
        m if m < 100.0 => 1,
        _ => 0,
    }
}

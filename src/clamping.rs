//! Clamp strategies applied to every committed value.

use crate::numeric_kind::{clamp_propagating, NumericKind};

/// Degrees in a full turn.
pub const FULL_TURN_DEGREES: f64 = 360.0;

/// How out-of-range values are brought back into `[minimum, maximum]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ClampStrategy {
    /// Pin to the nearest bound.
    #[default]
    Saturate,
    /// Shift by whole periods when the range spans at least one period,
    /// otherwise saturate. Used for angles.
    Periodic { period: f64 },
}

impl ClampStrategy {
    /// Periodic clamping over a full turn of degrees.
    pub const fn angle() -> Self {
        Self::Periodic {
            period: FULL_TURN_DEGREES,
        }
    }

    /// Re-expresses the period in another unit. Saturation is unaffected.
    pub fn convert_period(self, convert: impl FnOnce(f64) -> f64) -> Self {
        match self {
            Self::Saturate => Self::Saturate,
            Self::Periodic { period } => Self::Periodic {
                period: convert(period).abs(),
            },
        }
    }

    /// Brings `value` into `[minimum, maximum]`.
    ///
    /// The span check is made on every call since bounds can change at any time.
    pub fn apply<T: NumericKind>(&self, value: T, minimum: T, maximum: T) -> T {
        match *self {
            Self::Saturate => clamp_propagating(value, minimum, maximum),
            Self::Periodic { period } => {
                let (lo, hi) = (minimum.to_f64(), maximum.to_f64());
                let x = value.to_f64();
                let spans_period = period > 0.0 && (hi - lo).abs() >= period;
                if !spans_period || !x.is_finite() || (lo <= x && x <= hi) {
                    return clamp_propagating(value, minimum, maximum);
                }
                let unwrapped = unwrap(x, lo, hi, period);
                // guards integer rounding at the bounds
                clamp_propagating(T::from_f64(unwrapped), minimum, maximum)
            }
        }
    }
}

/// Adds or subtracts whole periods until `value` lies in `[minimum, maximum]`.
///
/// Assumes the range spans at least one period and `value` is finite.
pub fn unwrap(value: f64, minimum: f64, maximum: f64, period: f64) -> f64 {
    if value > maximum {
        let turns = ((value - maximum) / period).ceil();
        value - turns * period
    } else if value < minimum {
        let turns = ((minimum - value) / period).ceil();
        value + turns * period
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_turn_range_unwraps() {
        let angle = ClampStrategy::angle();
        assert_eq!(angle.apply(200.0, -180.0, 180.0), -160.0);
        assert_eq!(angle.apply(-200.0, -180.0, 180.0), 160.0);
        assert_eq!(angle.apply(170.0, -180.0, 180.0), 170.0);
        assert_eq!(angle.apply(180.0, -180.0, 180.0), 180.0);
        assert_eq!(angle.apply(1000.0, 0.0, 360.0), 280.0);
        assert_eq!(angle.apply(-1000.0, 0.0, 720.0), 80.0);
    }

    #[test]
    fn sub_period_range_saturates() {
        let angle = ClampStrategy::angle();
        assert_eq!(angle.apply(200.0, -90.0, 90.0), 90.0);
        assert_eq!(angle.apply(-200.0, -90.0, 90.0), -90.0);
    }

    #[test]
    fn non_finite_values_never_loop() {
        let angle = ClampStrategy::angle();
        assert_eq!(angle.apply(f64::INFINITY, -180.0, 180.0), 180.0);
        assert!(angle.apply(f64::NAN, -180.0, 180.0).is_nan());
    }

    #[test]
    fn integer_angles_unwrap() {
        assert_eq!(ClampStrategy::angle().apply(370i32, 0, 360), 10);
        assert_eq!(ClampStrategy::Saturate.apply(370i64, 0, 360), 360);
    }
}

//! The bounded value an editor owns, plus the reset policies for unparseable input.

use std::sync::Arc;

use crate::numeric_kind::{clamp_propagating, NumericKind};

/// Computes the replacement value when typed text cannot be parsed.
pub type ResetCallback<T> = Arc<dyn Fn(&NumericValue<T>) -> T + Send + Sync>;

/// A bounded numeric value with its stepping and decoration settings.
///
/// `minimum <= maximum` is the caller's responsibility.
#[derive(Clone, Debug, PartialEq)]
pub struct NumericValue<T: NumericKind> {
    pub(crate) current: T,
    pub(crate) minimum: T,
    pub(crate) maximum: T,
    pub(crate) default: T,
    pub(crate) increment: T,
    pub(crate) measurement_unit: String,
    pub(crate) error_text: String,
}

impl<T: NumericKind> NumericValue<T> {
    pub fn new(current: T, minimum: T, maximum: T, increment: T) -> Self {
        Self {
            current,
            minimum,
            maximum,
            default: current,
            increment,
            measurement_unit: String::new(),
            error_text: String::new(),
        }
    }

    pub fn current(&self) -> T {
        self.current
    }

    pub fn minimum(&self) -> T {
        self.minimum
    }

    pub fn maximum(&self) -> T {
        self.maximum
    }

    pub fn default_value(&self) -> T {
        self.default
    }

    pub fn increment(&self) -> T {
        self.increment
    }

    pub fn measurement_unit(&self) -> &str {
        &self.measurement_unit
    }

    pub fn error_text(&self) -> &str {
        &self.error_text
    }

    /// Stepping is disabled by a zero increment.
    pub fn can_step(&self) -> bool {
        !self.increment.is_zero()
    }

    pub fn contains(&self, value: T) -> bool {
        self.minimum <= value && value <= self.maximum
    }
}

/// Resets to the legal value closest to zero.
pub fn reset_to_nearest_zero<T: NumericKind>() -> ResetCallback<T> {
    Arc::new(|value: &NumericValue<T>| {
        clamp_propagating(T::zero(), value.minimum, value.maximum)
    })
}

/// Resets to the configured default value.
pub fn reset_to_default<T: NumericKind>() -> ResetCallback<T> {
    Arc::new(|value: &NumericValue<T>| value.default)
}

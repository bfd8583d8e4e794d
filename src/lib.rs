//! Numeric value editing for Bevy.
//!
//! Text typed into a numeric field is parsed, adjusted to a precision, clamped into
//! `[minimum, maximum]` and formatted back with an optional unit suffix.
//! [`NumericEditor`] implements that protocol independently of any UI; the
//! [`editor_ui`] module hosts it in a bevy_ui text field.

pub mod clamping;
pub mod converter;
pub mod deferred;
pub mod editor_ui;
pub mod error;
pub mod measurement_units;
pub mod number_format;
pub mod numeric_editor;
pub mod numeric_kind;
pub mod numeric_value;
pub mod precision;
pub mod presets;

// Re-export the main types for convenience
pub use clamping::ClampStrategy;
pub use converter::NumericStringConverter;
pub use editor_ui::{
    numeric_field, NumericField, NumericFieldConfig, NumericFieldsPlugin, NumericValueChanged,
};
pub use error::NumericError;
pub use measurement_units::{Dimension, PrecisionTable, Unit};
pub use number_format::{FormatSpec, FractionDigits, Locale};
pub use numeric_editor::{
    CharacterFilter, EditorKey, KeyResponse, NumericEditor, NumericEditorProps, TextSelection,
};
pub use numeric_kind::{NumericKind, StepDirection};
pub use numeric_value::{reset_to_default, reset_to_nearest_zero, NumericValue, ResetCallback};
pub use precision::PrecisionRule;

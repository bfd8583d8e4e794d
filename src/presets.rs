//! Ready-made editor configurations.
//!
//! Each preset is plain configuration (bounds, increment, precision, suffix, clamp
//! strategy) applied to the generic [`NumericEditor`].

use crate::clamping::ClampStrategy;
use crate::measurement_units::{PrecisionTable, Unit};
use crate::number_format::{FormatSpec, FractionDigits};
use crate::numeric_editor::{NumericEditor, NumericEditorProps};

/// Absolute temperature range covered by [`temperature_editor`], in kelvin.
pub const TEMPERATURE_RANGE_KELVIN: (f64, f64) = (0.0, 6000.0);

pub fn double_editor(value: f64, minimum: f64, maximum: f64, increment: f64) -> NumericEditor<f64> {
    NumericEditor::new(NumericEditorProps {
        value,
        minimum,
        maximum,
        increment,
        ..Default::default()
    })
}

pub fn float_editor(value: f32, minimum: f32, maximum: f32, increment: f32) -> NumericEditor<f32> {
    NumericEditor::new(NumericEditorProps {
        value,
        minimum,
        maximum,
        increment,
        ..Default::default()
    })
}

pub fn integer_editor(value: i32, minimum: i32, maximum: i32, increment: i32) -> NumericEditor<i32> {
    NumericEditor::new(NumericEditorProps {
        value,
        minimum,
        maximum,
        increment,
        ..Default::default()
    })
}

pub fn long_editor(value: i64, minimum: i64, maximum: i64, increment: i64) -> NumericEditor<i64> {
    NumericEditor::new(NumericEditorProps {
        value,
        minimum,
        maximum,
        increment,
        ..Default::default()
    })
}

/// Degrees in `[-180, 180]`; out-of-range input wraps around instead of pinning.
pub fn angle_editor(value: f64) -> NumericEditor<f64> {
    NumericEditor::new(NumericEditorProps {
        value,
        minimum: -180.0,
        maximum: 180.0,
        increment: 1.0,
        format: FormatSpec::default().with_format_digits(FractionDigits::new(0, 1)),
        clamp: ClampStrategy::angle(),
        measurement_unit: Unit::Degree.presentation(),
        unit: Some(Unit::Degree),
        ..Default::default()
    })
}

/// Relative humidity in percent.
pub fn humidity_editor(value: f64) -> NumericEditor<f64> {
    NumericEditor::new(NumericEditorProps {
        value,
        minimum: 0.0,
        maximum: 100.0,
        increment: 1.0,
        format: FormatSpec::default().with_format_digits(FractionDigits::new(0, 1)),
        measurement_unit: " %".to_string(),
        ..Default::default()
    })
}

/// A percentage with whole-number steps and two display decimals at most.
pub fn percentage_editor(value: f64) -> NumericEditor<f64> {
    NumericEditor::new(NumericEditorProps {
        value,
        minimum: 0.0,
        maximum: 100.0,
        increment: 1.0,
        format: FormatSpec::default().with_format_digits(FractionDigits::new(0, 2)),
        measurement_unit: "%".to_string(),
        ..Default::default()
    })
}

/// A temperature given in kelvin, displayed in `unit`.
///
/// Falls back to kelvin if `unit` is not a temperature unit.
pub fn temperature_editor(value_kelvin: f64, unit: Unit) -> NumericEditor<f64> {
    let table = PrecisionTable::default();
    let (minimum, maximum) = TEMPERATURE_RANGE_KELVIN;
    let mut editor = NumericEditor::new(NumericEditorProps {
        value: value_kelvin,
        minimum,
        maximum,
        increment: 1.0,
        error_text: "n/a".to_string(),
        ..Default::default()
    });
    editor.set_unit(Unit::Kelvin, &table);
    // only fails for non-temperature units, which leaves the editor in kelvin
    let _ = editor.change_unit(unit, &table);
    editor
}

/// A non-negative length given in meters, displayed in `unit`.
///
/// Falls back to meters if `unit` is not a length unit.
pub fn length_editor(value_meters: f64, unit: Unit) -> NumericEditor<f64> {
    let table = PrecisionTable::default();
    let mut editor = NumericEditor::new(NumericEditorProps {
        value: value_meters,
        minimum: 0.0,
        maximum: f64::MAX,
        increment: 1.0,
        ..Default::default()
    });
    editor.set_unit(Unit::Meter, &table);
    let _ = editor.change_unit(unit, &table);
    editor
}

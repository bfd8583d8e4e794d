//! End-to-end behavior of the numeric editing protocol.

use feathers_numeric::clamping::unwrap;
use feathers_numeric::presets::{angle_editor, double_editor, integer_editor};
use feathers_numeric::{
    reset_to_nearest_zero, ClampStrategy, EditorKey, FormatSpec, FractionDigits, KeyResponse,
    Locale, NumericEditor, NumericEditorProps, PrecisionTable, StepDirection, TextSelection, Unit,
};

fn one_decimal_editor() -> NumericEditor<f64> {
    NumericEditor::new(NumericEditorProps {
        value: 0.0,
        minimum: 0.0,
        maximum: 100.0,
        increment: 0.5,
        format: FormatSpec::default().with_format_digits(FractionDigits::exactly(1)),
        ..Default::default()
    })
}

// ============================================================================
// COMMIT AND STEP
// ============================================================================

#[test]
fn commit_clamps_then_step_moves_by_increment() {
    let mut editor = one_decimal_editor();

    editor.commit("150");
    assert_eq!(editor.value(), 100.0);
    assert_eq!(editor.text(), "100.0");

    editor.step(StepDirection::Down);
    assert_eq!(editor.value(), 99.5);
    assert_eq!(editor.text(), "99.5");
}

#[test]
fn commit_is_idempotent() {
    let mut editor = one_decimal_editor();
    editor.commit("12.5");
    let (value, text) = (editor.value(), editor.text().to_string());
    assert_eq!(text, "12.5");

    editor.commit(&text);
    assert_eq!(editor.value(), value);
    assert_eq!(editor.text(), text);
}

#[test]
fn blank_input_keeps_current_value_not_default() {
    let editor = NumericEditor::new(NumericEditorProps {
        value: 42.0,
        default: Some(7.0),
        ..Default::default()
    });
    assert_eq!(editor.parse(Some("")), 42.0);
    assert_eq!(editor.parse(Some("   ")), 42.0);
    assert_eq!(editor.parse(None), 42.0);
}

#[test]
fn unparseable_input_uses_reset_callback() {
    let mut editor = NumericEditor::new(NumericEditorProps {
        value: 50.0,
        minimum: 20.0,
        maximum: 100.0,
        reset: Some(reset_to_nearest_zero()),
        ..Default::default()
    });
    editor.commit("abc");
    assert_eq!(editor.value(), 20.0);
    assert_eq!(editor.text(), "20");

    editor.set_reset_callback(None);
    editor.commit("abc");
    assert_eq!(editor.value(), 20.0);
}

#[test]
fn zero_increment_disables_stepping() {
    let mut editor = double_editor(5.0, 0.0, 10.0, 0.0);
    editor.step(StepDirection::Up);
    editor.step(StepDirection::Down);
    assert_eq!(editor.value(), 5.0);
}

#[test]
fn localized_input_is_understood() {
    let mut editor = NumericEditor::new(NumericEditorProps {
        value: 0.0,
        format: FormatSpec::default().with_locale(Locale::DE_DE),
        ..Default::default()
    });
    editor.commit("1.234,5");
    assert_eq!(editor.value(), 1234.5);
    assert_eq!(editor.text(), "1.234,5");
}

// ============================================================================
// NON-FINITE VALUES
// ============================================================================

#[test]
fn error_text_replaces_non_finite_values() {
    let editor = NumericEditor::new(NumericEditorProps {
        value: 1.0,
        measurement_unit: " K".to_string(),
        error_text: "ERR".to_string(),
        ..Default::default()
    });
    assert_eq!(editor.format(f64::NAN), "ERR");
    assert_eq!(editor.format(f64::INFINITY), "ERR");
    assert_eq!(editor.format(1.5), "1.5 K");
}

// ============================================================================
// CLAMP STRATEGIES
// ============================================================================

#[test]
fn full_turn_ranges_wrap() {
    assert_eq!(unwrap(200.0, -180.0, 180.0, 360.0), -160.0);
    assert_eq!(unwrap(-200.0, -180.0, 180.0, 360.0), 160.0);
    assert_eq!(unwrap(170.0, -180.0, 180.0, 360.0), 170.0);

    let editor = angle_editor(0.0);
    assert_eq!(editor.clamp(200.0), -160.0);
}

#[test]
fn partial_turn_ranges_saturate() {
    let mut editor = angle_editor(0.0);
    editor.set_minimum_value(-90.0);
    editor.set_maximum_value(90.0);
    assert_eq!(editor.clamp(200.0), 90.0);
    assert_eq!(editor.clamp(-200.0), -90.0);

    // The span is checked on every clamp, so widening the range re-enables wrapping
    editor.set_minimum_value(-180.0);
    editor.set_maximum_value(180.0);
    assert_eq!(editor.clamp(200.0), -160.0);
    assert_eq!(editor.clamp_strategy(), ClampStrategy::angle());
}

// ============================================================================
// UNIT CHANGES
// ============================================================================

#[test]
fn kelvin_to_celsius_keeps_value_in_new_range() {
    let table = PrecisionTable::default();
    let mut editor = NumericEditor::new(NumericEditorProps {
        value: 6000.0,
        minimum: 0.0,
        maximum: 6000.0,
        unit: Some(Unit::Kelvin),
        ..Default::default()
    });
    editor.change_unit(Unit::Celsius, &table).unwrap();

    let value = editor.value();
    assert!(editor.minimum_value() <= value && value <= editor.maximum_value());
    assert!((editor.minimum_value() + 273.15).abs() < 1e-9);
    assert!((value - 5726.85).abs() < 1e-9);
    assert!(editor.text().ends_with(" °C"));
}

#[test]
fn bounds_convert_before_value() {
    let table = PrecisionTable::empty();
    let mut editor = NumericEditor::new(NumericEditorProps {
        value: 10.0,
        minimum: 0.0,
        maximum: 10.0,
        unit: Some(Unit::Meter),
        ..Default::default()
    });
    editor.change_unit_with(Unit::Millimeter, |meters| meters * 1000.0, &table);

    assert_eq!(editor.maximum_value(), 10_000.0);
    assert_eq!(editor.value(), 10_000.0);
    assert_eq!(editor.unit(), Some(Unit::Millimeter));
}

#[test]
fn incompatible_unit_change_is_rejected() {
    let table = PrecisionTable::default();
    let mut editor = NumericEditor::new(NumericEditorProps {
        value: 300.0,
        unit: Some(Unit::Kelvin),
        ..Default::default()
    });
    assert!(editor.change_unit(Unit::Meter, &table).is_err());
    assert_eq!(editor.value(), 300.0);
    assert_eq!(editor.unit(), Some(Unit::Kelvin));
}

// ============================================================================
// KEYBOARD CONTRACT
// ============================================================================

fn focused(mut editor: NumericEditor<f64>) -> NumericEditor<f64> {
    editor.focus_gained();
    editor.run_deferred();
    editor
}

#[test]
fn typing_replaces_selection_and_enter_commits() {
    let mut editor = focused(one_decimal_editor());
    assert_eq!(editor.selection(), TextSelection::All);

    for ch in "42.25".chars() {
        assert_eq!(editor.handle_key(EditorKey::Character(ch)), KeyResponse::Consumed);
    }
    assert_eq!(editor.text(), "42.25");
    assert!(editor.is_dirty());

    assert_eq!(editor.handle_key(EditorKey::Enter), KeyResponse::Consumed);
    assert!(editor.is_focused());
    assert!(!editor.is_dirty());
    assert_eq!(editor.text(), editor.format(editor.value()));
}

#[test]
fn escape_reverts_and_reselects_on_next_turn() {
    let mut editor = focused(one_decimal_editor());
    editor.commit("10");
    editor.handle_key(EditorKey::Character('7'));
    assert_eq!(editor.text(), "10.07");

    assert_eq!(editor.handle_key(EditorKey::Escape), KeyResponse::Consumed);
    assert_eq!(editor.text(), "10.0");
    assert_eq!(editor.value(), 10.0);
    assert_eq!(editor.selection(), TextSelection::Caret);

    editor.run_deferred();
    assert_eq!(editor.selection(), TextSelection::All);
}

#[test]
fn tab_commits_and_releases_focus() {
    let mut editor = focused(one_decimal_editor());
    editor.handle_key(EditorKey::Character('3'));
    assert_eq!(editor.handle_key(EditorKey::Tab), KeyResponse::ReleaseFocus);
    assert_eq!(editor.value(), 3.0);
    assert!(!editor.is_focused());
}

#[test]
fn arrows_step_and_commit_pending_text_first() {
    let mut editor = focused(one_decimal_editor());
    editor.handle_key(EditorKey::Character('8'));
    editor.handle_key(EditorKey::ArrowUp);
    assert_eq!(editor.value(), 8.5);
    assert_eq!(editor.text(), "8.5");
}

#[test]
fn focus_loss_commits() {
    let mut editor = focused(one_decimal_editor());
    editor.handle_key(EditorKey::Character('6'));
    editor.focus_lost();
    assert_eq!(editor.value(), 6.0);
    assert!(!editor.is_focused());
}

#[test]
fn character_filter_follows_bounds() {
    let mut editor = focused(one_decimal_editor());
    assert_eq!(editor.handle_key(EditorKey::Character('-')), KeyResponse::Rejected);
    assert_eq!(editor.handle_key(EditorKey::Character('x')), KeyResponse::Rejected);

    editor.set_minimum_value(-100.0);
    assert_eq!(editor.handle_key(EditorKey::Character('-')), KeyResponse::Consumed);

    let integers = integer_editor(0, 0, 10, 1);
    assert!(!integers.allowed_characters().allows('.'));
}

#[test]
fn keys_are_ignored_without_focus() {
    let mut editor = one_decimal_editor();
    assert_eq!(editor.handle_key(EditorKey::ArrowUp), KeyResponse::Ignored);
    assert_eq!(editor.value(), 0.0);
}

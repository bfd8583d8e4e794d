//! Numeric field widgets.
//!
//! - NumericField: a focusable text field that edits a number through a `NumericEditor`
//!   - Click to focus, type to edit, Enter or Tab to commit
//!   - Arrow keys step the value, Escape reverts the text

pub mod numeric_field;

pub use numeric_field::{
    display_text, editor_keys, numeric_field, run_deferred_editor_tasks,
    sync_numeric_field_text, track_numeric_field_focus, NumericField, NumericFieldPlugin,
    NumericFieldText, NumericValueChanged,
};

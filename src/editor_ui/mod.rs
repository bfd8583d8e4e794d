//! Bevy UI for numeric editors.
//!
//! Each [`NumericField`] entity owns a `NumericEditor` and mirrors its text into a
//! child `Text` node. Focus comes from bevy's `InputFocus`.

pub mod config;
pub mod plugin;
pub mod widgets;

pub use config::NumericFieldConfig;
pub use plugin::{NumericFieldSet, NumericFieldsPlugin};
pub use widgets::{
    numeric_field, NumericField, NumericFieldPlugin, NumericFieldText, NumericValueChanged,
};

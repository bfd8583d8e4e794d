//! Configuration for numeric field layout and styling.

use bevy::prelude::*;
use bevy::ui::Val;

/// Layout and styling shared by every numeric field.
#[derive(Resource, Clone)]
pub struct NumericFieldConfig {
    // Layout
    /// Width of a field.
    pub field_width: Val,
    /// Height of a field.
    pub field_height: Val,
    /// Padding between the border and the text.
    pub field_padding: UiRect,
    /// Border thickness.
    pub border_width: Val,

    // Typography
    pub font_size: f32,

    // Colors
    /// Text of an idle field.
    pub text_color: Color,
    /// Text while fully selected.
    pub selection_color: Color,
    /// Text while the error text is displayed.
    pub error_text_color: Color,
    pub border_color: Color,
    pub focused_border_color: Color,
}

impl Default for NumericFieldConfig {
    fn default() -> Self {
        Self {
            // Layout
            field_width: Val::Px(140.0),
            field_height: Val::Px(28.0),
            field_padding: UiRect::axes(Val::Px(6.0), Val::Px(4.0)),
            border_width: Val::Px(1.0),

            // Typography
            font_size: 13.0,

            // Colors
            text_color: Color::WHITE,
            selection_color: Color::srgba(0.45, 0.65, 1.0, 1.0),
            error_text_color: Color::srgba(0.8, 0.3, 0.3, 1.0),
            border_color: Color::srgba(0.3, 0.3, 0.3, 1.0),
            focused_border_color: Color::srgba(0.45, 0.65, 1.0, 1.0),
        }
    }
}

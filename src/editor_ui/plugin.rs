//! Plugin wiring numeric fields of every supported kind into an app.

use bevy::input_focus::InputFocus;
use bevy::prelude::*;

use super::config::NumericFieldConfig;
use super::widgets::NumericFieldPlugin;

/// System sets for organizing numeric field systems.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum NumericFieldSet {
    /// Deliver focus changes to editors (`Update`).
    Focus,
    /// Run work editors deferred to the next cycle (`PostUpdate`).
    Deferred,
    /// Mirror editor state into the UI (`PostUpdate`).
    Display,
}

/// Numeric fields for `f64`, `f32`, `i32` and `i64`.
pub struct NumericFieldsPlugin;

impl Plugin for NumericFieldsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<NumericFieldConfig>()
            .init_resource::<InputFocus>()
            // System ordering
            .configure_sets(
                PostUpdate,
                (NumericFieldSet::Deferred, NumericFieldSet::Display).chain(),
            )
            .add_plugins((
                NumericFieldPlugin::<f64>::default(),
                NumericFieldPlugin::<f32>::default(),
                NumericFieldPlugin::<i32>::default(),
                NumericFieldPlugin::<i64>::default(),
            ));

        info!("Numeric field widgets registered");
    }
}

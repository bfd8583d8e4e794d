//! Demonstrates numeric fields with bounds, units and angle wrapping.
//!
//! Click a field to focus it, type a value and press Enter or Tab to commit.
//! Arrow keys step the value, Escape reverts the text.

use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::feathers::dark_theme::create_dark_theme;
use bevy::feathers::theme::{ThemeBackgroundColor, UiTheme};
use bevy::feathers::tokens;
use bevy::feathers::FeathersPlugins;
use bevy::prelude::*;
use bevy::ui::Val::*;
use feathers_numeric::presets::{
    angle_editor, humidity_editor, integer_editor, temperature_editor,
};
use feathers_numeric::{
    numeric_field, NumericFieldConfig, NumericFieldsPlugin, NumericValueChanged, Unit,
};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(FeathersPlugins)
        .insert_resource(UiTheme(create_dark_theme()))
        .add_plugins(NumericFieldsPlugin)
        .add_systems(Startup, setup)
        .add_observer(log_value_changes)
        .add_observer(log_integer_changes)
        .run();
}

fn setup(mut commands: Commands, config: Res<NumericFieldConfig>) {
    commands.spawn(Camera2d);

    commands
        .spawn((
            Node {
                width: Percent(100.0),
                height: Percent(100.0),
                flex_direction: FlexDirection::Column,
                padding: UiRect::all(Px(16.0)),
                row_gap: Px(8.0),
                ..default()
            },
            ThemeBackgroundColor(tokens::WINDOW_BG),
        ))
        .with_children(|root| {
            labeled(root, "Heading", numeric_field(angle_editor(90.0), &config));
            labeled(
                root,
                "Temperature",
                numeric_field(temperature_editor(293.15, Unit::Celsius), &config),
            );
            labeled(root, "Humidity", numeric_field(humidity_editor(45.0), &config));
            labeled(
                root,
                "Count",
                numeric_field(integer_editor(3, 0, 10, 1), &config),
            );
        });
}

fn labeled(parent: &mut ChildSpawnerCommands<'_>, label: &str, field: impl Bundle) {
    parent
        .spawn(Node {
            column_gap: Px(12.0),
            align_items: AlignItems::Center,
            ..default()
        })
        .with_children(|row| {
            row.spawn((
                Node {
                    width: Px(110.0),
                    ..default()
                },
                Text::new(label),
            ));
            row.spawn(field);
        });
}

fn log_value_changes(event: On<NumericValueChanged<f64>>) {
    info!(
        "{:?}: {} -> {}",
        event.source, event.old_value, event.new_value
    );
}

fn log_integer_changes(event: On<NumericValueChanged<i32>>) {
    info!(
        "{:?}: {} -> {}",
        event.source, event.old_value, event.new_value
    );
}

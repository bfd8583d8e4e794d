//! Numeric field widget - a focusable text field driven by a [`NumericEditor`].
//!
//! The widget only forwards input to the editor and mirrors its state:
//! 1. Clicking focuses the field; focus changes reach the editor once per frame
//! 2. Key presses while focused go through [`NumericEditor::handle_key`]
//! 3. Deferred editor work runs in `PostUpdate`, then the text child is refreshed

use bevy::ecs::entity::Entity;
use bevy::ecs::event::Event;
use bevy::ecs::observer::On;
use bevy::input::ButtonState;
use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::input_focus::{FocusedInput, InputFocus};
use bevy::picking::events::{Click, Pointer};
use bevy::prelude::*;

use core::marker::PhantomData;

use crate::editor_ui::config::NumericFieldConfig;
use crate::editor_ui::plugin::NumericFieldSet;
use crate::numeric_editor::{EditorKey, KeyResponse, NumericEditor, TextSelection};
use crate::numeric_kind::NumericKind;

/// A numeric text field. Its first [`NumericFieldText`] child shows the editor text.
#[derive(Component)]
pub struct NumericField<T: NumericKind> {
    pub editor: NumericEditor<T>,
}

impl<T: NumericKind> NumericField<T> {
    pub fn new(editor: NumericEditor<T>) -> Self {
        Self { editor }
    }
}

/// Marker for the text child of a [`NumericField`].
#[derive(Component)]
pub struct NumericFieldText;

/// Event emitted when an interaction changes the committed value of a field.
#[derive(Event, Clone, Debug)]
pub struct NumericValueChanged<T: NumericKind> {
    /// The field entity.
    pub source: Entity,
    pub old_value: T,
    pub new_value: T,
}

/// Builds a numeric field with its text child.
pub fn numeric_field<T: NumericKind>(
    editor: NumericEditor<T>,
    config: &NumericFieldConfig,
) -> impl Bundle {
    let label = editor.text().to_string();
    (
        Node {
            width: config.field_width,
            height: config.field_height,
            padding: config.field_padding,
            border: UiRect::all(config.border_width),
            align_items: AlignItems::Center,
            overflow: Overflow::clip(),
            ..default()
        },
        BorderColor::all(config.border_color),
        NumericField::new(editor),
        children![(
            Text::new(label),
            TextFont {
                font_size: config.font_size,
                ..default()
            },
            TextColor(config.text_color),
            NumericFieldText,
        )],
    )
}

/// Translates a logical key into the keys an editor understands.
pub fn editor_keys(key: &Key) -> Vec<EditorKey> {
    match key {
        Key::Enter => vec![EditorKey::Enter],
        Key::Escape => vec![EditorKey::Escape],
        Key::Tab => vec![EditorKey::Tab],
        Key::ArrowUp => vec![EditorKey::ArrowUp],
        Key::ArrowDown => vec![EditorKey::ArrowDown],
        Key::Backspace => vec![EditorKey::Backspace],
        Key::Character(text) => text.chars().map(EditorKey::Character).collect(),
        _ => Vec::new(),
    }
}

fn notify_if_changed<T: NumericKind>(
    commands: &mut Commands,
    source: Entity,
    old_value: T,
    new_value: T,
) {
    if old_value != new_value {
        commands.trigger(NumericValueChanged {
            source,
            old_value,
            new_value,
        });
    }
}

// Observer: clicking a field gives it input focus
fn numeric_field_on_click<T: NumericKind>(
    mut click: On<Pointer<Click>>,
    q_field: Query<(), With<NumericField<T>>>,
    mut input_focus: ResMut<InputFocus>,
) {
    if q_field.get(click.entity).is_ok() {
        click.propagate(false);
        input_focus.set(click.entity);
    }
}

/// Observer: handle keyboard input for the focused field
fn numeric_field_on_keyboard_input<T: NumericKind>(
    mut trigger: On<FocusedInput<KeyboardInput>>,
    mut q_field: Query<&mut NumericField<T>>,
    mut input_focus: ResMut<InputFocus>,
    mut commands: Commands,
) {
    // Only process key presses
    if trigger.input.state != ButtonState::Pressed {
        return;
    }

    let entity = trigger.focused_entity;
    let Ok(mut field) = q_field.get_mut(entity) else {
        return;
    };
    // The event bubbles up to the window; the field handles it once
    trigger.propagate(false);

    // Focus may have arrived this frame, before the focus tracker ran
    if !field.editor.is_focused() {
        field.editor.focus_gained();
    }

    let old_value = field.editor.value();
    for key in editor_keys(&trigger.input.logical_key) {
        if field.editor.handle_key(key) == KeyResponse::ReleaseFocus {
            input_focus.clear();
        }
    }
    notify_if_changed(&mut commands, entity, old_value, field.editor.value());
}

/// Keeps editors in step with [`InputFocus`], committing the field that lost it.
pub fn track_numeric_field_focus<T: NumericKind>(
    input_focus: Res<InputFocus>,
    mut last_focus: Local<Option<Entity>>,
    mut q_field: Query<&mut NumericField<T>>,
    mut commands: Commands,
) {
    let current = input_focus.get();
    if current == *last_focus {
        return;
    }

    if let Some(previous) = *last_focus
        && let Ok(mut field) = q_field.get_mut(previous)
    {
        let old_value = field.editor.value();
        field.editor.focus_lost();
        notify_if_changed(&mut commands, previous, old_value, field.editor.value());
    }

    if let Some(next) = current
        && let Ok(mut field) = q_field.get_mut(next)
        && !field.editor.is_focused()
    {
        field.editor.focus_gained();
    }

    *last_focus = current;
}

/// Runs the work editors deferred while handling this frame's input.
pub fn run_deferred_editor_tasks<T: NumericKind>(mut q_field: Query<&mut NumericField<T>>) {
    for mut field in &mut q_field {
        // Only take a mutable borrow when there is work, to keep change detection quiet
        if field.editor.has_deferred_tasks() {
            field.editor.run_deferred();
        }
    }
}

/// Registers the observers and systems driving [`NumericField<T>`] entities.
pub struct NumericFieldPlugin<T: NumericKind>(PhantomData<T>);

impl<T: NumericKind> Default for NumericFieldPlugin<T> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<T: NumericKind> Plugin for NumericFieldPlugin<T> {
    fn build(&self, app: &mut App) {
        app
            // Focus and key handling
            .add_observer(numeric_field_on_click::<T>)
            .add_observer(numeric_field_on_keyboard_input::<T>)
            .add_systems(
                Update,
                track_numeric_field_focus::<T>.in_set(NumericFieldSet::Focus),
            )
            // Display updates
            .add_systems(
                PostUpdate,
                (
                    run_deferred_editor_tasks::<T>.in_set(NumericFieldSet::Deferred),
                    sync_numeric_field_text::<T>.in_set(NumericFieldSet::Display),
                ),
            );
    }
}

/// Text shown for an editor: its buffer, with a caret while focused.
pub fn display_text<T: NumericKind>(editor: &NumericEditor<T>) -> String {
    if editor.is_focused() {
        format!("{}|", editor.text())
    } else {
        editor.text().to_string()
    }
}

/// Writes editor state into the text child and border of changed fields.
pub fn sync_numeric_field_text<T: NumericKind>(
    mut q_field: Query<
        (&NumericField<T>, &Children, Option<&mut BorderColor>),
        Changed<NumericField<T>>,
    >,
    mut q_text: Query<(&mut Text, &mut TextColor), With<NumericFieldText>>,
    config: Res<NumericFieldConfig>,
) {
    for (field, children, border) in &mut q_field {
        let editor = &field.editor;
        let color = if editor.shows_error_text() {
            config.error_text_color
        } else if editor.is_focused() && editor.selection() == TextSelection::All {
            config.selection_color
        } else {
            config.text_color
        };

        for child in children.iter() {
            if let Ok((mut text, mut text_color)) = q_text.get_mut(child) {
                text.0 = display_text(editor);
                text_color.0 = color;
            }
        }

        if let Some(mut border) = border {
            *border = BorderColor::all(if editor.is_focused() {
                config.focused_border_color
            } else {
                config.border_color
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::double_editor;
    use bevy::ecs::system::RunSystemOnce;
    use bevy::input::InputPlugin;
    use bevy::input::keyboard::KeyCode;
    use bevy::input_focus::InputDispatchPlugin;
    use bevy::window::PrimaryWindow;

    use crate::editor_ui::plugin::NumericFieldsPlugin;

    fn press(window: Entity, key_code: KeyCode, logical_key: Key) -> KeyboardInput {
        let text = match &logical_key {
            Key::Character(text) => Some(text.clone()),
            _ => None,
        };
        KeyboardInput {
            key_code,
            logical_key,
            state: ButtonState::Pressed,
            text,
            repeat: false,
            window,
        }
    }

    #[test]
    fn maps_logical_keys() {
        assert_eq!(editor_keys(&Key::Enter), vec![EditorKey::Enter]);
        assert_eq!(editor_keys(&Key::ArrowDown), vec![EditorKey::ArrowDown]);
        assert_eq!(
            editor_keys(&Key::Character("1.".into())),
            vec![EditorKey::Character('1'), EditorKey::Character('.')]
        );
        assert!(editor_keys(&Key::Home).is_empty());
    }

    #[test]
    fn deferred_work_and_text_sync() {
        let mut world = World::new();
        world.insert_resource(NumericFieldConfig::default());

        let mut editor = double_editor(42.0, 0.0, 100.0, 1.0);
        editor.focus_gained();
        let field = world
            .spawn((
                NumericField::new(editor),
                children![(Text::new(""), TextColor::default(), NumericFieldText)],
            ))
            .id();

        world
            .run_system_once(run_deferred_editor_tasks::<f64>)
            .unwrap();
        world
            .run_system_once(sync_numeric_field_text::<f64>)
            .unwrap();

        let selection = world
            .get::<NumericField<f64>>(field)
            .unwrap()
            .editor
            .selection();
        assert_eq!(selection, TextSelection::All);

        let mut texts = world.query_filtered::<(&Text, &TextColor), With<NumericFieldText>>();
        let (text, color) = texts.single(&world).unwrap();
        assert_eq!(text.0, "42|");
        assert_eq!(color.0, NumericFieldConfig::default().selection_color);
    }

    #[test]
    fn nested_field_handles_each_key_once() {
        let mut app = App::new();
        app.add_plugins((InputPlugin, InputDispatchPlugin, NumericFieldsPlugin));

        let window = app
            .world_mut()
            .spawn((Window::default(), PrimaryWindow))
            .id();
        let mut editor = double_editor(0.0, -100.0, 100.0, 1.0);
        editor.focus_gained();
        editor.run_deferred();
        let layout = app.world_mut().spawn(Node::default()).id();
        let field = app
            .world_mut()
            .spawn((Node::default(), NumericField::new(editor), ChildOf(layout)))
            .id();
        app.update();

        app.world_mut().resource_mut::<InputFocus>().set(field);
        app.world_mut()
            .write_message(press(window, KeyCode::Digit5, Key::Character("5".into())));
        app.update();

        let editor = &app.world().get::<NumericField<f64>>(field).unwrap().editor;
        assert_eq!(editor.text(), "5");
        assert!(editor.is_dirty());

        app.world_mut()
            .write_message(press(window, KeyCode::ArrowUp, Key::ArrowUp));
        app.update();

        let editor = &app.world().get::<NumericField<f64>>(field).unwrap().editor;
        assert_eq!(editor.value(), 6.0);
        assert_eq!(editor.text(), "6");
        assert!(editor.is_focused());
    }
}

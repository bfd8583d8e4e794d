//! The numeric editing protocol: parse, adjust precision, clamp, format, display.
//!
//! [`NumericEditor`] owns a [`NumericValue`] together with the text shown for it, and
//! turns host events (commit, cancel, step, focus changes, key presses, unit changes)
//! into deterministic updates of both. None of its operations fail or panic; malformed
//! input is recovered from locally.

use core::fmt;

use bevy::log::{debug, trace, warn};

use crate::clamping::ClampStrategy;
use crate::converter::{from_decorated_string, to_decorated_string};
use crate::deferred::{DeferredQueue, EditorTask};
use crate::error::NumericError;
use crate::measurement_units::{PrecisionTable, Unit};
use crate::number_format::FormatSpec;
use crate::numeric_kind::{NumericKind, StepDirection};
use crate::numeric_value::{NumericValue, ResetCallback};
use crate::precision::PrecisionRule;

/// Props for constructing a [`NumericEditor`].
pub struct NumericEditorProps<T: NumericKind> {
    /// Initial value, clamped on construction.
    pub value: T,
    pub minimum: T,
    pub maximum: T,
    /// Substituted by [`reset_to_default`](crate::reset_to_default). Falls back to `value`.
    pub default: Option<T>,
    /// Step size for the arrow keys. Zero disables stepping.
    pub increment: T,
    pub format: FormatSpec,
    pub clamp: ClampStrategy,
    pub precision: PrecisionRule,
    /// Suffix appended to every formatted value.
    pub measurement_unit: String,
    /// Shown instead of NaN or infinities when non-empty.
    pub error_text: String,
    /// Unit the value is expressed in, for later unit changes.
    pub unit: Option<Unit>,
    pub reset: Option<ResetCallback<T>>,
}

impl<T: NumericKind> Default for NumericEditorProps<T> {
    fn default() -> Self {
        Self {
            value: T::zero(),
            minimum: T::LOWEST,
            maximum: T::HIGHEST,
            default: None,
            increment: T::from_f64(1.0),
            format: FormatSpec::default(),
            clamp: ClampStrategy::Saturate,
            precision: PrecisionRule::Unchanged,
            measurement_unit: String::new(),
            error_text: String::new(),
            unit: None,
            reset: None,
        }
    }
}

/// Keys the editor reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorKey {
    Enter,
    Escape,
    Tab,
    ArrowUp,
    ArrowDown,
    Backspace,
    Character(char),
}

/// What the host should do after a key was handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyResponse {
    /// The key was handled; stop propagating it.
    Consumed,
    /// The character is not allowed in this editor.
    Rejected,
    /// The value was committed and focus should move on.
    ReleaseFocus,
    /// The editor does not handle this key (or is not focused).
    Ignored,
}

/// Which part of the display text is selected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextSelection {
    /// Caret after the last character.
    #[default]
    Caret,
    /// Whole text selected; typing replaces it.
    All,
}

/// Characters accepted from the keyboard, derived from the bounds and format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharacterFilter {
    /// `-` is allowed because the minimum is negative.
    pub negative: bool,
    /// `+` is allowed because the maximum is positive.
    pub positive: bool,
    pub decimal_separator: Option<char>,
    pub grouping_separator: Option<char>,
}

impl CharacterFilter {
    pub fn allows(&self, ch: char) -> bool {
        ch.is_ascii_digit()
            || (self.negative && ch == '-')
            || (self.positive && ch == '+')
            || self.decimal_separator == Some(ch)
            || self.grouping_separator == Some(ch)
    }

    /// Renders the filter as a regex-like character class, e.g. `[0-9.,\-+]`.
    pub fn pattern(&self) -> String {
        let mut pattern = String::from("[0-9");
        let extra = [
            self.decimal_separator,
            self.grouping_separator,
            self.negative.then_some('-'),
            self.positive.then_some('+'),
        ];
        for ch in extra.into_iter().flatten() {
            if matches!(ch, '-' | '\\' | ']' | '^') {
                pattern.push('\\');
            }
            pattern.push(ch);
        }
        pattern.push(']');
        pattern
    }
}

/// A bounded numeric value together with its editable text.
pub struct NumericEditor<T: NumericKind> {
    value: NumericValue<T>,
    format: FormatSpec,
    clamp: ClampStrategy,
    precision: PrecisionRule,
    reset: Option<ResetCallback<T>>,
    unit: Option<Unit>,
    text: String,
    selection: TextSelection,
    focused: bool,
    dirty: bool,
    deferred: DeferredQueue<EditorTask>,
}

impl<T: NumericKind> fmt::Debug for NumericEditor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumericEditor")
            .field("value", &self.value)
            .field("format", &self.format)
            .field("clamp", &self.clamp)
            .field("unit", &self.unit)
            .field("text", &self.text)
            .field("focused", &self.focused)
            .field("dirty", &self.dirty)
            .finish_non_exhaustive()
    }
}

impl<T: NumericKind> Default for NumericEditor<T> {
    fn default() -> Self {
        Self::new(NumericEditorProps::default())
    }
}

impl<T: NumericKind> NumericEditor<T> {
    pub fn new(props: NumericEditorProps<T>) -> Self {
        let mut value = NumericValue::new(
            props.value,
            props.minimum,
            props.maximum,
            props.increment,
        );
        value.default = props.default.unwrap_or(props.value);
        value.measurement_unit = props.measurement_unit;
        value.error_text = props.error_text;

        let mut editor = Self {
            value,
            format: props.format,
            clamp: props.clamp,
            precision: props.precision,
            reset: props.reset,
            unit: props.unit,
            text: String::new(),
            selection: TextSelection::Caret,
            focused: false,
            dirty: false,
            deferred: DeferredQueue::new(),
        };
        editor.value.current = editor.normalized(props.value);
        editor.redisplay();
        editor
    }

    // ------------------------------------------------------------------
    // Protocol
    // ------------------------------------------------------------------

    /// Interprets `raw` as a value of this editor, always within bounds.
    ///
    /// Blank input yields the current value. Unparseable input goes to the reset
    /// callback if there is one, otherwise it also yields the current value.
    pub fn parse(&self, raw: Option<&str>) -> T {
        let Some(text) = raw.filter(|text| !text.trim().is_empty()) else {
            return self.value.current;
        };

        let parsed = match from_decorated_string(text, &self.format, &self.value.measurement_unit)
        {
            Some(parsed) => parsed,
            None => self.recover_unparseable(text),
        };
        self.normalized(parsed)
    }

    /// Formats `value` for display, decorated with the unit suffix or replaced by
    /// the error text.
    pub fn format(&self, value: T) -> String {
        to_decorated_string(
            value,
            &self.format,
            &self.value.measurement_unit,
            &self.value.error_text,
        )
    }

    /// Applies the configured clamp strategy.
    pub fn clamp(&self, value: T) -> T {
        self.clamp
            .apply(value, self.value.minimum, self.value.maximum)
    }

    /// Parses `raw`, stores the result and shows its canonical text.
    pub fn commit(&mut self, raw: &str) {
        let previous = self.value.current;
        self.value.current = self.parse(Some(raw));
        self.redisplay();
        self.selection = TextSelection::Caret;
        trace!(
            "committed {:?}: {:?} -> {:?}",
            raw, previous, self.value.current
        );
    }

    /// Commits whatever is currently in the text buffer.
    pub fn commit_text(&mut self) {
        let raw = self.text.clone();
        self.commit(&raw);
    }

    /// Discards the edit in progress and selects the restored text on the next turn.
    pub fn cancel(&mut self) {
        self.redisplay();
        self.selection = TextSelection::Caret;
        self.deferred.post(EditorTask::SelectAll);
    }

    /// Moves the value by one increment. Does nothing when the increment is zero.
    ///
    /// Pending typed text is committed first so the step starts from what the user sees.
    pub fn step(&mut self, direction: StepDirection) {
        if !self.value.can_step() {
            return;
        }
        if self.dirty {
            self.commit_text();
        }
        let stepped = self.value.current.offset(self.value.increment, direction);
        self.value.current = self.clamp(stepped);
        self.redisplay();
    }

    /// Re-expresses bounds and value in `new_unit`.
    ///
    /// Bounds are replaced before the value so the converted value is never clamped
    /// against bounds of the old unit.
    pub fn change_unit_with(
        &mut self,
        new_unit: Unit,
        conversion: impl Fn(T) -> T,
        precision_table: &PrecisionTable,
    ) {
        let minimum = conversion(self.value.minimum);
        let maximum = conversion(self.value.maximum);
        let current = conversion(self.value.current);
        let default = conversion(self.value.default);
        // periods are lengths, so the conversion offset is taken out
        let origin = conversion(T::zero()).to_f64();
        let clamp = self
            .clamp
            .convert_period(|period| conversion(T::from_f64(period)).to_f64() - origin);

        self.unit = Some(new_unit);
        self.clamp = clamp;
        if let Some(digits) = precision_table.max_fraction_digits(new_unit) {
            self.format = self.format.with_max_fraction_digits(digits);
        }

        self.value.minimum = minimum;
        self.value.maximum = maximum;
        self.value.default = default;
        self.value.current = self.clamp(current);

        self.value.measurement_unit = new_unit.presentation();
        self.redisplay();
    }

    /// Converts from the editor's current unit into `new_unit`.
    ///
    /// Leaves the editor untouched if it has no unit or the dimensions differ.
    pub fn change_unit(
        &mut self,
        new_unit: Unit,
        precision_table: &PrecisionTable,
    ) -> Result<(), NumericError> {
        let from = self.unit.ok_or(NumericError::NoUnit)?;
        if let Err(err) = from.convert(0.0, new_unit) {
            warn!("rejected unit change: {err}");
            return Err(err);
        }

        let convert = move |value: T| match from.convert(value.to_f64(), new_unit) {
            Ok(converted) => T::from_f64(converted),
            Err(_) => value,
        };
        self.change_unit_with(new_unit, convert, precision_table);
        Ok(())
    }

    /// Declares the unit the value is already expressed in, without converting.
    pub fn set_unit(&mut self, unit: Unit, precision_table: &PrecisionTable) {
        self.unit = Some(unit);
        if let Some(digits) = precision_table.max_fraction_digits(unit) {
            self.format = self.format.with_max_fraction_digits(digits);
        }
        self.value.measurement_unit = unit.presentation();
        self.redisplay();
    }

    // ------------------------------------------------------------------
    // Keyboard and focus
    // ------------------------------------------------------------------

    /// Handles one key press. Keys are ignored while the editor is unfocused.
    pub fn handle_key(&mut self, key: EditorKey) -> KeyResponse {
        if !self.focused {
            return KeyResponse::Ignored;
        }
        match key {
            EditorKey::Enter => {
                self.commit_text();
                KeyResponse::Consumed
            }
            EditorKey::Escape => {
                self.cancel();
                KeyResponse::Consumed
            }
            EditorKey::Tab => {
                self.commit_text();
                self.focused = false;
                KeyResponse::ReleaseFocus
            }
            EditorKey::ArrowUp => {
                self.step(StepDirection::Up);
                KeyResponse::Consumed
            }
            EditorKey::ArrowDown => {
                self.step(StepDirection::Down);
                KeyResponse::Consumed
            }
            EditorKey::Backspace => {
                if self.selection == TextSelection::All {
                    self.text.clear();
                } else {
                    self.text.pop();
                }
                self.mark_edited();
                KeyResponse::Consumed
            }
            EditorKey::Character(ch) => {
                if !self.allowed_characters().allows(ch) {
                    return KeyResponse::Rejected;
                }
                if self.selection == TextSelection::All {
                    self.text.clear();
                }
                self.text.push(ch);
                self.mark_edited();
                KeyResponse::Consumed
            }
        }
    }

    pub fn focus_gained(&mut self) {
        self.focused = true;
        self.deferred.post(EditorTask::SelectAll);
    }

    /// Commits the buffer when focus moves elsewhere.
    pub fn focus_lost(&mut self) {
        if !self.focused {
            return;
        }
        self.commit_text();
        self.focused = false;
    }

    /// Characters that may be typed, given the current bounds and format.
    pub fn allowed_characters(&self) -> CharacterFilter {
        let zero = T::zero();
        CharacterFilter {
            negative: self.value.minimum < zero,
            positive: self.value.maximum > zero,
            decimal_separator: T::FRACTIONAL.then_some(self.format.locale.decimal_separator),
            grouping_separator: self
                .format
                .grouping
                .then_some(self.format.locale.grouping_separator),
        }
    }

    // ------------------------------------------------------------------
    // Deferred work
    // ------------------------------------------------------------------

    pub fn has_deferred_tasks(&self) -> bool {
        !self.deferred.is_empty()
    }

    /// Runs the tasks posted before this call; tasks they post wait for the next turn.
    pub fn run_deferred(&mut self) {
        for task in self.deferred.drain() {
            match task {
                EditorTask::SelectAll => self.selection = TextSelection::All,
                EditorTask::Redecorate => {
                    if !self.dirty {
                        self.redisplay();
                    }
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Programmatic API
    // ------------------------------------------------------------------

    pub fn value(&self) -> T {
        self.value.current
    }

    /// Sets the value through the precision rule and clamp, then redisplays it.
    pub fn set_value(&mut self, value: T) {
        self.value.current = self.normalized(value);
        self.redisplay();
    }

    pub fn minimum_value(&self) -> T {
        self.value.minimum
    }

    pub fn set_minimum_value(&mut self, minimum: T) {
        self.value.minimum = minimum;
        self.reclamp();
    }

    pub fn maximum_value(&self) -> T {
        self.value.maximum
    }

    pub fn set_maximum_value(&mut self, maximum: T) {
        self.value.maximum = maximum;
        self.reclamp();
    }

    pub fn value_increment(&self) -> T {
        self.value.increment
    }

    pub fn set_value_increment(&mut self, increment: T) {
        self.value.increment = increment;
    }

    pub fn default_value(&self) -> T {
        self.value.default
    }

    pub fn set_default_value(&mut self, default: T) {
        self.value.default = default;
    }

    pub fn measurement_unit(&self) -> &str {
        &self.value.measurement_unit
    }

    /// Replaces the suffix and redecorates the display text immediately.
    pub fn set_measurement_unit_string(&mut self, unit: impl Into<String>) {
        self.value.measurement_unit = unit.into();
        self.redisplay();
    }

    pub fn error_text(&self) -> &str {
        &self.value.error_text
    }

    /// Replaces the error text; the display catches up on the next turn.
    pub fn set_error_text(&mut self, error_text: impl Into<String>) {
        self.value.error_text = error_text.into();
        self.deferred.post(EditorTask::Redecorate);
    }

    pub fn format_spec(&self) -> &FormatSpec {
        &self.format
    }

    pub fn set_format_spec(&mut self, format: FormatSpec) {
        self.format = format;
        self.redisplay();
    }

    pub fn clamp_strategy(&self) -> ClampStrategy {
        self.clamp
    }

    pub fn set_clamp_strategy(&mut self, clamp: ClampStrategy) {
        self.clamp = clamp;
        self.reclamp();
    }

    pub fn precision_rule(&self) -> PrecisionRule {
        self.precision
    }

    pub fn set_precision_rule(&mut self, precision: PrecisionRule) {
        self.precision = precision;
    }

    pub fn set_reset_callback(&mut self, reset: Option<ResetCallback<T>>) {
        self.reset = reset;
    }

    pub fn unit(&self) -> Option<Unit> {
        self.unit
    }

    pub fn numeric_value(&self) -> &NumericValue<T> {
        &self.value
    }

    // ------------------------------------------------------------------
    // Display state
    // ------------------------------------------------------------------

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn selection(&self) -> TextSelection {
        self.selection
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// True while the text holds typed input that has not been committed.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// True when the display shows the error text instead of a number.
    pub fn shows_error_text(&self) -> bool {
        !self.dirty
            && T::FRACTIONAL
            && !self.value.current.is_finite()
            && !self.value.error_text.is_empty()
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn normalized(&self, value: T) -> T {
        self.clamp(self.precision.apply(value))
    }

    fn recover_unparseable(&self, text: &str) -> T {
        match &self.reset {
            Some(reset) => {
                let replacement = reset(&self.value);
                debug!("unparseable input {text:?}, reset to {replacement:?}");
                replacement
            }
            None => {
                debug!("unparseable input {text:?}, keeping {:?}", self.value.current);
                self.value.current
            }
        }
    }

    fn reclamp(&mut self) {
        let clamped = self.clamp(self.value.current);
        if clamped != self.value.current || !self.dirty {
            self.value.current = clamped;
            self.redisplay();
        }
    }

    fn redisplay(&mut self) {
        self.text = self.format(self.value.current);
        self.dirty = false;
    }

    fn mark_edited(&mut self) {
        self.dirty = true;
        self.selection = TextSelection::Caret;
    }
}

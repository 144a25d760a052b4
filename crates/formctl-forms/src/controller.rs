#![forbid(unsafe_code)]

//! Per-field state holder.
//!
//! A [`FieldController`] keeps everything one control knows about its field:
//! the raw and committed values, the visible state and messages, and the
//! three-valued validity verdict. Concrete controls mutate it through the
//! entry points here and then publish a [`FieldSnapshot`] to the form.
//!
//! # Control value
//!
//! The committed value is never stored separately. [`control_value`] reads
//! `value` for text-style fields and `selected_value` for selection-style
//! fields, so the two can never drift.
//!
//! [`control_value`]: FieldController::control_value

use std::fmt;

use formctl_core::{Feedback, FieldState, Validity};
use formctl_validation::FieldValidationRules;

use crate::snapshot::FieldSnapshot;

/// Notification hook fired after the control value changes.
pub type ValueChangeHook<T> = Box<dyn FnMut(Option<&T>)>;

/// Transform applied to text input before it is stored.
pub type ChangeTextOverride<T> = Box<dyn Fn(Option<T>) -> T>;

/// Which slot the control value is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValueSource {
    /// Text fields: `value` is authoritative.
    #[default]
    Text,
    /// Checkbox groups, radio groups, dropdowns: `selected_value` is
    /// authoritative.
    Selection,
}

// ---------------------------------------------------------------------------
// FieldOptions
// ---------------------------------------------------------------------------

/// Optional construction parameters for [`create_field`].
pub struct FieldOptions<T> {
    pub default_value: Option<T>,
    pub default_notes: Option<String>,
    pub default_error_message: Option<String>,
    pub on_value_change: Option<ValueChangeHook<T>>,
    pub override_change_text: Option<ChangeTextOverride<T>>,
    pub validations: Option<FieldValidationRules<T>>,
}

impl<T> Default for FieldOptions<T> {
    fn default() -> Self {
        Self {
            default_value: None,
            default_notes: None,
            default_error_message: None,
            on_value_change: None,
            override_change_text: None,
            validations: None,
        }
    }
}

impl<T> FieldOptions<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn default_value(mut self, value: T) -> Self {
        self.default_value = Some(value);
        self
    }

    #[must_use]
    pub fn default_notes(mut self, notes: impl Into<String>) -> Self {
        self.default_notes = Some(notes.into());
        self
    }

    #[must_use]
    pub fn default_error_message(mut self, message: impl Into<String>) -> Self {
        self.default_error_message = Some(message.into());
        self
    }

    #[must_use]
    pub fn on_value_change(mut self, hook: impl FnMut(Option<&T>) + 'static) -> Self {
        self.on_value_change = Some(Box::new(hook));
        self
    }

    #[must_use]
    pub fn override_change_text(mut self, transform: impl Fn(Option<T>) -> T + 'static) -> Self {
        self.override_change_text = Some(Box::new(transform));
        self
    }

    #[must_use]
    pub fn validations(mut self, rules: FieldValidationRules<T>) -> Self {
        self.validations = Some(rules);
        self
    }
}

// ---------------------------------------------------------------------------
// FieldController
// ---------------------------------------------------------------------------

/// Mutable state of one named field.
pub struct FieldController<T> {
    name: String,
    default_value: Option<T>,
    value: Option<T>,
    selected_value: Option<T>,
    source: ValueSource,
    state: FieldState,
    error_message: Option<String>,
    default_error_message: Option<String>,
    notes: Option<String>,
    default_notes: Option<String>,
    is_valid: Validity,
    is_focused: Option<bool>,
    validations: Option<FieldValidationRules<T>>,
    on_value_change: Option<ValueChangeHook<T>>,
    override_change_text: Option<ChangeTextOverride<T>>,
}

/// Create a field controller.
///
/// `value` and `selected_value` both start at the default value, and the
/// error message starts at the default error message. An empty `name` is
/// allowed; such a field is never registered into a form.
pub fn create_field<T: Clone>(name: impl Into<String>, options: FieldOptions<T>) -> FieldController<T> {
    FieldController::new(name, options)
}

impl<T: Clone> FieldController<T> {
    #[must_use]
    pub fn new(name: impl Into<String>, options: FieldOptions<T>) -> Self {
        let FieldOptions {
            default_value,
            default_notes,
            default_error_message,
            on_value_change,
            override_change_text,
            validations,
        } = options;
        Self {
            name: name.into(),
            value: default_value.clone(),
            selected_value: default_value.clone(),
            default_value,
            source: ValueSource::Text,
            state: FieldState::Default,
            error_message: default_error_message.clone(),
            default_error_message,
            notes: default_notes.clone(),
            default_notes,
            is_valid: Validity::Unevaluated,
            is_focused: None,
            validations,
            on_value_change,
            override_change_text,
        }
    }

    /// Project the current state for the form registry.
    #[must_use]
    pub fn snapshot(&self) -> FieldSnapshot<T> {
        FieldSnapshot {
            name: self.name.clone(),
            default_value: self.default_value.clone(),
            control_value: self.control_value().cloned(),
            state: self.state,
            value: self.value.clone(),
            selected_value: self.selected_value.clone(),
            is_valid: self.is_valid,
            is_focused: self.is_focused,
            error_message: self.error_message.clone(),
            notes: self.notes.clone(),
            has_validations: self.validations.is_some(),
        }
    }
}

impl<T> FieldController<T> {
    // -- accessors ----------------------------------------------------------

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn default_value(&self) -> Option<&T> {
        self.default_value.as_ref()
    }

    /// Raw input value of a text-style field.
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Accumulated selection of a selection-style field.
    pub fn selected_value(&self) -> Option<&T> {
        self.selected_value.as_ref()
    }

    /// The committed value the rest of the application consumes.
    pub fn control_value(&self) -> Option<&T> {
        match self.source {
            ValueSource::Text => self.value.as_ref(),
            ValueSource::Selection => self.selected_value.as_ref(),
        }
    }

    pub fn source(&self) -> ValueSource {
        self.source
    }

    pub fn state(&self) -> FieldState {
        self.state
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn default_error_message(&self) -> Option<&str> {
        self.default_error_message.as_deref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn default_notes(&self) -> Option<&str> {
        self.default_notes.as_deref()
    }

    pub fn is_valid(&self) -> Validity {
        self.is_valid
    }

    pub fn is_focused(&self) -> Option<bool> {
        self.is_focused
    }

    pub fn validations(&self) -> Option<&FieldValidationRules<T>> {
        self.validations.as_ref()
    }

    /// Returns `true` if the field is in the `Disabled` state.
    pub fn is_disabled(&self) -> bool {
        self.state.is_disabled()
    }

    // -- plain setters ------------------------------------------------------

    pub fn set_state(&mut self, state: FieldState) {
        self.state = state;
    }

    pub fn set_error_message(&mut self, message: Option<String>) {
        self.error_message = message;
    }

    pub fn set_notes(&mut self, notes: Option<String>) {
        self.notes = notes;
    }

    pub fn set_validity(&mut self, validity: Validity) {
        self.is_valid = validity;
    }

    pub fn set_focused(&mut self, focused: Option<bool>) {
        self.is_focused = focused;
    }

    /// Push validation feedback into the visible state.
    ///
    /// `None` (nothing to show) leaves state and message unchanged.
    pub fn apply_feedback(&mut self, feedback: Option<Feedback>) {
        if let Some(Feedback { state, message }) = feedback {
            self.state = state;
            self.error_message = message;
        }
    }

    /// Move the authoritative value slot.
    pub fn bind_source(&mut self, source: ValueSource) {
        self.source = source;
    }
}

impl<T: PartialEq> FieldController<T> {
    /// Store text input, through the override transform when one is set.
    pub fn on_change_text(&mut self, new_value: Option<T>) {
        let stored = match &self.override_change_text {
            Some(transform) => Some(transform(new_value)),
            None => new_value,
        };
        self.replace_slot(ValueSource::Text, stored);
    }

    /// Replace the raw value directly, bypassing the override transform.
    pub fn set_value(&mut self, value: Option<T>) {
        self.replace_slot(ValueSource::Text, value);
    }

    /// Replace the selection of a selection-style field.
    pub fn set_selected_value(&mut self, selected: Option<T>) {
        self.replace_slot(ValueSource::Selection, selected);
    }

    /// Clear value and selection, and with them the control value.
    pub fn reset_value(&mut self) {
        self.replace_slot(ValueSource::Text, None);
        self.replace_slot(ValueSource::Selection, None);
    }

    /// Write one slot; fire the change hook if the control value moved.
    fn replace_slot(&mut self, slot: ValueSource, new: Option<T>) {
        let previous = match slot {
            ValueSource::Text => std::mem::replace(&mut self.value, new),
            ValueSource::Selection => std::mem::replace(&mut self.selected_value, new),
        };
        if slot != self.source {
            return;
        }
        let current = match self.source {
            ValueSource::Text => self.value.as_ref(),
            ValueSource::Selection => self.selected_value.as_ref(),
        };
        if previous.as_ref() != current {
            if let Some(hook) = self.on_value_change.as_mut() {
                hook(current);
            }
        }
    }
}

impl<T> fmt::Debug for FieldController<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldController")
            .field("name", &self.name)
            .field("default_value", &self.default_value)
            .field("value", &self.value)
            .field("selected_value", &self.selected_value)
            .field("source", &self.source)
            .field("state", &self.state)
            .field("error_message", &self.error_message)
            .field("notes", &self.notes)
            .field("is_valid", &self.is_valid)
            .field("is_focused", &self.is_focused)
            .field("validations", &self.validations)
            .field("on_value_change", &self.on_value_change.as_ref().map(|_| "<fn>"))
            .finish_non_exhaustive()
    }
}

#![forbid(unsafe_code)]

//! Single-line text input.

use formctl_core::{FieldState, InputMode};
use formctl_validation::ValidationEngine;

use super::{engine_for, publish, settle, withdraw};
use crate::controller::FieldController;
use crate::registry::FormRegistry;
use crate::snapshot::FieldSnapshot;

/// A text field validating its raw value on change, focus and blur.
///
/// Numeric input modes (`numeric`, `decimal`) switch the bound rules from
/// character counts to parsed values.
///
/// # Example
///
/// ```
/// use formctl_core::{FieldState, ValidationTrigger};
/// use formctl_forms::{FieldOptions, FormRegistry, TextField, create_field};
/// use formctl_validation::FieldValidationRules;
///
/// let mut form: FormRegistry<String> = FormRegistry::new();
/// let field = create_field(
///     "username",
///     FieldOptions::new()
///         .default_error_message("Username is required")
///         .validations(FieldValidationRules::new().required(true).trigger(ValidationTrigger::OnBlur)),
/// );
/// let mut input = TextField::new(field);
/// input.mount(&mut form);
///
/// input.focus(&mut form);
/// input.change_text("", &mut form);
/// assert_eq!(input.controller().state(), FieldState::Default);
///
/// input.blur(&mut form);
/// assert_eq!(input.controller().state(), FieldState::Error);
/// assert!(!form.form_state().can_submit());
/// ```
#[derive(Debug)]
pub struct TextField {
    field: FieldController<String>,
    engine: ValidationEngine<String>,
    editable: bool,
}

impl TextField {
    #[must_use]
    pub fn new(field: FieldController<String>) -> Self {
        let engine = engine_for(&field);
        Self {
            field,
            engine,
            editable: true,
        }
    }

    #[must_use]
    pub fn with_input_mode(mut self, mode: InputMode) -> Self {
        self.engine = self.engine.with_input_mode(mode);
        self
    }

    /// A non-editable field ignores text input and cannot take focus.
    #[must_use]
    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    pub fn controller(&self) -> &FieldController<String> {
        &self.field
    }

    /// Direct access for state the events below do not cover. Call
    /// [`sync`](Self::sync) afterwards.
    pub fn controller_mut(&mut self) -> &mut FieldController<String> {
        &mut self.field
    }

    pub fn input_mode(&self) -> InputMode {
        self.engine.input_mode()
    }

    pub fn is_editable(&self) -> bool {
        self.editable
    }

    // -- events -------------------------------------------------------------

    /// Evaluate the initial value and register.
    pub fn mount<V: From<String>>(&mut self, form: &mut FormRegistry<V>) {
        self.validate(form);
    }

    /// Text input. Ignored while disabled or not editable.
    pub fn change_text<V: From<String>>(&mut self, text: impl Into<String>, form: &mut FormRegistry<V>) {
        if !self.accepts_input() {
            return;
        }
        self.field.on_change_text(Some(text.into()));
        self.validate(form);
    }

    pub fn focus<V: From<String>>(&mut self, form: &mut FormRegistry<V>) {
        self.field.set_focused(Some(true));
        self.validate(form);
    }

    pub fn blur<V: From<String>>(&mut self, form: &mut FormRegistry<V>) {
        self.field.set_focused(Some(false));
        self.validate(form);
    }

    /// Programmatic focus. A non-editable field records the flag without
    /// running the focus or blur handlers.
    pub fn request_focus<V: From<String>>(&mut self, focused: bool, form: &mut FormRegistry<V>) {
        if self.editable {
            if focused {
                self.focus(form);
            } else {
                self.blur(form);
            }
        } else {
            self.field.set_focused(Some(focused));
            publish(&self.field, form);
        }
    }

    pub fn set_state<V: From<String>>(&mut self, state: FieldState, form: &mut FormRegistry<V>) {
        self.field.set_state(state);
        publish(&self.field, form);
    }

    pub fn set_notes<V: From<String>>(&mut self, notes: Option<String>, form: &mut FormRegistry<V>) {
        self.field.set_notes(notes);
        publish(&self.field, form);
    }

    /// Clear the value and re-evaluate it as untouched.
    pub fn reset<V: From<String>>(&mut self, form: &mut FormRegistry<V>) {
        self.field.reset_value();
        self.validate(form);
    }

    /// Publish the current controller state without evaluating.
    pub fn sync<V: From<String>>(&self, form: &mut FormRegistry<V>) {
        publish(&self.field, form);
    }

    pub fn unmount<V>(self, form: &mut FormRegistry<V>) -> Option<FieldSnapshot<V>> {
        withdraw(&self.field, form)
    }

    // -- internals ----------------------------------------------------------

    fn accepts_input(&self) -> bool {
        self.editable && !self.field.is_disabled()
    }

    fn validate<V: From<String>>(&mut self, form: &mut FormRegistry<V>) {
        let value = self.field.value();
        let feedback = self
            .engine
            .evaluate_text(value, value.map(String::as_str), self.field.is_focused());
        self.field.apply_feedback(feedback);
        settle(&mut self.field, self.engine.is_valid(), form);
    }
}

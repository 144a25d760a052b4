#![forbid(unsafe_code)]

//! Single-select radio groups.

use formctl_core::FieldState;
use formctl_validation::ValidationEngine;

use super::{engine_for, publish, settle, withdraw};
use crate::controller::{FieldController, ValueSource};
use crate::registry::FormRegistry;
use crate::snapshot::FieldSnapshot;

/// One option inside a [`RadioGroup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioButton {
    value: String,
    label: Option<String>,
    disabled: bool,
}

impl RadioButton {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: None,
            disabled: false,
        }
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn label_text(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// A radio group. An empty selection is always a failure unless a custom
/// rule approves it; `required` has no effect here.
#[derive(Debug)]
pub struct RadioGroup {
    field: FieldController<String>,
    engine: ValidationEngine<String>,
}

impl RadioGroup {
    #[must_use]
    pub fn new(mut field: FieldController<String>) -> Self {
        field.bind_source(ValueSource::Selection);
        let engine = engine_for(&field);
        Self { field, engine }
    }

    pub fn controller(&self) -> &FieldController<String> {
        &self.field
    }

    pub fn controller_mut(&mut self) -> &mut FieldController<String> {
        &mut self.field
    }

    pub fn selection(&self) -> Option<&str> {
        self.field.selected_value().map(String::as_str)
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.selection() == Some(value)
    }

    // -- events -------------------------------------------------------------

    pub fn mount<V: From<String>>(&mut self, form: &mut FormRegistry<V>) {
        self.validate(form);
    }

    pub fn press<V: From<String>>(&mut self, button: &RadioButton, form: &mut FormRegistry<V>) {
        if button.disabled {
            return;
        }
        self.select(button.value.clone(), form);
    }

    /// Replace the selection. Ignored while the group is disabled.
    pub fn select<V: From<String>>(&mut self, value: impl Into<String>, form: &mut FormRegistry<V>) {
        if self.field.is_disabled() {
            return;
        }
        self.field.set_selected_value(Some(value.into()));
        self.validate(form);
    }

    pub fn set_state<V: From<String>>(&mut self, state: FieldState, form: &mut FormRegistry<V>) {
        self.field.set_state(state);
        publish(&self.field, form);
    }

    pub fn reset<V: From<String>>(&mut self, form: &mut FormRegistry<V>) {
        self.field.reset_value();
        self.validate(form);
    }

    pub fn sync<V: From<String>>(&self, form: &mut FormRegistry<V>) {
        publish(&self.field, form);
    }

    pub fn unmount<V>(self, form: &mut FormRegistry<V>) -> Option<FieldSnapshot<V>> {
        withdraw(&self.field, form)
    }

    fn validate<V: From<String>>(&mut self, form: &mut FormRegistry<V>) {
        let selected = self.field.selected_value();
        let feedback = self
            .engine
            .evaluate_radio_group(selected, selected.map(String::as_str));
        self.field.apply_feedback(feedback);
        settle(&mut self.field, self.engine.is_valid(), form);
    }
}

#![forbid(unsafe_code)]

//! Multi-select checkbox groups.

use std::fmt;
use std::str::FromStr;

use formctl_core::{ConfigError, FieldState, warn};
use formctl_validation::ValidationEngine;

use super::{engine_for, publish, settle, withdraw};
use crate::controller::{FieldController, ValueSource};
use crate::registry::FormRegistry;
use crate::snapshot::FieldSnapshot;

/// Visual variant of a checkbox item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CheckboxKind {
    #[default]
    Normal,
    Indeterminate,
}

impl CheckboxKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Indeterminate => "indeterminate",
        }
    }
}

impl fmt::Display for CheckboxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheckboxKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Self::Normal),
            "indeterminate" => Ok(Self::Indeterminate),
            other => {
                warn!(value = other, "rejected checkbox type");
                Err(ConfigError::invalid_variant("type", other))
            }
        }
    }
}

/// One checkbox inside a [`CheckboxGroup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkbox {
    value: String,
    label: Option<String>,
    kind: CheckboxKind,
    disabled: bool,
}

impl Checkbox {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: None,
            kind: CheckboxKind::Normal,
            disabled: false,
        }
    }

    /// Build from string props, rejecting an unknown `type`.
    pub fn from_props(value: impl Into<String>, kind: &str) -> Result<Self, ConfigError> {
        Ok(Self::new(value).kind(kind.parse()?))
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: CheckboxKind) -> Self {
        self.kind = kind;
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

    pub fn checkbox_kind(&self) -> CheckboxKind {
        self.kind
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

/// A checkbox group whose selection is the list of checked item values.
///
/// Selection count bounds use the `min`/`max` rules and are checked before
/// `required`.
#[derive(Debug)]
pub struct CheckboxGroup {
    field: FieldController<Vec<String>>,
    engine: ValidationEngine<Vec<String>>,
}

impl CheckboxGroup {
    #[must_use]
    pub fn new(mut field: FieldController<Vec<String>>) -> Self {
        field.bind_source(ValueSource::Selection);
        let engine = engine_for(&field);
        Self { field, engine }
    }

    pub fn controller(&self) -> &FieldController<Vec<String>> {
        &self.field
    }

    pub fn controller_mut(&mut self) -> &mut FieldController<Vec<String>> {
        &mut self.field
    }

    /// Checked values, or `None` if the group was never touched.
    pub fn selection(&self) -> Option<&[String]> {
        self.field.selected_value().map(Vec::as_slice)
    }

    pub fn is_checked(&self, value: &str) -> bool {
        self.selection()
            .is_some_and(|sel| sel.iter().any(|v| v == value))
    }

    // -- events -------------------------------------------------------------

    pub fn mount<V: From<Vec<String>>>(&mut self, form: &mut FormRegistry<V>) {
        self.validate(form);
    }

    /// Press a checkbox item. Disabled items and a disabled group ignore it.
    pub fn press<V: From<Vec<String>>>(&mut self, item: &Checkbox, form: &mut FormRegistry<V>) {
        if item.disabled {
            return;
        }
        self.toggle(&item.value, form);
    }

    /// Add `value` to the selection, or remove it if already present.
    ///
    /// An empty value is ignored.
    pub fn toggle<V: From<Vec<String>>>(&mut self, value: &str, form: &mut FormRegistry<V>) {
        if value.is_empty() || self.field.is_disabled() {
            return;
        }
        let next = match self.field.selected_value() {
            Some(current) if current.iter().any(|v| v == value) => {
                current.iter().filter(|v| *v != value).cloned().collect()
            }
            Some(current) => {
                let mut next = current.clone();
                next.push(value.to_owned());
                next
            }
            None => vec![value.to_owned()],
        };
        self.field.set_selected_value(Some(next));
        self.validate(form);
    }

    /// Replace the whole selection.
    pub fn set_selection<V: From<Vec<String>>>(
        &mut self,
        selection: Option<Vec<String>>,
        form: &mut FormRegistry<V>,
    ) {
        self.field.set_selected_value(selection);
        self.validate(form);
    }

    pub fn set_state<V: From<Vec<String>>>(&mut self, state: FieldState, form: &mut FormRegistry<V>) {
        self.field.set_state(state);
        publish(&self.field, form);
    }

    pub fn reset<V: From<Vec<String>>>(&mut self, form: &mut FormRegistry<V>) {
        self.field.reset_value();
        self.validate(form);
    }

    pub fn sync<V: From<Vec<String>>>(&self, form: &mut FormRegistry<V>) {
        publish(&self.field, form);
    }

    pub fn unmount<V>(self, form: &mut FormRegistry<V>) -> Option<FieldSnapshot<V>> {
        withdraw(&self.field, form)
    }

    fn validate<V: From<Vec<String>>>(&mut self, form: &mut FormRegistry<V>) {
        let selected = self.field.selected_value();
        let feedback = self
            .engine
            .evaluate_checkbox_group(selected, selected.map(Vec::as_slice));
        self.field.apply_feedback(feedback);
        settle(&mut self.field, self.engine.is_valid(), form);
    }
}

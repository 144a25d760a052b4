#![forbid(unsafe_code)]

//! Dropdowns over [`DropdownOption`] values.
//!
//! A dropdown validates the chosen option's title through the text path, as
//! if it were a blurred text field in the default input mode.
//!
//! Three presentation types share one state machine:
//!
//! | Type | `select_option` | Commit |
//! |------|-----------------|--------|
//! | `modal` | stages the option | [`choose`](Dropdown::choose) |
//! | `selection` | commits and closes | immediate |
//! | `autocomplete` | commits and closes | immediate |

use std::fmt;
use std::str::FromStr;

use formctl_core::{ConfigError, DropdownOption, FieldState, warn};
use formctl_validation::ValidationEngine;

use super::{engine_for, publish, settle, withdraw};
use crate::controller::{FieldController, ValueSource};
use crate::registry::FormRegistry;
use crate::snapshot::FieldSnapshot;

/// Presentation type of a dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DropdownType {
    #[default]
    Modal,
    Selection,
    Autocomplete,
}

impl DropdownType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Modal => "modal",
            Self::Selection => "selection",
            Self::Autocomplete => "autocomplete",
        }
    }
}

impl fmt::Display for DropdownType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DropdownType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "modal" => Ok(Self::Modal),
            "selection" => Ok(Self::Selection),
            "autocomplete" => Ok(Self::Autocomplete),
            other => {
                warn!(value = other, "rejected dropdown type");
                Err(ConfigError::invalid_variant("type", other))
            }
        }
    }
}

/// A dropdown field.
#[derive(Debug)]
pub struct Dropdown {
    field: FieldController<DropdownOption>,
    engine: ValidationEngine<DropdownOption>,
    kind: DropdownType,
    staged: Option<DropdownOption>,
    menu_open: bool,
}

impl Dropdown {
    #[must_use]
    pub fn new(mut field: FieldController<DropdownOption>, kind: DropdownType) -> Self {
        field.bind_source(ValueSource::Selection);
        let engine = engine_for(&field);
        let staged = field.control_value().cloned();
        Self {
            field,
            engine,
            kind,
            staged,
            menu_open: false,
        }
    }

    pub fn controller(&self) -> &FieldController<DropdownOption> {
        &self.field
    }

    pub fn controller_mut(&mut self) -> &mut FieldController<DropdownOption> {
        &mut self.field
    }

    pub fn kind(&self) -> DropdownType {
        self.kind
    }

    /// Committed option.
    pub fn value(&self) -> Option<&DropdownOption> {
        self.field.control_value()
    }

    /// Highlighted option; equals the committed one outside a modal session.
    pub fn staged(&self) -> Option<&DropdownOption> {
        self.staged.as_ref()
    }

    /// Whether `value` is the highlighted option.
    pub fn is_selected(&self, value: &str) -> bool {
        self.staged.as_ref().is_some_and(|o| o.value == value)
    }

    pub fn is_open(&self) -> bool {
        self.menu_open
    }

    // -- events -------------------------------------------------------------

    pub fn mount<V: From<DropdownOption>>(&mut self, form: &mut FormRegistry<V>) {
        self.validate(form);
    }

    /// Open the menu. A modal dropdown also takes focus.
    pub fn open<V: From<DropdownOption>>(&mut self, form: &mut FormRegistry<V>) {
        if self.field.is_disabled() {
            return;
        }
        self.menu_open = true;
        if self.kind == DropdownType::Modal {
            self.field.set_focused(Some(true));
            publish(&self.field, form);
        }
    }

    /// Press an option in the open menu.
    pub fn select_option<V: From<DropdownOption>>(
        &mut self,
        option: DropdownOption,
        form: &mut FormRegistry<V>,
    ) {
        if self.field.is_disabled() {
            return;
        }
        match self.kind {
            DropdownType::Modal => self.staged = Some(option),
            DropdownType::Selection | DropdownType::Autocomplete => {
                self.staged = Some(option.clone());
                self.menu_open = false;
                self.field.set_selected_value(Some(option));
                self.validate(form);
            }
        }
    }

    /// Commit the staged option of a modal session.
    ///
    /// Clears the error message and focus. Nothing happens if no option is
    /// staged.
    pub fn choose<V: From<DropdownOption>>(&mut self, form: &mut FormRegistry<V>) {
        let Some(option) = self.staged.clone() else {
            return;
        };
        self.field.set_error_message(None);
        self.field.set_selected_value(Some(option));
        self.menu_open = false;
        self.field.set_focused(Some(false));
        self.validate(form);
    }

    /// Close the menu without committing.
    ///
    /// The staged option reverts to the committed one, and the committed
    /// value is re-evaluated as touched: closing an empty dropdown counts as
    /// leaving it blank.
    pub fn dismiss<V: From<DropdownOption>>(&mut self, form: &mut FormRegistry<V>) {
        self.staged = self.field.control_value().cloned();
        self.menu_open = false;
        if self.kind == DropdownType::Modal {
            self.field.set_focused(Some(false));
        }
        let value = self.field.control_value();
        let title = value.map_or("", |o| o.title.as_str());
        let feedback = self.engine.evaluate_text(value, Some(title), Some(false));
        self.field.apply_feedback(feedback);
        settle(&mut self.field, self.engine.is_valid(), form);
    }

    pub fn set_state<V: From<DropdownOption>>(
        &mut self,
        state: FieldState,
        form: &mut FormRegistry<V>,
    ) {
        self.field.set_state(state);
        publish(&self.field, form);
    }

    pub fn reset<V: From<DropdownOption>>(&mut self, form: &mut FormRegistry<V>) {
        self.field.reset_value();
        self.staged = None;
        self.validate(form);
    }

    pub fn sync<V: From<DropdownOption>>(&self, form: &mut FormRegistry<V>) {
        publish(&self.field, form);
    }

    pub fn unmount<V>(self, form: &mut FormRegistry<V>) -> Option<FieldSnapshot<V>> {
        withdraw(&self.field, form)
    }

    fn validate<V: From<DropdownOption>>(&mut self, form: &mut FormRegistry<V>) {
        let value = self.field.control_value();
        let feedback = self
            .engine
            .evaluate_text(value, value.map(|o| o.title.as_str()), Some(false));
        self.field.apply_feedback(feedback);
        settle(&mut self.field, self.engine.is_valid(), form);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{FieldOptions, create_field};
    use formctl_core::Validity;
    use formctl_validation::FieldValidationRules;

    fn colet() -> DropdownOption {
        DropdownOption::new("BINI COLET", "COLET")
    }

    fn dropdown(kind: DropdownType) -> Dropdown {
        Dropdown::new(
            create_field(
                "bias",
                FieldOptions::new()
                    .default_error_message("Choose your bias")
                    .validations(FieldValidationRules::new().required(true)),
            ),
            kind,
        )
    }

    #[test]
    fn type_from_str() {
        assert_eq!("selection".parse(), Ok(DropdownType::Selection));
        let err = "popover".parse::<DropdownType>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid prop type for popover");
    }

    #[test]
    fn modal_stages_until_choose() {
        let mut form: FormRegistry<DropdownOption> = FormRegistry::new();
        let mut dd = dropdown(DropdownType::Modal);
        dd.mount(&mut form);
        dd.open(&mut form);
        assert!(form.form_state().is_focused);

        dd.select_option(colet(), &mut form);
        assert!(dd.is_selected("COLET"));
        assert_eq!(dd.value(), None);

        dd.choose(&mut form);
        assert_eq!(dd.value(), Some(&colet()));
        assert!(!dd.is_open());
        assert_eq!(dd.controller().is_valid(), Validity::Valid);
        assert!(!form.form_state().is_focused);
        assert!(form.form_state().is_valid);
    }

    #[test]
    fn modal_dismiss_reverts_and_flags_blank() {
        let mut form: FormRegistry<DropdownOption> = FormRegistry::new();
        let mut dd = dropdown(DropdownType::Modal);
        dd.mount(&mut form);
        dd.open(&mut form);
        dd.select_option(colet(), &mut form);
        dd.dismiss(&mut form);
        assert_eq!(dd.staged(), None);
        assert_eq!(dd.controller().state(), FieldState::Error);
        assert_eq!(dd.controller().error_message(), Some("Choose your bias"));
    }

    #[test]
    fn selection_commits_immediately() {
        let mut form: FormRegistry<DropdownOption> = FormRegistry::new();
        let mut dd = dropdown(DropdownType::Selection);
        dd.mount(&mut form);
        dd.open(&mut form);
        dd.select_option(colet(), &mut form);
        assert_eq!(dd.value(), Some(&colet()));
        assert!(!dd.is_open());
        assert_eq!(
            form.get("bias").and_then(|s| s.control_value.clone()),
            Some(colet())
        );
    }

    #[test]
    fn default_value_is_staged() {
        let dd = Dropdown::new(
            create_field("bias", FieldOptions::new().default_value(colet())),
            DropdownType::Modal,
        );
        assert!(dd.is_selected("COLET"));
    }

    #[test]
    fn choose_clears_previous_error() {
        let mut form: FormRegistry<DropdownOption> = FormRegistry::new();
        let mut dd = dropdown(DropdownType::Modal);
        dd.mount(&mut form);
        dd.dismiss(&mut form);
        assert_eq!(dd.controller().state(), FieldState::Error);
        dd.select_option(colet(), &mut form);
        dd.choose(&mut form);
        assert_eq!(dd.controller().state(), FieldState::Default);
        assert_eq!(dd.controller().error_message(), None);
    }
}

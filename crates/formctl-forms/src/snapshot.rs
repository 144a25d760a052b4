#![forbid(unsafe_code)]

//! Read-only field projections held by the form registry.

use formctl_core::{FieldState, Validity};
use serde::Serialize;

/// Everything the registry needs to know about one field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSnapshot<T> {
    pub name: String,
    pub default_value: Option<T>,
    pub control_value: Option<T>,
    pub state: FieldState,
    pub value: Option<T>,
    pub selected_value: Option<T>,
    pub is_valid: Validity,
    pub is_focused: Option<bool>,
    pub error_message: Option<String>,
    pub notes: Option<String>,
    /// Whether the field declared a validations config.
    pub has_validations: bool,
}

impl<T> FieldSnapshot<T> {
    /// Returns `true` if this field keeps the form from being valid.
    ///
    /// An explicit failure always blocks. An unevaluated verdict blocks only
    /// when the field declared validations.
    #[must_use]
    pub fn blocks_submit(&self) -> bool {
        self.is_valid.is_invalid() || (self.has_validations && self.is_valid.is_unevaluated())
    }

    /// Convert every value slot, e.g. `String` into a mixed-form value type.
    #[must_use]
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> FieldSnapshot<U> {
        FieldSnapshot {
            name: self.name,
            default_value: self.default_value.map(&mut f),
            control_value: self.control_value.map(&mut f),
            state: self.state,
            value: self.value.map(&mut f),
            selected_value: self.selected_value.map(&mut f),
            is_valid: self.is_valid,
            is_focused: self.is_focused,
            error_message: self.error_message,
            notes: self.notes,
            has_validations: self.has_validations,
        }
    }
}

impl<T: Clone> FieldSnapshot<T> {
    /// Submission projection of this field.
    #[must_use]
    pub fn to_data(&self) -> FormData<T> {
        FormData {
            name: self.name.clone(),
            default_value: self.default_value.clone(),
            control_value: self.control_value.clone(),
            state: self.state,
            value: self.value.clone(),
            selected_value: self.selected_value.clone(),
            is_valid: self.is_valid,
        }
    }
}

/// One field as handed to a submit handler.
///
/// Serializes with camelCase keys; `isValid` is `true`, `false` or `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData<T> {
    pub name: String,
    pub default_value: Option<T>,
    pub control_value: Option<T>,
    pub state: FieldState,
    pub value: Option<T>,
    pub selected_value: Option<T>,
    pub is_valid: Validity,
}

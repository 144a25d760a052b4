#![forbid(unsafe_code)]

//! Concrete controls built on [`FieldController`] and [`ValidationEngine`].
//!
//! Every control follows the same contract. Each event handler takes the
//! owning form explicitly and runs, in order:
//!
//! 1. mutate the controller,
//! 2. evaluate with the control's engine and push the feedback,
//! 3. copy the engine verdict into the controller,
//! 4. publish a fresh snapshot into the form.
//!
//! A control whose field name is empty never touches the form. `mount`
//! performs the initial evaluation and registration; `unmount` consumes the
//! control and removes its entry.
//!
//! Controls are generic over the form's value type `V`, so one form can hold
//! text fields, checkbox groups, radio groups and dropdowns side by side as
//! long as `V: From<T>` for each control's value type (as
//! [`FieldValue`](formctl_core::FieldValue) is).
//!
//! [`ValidationEngine`]: formctl_validation::ValidationEngine

pub mod checkbox;
pub mod dropdown;
pub mod radio;
pub mod text_field;

pub use checkbox::{Checkbox, CheckboxGroup, CheckboxKind};
pub use dropdown::{Dropdown, DropdownType};
pub use radio::{RadioButton, RadioGroup};
pub use text_field::TextField;

use formctl_core::Validity;
use formctl_validation::ValidationEngine;

use crate::controller::FieldController;
use crate::registry::FormRegistry;
use crate::snapshot::FieldSnapshot;

/// Build the engine for a controller's validations and default message.
pub(crate) fn engine_for<T>(field: &FieldController<T>) -> ValidationEngine<T> {
    ValidationEngine::new(field.validations().cloned())
        .with_default_error_message(field.default_error_message().map(str::to_owned))
}

/// Copy the engine verdict and publish the field.
pub(crate) fn settle<T, V>(
    field: &mut FieldController<T>,
    validity: Validity,
    form: &mut FormRegistry<V>,
) where
    T: Clone,
    V: From<T>,
{
    field.set_validity(validity);
    publish(field, form);
}

/// Register the field's snapshot unless its name is empty.
pub(crate) fn publish<T, V>(field: &FieldController<T>, form: &mut FormRegistry<V>)
where
    T: Clone,
    V: From<T>,
{
    if field.name().is_empty() {
        return;
    }
    form.register(field.snapshot().map(V::from));
}

/// Remove the field's entry unless its name is empty.
pub(crate) fn withdraw<T, V>(
    field: &FieldController<T>,
    form: &mut FormRegistry<V>,
) -> Option<FieldSnapshot<V>> {
    if field.name().is_empty() {
        return None;
    }
    form.unregister(field.name())
}

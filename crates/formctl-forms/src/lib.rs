#![forbid(unsafe_code)]

//! Form coordination: field controllers, the form registry, and concrete
//! controls.
//!
//! # Flow
//!
//! A control owns a [`FieldController`] and a validation engine. On every
//! event it mutates the controller, evaluates, pushes the feedback, and
//! publishes a [`FieldSnapshot`] into the [`FormRegistry`] passed to it. The
//! registry recomputes [`FormState`] after each change.
//!
//! The registry is injected per call rather than looked up, so a control can
//! be driven against any form in tests.

pub mod controller;
pub mod controls;
pub mod registry;
pub mod schema;
pub mod snapshot;

pub use controller::{
    ChangeTextOverride, FieldController, FieldOptions, ValueChangeHook, ValueSource, create_field,
};
pub use controls::{
    Checkbox, CheckboxGroup, CheckboxKind, Dropdown, DropdownType, RadioButton, RadioGroup,
    TextField,
};
pub use registry::{FormRegistry, FormState, Registration, SubmitHandler, create_form};
pub use schema::{FieldKind, FieldSpec, FormSchema};
pub use snapshot::{FieldSnapshot, FormData};

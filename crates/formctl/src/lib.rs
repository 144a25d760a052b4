#![forbid(unsafe_code)]

//! formctl public facade crate.
//!
//! Re-exports the field vocabulary, the validation engine, and the form
//! controls, plus a prelude for day-to-day use.
//!
//! ```
//! use formctl::prelude::*;
//!
//! let mut form = create_form::<FieldValue>();
//! let mut field = TextField::new(create_field(
//!     "email",
//!     FieldOptions::new()
//!         .default_error_message("Email is required")
//!         .validations(
//!             FieldValidationRules::new()
//!                 .required(true)
//!                 .custom_shared(email("Invalid Email Address.")),
//!         ),
//! ));
//! field.mount(&mut form);
//! assert!(!form.form_state().can_submit());
//!
//! field.change_text("jane@example.com", &mut form);
//! assert!(form.form_state().can_submit());
//! ```

use std::fmt;

use serde::Serialize;

// --- Core re-exports -------------------------------------------------------

pub use formctl_core::{
    ConfigError, DropdownOption, Feedback, FieldState, FieldValue, InputMode, ValidationTrigger,
    Validity,
};

// --- Validation re-exports -------------------------------------------------

pub use formctl_validation::{
    Bound, BoundConfig, CustomValidation, CustomVerdict, FieldValidationRules, RulesConfig,
    ValidationEngine, email, is_email_address_valid,
};

// --- Forms re-exports ------------------------------------------------------

pub use formctl_forms::{
    Checkbox, CheckboxGroup, CheckboxKind, Dropdown, DropdownType, FieldController, FieldKind,
    FieldOptions, FieldSnapshot, FieldSpec, FormData, FormRegistry, FormSchema, FormState,
    RadioButton, RadioGroup, Registration, TextField, create_field, create_form,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for formctl apps.
#[derive(Debug)]
pub enum Error {
    /// A field, control, or schema was misconfigured.
    Config(ConfigError),
    /// Submission data could not be serialized.
    Json(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::Json(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Json(err) => Some(err),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Standard result type for formctl APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// Serialize a form's submission data as a JSON array, in registration
/// order.
pub fn submission_json<T: Clone + Serialize>(form: &FormRegistry<T>) -> Result<String> {
    Ok(serde_json::to_string(&form.data())?)
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Checkbox, CheckboxGroup, Dropdown, DropdownOption, DropdownType, Error, FieldOptions,
        FieldState, FieldValidationRules, FieldValue, FormRegistry, FormSchema, RadioButton,
        RadioGroup, Result, TextField, Validity, create_field, create_form, email,
        submission_json,
    };

    pub use crate::{core, forms, validation};
}

pub use formctl_core as core;
pub use formctl_forms as forms;
pub use formctl_validation as validation;

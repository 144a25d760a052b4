#![forbid(unsafe_code)]

//! Declarative form descriptions.
//!
//! A schema lists the fields of a form in display order:
//!
//! ```json
//! {
//!   "fields": [
//!     { "name": "email", "kind": "text", "inputMode": "email",
//!       "defaultErrorMessage": "Email is required",
//!       "validations": { "required": true } },
//!     { "name": "age", "kind": "text", "inputMode": "numeric",
//!       "validations": { "min": { "validation": 18, "message": "Too young" } } },
//!     { "name": "terms", "kind": "checkbox", "validations": { "required": true } }
//!   ]
//! }
//! ```
//!
//! Custom predicates cannot be expressed in JSON; attach them in code with
//! [`FieldSpec::controller_with`].

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use formctl_core::{ConfigError, InputMode, warn};
use formctl_validation::{FieldValidationRules, RulesConfig};
use serde::Deserialize;

use crate::controller::{FieldController, FieldOptions};
use crate::controls::TextField;

/// Control family of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Text,
    Checkbox,
    Radio,
    Dropdown,
}

impl FieldKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Dropdown => "dropdown",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "checkbox" => Ok(Self::Checkbox),
            "radio" => Ok(Self::Radio),
            "dropdown" => Ok(Self::Dropdown),
            other => Err(ConfigError::invalid_variant("kind", other)),
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSchema {
    fields: Vec<RawField>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawField {
    name: String,
    kind: String,
    #[serde(default)]
    input_mode: Option<String>,
    #[serde(default)]
    default_error_message: Option<String>,
    #[serde(default)]
    default_notes: Option<String>,
    #[serde(default)]
    validations: Option<RulesConfig>,
}

/// One validated field description.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldKind,
    pub input_mode: InputMode,
    pub default_error_message: Option<String>,
    pub default_notes: Option<String>,
    pub validations: Option<RulesConfig>,
}

impl FieldSpec {
    fn from_raw(raw: RawField) -> Result<Self, ConfigError> {
        let kind = raw.kind.parse()?;
        let input_mode = match raw.input_mode.as_deref() {
            Some(mode) => mode.parse()?,
            None => InputMode::default(),
        };
        if let Some(rules) = &raw.validations {
            // Thresholds are checked at load.
            rules.clone().into_rules::<()>()?;
        }
        Ok(Self {
            name: raw.name,
            kind,
            input_mode,
            default_error_message: raw.default_error_message,
            default_notes: raw.default_notes,
            validations: raw.validations,
        })
    }

    /// Build a controller for this field.
    pub fn controller<T: Clone>(&self) -> Result<FieldController<T>, ConfigError> {
        self.controller_with(|rules| rules)
    }

    /// Build a controller, letting `extend` add to the declared rules (for
    /// example a custom predicate).
    ///
    /// `extend` runs only if the field declares validations.
    pub fn controller_with<T: Clone>(
        &self,
        extend: impl FnOnce(FieldValidationRules<T>) -> FieldValidationRules<T>,
    ) -> Result<FieldController<T>, ConfigError> {
        let mut options = FieldOptions::new();
        options.default_error_message = self.default_error_message.clone();
        options.default_notes = self.default_notes.clone();
        if let Some(cfg) = &self.validations {
            options.validations = Some(extend(cfg.clone().into_rules()?));
        }
        Ok(FieldController::new(self.name.clone(), options))
    }

    /// Build a text field with the declared input mode.
    pub fn text_field(&self) -> Result<TextField, ConfigError> {
        if self.kind != FieldKind::Text {
            warn!(name = %self.name, kind = %self.kind, "field is not a text field");
            return Err(ConfigError::invalid_variant("kind", self.kind.as_str()));
        }
        Ok(TextField::new(self.controller()?).with_input_mode(self.input_mode))
    }
}

/// A parsed form description.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSchema {
    fields: Vec<FieldSpec>,
}

impl FormSchema {
    /// Parse and validate a schema document.
    ///
    /// Rejects malformed JSON, unknown kinds and input modes, invalid
    /// thresholds, and repeated field names.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawSchema =
            serde_json::from_str(json).map_err(|e| ConfigError::Schema(e.to_string()))?;
        let mut seen = HashSet::new();
        let mut fields = Vec::with_capacity(raw.fields.len());
        for field in raw.fields {
            if !seen.insert(field.name.clone()) {
                warn!(name = %field.name, "duplicate field in form schema");
                return Err(ConfigError::DuplicateField(field.name));
            }
            fields.push(FieldSpec::from_raw(field)?);
        }
        Ok(Self { fields })
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#![forbid(unsafe_code)]

//! Value types carried by controls.

use serde::{Deserialize, Serialize};

/// One selectable dropdown entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DropdownOption {
    /// Text shown to the user; dropdown validation runs against it.
    pub title: String,
    /// Value reported to the application.
    pub value: String,
}

impl DropdownOption {
    #[must_use]
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
        }
    }
}

/// Value of any built-in control, for forms mixing control types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Text field or radio group.
    Text(String),
    /// Checkbox group.
    Selection(Vec<String>),
    /// Dropdown.
    Option(DropdownOption),
}

impl FieldValue {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_selection(&self) -> Option<&[String]> {
        match self {
            Self::Selection(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_option(&self) -> Option<&DropdownOption> {
        match self {
            Self::Option(o) => Some(o),
            _ => None,
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        Self::Selection(value)
    }
}

impl From<DropdownOption> for FieldValue {
    fn from(value: DropdownOption) -> Self {
        Self::Option(value)
    }
}

#![forbid(unsafe_code)]

//! Input mode and validation trigger discriminants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// When a computed verdict may update the visible field state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ValidationTrigger {
    /// Push every verdict immediately, focused or not.
    #[default]
    #[serde(rename = "onTextChange", alias = "onChange")]
    OnChange,
    /// Push verdicts only when the field reports it is no longer focused.
    #[serde(rename = "onBlur")]
    OnBlur,
}

impl ValidationTrigger {
    /// Whether a verdict computed with the given focus flag may be shown.
    ///
    /// Under `OnBlur` only an explicit `Some(false)` qualifies; a field that
    /// never reported focus keeps its previous visible state.
    #[must_use]
    pub const fn allows_push(self, is_focused: Option<bool>) -> bool {
        match self {
            Self::OnChange => true,
            Self::OnBlur => matches!(is_focused, Some(false)),
        }
    }
}

impl FromStr for ValidationTrigger {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "onTextChange" | "onChange" => Ok(Self::OnChange),
            "onBlur" => Ok(Self::OnBlur),
            other => Err(ConfigError::invalid_variant("validationTrigger", other)),
        }
    }
}

/// Virtual keyboard mode of a text input.
///
/// Only `Numeric` and `Decimal` change validation: they switch bound checks
/// from string length to numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    #[default]
    Text,
    None,
    Decimal,
    Numeric,
    Tel,
    Search,
    Email,
    Url,
}

impl InputMode {
    /// Returns `true` for modes whose bounds compare numeric values.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Numeric | Self::Decimal)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::None => "none",
            Self::Decimal => "decimal",
            Self::Numeric => "numeric",
            Self::Tel => "tel",
            Self::Search => "search",
            Self::Email => "email",
            Self::Url => "url",
        }
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "none" => Ok(Self::None),
            "decimal" => Ok(Self::Decimal),
            "numeric" => Ok(Self::Numeric),
            "tel" => Ok(Self::Tel),
            "search" => Ok(Self::Search),
            "email" => Ok(Self::Email),
            "url" => Ok(Self::Url),
            other => Err(ConfigError::invalid_variant("inputMode", other)),
        }
    }
}

#![forbid(unsafe_code)]

//! Display state, three-valued validity, and validation feedback.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// FieldState
// ---------------------------------------------------------------------------

/// Visible state of a field.
///
/// The validation engine only ever produces `Default` and `Error`. `Success`
/// and `Disabled` are set by the owning control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldState {
    /// Neutral state.
    #[default]
    Default,
    /// Explicitly marked as successful by the control.
    Success,
    /// Failed validation.
    Error,
    /// Not interactive.
    Disabled,
}

impl FieldState {
    /// Lower-case name as used in configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Success => "success",
            Self::Error => "error",
            Self::Disabled => "disabled",
        }
    }

    /// Returns `true` for [`FieldState::Error`].
    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(self, Self::Error)
    }

    /// Returns `true` for [`FieldState::Disabled`].
    #[must_use]
    pub const fn is_disabled(self) -> bool {
        matches!(self, Self::Disabled)
    }
}

impl fmt::Display for FieldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldState {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "success" => Ok(Self::Success),
            "error" => Ok(Self::Error),
            "disabled" => Ok(Self::Disabled),
            other => Err(ConfigError::invalid_variant("state", other)),
        }
    }
}

// ---------------------------------------------------------------------------
// Validity
// ---------------------------------------------------------------------------

/// Three-valued validity verdict.
///
/// `Unevaluated` is not the same as `Valid`: a required field that has never
/// been evaluated blocks form submission, an unconfigured one does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Validity {
    /// No verdict yet.
    #[default]
    Unevaluated,
    /// Last evaluation passed.
    Valid,
    /// Last evaluation failed.
    Invalid,
}

impl Validity {
    /// Build from an optional boolean verdict.
    #[must_use]
    pub const fn from_verdict(verdict: Option<bool>) -> Self {
        match verdict {
            None => Self::Unevaluated,
            Some(true) => Self::Valid,
            Some(false) => Self::Invalid,
        }
    }

    /// The verdict as an optional boolean.
    #[must_use]
    pub const fn verdict(self) -> Option<bool> {
        match self {
            Self::Unevaluated => None,
            Self::Valid => Some(true),
            Self::Invalid => Some(false),
        }
    }

    /// Returns `true` only for an explicit failure.
    #[must_use]
    pub const fn is_invalid(self) -> bool {
        matches!(self, Self::Invalid)
    }

    /// Returns `true` if no verdict has been recorded.
    #[must_use]
    pub const fn is_unevaluated(self) -> bool {
        matches!(self, Self::Unevaluated)
    }
}

impl From<Option<bool>> for Validity {
    fn from(verdict: Option<bool>) -> Self {
        Self::from_verdict(verdict)
    }
}

impl From<bool> for Validity {
    fn from(valid: bool) -> Self {
        Self::from_verdict(Some(valid))
    }
}

// Serialized as `true` / `false` / `null` so submitted data keeps the
// optional-boolean shape.
impl Serialize for Validity {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.verdict().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Validity {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<bool>::deserialize(deserializer).map(Self::from_verdict)
    }
}

// ---------------------------------------------------------------------------
// Feedback
// ---------------------------------------------------------------------------

/// Visible outcome of one evaluation: the state and message to show.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Feedback {
    /// `Default` on success, `Error` on failure.
    pub state: FieldState,
    /// Inline error text; `None` renders nothing.
    pub message: Option<String>,
}

impl Feedback {
    /// A passing outcome with no message.
    #[must_use]
    pub const fn ok() -> Self {
        Self {
            state: FieldState::Default,
            message: None,
        }
    }

    /// A failing outcome with an optional message.
    #[must_use]
    pub fn error(message: Option<String>) -> Self {
        Self {
            state: FieldState::Error,
            message,
        }
    }

    /// Returns `true` if the outcome is a failure.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.state.is_error()
    }
}

#![forbid(unsafe_code)]

//! Configuration errors.
//!
//! These are programmer mistakes (an out-of-range discriminant, a malformed
//! schema) surfaced at construction time. Data-driven validation failures are
//! never errors; they travel as [`Feedback`](crate::Feedback) values.

use std::fmt;

/// A configuration mistake detected while building a field, control, or form.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A discriminant prop received a value outside its allowed set.
    InvalidVariant {
        /// Name of the prop (e.g. `"type"`, `"inputMode"`).
        prop: &'static str,
        /// The rejected value.
        value: String,
    },
    /// A length bound with a negative or non-finite threshold.
    InvalidBound {
        /// Rule name (`"minLength"` or `"maxLength"`).
        rule: &'static str,
        /// The rejected threshold.
        threshold: f64,
    },
    /// The same field name declared twice in one form schema.
    DuplicateField(String),
    /// A form schema document that could not be parsed.
    Schema(String),
}

impl ConfigError {
    /// Build an [`InvalidVariant`](Self::InvalidVariant) error.
    #[must_use]
    pub fn invalid_variant(prop: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidVariant {
            prop,
            value: value.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidVariant { prop, value } => {
                write!(f, "Invalid prop {prop} for {value}")
            }
            Self::InvalidBound { rule, threshold } => {
                write!(f, "invalid {rule} threshold: {threshold}")
            }
            Self::DuplicateField(name) => write!(f, "duplicate field name: {name}"),
            Self::Schema(msg) => write!(f, "invalid form schema: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_variant_names_prop_and_value() {
        let err = ConfigError::invalid_variant("type", "bogus");
        assert_eq!(err.to_string(), "Invalid prop type for bogus");
    }

    #[test]
    fn duplicate_field_display() {
        let err = ConfigError::DuplicateField("email".into());
        assert_eq!(err.to_string(), "duplicate field name: email");
    }

    #[test]
    fn is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&ConfigError::Schema("eof".into()));
    }
}

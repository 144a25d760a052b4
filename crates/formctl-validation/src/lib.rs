#![forbid(unsafe_code)]

//! Field validation for formctl.
//!
//! - [`rules`]: rule configuration and pure evaluators
//! - [`engine`]: the per-field [`ValidationEngine`]
//! - [`validators`]: reusable custom predicates
//! - [`config`]: serde form of the rule set
//!
//! # Example
//!
//! ```
//! use formctl_validation::{Bound, FieldValidationRules, ValidationEngine};
//! use formctl_core::{FieldState, Validity};
//!
//! let rules = FieldValidationRules::<String>::new()
//!     .required(true)
//!     .min_length(Bound::new(3.0).message("Too short"));
//! let mut engine = ValidationEngine::new(Some(rules));
//!
//! let value = "ab".to_string();
//! let feedback = engine.evaluate_text(Some(&value), Some(value.as_str()), None).unwrap();
//! assert_eq!(feedback.state, FieldState::Error);
//! assert_eq!(feedback.message.as_deref(), Some("Too short"));
//! assert_eq!(engine.is_valid(), Validity::Invalid);
//! ```

pub mod config;
pub mod engine;
pub mod rules;
pub mod validators;

pub use config::{BoundConfig, RulesConfig};
pub use engine::ValidationEngine;
pub use rules::{
    Bound, BoundCheck, BoundKind, CustomValidation, CustomVerdict, EmptyValue,
    FieldValidationRules, check_length_bounds, check_value_bounds, parse_numeric,
    resolve_message, run_custom,
};
pub use validators::{email, is_email_address_valid};

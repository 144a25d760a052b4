#![forbid(unsafe_code)]

//! Declarative rule configuration.
//!
//! [`RulesConfig`] is the serializable shape of [`FieldValidationRules`]
//! without the custom predicate. Field names follow the camelCase props used
//! by form descriptions:
//!
//! ```json
//! {
//!   "validationTrigger": "onBlur",
//!   "required": true,
//!   "minLength": { "validation": 8, "message": "At least 8 characters" },
//!   "maxLength": { "threshold": 64 }
//! }
//! ```
//!
//! A bound's threshold may be spelled `validation` or `threshold`.

use formctl_core::{ConfigError, ValidationTrigger, warn};
use serde::{Deserialize, Serialize};

use crate::rules::{Bound, FieldValidationRules};

/// Serializable bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoundConfig {
    #[serde(alias = "validation")]
    pub threshold: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<BoundConfig> for Bound {
    fn from(cfg: BoundConfig) -> Self {
        Self {
            threshold: cfg.threshold,
            message: cfg.message,
        }
    }
}

impl From<&Bound> for BoundConfig {
    fn from(bound: &Bound) -> Self {
        Self {
            threshold: bound.threshold,
            message: bound.message.clone(),
        }
    }
}

/// Serializable rule set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RulesConfig {
    #[serde(default, alias = "trigger")]
    pub validation_trigger: ValidationTrigger,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<BoundConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<BoundConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<BoundConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<BoundConfig>,
}

impl RulesConfig {
    /// Parse a rule set from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Schema(e.to_string()))
    }

    /// Validate thresholds and build runtime rules.
    ///
    /// Every threshold must be finite; length thresholds must also be
    /// non-negative.
    pub fn into_rules<T>(self) -> Result<FieldValidationRules<T>, ConfigError> {
        check_threshold("min", self.min.as_ref(), false)?;
        check_threshold("max", self.max.as_ref(), false)?;
        check_threshold("minLength", self.min_length.as_ref(), true)?;
        check_threshold("maxLength", self.max_length.as_ref(), true)?;

        Ok(FieldValidationRules {
            trigger: self.validation_trigger,
            required: self.required,
            min: self.min.map(Bound::from),
            max: self.max.map(Bound::from),
            min_length: self.min_length.map(Bound::from),
            max_length: self.max_length.map(Bound::from),
            custom: None,
        })
    }
}

impl<T> From<&FieldValidationRules<T>> for RulesConfig {
    fn from(rules: &FieldValidationRules<T>) -> Self {
        Self {
            validation_trigger: rules.trigger,
            required: rules.required,
            min: rules.min.as_ref().map(BoundConfig::from),
            max: rules.max.as_ref().map(BoundConfig::from),
            min_length: rules.min_length.as_ref().map(BoundConfig::from),
            max_length: rules.max_length.as_ref().map(BoundConfig::from),
        }
    }
}

fn check_threshold(
    rule: &'static str,
    bound: Option<&BoundConfig>,
    non_negative: bool,
) -> Result<(), ConfigError> {
    let Some(bound) = bound else {
        return Ok(());
    };
    let threshold = bound.threshold;
    if !threshold.is_finite() || (non_negative && threshold < 0.0) {
        warn!(rule, threshold, "rejected rule threshold");
        return Err(ConfigError::InvalidBound { rule, threshold });
    }
    Ok(())
}

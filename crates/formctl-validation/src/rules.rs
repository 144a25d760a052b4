#![forbid(unsafe_code)]

//! Rule configuration and the pure rule evaluators.
//!
//! Every function here is stateless. [`ValidationEngine`](crate::ValidationEngine)
//! composes them and applies trigger timing.
//!
//! # Message precedence
//!
//! For a failing rule the message is, highest first:
//!
//! 1. the rule's own message (for custom rules, the predicate's message),
//! 2. the field-level default error message,
//! 3. nothing (`None`, the UI renders no text).

use std::fmt;
use std::sync::Arc;

use formctl_core::{DropdownOption, Feedback, FieldValue, ValidationTrigger};

// ---------------------------------------------------------------------------
// Bound
// ---------------------------------------------------------------------------

/// A numeric threshold with an optional failure message.
#[derive(Debug, Clone, PartialEq)]
pub struct Bound {
    /// Inclusive threshold.
    pub threshold: f64,
    /// Message shown when the threshold is violated.
    pub message: Option<String>,
}

impl Bound {
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            message: None,
        }
    }

    /// Attach a failure message.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl From<f64> for Bound {
    fn from(threshold: f64) -> Self {
        Self::new(threshold)
    }
}

impl From<i32> for Bound {
    fn from(threshold: i32) -> Self {
        Self::new(f64::from(threshold))
    }
}

impl From<u32> for Bound {
    fn from(threshold: u32) -> Self {
        Self::new(f64::from(threshold))
    }
}

impl From<usize> for Bound {
    fn from(threshold: usize) -> Self {
        Self::new(threshold as f64)
    }
}

/// Which side of a bound pair was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundKind {
    Min,
    Max,
}

/// Result of a bound check.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoundCheck {
    pub valid: bool,
    pub message: Option<String>,
    pub violated: Option<BoundKind>,
}

impl BoundCheck {
    fn pass() -> Self {
        Self {
            valid: true,
            message: None,
            violated: None,
        }
    }

    fn fail(kind: BoundKind, bound: &Bound, default_message: Option<&str>) -> Self {
        Self {
            valid: false,
            message: resolve_message(bound.message.as_deref(), default_message),
            violated: Some(kind),
        }
    }
}

// ---------------------------------------------------------------------------
// Custom rules
// ---------------------------------------------------------------------------

/// Outcome of a caller-supplied predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomVerdict {
    pub valid: bool,
    pub message: Option<String>,
}

impl CustomVerdict {
    #[must_use]
    pub const fn valid() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }

    /// Build from a boolean, attaching `message` only on failure.
    #[must_use]
    pub fn check(valid: bool, message: impl Into<String>) -> Self {
        if valid { Self::valid() } else { Self::invalid(message) }
    }
}

/// A caller-supplied predicate over the field's control value.
pub type CustomValidation<T> = Arc<dyn Fn(Option<&T>) -> CustomVerdict + Send + Sync>;

// ---------------------------------------------------------------------------
// FieldValidationRules
// ---------------------------------------------------------------------------

/// Per-field rule set. Immutable once handed to an engine.
pub struct FieldValidationRules<T> {
    pub trigger: ValidationTrigger,
    pub required: bool,
    /// Lower numeric bound (numeric text) or selection count (checkboxes).
    pub min: Option<Bound>,
    /// Upper numeric bound (numeric text) or selection count (checkboxes).
    pub max: Option<Bound>,
    /// Lower character-count bound (non-numeric text).
    pub min_length: Option<Bound>,
    /// Upper character-count bound (non-numeric text).
    pub max_length: Option<Bound>,
    pub custom: Option<CustomValidation<T>>,
}

impl<T> FieldValidationRules<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            trigger: ValidationTrigger::default(),
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
            custom: None,
        }
    }

    #[must_use]
    pub fn trigger(mut self, trigger: ValidationTrigger) -> Self {
        self.trigger = trigger;
        self
    }

    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    #[must_use]
    pub fn min(mut self, bound: impl Into<Bound>) -> Self {
        self.min = Some(bound.into());
        self
    }

    #[must_use]
    pub fn max(mut self, bound: impl Into<Bound>) -> Self {
        self.max = Some(bound.into());
        self
    }

    #[must_use]
    pub fn min_length(mut self, bound: impl Into<Bound>) -> Self {
        self.min_length = Some(bound.into());
        self
    }

    #[must_use]
    pub fn max_length(mut self, bound: impl Into<Bound>) -> Self {
        self.max_length = Some(bound.into());
        self
    }

    /// Attach a custom predicate.
    #[must_use]
    pub fn custom<F>(mut self, predicate: F) -> Self
    where
        F: Fn(Option<&T>) -> CustomVerdict + Send + Sync + 'static,
    {
        self.custom = Some(Arc::new(predicate));
        self
    }

    /// Attach an already shared predicate.
    #[must_use]
    pub fn custom_shared(mut self, predicate: CustomValidation<T>) -> Self {
        self.custom = Some(predicate);
        self
    }
}

impl<T> Default for FieldValidationRules<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for FieldValidationRules<T> {
    fn clone(&self) -> Self {
        Self {
            trigger: self.trigger,
            required: self.required,
            min: self.min.clone(),
            max: self.max.clone(),
            min_length: self.min_length.clone(),
            max_length: self.max_length.clone(),
            custom: self.custom.clone(),
        }
    }
}

impl<T> fmt::Debug for FieldValidationRules<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldValidationRules")
            .field("trigger", &self.trigger)
            .field("required", &self.required)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("min_length", &self.min_length)
            .field("max_length", &self.max_length)
            .field("custom", &self.custom.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Emptiness
// ---------------------------------------------------------------------------

/// What `required` considers empty. Whitespace is never trimmed.
pub trait EmptyValue {
    fn is_empty_value(&self) -> bool;
}

impl EmptyValue for str {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl EmptyValue for String {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> EmptyValue for [T] {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> EmptyValue for Vec<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl EmptyValue for DropdownOption {
    fn is_empty_value(&self) -> bool {
        self.title.is_empty()
    }
}

impl EmptyValue for FieldValue {
    fn is_empty_value(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Selection(v) => v.is_empty(),
            Self::Option(o) => o.is_empty_value(),
        }
    }
}

impl<T: EmptyValue + ?Sized> EmptyValue for Option<&T> {
    fn is_empty_value(&self) -> bool {
        self.is_none_or(|v| v.is_empty_value())
    }
}

// ---------------------------------------------------------------------------
// Evaluators
// ---------------------------------------------------------------------------

/// Pick the message for a failing rule.
#[must_use]
pub fn resolve_message(rule_message: Option<&str>, default_message: Option<&str>) -> Option<String> {
    rule_message.or(default_message).map(str::to_owned)
}

/// Check a numeric value against `min` then `max`.
///
/// NaN violates neither bound.
#[must_use]
pub fn check_value_bounds(
    value: f64,
    min: Option<&Bound>,
    max: Option<&Bound>,
    default_message: Option<&str>,
) -> BoundCheck {
    if let Some(min) = min {
        if value < min.threshold {
            return BoundCheck::fail(BoundKind::Min, min, default_message);
        }
    }
    if let Some(max) = max {
        if value > max.threshold {
            return BoundCheck::fail(BoundKind::Max, max, default_message);
        }
    }
    BoundCheck::pass()
}

/// Check a length (characters or selected items) against `min` then `max`.
#[must_use]
pub fn check_length_bounds(
    len: usize,
    min: Option<&Bound>,
    max: Option<&Bound>,
    default_message: Option<&str>,
) -> BoundCheck {
    check_value_bounds(len as f64, min, max, default_message)
}

/// Run a custom predicate and translate it into feedback.
#[must_use]
pub fn run_custom<T>(
    custom: &CustomValidation<T>,
    value: Option<&T>,
    default_message: Option<&str>,
) -> Feedback {
    let verdict = custom(value);
    if verdict.valid {
        Feedback::ok()
    } else {
        Feedback::error(resolve_message(verdict.message.as_deref(), default_message))
    }
}

/// Parse raw text the way a numeric keyboard field is read.
///
/// Surrounding whitespace is ignored and blank text reads as `0`. Accepts
/// signed decimals with optional exponent, `Infinity`, and unsigned
/// `0x`/`0o`/`0b` integers. Anything else (including `inf` and `nan`)
/// becomes NaN.
#[must_use]
pub fn parse_numeric(raw: &str) -> f64 {
    let text = raw.trim();
    if text.is_empty() {
        return 0.0;
    }
    if let Some(value) = parse_radix_literal(text) {
        return value;
    }
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    if unsigned == "Infinity" {
        return if text.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }
    // Rust also accepts `inf`/`infinity`/`nan` spellings; those are not numbers here.
    if !unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return f64::NAN;
    }
    text.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix_literal(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    let digits = &text[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }
    let value = digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|d| acc * f64::from(radix) + f64::from(d))
    });
    Some(value.unwrap_or(f64::NAN))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bound(threshold: f64, message: &str) -> Bound {
        Bound::new(threshold).message(message)
    }

    #[test]
    fn value_bounds_absent_pass() {
        let check = check_value_bounds(5.0, None, None, Some("fallback"));
        assert!(check.valid);
        assert!(check.message.is_none());
        assert!(check.violated.is_none());
    }

    #[test]
    fn value_bounds_min_checked_before_max() {
        // Inverted pair: both violated, min wins.
        let min = bound(10.0, "low");
        let max = bound(1.0, "high");
        let check = check_value_bounds(5.0, Some(&min), Some(&max), None);
        assert_eq!(check.violated, Some(BoundKind::Min));
        assert_eq!(check.message.as_deref(), Some("low"));
    }

    #[test]
    fn value_bounds_max_violation() {
        let max = bound(100.0, "high");
        let check = check_value_bounds(101.0, None, Some(&max), None);
        assert!(!check.valid);
        assert_eq!(check.violated, Some(BoundKind::Max));
    }

    #[test]
    fn value_bounds_are_inclusive() {
        let min = Bound::new(18.0);
        let max = Bound::new(18.0);
        assert!(check_value_bounds(18.0, Some(&min), Some(&max), None).valid);
    }

    #[test]
    fn nan_passes_bounds() {
        let min = Bound::new(0.0);
        let max = Bound::new(1.0);
        assert!(check_value_bounds(f64::NAN, Some(&min), Some(&max), None).valid);
    }

    #[test]
    fn bound_message_falls_back_to_default() {
        let min = Bound::new(3.0);
        let check = check_length_bounds(1, Some(&min), None, Some("Required field"));
        assert_eq!(check.message.as_deref(), Some("Required field"));
        let check = check_length_bounds(1, Some(&min), None, None);
        assert!(check.message.is_none());
    }

    #[test]
    fn length_bounds_compare_counts() {
        let max = bound(2.0, "too many");
        assert!(check_length_bounds(2, None, Some(&max), None).valid);
        assert!(!check_length_bounds(3, None, Some(&max), None).valid);
    }

    #[test]
    fn emptiness_never_trims() {
        assert!("".is_empty_value());
        assert!(!" ".is_empty_value());
        assert!(Vec::<String>::new().is_empty_value());
        assert!(None::<&String>.is_empty_value());
        assert!(!Some(&"x".to_string()).is_empty_value());
        assert!(DropdownOption::new("", "x").is_empty_value());
    }

    #[test]
    fn custom_message_precedence() {
        let with_message: CustomValidation<String> =
            Arc::new(|_: Option<&String>| CustomVerdict::invalid("Invalid Email Address."));
        let fb = run_custom(&with_message, None, Some("default"));
        assert_eq!(fb.message.as_deref(), Some("Invalid Email Address."));

        let bare: CustomValidation<String> = Arc::new(|_: Option<&String>| CustomVerdict {
            valid: false,
            message: None,
        });
        let fb = run_custom(&bare, None, Some("default"));
        assert_eq!(fb.message.as_deref(), Some("default"));
        let fb = run_custom(&bare, None, None);
        assert!(fb.is_error());
        assert!(fb.message.is_none());
    }

    #[test]
    fn custom_receives_value() {
        let rule: CustomValidation<String> =
            Arc::new(|v: Option<&String>| CustomVerdict::check(v.is_some_and(|s| s.len() > 2), "short"));
        assert!(!run_custom(&rule, Some(&"abc".to_string()), None).is_error());
        assert!(run_custom(&rule, Some(&"ab".to_string()), None).is_error());
        assert!(run_custom(&rule, None, None).is_error());
    }

    #[test]
    fn parse_numeric_trims_and_degrades_to_nan() {
        assert_eq!(parse_numeric(" 21 "), 21.0);
        assert_eq!(parse_numeric("2.5"), 2.5);
        assert_eq!(parse_numeric("-.5e1"), -5.0);
        assert!(parse_numeric("abc").is_nan());
        assert!(parse_numeric("1e").is_nan());
        assert!(parse_numeric(".").is_nan());
    }

    #[test]
    fn parse_numeric_blank_is_zero() {
        assert_eq!(parse_numeric("   "), 0.0);
        assert_eq!(parse_numeric("\t\n"), 0.0);
    }

    #[test]
    fn parse_numeric_infinity_spellings() {
        assert_eq!(parse_numeric("Infinity"), f64::INFINITY);
        assert_eq!(parse_numeric("+Infinity"), f64::INFINITY);
        assert_eq!(parse_numeric("-Infinity"), f64::NEG_INFINITY);
        for text in ["inf", "-inf", "INF", "infinity", "INFINITY", "nan", "NaN"] {
            assert!(parse_numeric(text).is_nan(), "{text:?} should be NaN");
        }
    }

    #[test]
    fn parse_numeric_radix_literals() {
        assert_eq!(parse_numeric("0x1F"), 31.0);
        assert_eq!(parse_numeric("0o17"), 15.0);
        assert_eq!(parse_numeric("0b101"), 5.0);
        assert!(parse_numeric("0x").is_nan());
        assert!(parse_numeric("0b2").is_nan());
        assert!(parse_numeric("-0x10").is_nan());
    }

    #[test]
    fn builder_sets_fields() {
        let rules: FieldValidationRules<String> = FieldValidationRules::new()
            .trigger(ValidationTrigger::OnBlur)
            .required(true)
            .min(bound(18.0, "Too young"))
            .max_length(10)
            .custom(|_| CustomVerdict::valid());
        assert_eq!(rules.trigger, ValidationTrigger::OnBlur);
        assert!(rules.required);
        assert_eq!(rules.min.as_ref().map(|b| b.threshold), Some(18.0));
        assert_eq!(rules.max_length.as_ref().map(|b| b.threshold), Some(10.0));
        assert!(rules.custom.is_some());
        let dbg = format!("{rules:?}");
        assert!(dbg.contains("<fn>"));
    }
}

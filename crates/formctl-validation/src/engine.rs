#![forbid(unsafe_code)]

//! Stateful, trigger-aware validation for a single field.
//!
//! A [`ValidationEngine`] remembers the last verdict it pushed and decides,
//! per evaluation, whether the result may reach the field's visible state.
//!
//! # Evaluation paths
//!
//! | Path | Bounds | Then |
//! |------|--------|------|
//! | text, numeric mode | `min`/`max` on the parsed value (skipped for empty input) | required, custom |
//! | text, other modes | `minLength`/`maxLength` on the character count | required, custom |
//! | checkbox group | `min`/`max` on the selection count | required, custom |
//! | radio group | none | custom; an empty selection fails without one |
//!
//! A failing bound stops evaluation: required and custom rules do not run.
//!
//! # Untouched fields
//!
//! An absent value (the field was never edited) always yields `Default`
//! immediately. The cached verdict becomes `Valid` unless the field is
//! required, in which case it is reset to `Unevaluated`. A field touched and
//! then emptied is evaluated normally and may fail `required`.
//!
//! # Trigger timing
//!
//! Under [`ValidationTrigger::OnBlur`] text verdicts are withheld until the
//! field reports `is_focused == Some(false)`. A withheld verdict does not
//! change the cached validity either. Checkbox and radio groups have no focus
//! and always push.

use formctl_core::{Feedback, InputMode, Validity, trace};

use crate::rules::{
    self, EmptyValue, FieldValidationRules, check_length_bounds, check_value_bounds,
    parse_numeric,
};

/// Per-field validation state machine.
#[derive(Debug, Clone)]
pub struct ValidationEngine<T> {
    rules: Option<FieldValidationRules<T>>,
    default_error_message: Option<String>,
    input_mode: InputMode,
    verdict: Option<bool>,
}

impl<T> Default for ValidationEngine<T> {
    fn default() -> Self {
        Self::new(None)
    }
}

impl<T> ValidationEngine<T> {
    /// Create an engine. Without rules it never pushes feedback.
    #[must_use]
    pub fn new(rules: Option<FieldValidationRules<T>>) -> Self {
        Self {
            rules,
            default_error_message: None,
            input_mode: InputMode::default(),
            verdict: None,
        }
    }

    #[must_use]
    pub fn with_default_error_message(mut self, message: Option<String>) -> Self {
        self.default_error_message = message;
        self
    }

    #[must_use]
    pub fn with_input_mode(mut self, mode: InputMode) -> Self {
        self.input_mode = mode;
        self
    }

    pub fn rules(&self) -> Option<&FieldValidationRules<T>> {
        self.rules.as_ref()
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn default_error_message(&self) -> Option<&str> {
        self.default_error_message.as_deref()
    }

    /// Last pushed verdict.
    pub fn is_valid(&self) -> Validity {
        Validity::from_verdict(self.verdict)
    }

    // -- text ---------------------------------------------------------------

    /// Evaluate a text-like field.
    ///
    /// `control_value` is what custom rules see; `raw` is the text the bound
    /// and required checks read. Returns the feedback to show, or `None` when
    /// nothing should change (no rules, or withheld by trigger timing).
    pub fn evaluate_text(
        &mut self,
        control_value: Option<&T>,
        raw: Option<&str>,
        is_focused: Option<bool>,
    ) -> Option<Feedback> {
        let rules = self.rules.as_ref()?;
        let Some(raw) = raw else {
            return self.untouched();
        };
        let default = self.default_error_message.as_deref();

        let feedback = if self.input_mode.is_numeric() {
            if raw.is_empty() {
                if rules.required {
                    Feedback::error(default.map(str::to_owned))
                } else {
                    self.custom_or_ok(control_value)
                }
            } else {
                let check = check_value_bounds(
                    parse_numeric(raw),
                    rules.min.as_ref(),
                    rules.max.as_ref(),
                    default,
                );
                if check.valid {
                    self.custom_or_ok(control_value)
                } else {
                    Feedback::error(check.message)
                }
            }
        } else {
            let check = check_length_bounds(
                raw.chars().count(),
                rules.min_length.as_ref(),
                rules.max_length.as_ref(),
                default,
            );
            if !check.valid {
                Feedback::error(check.message)
            } else if rules.required && raw.is_empty_value() {
                Feedback::error(default.map(str::to_owned))
            } else {
                self.custom_or_ok(control_value)
            }
        };

        if rules.trigger.allows_push(is_focused) {
            self.push(feedback)
        } else {
            trace!(
                state = %feedback.state,
                ?is_focused,
                "verdict withheld until blur"
            );
            None
        }
    }

    // -- checkbox group -----------------------------------------------------

    /// Evaluate a multi-select group by its selection.
    ///
    /// Count bounds take precedence over `required`.
    pub fn evaluate_checkbox_group(
        &mut self,
        control_value: Option<&T>,
        selected: Option<&[String]>,
    ) -> Option<Feedback> {
        let rules = self.rules.as_ref()?;
        let Some(selected) = selected else {
            return self.untouched();
        };
        let default = self.default_error_message.as_deref();

        let check = check_length_bounds(
            selected.len(),
            rules.min.as_ref(),
            rules.max.as_ref(),
            default,
        );
        let feedback = if !check.valid {
            Feedback::error(check.message)
        } else if rules.required && selected.is_empty_value() {
            Feedback::error(default.map(str::to_owned))
        } else {
            self.custom_or_ok(control_value)
        };
        self.push(feedback)
    }

    // -- radio group --------------------------------------------------------

    /// Evaluate a single-select group.
    ///
    /// An empty selection fails regardless of `required`; only a custom rule
    /// approving the empty case can make it pass.
    pub fn evaluate_radio_group(
        &mut self,
        control_value: Option<&T>,
        selected: Option<&str>,
    ) -> Option<Feedback> {
        let rules = self.rules.as_ref()?;
        let Some(selected) = selected else {
            return self.untouched();
        };

        let feedback = if !selected.is_empty() || rules.custom.is_some() {
            self.custom_or_ok(control_value)
        } else {
            Feedback::error(self.default_error_message.clone())
        };
        self.push(feedback)
    }

    // -- internals ----------------------------------------------------------

    fn custom_or_ok(&self, control_value: Option<&T>) -> Feedback {
        match self.rules.as_ref().and_then(|r| r.custom.as_ref()) {
            Some(custom) => rules::run_custom(
                custom,
                control_value,
                self.default_error_message.as_deref(),
            ),
            None => Feedback::ok(),
        }
    }

    fn push(&mut self, feedback: Feedback) -> Option<Feedback> {
        self.verdict = Some(!feedback.is_error());
        trace!(
            state = %feedback.state,
            error_message = ?feedback.message,
            "verdict pushed"
        );
        Some(feedback)
    }

    fn untouched(&mut self) -> Option<Feedback> {
        let required = self.rules.as_ref().is_some_and(|r| r.required);
        self.verdict = if required { None } else { Some(true) };
        trace!(required, "untouched field reset to default");
        Some(Feedback::ok())
    }
}

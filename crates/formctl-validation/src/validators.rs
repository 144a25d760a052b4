#![forbid(unsafe_code)]

//! Reusable predicates for custom rules.

use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::rules::{CustomValidation, CustomVerdict};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Returns `true` if `value` looks like an email address.
///
/// Accepts `local@domain.tld` where the top-level label has at least two
/// ASCII letters. No normalization is applied; surrounding whitespace fails.
///
/// ```
/// use formctl_validation::is_email_address_valid;
///
/// assert!(is_email_address_valid("jane.doe+news@example.co"));
/// assert!(!is_email_address_valid("jane@example"));
/// ```
#[must_use]
pub fn is_email_address_valid(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// A custom rule that fails unless the value is an email address.
///
/// An absent value fails too; pair it with `required` for the empty case.
#[must_use]
pub fn email<T>(message: impl Into<String>) -> CustomValidation<T>
where
    T: AsRef<str> + 'static,
{
    let message = message.into();
    Arc::new(move |value: Option<&T>| {
        CustomVerdict::check(
            value.is_some_and(|v| is_email_address_valid(v.as_ref())),
            message.clone(),
        )
    })
}

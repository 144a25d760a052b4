//! End-to-end evaluation scenarios for common field shapes.

use formctl_core::{FieldState, InputMode, Validity};
use formctl_validation::{
    Bound, CustomVerdict, FieldValidationRules, RulesConfig, ValidationEngine,
    is_email_address_valid,
};

fn text(engine: &mut ValidationEngine<String>, raw: &str) -> (FieldState, Option<String>) {
    let value = raw.to_string();
    let fb = engine
        .evaluate_text(Some(&value), Some(raw), None)
        .expect("on-change rules always push");
    (fb.state, fb.message)
}

#[test]
fn email_field() {
    let rules = FieldValidationRules::<String>::new()
        .required(true)
        .custom(|v: Option<&String>| {
            CustomVerdict::check(
                is_email_address_valid(v.map_or("", String::as_str)),
                "Invalid Email Address.",
            )
        });
    let mut engine = ValidationEngine::new(Some(rules));

    assert_eq!(
        text(&mut engine, "abc"),
        (FieldState::Error, Some("Invalid Email Address.".into()))
    );
    assert_eq!(engine.is_valid(), Validity::Invalid);
    assert_eq!(text(&mut engine, "a@b.com"), (FieldState::Default, None));
    assert_eq!(engine.is_valid(), Validity::Valid);
}

#[test]
fn terms_checkbox() {
    let rules = FieldValidationRules::<Vec<String>>::new().required(true);
    let mut engine = ValidationEngine::new(Some(rules));

    let none: Vec<String> = Vec::new();
    let fb = engine
        .evaluate_checkbox_group(Some(&none), Some(none.as_slice()))
        .unwrap();
    assert_eq!(fb.state, FieldState::Error);

    let agreed = vec!["agree-terms".to_string()];
    let fb = engine
        .evaluate_checkbox_group(Some(&agreed), Some(agreed.as_slice()))
        .unwrap();
    assert_eq!(fb.state, FieldState::Default);
}

#[test]
fn age_field() {
    let rules = FieldValidationRules::<String>::new().min(Bound::new(18.0).message("Too young"));
    let mut engine = ValidationEngine::new(Some(rules)).with_input_mode(InputMode::Numeric);

    assert_eq!(
        text(&mut engine, "15"),
        (FieldState::Error, Some("Too young".into()))
    );
    assert_eq!(text(&mut engine, "21"), (FieldState::Default, None));
}

#[test]
fn password_from_config() {
    let rules = RulesConfig::from_json(
        r#"{
            "required": true,
            "minLength": { "validation": 8, "message": "Use at least 8 characters" },
            "maxLength": { "validation": 16 }
        }"#,
    )
    .unwrap()
    .into_rules::<String>()
    .unwrap();
    let mut engine = ValidationEngine::new(Some(rules))
        .with_default_error_message(Some("Password is required".into()));

    assert_eq!(
        text(&mut engine, ""),
        (FieldState::Error, Some("Use at least 8 characters".into()))
    );
    assert_eq!(text(&mut engine, "hunter22"), (FieldState::Default, None));
    assert_eq!(
        text(&mut engine, "correct horse battery"),
        (FieldState::Error, Some("Password is required".into()))
    );
}

#[test]
fn custom_message_falls_back_to_default() {
    let rules = FieldValidationRules::<String>::new().custom(|_| CustomVerdict {
        valid: false,
        message: None,
    });
    let mut engine =
        ValidationEngine::new(Some(rules)).with_default_error_message(Some("Nope".into()));
    assert_eq!(
        text(&mut engine, "x"),
        (FieldState::Error, Some("Nope".into()))
    );

    let rules = FieldValidationRules::<String>::new().custom(|_| CustomVerdict {
        valid: false,
        message: None,
    });
    let mut engine = ValidationEngine::new(Some(rules));
    assert_eq!(text(&mut engine, "x"), (FieldState::Error, None));
}

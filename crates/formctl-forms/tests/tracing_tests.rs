#![forbid(unsafe_code)]

//! Structured logging integration tests.
//!
//! Events enabled:
//!   cargo test -p formctl-forms --features tracing --test tracing_tests
//!
//! Without the feature the same flows must run and emit nothing:
//!   cargo test -p formctl-forms --test tracing_tests -- silent

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use formctl_forms::{FieldOptions, FormRegistry, TextField, create_field};
use formctl_validation::FieldValidationRules;

use tracing_subscriber::layer::SubscriberExt;

// ============================================================================
// Test Infrastructure
// ============================================================================

/// A captured event with its target, message and fields.
#[derive(Debug, Clone)]
#[allow(dead_code)]
struct CapturedEvent {
    target: String,
    level: tracing::Level,
    message: String,
    fields: HashMap<String, String>,
}

/// A tracing Layer that records every event.
struct EventCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

/// Visitor that extracts event fields.
struct FieldVisitor(Vec<(String, String)>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_bool(&mut self, field: &tracing::field::Field, value: bool) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for EventCapture {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut visitor = FieldVisitor(Vec::new());
        event.record(&mut visitor);
        let mut fields: HashMap<String, String> = visitor.0.into_iter().collect();
        let message = fields.remove("message").unwrap_or_default();
        self.events.lock().unwrap().push(CapturedEvent {
            target: event.metadata().target().to_string(),
            level: *event.metadata().level(),
            message,
            fields,
        });
    }
}

/// Run a closure under a capturing subscriber and return what it logged.
fn with_captured_events<F: FnOnce()>(f: F) -> Vec<CapturedEvent> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let layer = EventCapture {
        events: Arc::clone(&events),
    };
    let subscriber = tracing_subscriber::registry().with(layer);
    tracing::subscriber::with_default(subscriber, f);
    let captured = events.lock().unwrap().clone();
    captured
}

/// Mount a required text field, type, blur and unmount it.
fn drive_login_field() {
    let mut form: FormRegistry<String> = FormRegistry::new();
    let mut input = TextField::new(create_field(
        "username",
        FieldOptions::new()
            .default_error_message("Required")
            .validations(FieldValidationRules::new().required(true)),
    ));
    input.mount(&mut form);
    input.change_text("", &mut form);
    input.change_text("jane", &mut form);
    input.blur(&mut form);
    let _ = input.unmount(&mut form);
    form.unregister("username");
}

// ============================================================================
// Tests
// ============================================================================

#[test]
#[cfg(feature = "tracing")]
fn registry_logs_insert_replace_and_remove() {
    let events = with_captured_events(drive_login_field);

    let registered: Vec<_> = events
        .iter()
        .filter(|e| e.message == "field registered")
        .collect();
    assert!(registered.len() >= 4, "one registration per event: {registered:?}");
    assert_eq!(registered[0].fields.get("outcome").map(String::as_str), Some("Inserted"));
    assert!(registered[1..]
        .iter()
        .all(|e| e.fields.get("outcome").map(String::as_str) == Some("Replaced")));
    assert!(registered.iter().all(|e| e.level == tracing::Level::DEBUG));

    let unregistered: Vec<_> = events
        .iter()
        .filter(|e| e.message == "field unregistered")
        .map(|e| e.fields.get("hit").cloned())
        .collect();
    assert_eq!(unregistered, [Some("true".to_string()), Some("false".to_string())]);
}

#[test]
#[cfg(feature = "tracing")]
fn engine_logs_pushed_verdicts() {
    let events = with_captured_events(drive_login_field);
    let pushed: Vec<_> = events
        .iter()
        .filter(|e| e.message == "verdict pushed")
        .collect();
    assert!(!pushed.is_empty());
    assert!(pushed.iter().all(|e| e.target.starts_with("formctl_validation")));
    assert!(pushed.iter().all(|e| e.level == tracing::Level::TRACE));
    assert!(
        pushed
            .iter()
            .any(|e| e.fields.get("state").map(String::as_str) == Some("error"))
    );
}

#[test]
#[cfg(feature = "tracing")]
fn form_state_recompute_is_traced() {
    let events = with_captured_events(drive_login_field);
    let last = events
        .iter()
        .rfind(|e| e.message == "form state recomputed")
        .expect("recompute events");
    assert_eq!(last.fields.get("is_valid").map(String::as_str), Some("true"));
}

#[test]
#[cfg(not(feature = "tracing"))]
fn silent_without_feature() {
    let events = with_captured_events(drive_login_field);
    assert!(events.is_empty(), "unexpected events: {events:?}");
}

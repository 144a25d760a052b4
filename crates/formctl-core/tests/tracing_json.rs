#![forbid(unsafe_code)]
#![cfg(feature = "tracing-json")]

//! JSON subscriber installation.
//!
//!   cargo test -p formctl-core --features tracing-json --test tracing_json

use formctl_core::logging::init_json;

#[test]
fn init_json_installs_once() {
    assert!(init_json(), "first install takes the global slot");
    assert!(!init_json(), "second install reports an existing subscriber");

    formctl_core::info!(field = "email", "json subscriber active");
    formctl_core::warn!(prop = "inputMode", value = "slider", "rejected discriminant");
    assert!(tracing::dispatcher::has_been_set());
}

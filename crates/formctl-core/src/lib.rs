#![forbid(unsafe_code)]

//! Core: field state vocabulary, configuration errors, and logging.

pub mod error;
pub mod logging;
pub mod mode;
pub mod state;
pub mod value;

pub use error::ConfigError;
pub use mode::{InputMode, ValidationTrigger};
pub use state::{Feedback, FieldState, Validity};
pub use value::{DropdownOption, FieldValue};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, error, info, trace, warn};

#![forbid(unsafe_code)]

//! Form-level aggregation of field snapshots.
//!
//! A [`FormRegistry`] is owned by one form boundary. Controls publish their
//! [`FieldSnapshot`] after every event; the registry keeps one entry per
//! field name in first-registration order and recomputes [`FormState`] after
//! every change to its collection.
//!
//! # Example
//!
//! ```
//! use formctl_core::Validity;
//! use formctl_forms::{FieldOptions, FormRegistry, create_field};
//!
//! let mut form: FormRegistry<String> = FormRegistry::new();
//! let mut email = create_field("email", FieldOptions::new());
//! email.set_validity(Validity::Invalid);
//! form.register(email.snapshot());
//! assert!(!form.form_state().is_valid);
//!
//! email.set_validity(Validity::Valid);
//! form.register(email.snapshot());
//! assert_eq!(form.len(), 1);
//! assert!(form.form_state().can_submit());
//! ```

use std::fmt;

use formctl_core::{FieldValue, debug, trace};
use indexmap::IndexMap;

use crate::snapshot::{FieldSnapshot, FormData};

/// Callback receiving the submission projection.
pub type SubmitHandler<T> = Box<dyn FnMut(&[FormData<T>])>;

/// Derived form-level state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormState {
    /// No field failed, and no field with validations is still unevaluated.
    pub is_valid: bool,
    /// Some field reports focus.
    pub is_focused: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            is_valid: true,
            is_focused: false,
        }
    }
}

impl FormState {
    /// Whether a submit control should be enabled.
    #[must_use]
    pub const fn can_submit(&self) -> bool {
        self.is_valid
    }
}

/// Outcome of [`FormRegistry::register`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// A new name was appended.
    Inserted,
    /// An existing entry was replaced in place.
    Replaced,
    /// The snapshot had an empty name and was not stored.
    Ignored,
}

/// Ordered collection of field snapshots keyed by name.
pub struct FormRegistry<T = FieldValue> {
    fields: IndexMap<String, FieldSnapshot<T>>,
    form_state: FormState,
    on_submit: Option<SubmitHandler<T>>,
}

/// Create an empty form.
#[must_use]
pub fn create_form<T>() -> FormRegistry<T> {
    FormRegistry::new()
}

impl<T> Default for FormRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FormRegistry<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
            form_state: FormState::default(),
            on_submit: None,
        }
    }

    /// Attach the handler invoked by [`submit`](Self::submit).
    #[must_use]
    pub fn on_submit(mut self, handler: impl FnMut(&[FormData<T>]) + 'static) -> Self {
        self.on_submit = Some(Box::new(handler));
        self
    }

    /// Replace the submit handler on a live form.
    pub fn set_on_submit(&mut self, handler: impl FnMut(&[FormData<T>]) + 'static) {
        self.on_submit = Some(Box::new(handler));
    }

    // -- mutation -----------------------------------------------------------

    /// Insert a snapshot, or replace the entry with the same name in place.
    pub fn register(&mut self, snapshot: FieldSnapshot<T>) -> Registration {
        if snapshot.name.is_empty() {
            return Registration::Ignored;
        }
        let outcome = match self.fields.insert(snapshot.name.clone(), snapshot) {
            Some(_) => Registration::Replaced,
            None => Registration::Inserted,
        };
        debug!(?outcome, fields = self.fields.len(), "field registered");
        self.recompute();
        outcome
    }

    /// Remove the entry for `name`. A missing name is a no-op.
    pub fn unregister(&mut self, name: &str) -> Option<FieldSnapshot<T>> {
        let removed = self.fields.shift_remove(name);
        debug!(name, hit = removed.is_some(), "field unregistered");
        if removed.is_some() {
            self.recompute();
        }
        removed
    }

    /// Drop every entry; the form state returns to its initial value.
    pub fn clear(&mut self) {
        self.fields.clear();
        self.recompute();
    }

    fn recompute(&mut self) {
        let is_valid = !self.fields.values().any(FieldSnapshot::blocks_submit);
        let is_focused = self.fields.values().any(|f| f.is_focused == Some(true));
        self.form_state = FormState {
            is_valid,
            is_focused,
        };
        trace!(is_valid, is_focused, "form state recomputed");
    }

    // -- queries ------------------------------------------------------------

    pub fn form_state(&self) -> FormState {
        self.form_state
    }

    /// Snapshots in registration order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldSnapshot<T>> {
        self.fields.values()
    }

    pub fn get(&self, name: &str) -> Option<&FieldSnapshot<T>> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl<T: Clone> FormRegistry<T> {
    /// Submission projection of every field, in registration order.
    #[must_use]
    pub fn data(&self) -> Vec<FormData<T>> {
        self.fields.values().map(FieldSnapshot::to_data).collect()
    }

    /// Hand the current data to the submit handler.
    ///
    /// Validity is not checked here; gate the call on
    /// [`FormState::can_submit`]. Returns `false` if no handler is attached.
    pub fn submit(&mut self) -> bool {
        let data = self.data();
        debug!(fields = data.len(), "form submitted");
        match self.on_submit.as_mut() {
            Some(handler) => {
                handler(&data);
                true
            }
            None => false,
        }
    }

    /// Hand the current data to a one-off callback.
    pub fn submit_with<R>(&self, f: impl FnOnce(&[FormData<T>]) -> R) -> R {
        let data = self.data();
        debug!(fields = data.len(), "form submitted");
        f(&data)
    }
}

impl<T: fmt::Debug> fmt::Debug for FormRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormRegistry")
            .field("fields", &self.fields)
            .field("form_state", &self.form_state)
            .field("on_submit", &self.on_submit.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

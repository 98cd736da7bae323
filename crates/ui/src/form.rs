//! # Form Container
//!
//! Controlled-field state shared by the dialogs: the current data, the
//! errors to show per field, and submit dispatch.
//!
//! Components keep a `FormState` in a signal, route every input change
//! through [`FormState::change`], and call [`FormState::submit`] from their
//! confirm handler to get the data to hand to `on_submit`.

use shopdash_core::UserError;
use std::collections::HashMap;

// ============================================================================
// Form Data
// ============================================================================

/// Data a form edits, addressable by field name
pub trait FormData: Clone + PartialEq {
    /// Current text of a field
    fn get(&self, field: &str) -> Option<&str>;

    /// Set a field; returns false for fields this data does not have
    fn set(&mut self, field: &str, value: String) -> bool;
}

// ============================================================================
// Form Errors
// ============================================================================

/// Errors keyed by field, as displayed by a form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    fields: HashMap<String, String>,
    general: Vec<String>,
}

impl FormErrors {
    /// Collect errors, keeping the first message for each field
    pub fn from_user_errors(errors: &[UserError]) -> Self {
        let mut form_errors = Self::default();
        for error in errors {
            match &error.field {
                Some(field) => {
                    form_errors
                        .fields
                        .entry(field.clone())
                        .or_insert_with(|| error.message.clone());
                }
                None => form_errors.general.push(error.message.clone()),
            }
        }
        form_errors
    }

    /// Message for a field
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Errors not tied to a field
    pub fn general(&self) -> &[String] {
        &self.general
    }

    /// True when there is nothing to show
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.general.is_empty()
    }
}

// ============================================================================
// Form State
// ============================================================================

/// State of one mounted form
#[derive(Debug, Clone, PartialEq)]
pub struct FormState<T: FormData> {
    initial: T,
    data: T,
    errors: FormErrors,
    dirty: bool,
}

impl<T: FormData> FormState<T> {
    /// Start from initial data and the errors to display
    pub fn new(initial: T, errors: &[UserError]) -> Self {
        Self {
            data: initial.clone(),
            initial,
            errors: FormErrors::from_user_errors(errors),
            dirty: false,
        }
    }

    /// Current data
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Apply an input change. Never submits.
    pub fn change(&mut self, field: &str, value: impl Into<String>) -> bool {
        let changed = self.data.set(field, value.into());
        if changed {
            self.dirty = self.data != self.initial;
        } else {
            tracing::debug!(field, "change for unknown form field ignored");
        }
        changed
    }

    /// Data to hand to the submit callback
    pub fn submit(&self) -> T {
        self.data.clone()
    }

    /// Whether the data differs from the initial data
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Restore the initial data
    pub fn reset(&mut self) {
        self.data = self.initial.clone();
        self.dirty = false;
    }

    /// Replace the displayed errors
    pub fn set_errors(&mut self, errors: &[UserError]) {
        self.errors = FormErrors::from_user_errors(errors);
    }

    /// All displayed errors
    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Error to show for a field
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Default)]
    struct LoginForm {
        email: String,
        password: String,
    }

    impl FormData for LoginForm {
        fn get(&self, field: &str) -> Option<&str> {
            match field {
                "email" => Some(&self.email),
                "password" => Some(&self.password),
                _ => None,
            }
        }

        fn set(&mut self, field: &str, value: String) -> bool {
            match field {
                "email" => self.email = value,
                "password" => self.password = value,
                _ => return false,
            }
            true
        }
    }

    #[test]
    fn test_form_errors_keep_first_per_field() {
        let errors = FormErrors::from_user_errors(&[
            UserError::field("email", "Required"),
            UserError::field("email", "Invalid"),
            UserError::non_field("Locked out"),
        ]);

        assert_eq!(errors.get("email"), Some("Required"));
        assert_eq!(errors.get("password"), None);
        assert_eq!(errors.general(), &["Locked out".to_string()]);
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_change_updates_data_and_dirty() {
        let mut form = FormState::new(LoginForm::default(), &[]);
        assert!(!form.is_dirty());

        assert!(form.change("email", "a@b.c"));
        assert_eq!(form.data().get("email"), Some("a@b.c"));
        assert!(form.is_dirty());

        // Back to the initial value is clean again
        assert!(form.change("email", ""));
        assert!(!form.is_dirty());
    }

    #[test]
    fn test_unknown_field_is_ignored() {
        let mut form = FormState::new(LoginForm::default(), &[]);
        assert!(!form.change("username", "bob"));
        assert_eq!(form.data(), &LoginForm::default());
    }

    #[test]
    fn test_submit_returns_current_data() {
        let mut form = FormState::new(LoginForm::default(), &[]);
        form.change("password", "hunter2");

        let submitted = form.submit();
        assert_eq!(submitted.password, "hunter2");
        assert_eq!(form.data(), &submitted);
    }

    #[test]
    fn test_reset_restores_initial() {
        let initial = LoginForm {
            email: "x@y.z".to_string(),
            password: String::new(),
        };
        let mut form = FormState::new(initial.clone(), &[]);
        form.change("email", "other@y.z");
        form.reset();

        assert_eq!(form.data(), &initial);
        assert!(!form.is_dirty());
    }

    #[test]
    fn test_set_errors_replaces() {
        let mut form = FormState::new(
            LoginForm::default(),
            &[UserError::field("email", "Required")],
        );
        assert_eq!(form.error("email"), Some("Required"));

        form.set_errors(&[]);
        assert_eq!(form.error("email"), None);
        assert!(form.errors().is_empty());
    }
}

//! Core types used throughout Shopdash
//!
//! Identifiers, the `UserError` shape mutations report validation problems
//! with, the mutation result envelope, and the transition state a confirm
//! button is driven by.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Unique Identifiers
// ============================================================================

/// Type alias for attribute unique identifiers
pub type AttributeId = uuid::Uuid;

/// Type alias for attribute value unique identifiers
pub type AttributeValueId = uuid::Uuid;

// ============================================================================
// User Errors
// ============================================================================

/// A validation problem reported by a mutation.
///
/// `field` names the input the message belongs to. `None` means the error
/// concerns the request as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserError {
    pub field: Option<String>,
    pub message: String,
}

impl UserError {
    /// Create an error attached to a field
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Create an error that is not attached to any field
    pub fn non_field(message: impl Into<String>) -> Self {
        Self {
            field: None,
            message: message.into(),
        }
    }
}

impl fmt::Display for UserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{}: {}", field, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

// ============================================================================
// Mutation Result
// ============================================================================

/// Result envelope returned by store mutations.
///
/// A mutation either produces `data` with no errors, or produces errors and
/// leaves the store untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationResult<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<UserError>,
}

impl<T> MutationResult<T> {
    /// Successful mutation
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            errors: Vec::new(),
        }
    }

    /// Mutation rejected with user errors
    pub fn rejected(errors: Vec<UserError>) -> Self {
        Self { data: None, errors }
    }

    /// True when the mutation produced no errors
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

// ============================================================================
// Confirm Button Transition State
// ============================================================================

/// Visual phase of a confirm button, owned by whoever runs the action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfirmButtonTransitionState {
    /// Idle, ready to be clicked
    #[default]
    Default,
    /// Action in flight
    Loading,
    /// Action succeeded
    Success,
    /// Action failed
    Error,
}

impl ConfirmButtonTransitionState {
    /// The button must not accept clicks in this state
    pub fn is_busy(&self) -> bool {
        matches!(self, ConfirmButtonTransitionState::Loading)
    }

    /// The action has finished, successfully or not
    pub fn is_completed(&self) -> bool {
        matches!(
            self,
            ConfirmButtonTransitionState::Success | ConfirmButtonTransitionState::Error
        )
    }
}

impl fmt::Display for ConfirmButtonTransitionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConfirmButtonTransitionState::Default => "default",
            ConfirmButtonTransitionState::Loading => "loading",
            ConfirmButtonTransitionState::Success => "success",
            ConfirmButtonTransitionState::Error => "error",
        };
        write!(f, "{}", name)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_user_error_constructors() {
        let err = UserError::field("name", "Required");
        assert_eq!(err.field.as_deref(), Some("name"));
        assert_eq!(err.to_string(), "name: Required");

        let err = UserError::non_field("Something went wrong");
        assert_eq!(err.field, None);
        assert_eq!(err.to_string(), "Something went wrong");
    }

    #[test]
    fn test_user_error_serde() {
        let json = r#"{"field":"name","message":"Required"}"#;
        let err: UserError = serde_json::from_str(json).unwrap();
        assert_eq!(err, UserError::field("name", "Required"));

        let json = r#"{"field":null,"message":"Nope"}"#;
        let err: UserError = serde_json::from_str(json).unwrap();
        assert_eq!(err.field, None);
    }

    #[test]
    fn test_mutation_result() {
        let ok = MutationResult::ok(5);
        assert!(ok.is_ok());
        assert_eq!(ok.data, Some(5));

        let rejected: MutationResult<i32> =
            MutationResult::rejected(vec![UserError::field("name", "Required")]);
        assert!(!rejected.is_ok());
        assert_eq!(rejected.data, None);
    }

    #[test]
    fn test_transition_state_flags() {
        use ConfirmButtonTransitionState::*;

        assert_eq!(ConfirmButtonTransitionState::default(), Default);
        assert!(Loading.is_busy());
        assert!(!Default.is_busy());
        assert!(Success.is_completed());
        assert!(Error.is_completed());
        assert!(!Loading.is_completed());
    }

    #[test]
    fn test_transition_state_serde_names() {
        let json = serde_json::to_string(&ConfirmButtonTransitionState::Loading).unwrap();
        assert_eq!(json, "\"loading\"");
        assert_eq!(ConfirmButtonTransitionState::Success.to_string(), "success");
    }
}

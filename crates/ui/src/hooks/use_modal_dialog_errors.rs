//! # Modal Dialog Errors Hook
//!
//! A dialog's `errors` prop usually outlives the dialog: the parent keeps the
//! errors of its last mutation around after the dialog closes. This hook
//! makes sure those errors are shown only during the open cycle that
//! produced them.
//!
//! - Errors are adopted the first time they are seen and whenever they change
//! - Closing the dialog clears them
//! - Reopening with the same, stale errors keeps the list empty

use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

// ============================================================================
// Tracker
// ============================================================================

/// Tracks which errors a modal dialog should currently display
#[derive(Debug, Clone, PartialEq)]
pub struct ModalDialogErrors<E> {
    /// Last errors prop seen
    source: Option<Vec<E>>,
    /// Errors to display
    current: Vec<E>,
    /// Whether the dialog was open on the previous sync
    was_open: bool,
}

impl<E> Default for ModalDialogErrors<E> {
    fn default() -> Self {
        Self {
            source: None,
            current: Vec::new(),
            was_open: false,
        }
    }
}

impl<E: Clone + PartialEq> ModalDialogErrors<E> {
    /// Create a tracker that has seen nothing yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current props and get the errors to display
    pub fn sync(&mut self, errors: &[E], open: bool) -> Vec<E> {
        let changed = self.source.as_deref() != Some(errors);
        if changed {
            self.source = Some(errors.to_vec());
            self.current = errors.to_vec();
        }

        if self.was_open && !open {
            self.current.clear();
        }
        self.was_open = open;

        if open {
            self.current.clone()
        } else {
            Vec::new()
        }
    }
}

// ============================================================================
// Hook
// ============================================================================

/// Errors a modal dialog should display for the given props.
///
/// Call unconditionally from a component that stays mounted while the dialog
/// is closed, so the tracker sees every open/close transition.
pub fn use_modal_dialog_errors<E>(errors: &[E], open: bool) -> Vec<E>
where
    E: Clone + PartialEq + 'static,
{
    let tracker = use_hook(|| Rc::new(RefCell::new(ModalDialogErrors::<E>::new())));
    tracker.borrow_mut().sync(errors, open)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use shopdash_core::UserError;

    fn required() -> Vec<UserError> {
        vec![UserError::field("name", "Required")]
    }

    #[test]
    fn test_errors_shown_while_open() {
        let mut tracker = ModalDialogErrors::new();
        assert_eq!(tracker.sync(&required(), true), required());
        assert_eq!(tracker.sync(&required(), true), required());
    }

    #[test]
    fn test_errors_hidden_while_closed() {
        let mut tracker = ModalDialogErrors::new();
        assert!(tracker.sync(&required(), false).is_empty());
    }

    #[test]
    fn test_close_clears_and_reopen_stays_clear() {
        let mut tracker = ModalDialogErrors::new();
        tracker.sync(&[], true);
        assert_eq!(tracker.sync(&required(), true), required());

        // Close, parent still holds the old errors
        assert!(tracker.sync(&required(), false).is_empty());

        // Reopen: stale errors are not shown again
        assert!(tracker.sync(&required(), true).is_empty());
    }

    #[test]
    fn test_new_errors_after_reopen_are_shown() {
        let mut tracker = ModalDialogErrors::new();
        tracker.sync(&required(), true);
        tracker.sync(&required(), false);
        assert!(tracker.sync(&required(), true).is_empty());

        let taken = vec![UserError::field("name", "Value with slug 'red' already exists.")];
        assert_eq!(tracker.sync(&taken, true), taken);
    }

    #[test]
    fn test_cleared_prop_clears_display() {
        let mut tracker = ModalDialogErrors::new();
        tracker.sync(&required(), true);
        assert!(tracker.sync(&[], true).is_empty());
    }

    #[test]
    fn test_first_sight_while_closed_then_open() {
        // Errors present before the dialog ever opened belong to the first cycle
        let mut tracker = ModalDialogErrors::new();
        tracker.sync(&required(), false);
        assert_eq!(tracker.sync(&required(), true), required());
    }
}

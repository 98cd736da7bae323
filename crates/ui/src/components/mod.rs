//! # UI Components
//!
//! Reusable Dioxus components for the Shopdash dashboard.
//!
//! - **Inputs**: text field and button primitives
//! - **Modal**: overlay shell for dialogs
//! - **ConfirmButton**: submit button following an action's transition state
//! - **Dialogs**: attribute value create/edit and delete dialogs
//!
//! ## Component Hierarchy
//!
//! ```text
//! AttributeValueEditDialog
//! └── ModalDialog
//!     └── AttributeValueEditForm
//!         ├── TextInput
//!         ├── Button (cancel)
//!         └── ConfirmButton
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod confirm_button;
pub mod dialogs;
pub mod inputs;
pub mod modal;

// ============================================================================
// Re-exports
// ============================================================================

pub use confirm_button::{ConfirmButton, ConfirmButtonPhase, ConfirmButtonSettings, ConfirmHold};
pub use dialogs::{AttributeValueDeleteDialog, AttributeValueEditDialog};
pub use inputs::{Button, ButtonVariant, TextInput};
pub use modal::{DialogWidth, ModalDialog};

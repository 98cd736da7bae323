//! # UI Hooks
//!
//! Custom Dioxus hooks for the Shopdash UI.
//!
//! - Modal dialog errors (show API errors only for the open cycle they belong to)

// ============================================================================
// Module Declarations
// ============================================================================

pub mod use_modal_dialog_errors;

// ============================================================================
// Re-exports
// ============================================================================

pub use use_modal_dialog_errors::{ModalDialogErrors, use_modal_dialog_errors};

//! # Dialog Components
//!
//! Modal dialogs of the attribute screens.
//!
//! ## Dialogs
//!
//! - **AttributeValueEditDialog**: Create a value or rename an existing one
//! - **AttributeValueDeleteDialog**: Confirm removal of a value
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shopdash_ui::components::dialogs::AttributeValueEditDialog;
//!
//! fn MyComponent() -> Element {
//!     rsx! {
//!         AttributeValueEditDialog {
//!             attribute_value: None,
//!             confirm_button_state: ConfirmButtonTransitionState::Default,
//!             open: true,
//!             on_submit: move |data| tracing::info!("{:?}", data),
//!             on_close: move |_| {},
//!         }
//!     }
//! }
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod attribute_value_delete_dialog;
pub mod attribute_value_edit_dialog;

// ============================================================================
// Re-exports
// ============================================================================

pub use attribute_value_delete_dialog::AttributeValueDeleteDialog;
pub use attribute_value_edit_dialog::{
    AttributeValueEditDialog, AttributeValueEditDialogFormData, AttributeValueEditDialogState,
    DialogAction,
};

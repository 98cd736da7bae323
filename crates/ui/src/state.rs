//! Application State Management for Shopdash
//!
//! Centralized state using Dioxus 0.7 Signals: the attribute store, the
//! dashboard configuration, which value dialog is open, the state of its
//! confirm button, the errors of the last mutation, and the status bar.

use dioxus::prelude::*;
use shopdash_core::{
    AttributeId, AttributeStore, AttributeValue, AttributeValueId, AttributeValueInput,
    ConfirmButtonTransitionState, DashError, DashResult, DashboardConfig, MutationResult,
    UserError, save_store,
};

// ============================================================================
// Dialogs
// ============================================================================

/// Value dialog currently open on the attribute page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueDialog {
    /// Add a value to the selected attribute
    Create,
    /// Rename a value
    Edit(AttributeValueId),
    /// Confirm deletion of a value
    Delete(AttributeValueId),
}

impl ValueDialog {
    /// True for the create/edit dialog
    pub fn is_edit_dialog(&self) -> bool {
        matches!(self, ValueDialog::Create | ValueDialog::Edit(_))
    }
}

// ============================================================================
// Mutations
// ============================================================================

/// A store mutation requested from the attribute page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueMutation {
    Create {
        attribute_id: AttributeId,
        input: AttributeValueInput,
    },
    Update {
        value_id: AttributeValueId,
        input: AttributeValueInput,
    },
    Delete {
        value_id: AttributeValueId,
    },
}

impl ValueMutation {
    /// Verb used in status messages
    fn verb(&self) -> &'static str {
        match self {
            ValueMutation::Create { .. } => "Created",
            ValueMutation::Update { .. } => "Updated",
            ValueMutation::Delete { .. } => "Deleted",
        }
    }
}

// ============================================================================
// Status
// ============================================================================

/// Status message for the status bar
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
}

/// Status message severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

// ============================================================================
// App State
// ============================================================================

/// Root application state
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Attribute catalogue
    pub store: AttributeStore,
    /// Dashboard configuration
    pub config: DashboardConfig,
    /// Attribute shown on the page
    pub selected_attribute: Option<AttributeId>,
    /// Open value dialog, if any
    pub value_dialog: Option<ValueDialog>,
    /// Open cycle of the value dialog, bumped on every open and close.
    /// Mutation outcomes only touch the dialog of the cycle they started in.
    pub dialog_cycle: u64,
    /// Confirm button state of the open dialog
    pub confirm_state: ConfirmButtonTransitionState,
    /// Errors returned by the last mutation
    pub errors: Vec<UserError>,
    /// Status bar message
    pub status_message: Option<StatusMessage>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AttributeStore::sample(), DashboardConfig::default())
    }
}

impl AppState {
    /// Create state over a store, selecting its first attribute
    pub fn new(store: AttributeStore, config: DashboardConfig) -> Self {
        let selected_attribute = store.attributes().first().map(|a| a.id);
        Self {
            store,
            config,
            selected_attribute,
            value_dialog: None,
            dialog_cycle: 0,
            confirm_state: ConfirmButtonTransitionState::Default,
            errors: Vec::new(),
            status_message: None,
        }
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Show another attribute; closes any open dialog
    pub fn select_attribute(&mut self, id: AttributeId) {
        if self.store.attribute(id).is_some() {
            self.selected_attribute = Some(id);
            self.close_value_dialog();
        }
    }

    /// Values of the selected attribute
    pub fn selected_values(&self) -> &[AttributeValue] {
        self.selected_attribute
            .and_then(|id| self.store.attribute(id))
            .map(|a| a.values.as_slice())
            .unwrap_or_default()
    }

    // ========================================================================
    // Dialogs
    // ========================================================================

    /// Open a value dialog. Errors of earlier mutations are left alone; the
    /// dialog decides what to show.
    pub fn open_value_dialog(&mut self, dialog: ValueDialog) {
        tracing::debug!(?dialog, "opening value dialog");
        self.value_dialog = Some(dialog);
        self.dialog_cycle = self.dialog_cycle.wrapping_add(1);
        self.confirm_state = ConfirmButtonTransitionState::Default;
    }

    /// Close the value dialog. A mutation still in flight keeps running but
    /// no longer drives any dialog.
    pub fn close_value_dialog(&mut self) {
        self.value_dialog = None;
        self.dialog_cycle = self.dialog_cycle.wrapping_add(1);
        if self.confirm_state.is_busy() {
            self.confirm_state = ConfirmButtonTransitionState::Default;
        }
    }

    /// Value the open dialog is about, if any
    pub fn dialog_value(&self) -> Option<&AttributeValue> {
        match self.value_dialog? {
            ValueDialog::Edit(id) | ValueDialog::Delete(id) => self.store.value(id),
            ValueDialog::Create => None,
        }
    }

    /// Whether a mutation is in flight
    pub fn is_busy(&self) -> bool {
        self.confirm_state.is_busy()
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Build the mutation the open dialog submits
    pub fn value_mutation(&self, name: Option<String>) -> DashResult<ValueMutation> {
        let input = AttributeValueInput::new(name.unwrap_or_default());
        match self.value_dialog {
            Some(ValueDialog::Create) => {
                let attribute_id = self
                    .selected_attribute
                    .ok_or_else(|| DashError::internal("no attribute selected"))?;
                Ok(ValueMutation::Create {
                    attribute_id,
                    input,
                })
            }
            Some(ValueDialog::Edit(value_id)) => Ok(ValueMutation::Update { value_id, input }),
            Some(ValueDialog::Delete(value_id)) => Ok(ValueMutation::Delete { value_id }),
            None => Err(DashError::internal("no value dialog open")),
        }
    }

    /// Mark a mutation as started. Returns the dialog cycle it belongs to.
    pub fn begin_mutation(&mut self) -> u64 {
        self.confirm_state = ConfirmButtonTransitionState::Loading;
        self.errors.clear();
        self.dialog_cycle
    }

    /// Run a mutation against the store and record its outcome
    pub fn commit_value_mutation(&mut self, mutation: ValueMutation, cycle: u64) {
        let result = match mutation.clone() {
            ValueMutation::Create {
                attribute_id,
                input,
            } => self.store.value_create(attribute_id, input),
            ValueMutation::Update { value_id, input } => self.store.value_update(value_id, input),
            ValueMutation::Delete { value_id } => self.store.value_delete(value_id),
        };
        self.apply_mutation_result(&mutation, cycle, result);
    }

    /// Record the outcome of a mutation started in dialog cycle `cycle`.
    ///
    /// The store change and status message always apply. Confirm state,
    /// errors and closing only apply while that cycle is still open.
    pub fn apply_mutation_result(
        &mut self,
        mutation: &ValueMutation,
        cycle: u64,
        result: DashResult<MutationResult<AttributeValue>>,
    ) {
        let current = cycle == self.dialog_cycle && self.value_dialog.is_some();

        match result {
            Ok(result) if result.is_ok() => {
                if current {
                    self.close_value_dialog();
                    self.confirm_state = ConfirmButtonTransitionState::Success;
                    self.errors.clear();
                }

                let name = result.data.map(|v| v.name).unwrap_or_default();
                self.set_status(
                    format!("{} value '{}'", mutation.verb(), name),
                    StatusLevel::Success,
                );
                self.persist();
            }
            Ok(_) if !current => {
                tracing::debug!(?mutation, "dropping errors of a closed dialog");
                self.set_status("Cancelled change was not saved", StatusLevel::Info);
            }
            Ok(result) => {
                self.confirm_state = ConfirmButtonTransitionState::Error;
                if let Some(general) = result.errors.iter().find(|e| e.field.is_none()) {
                    self.set_status(general.message.clone(), StatusLevel::Error);
                }
                self.errors = result.errors;
            }
            Err(err) => {
                tracing::error!(error = %err, ?mutation, "value mutation failed");
                if current {
                    self.confirm_state = ConfirmButtonTransitionState::Error;
                }
                // The value was removed underneath the dialog
                let level = if err.is_not_found() {
                    StatusLevel::Warning
                } else {
                    StatusLevel::Error
                };
                self.set_status(err.to_string(), level);
            }
        }
    }

    /// Save the store when a data path is configured
    fn persist(&mut self) {
        let Some(path) = self.config.data_path.clone() else {
            return;
        };
        if let Err(err) = save_store(&self.store, &path) {
            tracing::error!(error = %err, "failed to persist store");
            self.set_status(format!("Could not save changes: {}", err), StatusLevel::Error);
        }
    }

    // ========================================================================
    // Status
    // ========================================================================

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>, level: StatusLevel) {
        self.status_message = Some(StatusMessage {
            text: message.into(),
            level,
        });
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

// ============================================================================
// Global State
// ============================================================================

/// Global application state signal
pub static APP_STATE: GlobalSignal<AppState> = Signal::global(AppState::default);

/// Install the loaded store and configuration
/// Call this once at app startup, from inside the app root
pub fn init_app_state(store: AttributeStore, config: DashboardConfig) {
    *APP_STATE.write() = AppState::new(store, config);
}

// ============================================================================
// Tests
// ============================================================================

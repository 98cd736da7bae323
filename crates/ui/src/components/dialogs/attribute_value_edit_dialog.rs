//! # Attribute Value Edit Dialog
//!
//! Modal for creating a new attribute value or renaming an existing one.
//!
//! The dialog owns no persistence. It seeds a one-field form from the value
//! being edited, shows the errors the caller passes in next to the field,
//! and reports the outcome through `on_submit` / `on_close`. The caller runs
//! the mutation and drives `confirm_button_state`.
//!

use dioxus::prelude::*;
use shopdash_core::{AttributeValue, ConfirmButtonTransitionState, NAME_FIELD, UserError};

use crate::components::confirm_button::ConfirmButton;
use crate::components::inputs::{Button, TextInput};
use crate::components::modal::{DialogWidth, ModalDialog};
use crate::form::{FormData, FormState};
use crate::hooks::use_modal_dialog_errors;
use crate::intl::{Message, attributes, common, t};

// ============================================================================
// Types
// ============================================================================

/// Data submitted by the dialog
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AttributeValueEditDialogFormData {
    pub name: String,
}

impl FormData for AttributeValueEditDialogFormData {
    fn get(&self, field: &str) -> Option<&str> {
        (field == NAME_FIELD).then_some(self.name.as_str())
    }

    fn set(&mut self, field: &str, value: String) -> bool {
        if field != NAME_FIELD {
            return false;
        }
        self.name = value;
        true
    }
}

/// What the owner of the dialog should be told
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogAction {
    Submit(AttributeValueEditDialogFormData),
    Close,
}

/// Title for the mode the dialog is in
pub fn dialog_title(attribute_value: Option<&AttributeValue>) -> Message {
    match attribute_value {
        None => attributes::VALUE_DIALOG_TITLE_NEW,
        Some(_) => attributes::VALUE_DIALOG_TITLE_EDIT,
    }
}

/// Form data the dialog opens with
pub fn initial_form(attribute_value: Option<&AttributeValue>) -> AttributeValueEditDialogFormData {
    AttributeValueEditDialogFormData {
        name: attribute_value.map(|v| v.name.clone()).unwrap_or_default(),
    }
}

/// State of one open cycle of the dialog
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeValueEditDialogState {
    form: FormState<AttributeValueEditDialogFormData>,
}

impl AttributeValueEditDialogState {
    /// Seed the form for a freshly opened dialog
    pub fn open(attribute_value: Option<&AttributeValue>, errors: &[UserError]) -> Self {
        Self {
            form: FormState::new(initial_form(attribute_value), errors),
        }
    }

    /// Text typed into the name field. Rejected while disabled.
    pub fn input(&mut self, value: String, disabled: bool) -> bool {
        if disabled {
            return false;
        }
        self.form.change(NAME_FIELD, value)
    }

    /// Confirm pressed
    pub fn confirm(&self) -> DialogAction {
        DialogAction::Submit(self.form.submit())
    }

    /// Cancel pressed or dialog dismissed
    pub fn cancel(&self) -> DialogAction {
        DialogAction::Close
    }

    /// Replace the errors shown next to the field
    pub fn set_errors(&mut self, errors: &[UserError]) {
        self.form.set_errors(errors);
    }

    /// Current field text
    pub fn name(&self) -> &str {
        &self.form.data().name
    }

    /// Helper text for the field
    pub fn name_error(&self) -> Option<&str> {
        self.form.error(NAME_FIELD)
    }
}

// ============================================================================
// Component Props
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct AttributeValueEditDialogProps {
    /// Value being edited; `None` creates a new one
    pub attribute_value: Option<AttributeValue>,

    /// State of the confirm button, driven by the caller
    pub confirm_button_state: ConfirmButtonTransitionState,

    /// Disable the input
    #[props(default = false)]
    pub disabled: bool,

    /// Errors returned by the last mutation
    #[props(default)]
    pub errors: Vec<UserError>,

    /// Whether the dialog is shown
    pub open: bool,

    /// Called with the form data on confirm
    #[props(default)]
    pub on_submit: EventHandler<AttributeValueEditDialogFormData>,

    /// Called on cancel or dismiss
    #[props(default)]
    pub on_close: EventHandler<()>,
}

// ============================================================================
// Main Component
// ============================================================================

/// Create/edit dialog for an attribute value
#[component]
pub fn AttributeValueEditDialog(props: AttributeValueEditDialogProps) -> Element {
    // Stays mounted while closed so the hook sees open/close transitions
    let errors = use_modal_dialog_errors(&props.errors, props.open);
    let title = t(&dialog_title(props.attribute_value.as_ref()));

    rsx! {
        ModalDialog {
            open: props.open,
            title: title,
            max_width: DialogWidth::Sm,
            on_close: props.on_close,

            // Mounted per open, so the form is seeded once per open cycle
            AttributeValueEditForm {
                attribute_value: props.attribute_value.clone(),
                confirm_button_state: props.confirm_button_state,
                disabled: props.disabled,
                errors: errors,
                on_submit: props.on_submit,
                on_close: props.on_close,
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct AttributeValueEditFormProps {
    attribute_value: Option<AttributeValue>,
    confirm_button_state: ConfirmButtonTransitionState,
    disabled: bool,
    errors: Vec<UserError>,
    on_submit: EventHandler<AttributeValueEditDialogFormData>,
    on_close: EventHandler<()>,
}

#[component]
fn AttributeValueEditForm(props: AttributeValueEditFormProps) -> Element {
    let mut state = use_signal(|| {
        AttributeValueEditDialogState::open(props.attribute_value.as_ref(), &props.errors)
    });

    let errors = props.errors.clone();
    use_effect(use_reactive!(|(errors,)| {
        state.write().set_errors(&errors);
    }));

    let disabled = props.disabled;
    let on_submit = props.on_submit;
    let on_close = props.on_close;

    let dispatch = move |action: DialogAction| match action {
        DialogAction::Submit(data) => {
            tracing::debug!(name = %data.name, "attribute value dialog submitted");
            on_submit.call(data);
        }
        DialogAction::Close => {
            tracing::debug!("attribute value dialog closed");
            on_close.call(());
        }
    };

    let on_name_change = move |value: String| {
        state.write().input(value, disabled);
    };

    let current = state.read();
    let name = current.name().to_string();
    let name_error = current.name_error().map(str::to_string);
    drop(current);

    let label = t(&attributes::VALUE_DIALOG_NAME_FIELD);
    let cancel_label = t(&common::CANCEL);
    let save_label = t(&common::SAVE);

    rsx! {
        form {
            onsubmit: move |e| {
                e.prevent_default();
                let action = state.read().confirm();
                dispatch(action);
            },

            div {
                class: "px-6 py-4",
                TextInput {
                    value: name,
                    name: NAME_FIELD.to_string(),
                    label: label,
                    error: name_error,
                    disabled: disabled,
                    autofocus: true,
                    full_width: true,
                    on_change: on_name_change,
                }
            }

            div {
                class: "flex justify-end gap-3 px-6 pb-6",

                Button {
                    on_click: move |_| {
                        let action = state.read().cancel();
                        dispatch(action);
                    },
                    "{cancel_label}"
                }

                ConfirmButton {
                    transition_state: props.confirm_button_state,
                    on_click: move |_| {
                        let action = state.read().confirm();
                        dispatch(action);
                    },
                    "{save_label}"
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::ModalDialogErrors;
    use crate::intl::Catalog;

    fn red() -> AttributeValue {
        AttributeValue::new("Red")
    }

    #[test]
    fn test_title_depends_on_mode() {
        let catalog = Catalog::empty("en");
        assert_eq!(catalog.format(&dialog_title(None)), "Add Value");
        assert_eq!(catalog.format(&dialog_title(Some(&red()))), "Edit Value");
    }

    #[test]
    fn test_initial_form() {
        assert_eq!(initial_form(None).name, "");
        assert_eq!(initial_form(Some(&red())).name, "Red");
    }

    /// User interactions, replayed against the dialog state the way the
    /// component's handlers apply them
    enum Event {
        Type(&'static str),
        Confirm,
        Cancel,
    }

    fn replay(
        state: &mut AttributeValueEditDialogState,
        disabled: bool,
        events: &[Event],
    ) -> Vec<DialogAction> {
        let mut actions = Vec::new();
        for event in events {
            match event {
                Event::Type(text) => {
                    state.input(text.to_string(), disabled);
                }
                Event::Confirm => actions.push(state.confirm()),
                Event::Cancel => actions.push(state.cancel()),
            }
        }
        actions
    }

    #[test]
    fn test_typing_updates_without_submitting() {
        let mut state = AttributeValueEditDialogState::open(None, &[]);

        let actions = replay(&mut state, false, &[Event::Type("Bl"), Event::Type("Blue")]);

        assert_eq!(state.name(), "Blue");
        assert!(actions.is_empty());
    }

    #[test]
    fn test_confirm_submits_once_with_current_text() {
        let value = red();
        let mut state = AttributeValueEditDialogState::open(Some(&value), &[]);

        let actions = replay(
            &mut state,
            false,
            &[Event::Type("Crimson"), Event::Confirm],
        );

        assert_eq!(
            actions,
            vec![DialogAction::Submit(AttributeValueEditDialogFormData {
                name: "Crimson".to_string()
            })]
        );
    }

    #[test]
    fn test_cancel_closes_once_without_submitting() {
        let mut state = AttributeValueEditDialogState::open(Some(&red()), &[]);

        let actions = replay(&mut state, false, &[Event::Type("Changed"), Event::Cancel]);

        assert_eq!(actions, vec![DialogAction::Close]);
    }

    #[test]
    fn test_disabled_rejects_input() {
        let mut state = AttributeValueEditDialogState::open(Some(&red()), &[]);

        assert!(!state.input("Crimson".to_string(), true));
        assert_eq!(state.name(), "Red");
    }

    #[test]
    fn test_errors_shown_only_while_open() {
        let errors = vec![UserError::field("name", "Required")];
        let mut tracker = ModalDialogErrors::new();

        let shown = tracker.sync(&errors, true);
        let state = AttributeValueEditDialogState::open(None, &shown);
        assert_eq!(state.name_error(), Some("Required"));

        let shown = tracker.sync(&errors, false);
        let state = AttributeValueEditDialogState::open(None, &shown);
        assert_eq!(state.name_error(), None);
    }

    #[test]
    fn test_errors_for_other_fields_are_unused() {
        let state = AttributeValueEditDialogState::open(
            None,
            &[
                UserError::field("slug", "Taken"),
                UserError::non_field("Server unavailable"),
            ],
        );
        assert_eq!(state.name_error(), None);
    }

    #[test]
    fn test_first_name_error_wins() {
        let mut state = AttributeValueEditDialogState::open(None, &[]);
        state.set_errors(&[
            UserError::field("name", "This field is required."),
            UserError::field("name", "Too long"),
        ]);
        assert_eq!(state.name_error(), Some("This field is required."));
    }

    #[test]
    fn test_form_data_field_access() {
        let mut data = AttributeValueEditDialogFormData::default();
        assert!(data.set("name", "Red".to_string()));
        assert!(!data.set("slug", "red".to_string()));
        assert_eq!(data.get("name"), Some("Red"));
        assert_eq!(data.get("slug"), None);
    }
}

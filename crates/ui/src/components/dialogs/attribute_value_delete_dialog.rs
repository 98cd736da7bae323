//! # Attribute Value Delete Dialog
//!
//! Asks for confirmation before an attribute value is removed. Like the edit
//! dialog it only reports the decision; the caller performs the deletion and
//! drives the confirm button.

use dioxus::prelude::*;
use shopdash_core::ConfirmButtonTransitionState;

use crate::components::confirm_button::ConfirmButton;
use crate::components::inputs::{Button, ButtonVariant};
use crate::components::modal::{DialogWidth, ModalDialog};
use crate::intl::{attributes, common, t, t_with};

#[derive(Props, Clone, PartialEq)]
pub struct AttributeValueDeleteDialogProps {
    /// Name of the value about to be deleted
    pub name: String,

    /// State of the confirm button, driven by the caller
    pub confirm_button_state: ConfirmButtonTransitionState,

    /// Whether the dialog is shown
    pub open: bool,

    /// Called when deletion is confirmed
    #[props(default)]
    pub on_confirm: EventHandler<()>,

    /// Called on cancel or dismiss
    #[props(default)]
    pub on_close: EventHandler<()>,
}

/// Confirmation dialog for deleting an attribute value
#[component]
pub fn AttributeValueDeleteDialog(props: AttributeValueDeleteDialogProps) -> Element {
    let title = t(&attributes::VALUE_DELETE_DIALOG_TITLE);
    let content = t_with(
        &attributes::VALUE_DELETE_DIALOG_CONTENT,
        &[("name", props.name.as_str())],
    );
    let cancel_label = t(&common::CANCEL);
    let delete_label = t(&common::DELETE);

    rsx! {
        ModalDialog {
            open: props.open,
            title: title,
            max_width: DialogWidth::Xs,
            on_close: props.on_close,

            p {
                class: "px-6 py-4 text-slate-300",
                "{content}"
            }

            div {
                class: "flex justify-end gap-3 px-6 pb-6",

                Button {
                    on_click: move |_| props.on_close.call(()),
                    "{cancel_label}"
                }

                ConfirmButton {
                    transition_state: props.confirm_button_state,
                    variant: ButtonVariant::Danger,
                    on_click: move |_| props.on_confirm.call(()),
                    "{delete_label}"
                }
            }
        }
    }
}

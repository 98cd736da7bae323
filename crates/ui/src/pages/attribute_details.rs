//! # Attribute Details Page
//!
//! Lists the values of the selected attribute and owns the value dialogs:
//!
//! - "Add value" opens the edit dialog in create mode
//! - each row opens the edit dialog for that value, or the delete dialog
//!
//! The dialogs only report what the user decided. This page runs the store
//! mutation after the configured latency and feeds the outcome back through
//! the confirm button state and the error list.

use dioxus::prelude::*;
use shopdash_core::{AttributeId, AttributeValue, DashResult};
use std::time::Duration;

use crate::components::dialogs::{
    AttributeValueDeleteDialog, AttributeValueEditDialog, AttributeValueEditDialogFormData,
};
use crate::components::inputs::{Button, ButtonVariant};
use crate::intl::{attributes, t};
use crate::state::{APP_STATE, StatusLevel, ValueDialog, ValueMutation};

// ============================================================================
// Mutation runner
// ============================================================================

/// Wait for the simulated round trip, then run `mutation`
pub async fn run_after_latency<T>(latency_ms: u64, mutation: impl FnOnce() -> T) -> T {
    if latency_ms > 0 {
        tokio::time::sleep(Duration::from_millis(latency_ms)).await;
    }
    mutation()
}

/// Start the mutation for the open dialog.
///
/// Ignored while another mutation is in flight.
fn submit_value_mutation(name: Option<String>) {
    let prepared: DashResult<(ValueMutation, u64)> = {
        let state = APP_STATE.read();
        if state.is_busy() {
            return;
        }
        state
            .value_mutation(name)
            .map(|m| (m, state.config.mutation_latency_ms))
    };

    let (mutation, latency_ms) = match prepared {
        Ok(prepared) => prepared,
        Err(err) => {
            tracing::error!(error = %err, "cannot submit value dialog");
            APP_STATE.write().set_status(err.to_string(), StatusLevel::Error);
            return;
        }
    };

    let cycle = APP_STATE.write().begin_mutation();
    spawn(async move {
        run_after_latency(latency_ms, move || {
            APP_STATE.write().commit_value_mutation(mutation, cycle);
        })
        .await;
    });
}

// ============================================================================
// Page Component
// ============================================================================

/// Attribute details page
#[component]
pub fn AttributeDetailsPage() -> Element {
    let state = APP_STATE.read();
    let tabs: Vec<(AttributeId, String)> = state
        .store
        .attributes()
        .iter()
        .map(|a| (a.id, a.name.clone()))
        .collect();
    let selected = state.selected_attribute;
    let values: Vec<AttributeValue> = state.selected_values().to_vec();
    let dialog = state.value_dialog;
    let dialog_value = state.dialog_value().cloned();
    let confirm_state = state.confirm_state;
    let errors = state.errors.clone();
    let busy = state.is_busy();
    drop(state);

    let edit_open = dialog.is_some_and(|d| d.is_edit_dialog());
    let delete_open = matches!(dialog, Some(ValueDialog::Delete(_)));
    let edited_value = match dialog {
        Some(ValueDialog::Edit(_)) => dialog_value.clone(),
        _ => None,
    };
    let delete_name = dialog_value.map(|v| v.name).unwrap_or_default();

    let section_title = t(&attributes::VALUES_SECTION);
    let add_label = t(&attributes::ADD_VALUE);
    let empty_label = t(&attributes::NO_VALUES);

    rsx! {
        div {
            class: "attribute-details flex-1 overflow-auto p-6",

            // Attribute selector
            nav {
                class: "flex gap-2 mb-6",
                for (id, name) in tabs {
                    button {
                        key: "{id}",
                        class: if selected == Some(id) {
                            "px-3 py-1.5 rounded-lg text-sm bg-indigo-600 text-white"
                        } else {
                            "px-3 py-1.5 rounded-lg text-sm bg-slate-800 text-slate-300 hover:bg-slate-700"
                        },
                        onclick: move |_| APP_STATE.write().select_attribute(id),
                        "{name}"
                    }
                }
            }

            section {
                class: "bg-slate-800 rounded-lg border border-slate-700",

                div {
                    class: "flex items-center justify-between px-6 py-4 border-b border-slate-700",
                    h2 { class: "text-lg font-semibold", "{section_title}" }
                    Button {
                        variant: ButtonVariant::Contained,
                        disabled: busy || selected.is_none(),
                        on_click: move |_| APP_STATE.write().open_value_dialog(ValueDialog::Create),
                        "{add_label}"
                    }
                }

                if values.is_empty() {
                    p {
                        class: "px-6 py-8 text-center text-slate-500",
                        "{empty_label}"
                    }
                } else {
                    table {
                        class: "w-full text-sm",
                        tbody {
                            for value in values {
                                ValueRow {
                                    key: "{value.id}",
                                    value: value,
                                    disabled: busy,
                                }
                            }
                        }
                    }
                }
            }

            AttributeValueEditDialog {
                attribute_value: edited_value,
                confirm_button_state: confirm_state,
                disabled: busy,
                errors: errors,
                open: edit_open,
                on_submit: move |data: AttributeValueEditDialogFormData| {
                    submit_value_mutation(Some(data.name));
                },
                on_close: move |_| APP_STATE.write().close_value_dialog(),
            }

            AttributeValueDeleteDialog {
                name: delete_name,
                confirm_button_state: confirm_state,
                open: delete_open,
                on_confirm: move |_| submit_value_mutation(None),
                on_close: move |_| APP_STATE.write().close_value_dialog(),
            }
        }
    }
}

// ============================================================================
// Value Row
// ============================================================================

#[derive(Props, Clone, PartialEq)]
struct ValueRowProps {
    value: AttributeValue,
    disabled: bool,
}

/// One value with its edit/delete actions
#[component]
fn ValueRow(props: ValueRowProps) -> Element {
    let id = props.value.id;
    let position = props.value.sort_order + 1;

    rsx! {
        tr {
            class: "border-b border-slate-700 last:border-0",
            td { class: "px-6 py-3 w-8 text-slate-500", "{position}" }
            td { class: "px-6 py-3 font-medium", "{props.value.name}" }
            td { class: "px-6 py-3 font-mono text-slate-400", "{props.value.slug}" }
            td {
                class: "px-6 py-3 text-right",
                Button {
                    disabled: props.disabled,
                    on_click: move |_| APP_STATE.write().open_value_dialog(ValueDialog::Edit(id)),
                    "✏️"
                }
                Button {
                    variant: ButtonVariant::Danger,
                    disabled: props.disabled,
                    on_click: move |_| APP_STATE.write().open_value_dialog(ValueDialog::Delete(id)),
                    "🗑️"
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
    use crate::state::AppState;
    use shopdash_core::{ConfirmButtonTransitionState, DashboardConfig};

    #[test]
    fn test_runner_without_latency() {
        let result = tokio_test::block_on(run_after_latency(0, || 42));
        assert_eq!(result, 42);
    }

    #[test]
    fn test_runner_waits_before_mutating() {
        let started = std::time::Instant::now();
        let result = tokio_test::block_on(run_after_latency(20, || "done"));
        assert_eq!(result, "done");
        assert!(started.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn test_submit_flow_against_state() {
        let mut state = AppState::new(
            shopdash_core::AttributeStore::sample(),
            DashboardConfig::default(),
        );
        state.open_value_dialog(ValueDialog::Create);
        let mutation = state.value_mutation(Some("Purple".to_string())).unwrap();
        let cycle = state.begin_mutation();
        assert_eq!(state.confirm_state, ConfirmButtonTransitionState::Loading);

        let state = tokio_test::block_on(run_after_latency(1, move || {
            state.commit_value_mutation(mutation, cycle);
            state
        }));

        assert_eq!(state.confirm_state, ConfirmButtonTransitionState::Success);
        assert!(state.value_dialog.is_none());
        assert!(state.selected_values().iter().any(|v| v.name == "Purple"));
    }
}

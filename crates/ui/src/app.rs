//! Main Application Component for Shopdash
//!
//! Root layout: header, attribute page, status bar. Installs the loaded
//! bootstrap on first render and provides app-wide confirm button settings.

use dioxus::prelude::*;

use crate::Bootstrap;
use crate::components::ConfirmButtonSettings;
use crate::pages::AttributeDetailsPage;
use crate::state::{APP_STATE, StatusLevel};

// ============================================================================
// Main App Component
// ============================================================================

/// Root application component
#[component]
pub fn App() -> Element {
    use_hook(|| {
        if let Some(bootstrap) = try_consume_context::<Bootstrap>() {
            bootstrap.install();
        }
    });

    let hold_ms = APP_STATE.peek().config.confirm_hold_ms;
    use_context_provider(|| ConfirmButtonSettings { hold_ms });

    use_effect(|| {
        tracing::info!("Shopdash UI initialized");
    });

    rsx! {
        div {
            class: "app-container h-screen w-screen flex flex-col bg-slate-900 text-slate-100 overflow-hidden",

            Header {}

            AttributeDetailsPage {}

            StatusBar {}
        }
    }
}

// ============================================================================
// Header
// ============================================================================

#[component]
fn Header() -> Element {
    let state = APP_STATE.read();
    let attribute_name = state
        .selected_attribute
        .and_then(|id| state.store.attribute(id))
        .map(|a| a.name.clone())
        .unwrap_or_default();
    drop(state);
    let app_name = crate::NAME;

    rsx! {
        header {
            class: "h-12 bg-slate-800 border-b border-slate-700 flex items-center px-4 gap-2 shrink-0",
            span { class: "font-semibold text-sm", "{app_name}" }
            span { class: "text-slate-500", "/" }
            span { class: "text-sm text-slate-300", "{attribute_name}" }
        }
    }
}

// ============================================================================
// Status Bar
// ============================================================================

/// Last status message and value count
#[component]
fn StatusBar() -> Element {
    let state = APP_STATE.read();
    let status = state.status_message.clone();
    let value_count = state.selected_values().len();
    let persisted = state.config.data_path.is_some();
    drop(state);

    rsx! {
        footer {
            class: "status-bar h-6 bg-slate-800 border-t border-slate-700 flex items-center px-4 text-xs text-slate-400 shrink-0",

            if let Some(msg) = status {
                span {
                    class: match msg.level {
                        StatusLevel::Info => "text-slate-400",
                        StatusLevel::Success => "text-green-400",
                        StatusLevel::Warning => "text-amber-400",
                        StatusLevel::Error => "text-red-400",
                    },
                    "{msg.text}"
                }
                button {
                    class: "ml-2 hover:text-slate-200",
                    onclick: move |_| APP_STATE.write().clear_status(),
                    "×"
                }
            } else {
                span { "Ready" }
            }

            div { class: "flex-1" }

            span { "Values: {value_count}" }
            if !persisted {
                span { class: "ml-4 text-amber-400", "Changes are not saved" }
            }
        }
    }
}

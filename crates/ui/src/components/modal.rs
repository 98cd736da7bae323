//! # Modal Dialog
//!
//! Overlay shell shared by every dialog: backdrop, centred panel, title bar.
//! Clicking the backdrop or pressing Escape asks the owner to close.

use dioxus::prelude::*;

/// Maximum width of the dialog panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogWidth {
    Xs,
    #[default]
    Sm,
}

impl DialogWidth {
    /// Tailwind max-width class
    pub fn class(&self) -> &'static str {
        match self {
            DialogWidth::Xs => "max-w-sm",
            DialogWidth::Sm => "max-w-xl",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ModalDialogProps {
    /// Whether the dialog is shown
    pub open: bool,

    /// Title shown in the header
    pub title: String,

    /// Panel width
    #[props(default)]
    pub max_width: DialogWidth,

    /// Called on backdrop click or Escape
    #[props(default)]
    pub on_close: EventHandler<()>,

    pub children: Element,
}

/// Modal dialog shell. Renders nothing while closed.
#[component]
pub fn ModalDialog(props: ModalDialogProps) -> Element {
    if !props.open {
        return rsx! {};
    }

    let width = props.max_width.class();

    rsx! {
        div {
            class: "fixed inset-0 z-50 flex items-center justify-center",
            role: "presentation",
            onkeydown: move |e| {
                if e.key() == Key::Escape {
                    props.on_close.call(());
                }
            },

            // Backdrop
            div {
                class: "absolute inset-0 bg-black/50",
                onclick: move |_| props.on_close.call(()),
            }

            // Panel
            div {
                class: "relative bg-slate-800 rounded-lg shadow-xl border border-slate-700 mx-4 w-full {width}",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |e| e.stop_propagation(),

                h2 {
                    class: "px-6 pt-6 pb-2 text-xl font-bold",
                    "{props.title}"
                }

                {props.children}
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

    #[test]
    fn test_default_width_is_small() {
        assert_eq!(DialogWidth::default(), DialogWidth::Sm);
        assert_eq!(DialogWidth::default().class(), "max-w-xl");
        assert_eq!(DialogWidth::Xs.class(), "max-w-sm");
    }
}

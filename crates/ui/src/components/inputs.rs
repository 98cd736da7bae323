//! # Input Components
//!
//! Form primitives for the Shopdash UI:
//! - **TextInput**: single-line controlled text field with label and helper text
//! - **Button**: plain action button in a few visual variants
//!
//! Styling is Tailwind utility classes.
//!

use dioxus::prelude::*;

// ============================================================================
// Text Input Component
// ============================================================================

/// Properties for TextInput component
#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    /// Input value
    pub value: String,

    /// Form field name
    #[props(default)]
    pub name: Option<String>,

    /// Label text (optional)
    #[props(default)]
    pub label: Option<String>,

    /// Error message shown below the input
    #[props(default)]
    pub error: Option<String>,

    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Focus the input when mounted
    #[props(default = false)]
    pub autofocus: bool,

    /// Stretch to the container width
    #[props(default = true)]
    pub full_width: bool,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Single-line text input component
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let has_error = props.error.is_some();
    let input_class = build_input_class(has_error, props.disabled, props.full_width);

    rsx! {
        div {
            class: if props.full_width { "input-group w-full" } else { "input-group" },

            // Label
            if let Some(label) = &props.label {
                label {
                    class: if has_error {
                        "block text-sm font-medium text-rose-400 mb-1.5"
                    } else {
                        "block text-sm font-medium text-slate-300 mb-1.5"
                    },
                    "{label}"
                }
            }

            input {
                class: "{input_class}",
                r#type: "text",
                name: props.name.as_deref().unwrap_or(""),
                value: "{props.value}",
                disabled: props.disabled,
                autofocus: props.autofocus,
                oninput: move |e| {
                    if !props.disabled {
                        props.on_change.call(e.value());
                    }
                },
            }

            if let Some(error) = &props.error {
                p {
                    class: "mt-1 text-xs text-rose-400",
                    "{error}"
                }
            }
        }
    }
}

// ============================================================================
// Button Component
// ============================================================================

/// Visual style of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    /// Borderless, low emphasis (e.g. Cancel)
    #[default]
    Text,
    /// Filled primary action
    Contained,
    /// Filled destructive action
    Danger,
}

impl ButtonVariant {
    /// Classes for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Text => "bg-transparent hover:bg-slate-700 text-slate-200",
            ButtonVariant::Contained => {
                "bg-indigo-600 hover:bg-indigo-500 disabled:bg-indigo-600/50 text-white"
            }
            ButtonVariant::Danger => "bg-red-600 hover:bg-red-700 disabled:bg-red-600/50 text-white",
        }
    }
}

/// Properties for Button component
#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    /// Visual style
    #[props(default)]
    pub variant: ButtonVariant,

    /// Whether disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Click handler
    #[props(default)]
    pub on_click: EventHandler<()>,

    /// Button content
    pub children: Element,
}

/// Action button
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let variant_class = props.variant.class();

    rsx! {
        button {
            r#type: "button",
            class: "px-4 py-2 rounded-lg text-sm font-medium transition-colors disabled:cursor-not-allowed {variant_class}",
            disabled: props.disabled,
            onclick: move |_| props.on_click.call(()),
            {props.children}
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Build input class string
fn build_input_class(has_error: bool, disabled: bool, full_width: bool) -> String {
    let mut classes = vec![
        "px-3",
        "py-2",
        "bg-slate-800",
        "border",
        "rounded-lg",
        "text-sm",
        "text-slate-100",
                "transition-colors",
        "focus:outline-none",
        "focus:ring-2",
    ];

    if full_width {
        classes.insert(0, "w-full");
    }

    if has_error {
        classes.push("border-rose-500");
        classes.push("focus:ring-rose-500/30");
        classes.push("focus:border-rose-500");
    } else {
        classes.push("border-slate-700");
        classes.push("focus:ring-indigo-500/30");
        classes.push("focus:border-indigo-500");
    }

    if disabled {
        classes.push("opacity-50");
        classes.push("cursor-not-allowed");
    }

    classes.join(" ")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_input_class() {
        let class = build_input_class(false, false, true);
        assert!(class.starts_with("w-full"));
        assert!(class.contains("border-slate-700"));
        assert!(!class.contains("border-rose-500"));
        assert!(!class.contains("opacity-50"));
    }

    #[test]
    fn test_build_input_class_error() {
        let class = build_input_class(true, false, true);
        assert!(class.contains("border-rose-500"));
    }

    #[test]
    fn test_build_input_class_disabled() {
        let class = build_input_class(false, true, false);
        assert!(!class.contains("w-full"));
        assert!(class.contains("opacity-50"));
        assert!(class.contains("cursor-not-allowed"));
    }

    #[test]
    fn test_button_variant_classes() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Text);
        assert!(ButtonVariant::Contained.class().contains("bg-indigo-600"));
        assert!(ButtonVariant::Danger.class().contains("bg-red-600"));
    }
}

//! Message resolution
//!
//! Every user-facing string is a [`Message`] with a stable id and an English
//! default. A [`Catalog`] loaded from a locale file maps ids to translations;
//! anything missing falls back to the default.
//!
//! Locale files look like:
//!
//! ```json
//! {
//!   "attributeValueEditDialogTitle": { "context": "edit attribute value", "string": "Wert bearbeiten" }
//! }
//! ```

use dioxus::prelude::*;
use serde::Deserialize;
use shopdash_core::{DashError, DashResult};
use std::collections::HashMap;
use std::path::Path;

// ============================================================================
// Message Descriptors
// ============================================================================

/// A translatable message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Message {
    pub id: &'static str,
    pub default_message: &'static str,
    pub description: &'static str,
}

/// Messages shared across screens
pub mod common {
    use super::Message;

    pub const CANCEL: Message = Message {
        id: "cancel",
        default_message: "Cancel",
        description: "button",
    };

    pub const SAVE: Message = Message {
        id: "save",
        default_message: "Save",
        description: "button",
    };

    pub const DELETE: Message = Message {
        id: "delete",
        default_message: "Delete",
        description: "button",
    };

    pub const ERROR: Message = Message {
        id: "error",
        default_message: "Error",
        description: "confirm button failure label",
    };
}

/// Messages of the attribute screens
pub mod attributes {
    use super::Message;

    pub const VALUE_DIALOG_TITLE_NEW: Message = Message {
        id: "attributeValueEditDialogTitleNewValue",
        default_message: "Add Value",
        description: "add attribute value",
    };

    pub const VALUE_DIALOG_TITLE_EDIT: Message = Message {
        id: "attributeValueEditDialogTitle",
        default_message: "Edit Value",
        description: "edit attribute value",
    };

    pub const VALUE_DIALOG_NAME_FIELD: Message = Message {
        id: "attributeValueEditDialogNameField",
        default_message: "Name",
        description: "attribute name",
    };

    pub const VALUE_DELETE_DIALOG_TITLE: Message = Message {
        id: "attributeValueDeleteDialogTitle",
        default_message: "Delete attribute value",
        description: "dialog title",
    };

    pub const VALUE_DELETE_DIALOG_CONTENT: Message = Message {
        id: "attributeValueDeleteDialogContent",
        default_message: "Are you sure you want to delete \"{name}\" value?",
        description: "delete attribute value",
    };

    pub const VALUES_SECTION: Message = Message {
        id: "attributeValuesSection",
        default_message: "Attribute Values",
        description: "section header",
    };

    pub const ADD_VALUE: Message = Message {
        id: "attributeValuesAddButton",
        default_message: "Add value",
        description: "add attribute value button",
    };

    pub const NO_VALUES: Message = Message {
        id: "attributeValuesEmpty",
        default_message: "No values found",
        description: "no attribute values",
    };
}

// ============================================================================
// Catalog
// ============================================================================

// `context` is for translators and ignored here
#[derive(Debug, Clone, Deserialize)]
struct CatalogEntry {
    string: String,
}

/// Translations for one locale
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    locale: String,
    strings: HashMap<String, String>,
}

impl Catalog {
    /// Catalog with no translations; every message uses its default
    pub fn empty(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            strings: HashMap::new(),
        }
    }

    /// Parse a catalog from locale JSON
    pub fn from_json(locale: impl Into<String>, json: &str) -> DashResult<Self> {
        let entries: HashMap<String, CatalogEntry> = serde_json::from_str(json)?;
        Ok(Self {
            locale: locale.into(),
            strings: entries.into_iter().map(|(id, e)| (id, e.string)).collect(),
        })
    }

    /// Load a catalog file
    pub fn load(locale: impl Into<String>, path: impl AsRef<Path>) -> DashResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| DashError::FileRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_json(locale, &json).map_err(|e| DashError::InvalidCatalog {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Locale this catalog translates to
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Number of translated messages
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// True when nothing is translated
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Resolve a message
    pub fn format(&self, message: &Message) -> String {
        self.strings
            .get(message.id)
            .cloned()
            .unwrap_or_else(|| message.default_message.to_string())
    }

    /// Resolve a message and substitute `{key}` placeholders
    pub fn format_with(&self, message: &Message, values: &[(&str, &str)]) -> String {
        values
            .iter()
            .fold(self.format(message), |text, (key, value)| {
                text.replace(&format!("{{{}}}", key), value)
            })
    }
}

// ============================================================================
// Global Catalog
// ============================================================================

/// Catalog used by every component
pub static CATALOG: GlobalSignal<Catalog> = Signal::global(|| Catalog::empty("en"));

/// Resolve a message against the global catalog
pub fn t(message: &Message) -> String {
    CATALOG.read().format(message)
}

/// Resolve a message with placeholders against the global catalog
pub fn t_with(message: &Message, values: &[(&str, &str)]) -> String {
    CATALOG.read().format_with(message, values)
}

// ============================================================================
// Tests
// ============================================================================

//! Product attributes and their values
//!
//! An [`Attribute`] (e.g. "Color") owns an ordered list of
//! [`AttributeValue`]s (e.g. "Red", "Blue"). Values are identified by id and
//! must have unique slugs within their attribute.

use crate::types::{AttributeId, AttributeValueId};
use chrono::{DateTime, Utc};
use heck::ToKebabCase;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum length of an attribute value name, in characters
pub const MAX_VALUE_NAME_LENGTH: usize = 250;

// ============================================================================
// Attribute Value
// ============================================================================

/// A named option belonging to a product attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeValue {
    /// Unique identifier for this value
    pub id: AttributeValueId,

    /// Display name (e.g. "Red")
    pub name: String,

    /// Kebab-case identifier derived from the name (e.g. "dark-red"), made
    /// of letters, digits and dashes only
    pub slug: String,

    /// Position of the value within its attribute
    #[serde(default)]
    pub sort_order: usize,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl AttributeValue {
    /// Create a new value with the given name
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            slug: slugify(&name),
            name,
            sort_order: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Rename the value, refreshing its slug and modification time
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.slug = slugify(&self.name);
        self.touch();
    }

    /// Update the modification timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

// ============================================================================
// Attribute
// ============================================================================

/// A product attribute such as "Color" or "Size"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    /// Unique identifier for this attribute
    pub id: AttributeId,

    /// Display name
    pub name: String,

    /// URL-safe identifier
    pub slug: String,

    /// Values in display order
    #[serde(default)]
    pub values: Vec<AttributeValue>,
}

impl Attribute {
    /// Create an attribute with no values
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: Uuid::new_v4(),
            slug: slugify(&name),
            name,
            values: Vec::new(),
        }
    }

    /// Builder: append a value with the given name
    pub fn with_value(mut self, name: impl Into<String>) -> Self {
        self.push_value(AttributeValue::new(name));
        self
    }

    /// Append a value at the end of the list
    pub fn push_value(&mut self, mut value: AttributeValue) {
        value.sort_order = self.values.len();
        self.values.push(value);
    }

    /// Get a value by id
    pub fn value(&self, id: AttributeValueId) -> Option<&AttributeValue> {
        self.values.iter().find(|v| v.id == id)
    }

    /// Get a mutable value by id
    pub fn value_mut(&mut self, id: AttributeValueId) -> Option<&mut AttributeValue> {
        self.values.iter_mut().find(|v| v.id == id)
    }

    /// Remove a value by id, renumbering the rest
    pub fn remove_value(&mut self, id: AttributeValueId) -> Option<AttributeValue> {
        let index = self.values.iter().position(|v| v.id == id)?;
        let removed = self.values.remove(index);
        for (i, value) in self.values.iter_mut().enumerate() {
            value.sort_order = i;
        }
        Some(removed)
    }

    /// Check whether another value already uses `slug`
    pub fn slug_taken(&self, slug: &str, except: Option<AttributeValueId>) -> bool {
        self.values
            .iter()
            .any(|v| v.slug == slug && Some(v.id) != except)
    }

    /// Number of values
    pub fn value_count(&self) -> usize {
        self.values.len()
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Derive a slug from a display name.
///
/// Punctuation and whitespace only separate words, so a name without any
/// letter or digit yields an empty slug.
pub fn slugify(name: &str) -> String {
    name.trim().to_kebab_case()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Red"), "red");
        assert_eq!(slugify("Dark Red"), "dark-red");
        assert_eq!(slugify("  Navy Blue  "), "navy-blue");
        assert_eq!(slugify("XL"), "xl");
        assert_eq!(slugify("Men's / Large"), "men-s-large");
        assert_eq!(slugify("!!"), "");
        assert_eq!(slugify("- ? -"), "");
    }

    #[test]
    fn test_new_value() {
        let value = AttributeValue::new("Dark Red");
        assert_eq!(value.name, "Dark Red");
        assert_eq!(value.slug, "dark-red");
        assert_eq!(value.created_at, value.updated_at);
    }

    #[test]
    fn test_rename_value() {
        let mut value = AttributeValue::new("Red");
        let id = value.id;
        let created = value.created_at;
        value.rename("Crimson");

        assert_eq!(value.id, id);
        assert_eq!(value.name, "Crimson");
        assert_eq!(value.slug, "crimson");
        assert_eq!(value.created_at, created);
        assert!(value.updated_at >= created);
    }

    #[test]
    fn test_attribute_values_ordering() {
        let attribute = Attribute::new("Color")
            .with_value("Red")
            .with_value("Green")
            .with_value("Blue");

        let orders: Vec<usize> = attribute.values.iter().map(|v| v.sort_order).collect();
        assert_eq!(orders, vec![0, 1, 2]);
        assert_eq!(attribute.slug, "color");
    }

    #[test]
    fn test_remove_value_renumbers() {
        let mut attribute = Attribute::new("Color")
            .with_value("Red")
            .with_value("Green")
            .with_value("Blue");
        let green = attribute.values[1].id;

        let removed = attribute.remove_value(green).unwrap();
        assert_eq!(removed.name, "Green");
        assert_eq!(attribute.value_count(), 2);
        assert_eq!(attribute.values[1].name, "Blue");
        assert_eq!(attribute.values[1].sort_order, 1);
        assert!(attribute.remove_value(green).is_none());
    }

    #[test]
    fn test_slug_taken() {
        let attribute = Attribute::new("Color").with_value("Red");
        let red = attribute.values[0].id;

        assert!(attribute.slug_taken("red", None));
        assert!(!attribute.slug_taken("red", Some(red)));
        assert!(!attribute.slug_taken("blue", None));
    }
}

//! Attribute store
//!
//! The store stands in for the catalogue API. Its mutations validate input
//! and report problems as [`UserError`]s the way a remote API would, so the
//! UI can display them next to the offending field. Unknown ids are hard
//! errors.

use crate::attribute::{Attribute, AttributeValue, MAX_VALUE_NAME_LENGTH, slugify};
use crate::error::{DashError, DashResult};
use crate::types::{AttributeId, AttributeValueId, MutationResult, UserError};
use serde::{Deserialize, Serialize};

/// Name of the only field an attribute value input carries
pub const NAME_FIELD: &str = "name";

// ============================================================================
// Inputs
// ============================================================================

/// Input for creating or updating an attribute value
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AttributeValueInput {
    pub name: String,
}

impl AttributeValueInput {
    /// Create an input with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

// ============================================================================
// Store
// ============================================================================

/// In-process catalogue of attributes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeStore {
    #[serde(default)]
    attributes: Vec<Attribute>,
}

impl AttributeStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// A small catalogue to start from when nothing is persisted
    pub fn sample() -> Self {
        let mut store = Self::new();
        store.add_attribute(
            Attribute::new("Color")
                .with_value("Red")
                .with_value("Green")
                .with_value("Blue"),
        );
        store.add_attribute(
            Attribute::new("Size")
                .with_value("S")
                .with_value("M")
                .with_value("L")
                .with_value("XL"),
        );
        store
    }

    /// Add an attribute, returning its id
    pub fn add_attribute(&mut self, attribute: Attribute) -> AttributeId {
        let id = attribute.id;
        self.attributes.push(attribute);
        id
    }

    /// All attributes in insertion order
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Get an attribute by id
    pub fn attribute(&self, id: AttributeId) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.id == id)
    }

    /// Get a value by id, searching every attribute
    pub fn value(&self, id: AttributeValueId) -> Option<&AttributeValue> {
        self.attributes.iter().find_map(|a| a.value(id))
    }

    /// Find the attribute owning a value
    fn owner_mut(&mut self, value_id: AttributeValueId) -> DashResult<&mut Attribute> {
        self.attributes
            .iter_mut()
            .find(|a| a.value(value_id).is_some())
            .ok_or_else(|| DashError::value_not_found(value_id))
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Create a value on an attribute
    pub fn value_create(
        &mut self,
        attribute_id: AttributeId,
        input: AttributeValueInput,
    ) -> DashResult<MutationResult<AttributeValue>> {
        let attribute = self
            .attributes
            .iter_mut()
            .find(|a| a.id == attribute_id)
            .ok_or_else(|| DashError::attribute_not_found(attribute_id))?;

        let errors = validate_value_input(attribute, &input, None);
        if !errors.is_empty() {
            tracing::warn!(attribute = %attribute.name, ?errors, "value create rejected");
            return Ok(MutationResult::rejected(errors));
        }

        let value = AttributeValue::new(input.name.trim());
        attribute.push_value(value.clone());
        // push_value assigns the position
        let created = attribute.values.last().cloned().unwrap_or(value);
        tracing::info!(attribute = %attribute.name, value = %created.name, "value created");
        Ok(MutationResult::ok(created))
    }

    /// Rename an existing value
    pub fn value_update(
        &mut self,
        value_id: AttributeValueId,
        input: AttributeValueInput,
    ) -> DashResult<MutationResult<AttributeValue>> {
        let attribute = self.owner_mut(value_id)?;

        let errors = validate_value_input(attribute, &input, Some(value_id));
        if !errors.is_empty() {
            tracing::warn!(attribute = %attribute.name, ?errors, "value update rejected");
            return Ok(MutationResult::rejected(errors));
        }

        let value = attribute
            .value_mut(value_id)
            .ok_or_else(|| DashError::value_not_found(value_id))?;
        value.rename(input.name.trim());
        tracing::info!(value = %value.name, "value updated");
        Ok(MutationResult::ok(value.clone()))
    }

    /// Delete a value
    pub fn value_delete(
        &mut self,
        value_id: AttributeValueId,
    ) -> DashResult<MutationResult<AttributeValue>> {
        let attribute = self.owner_mut(value_id)?;
        let removed = attribute
            .remove_value(value_id)
            .ok_or_else(|| DashError::value_not_found(value_id))?;
        tracing::info!(attribute = %attribute.name, value = %removed.name, "value deleted");
        Ok(MutationResult::ok(removed))
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Validate a value input against its attribute.
///
/// `except` is the value being updated, so a value may keep its own slug.
pub fn validate_value_input(
    attribute: &Attribute,
    input: &AttributeValueInput,
    except: Option<AttributeValueId>,
) -> Vec<UserError> {
    let mut errors = Vec::new();
    let name = input.name.trim();

    if name.is_empty() {
        errors.push(UserError::field(NAME_FIELD, "This field is required."));
        return errors;
    }

    let length = name.chars().count();
    if length > MAX_VALUE_NAME_LENGTH {
        errors.push(UserError::field(
            NAME_FIELD,
            format!(
                "Ensure this value has at most {} characters (it has {}).",
                MAX_VALUE_NAME_LENGTH, length
            ),
        ));
    }

    let slug = slugify(name);
    if slug.is_empty() {
        errors.push(UserError::field(
            NAME_FIELD,
            "Name must contain at least one letter or digit.",
        ));
    } else if attribute.slug_taken(&slug, except) {
        errors.push(UserError::field(
            NAME_FIELD,
            format!("Value with slug '{}' already exists.", slug),
        ));
    }

    errors
}

// ============================================================================
// Tests
// ============================================================================

//! Catalog domain entities and operation parameters.
//!
//! Categories form a forest via `parent_id` and expose an arbitrary set of
//! typed fields through `CategoryField` assignments. A field's type is itself
//! data: a `FieldType` pairs a discriminator reference with an opaque
//! properties document whose expected shape the discriminator's
//! `validation_schema` describes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque key/value document (`properties`, `validation_schema`).
///
/// Stored and returned verbatim; the catalog never interprets the contents or
/// checks `properties` against the discriminator's schema.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;

/// A node in the classification tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// Optional parent category. Checked for existence at creation time only;
    /// nothing prevents a raced update from forming a cycle.
    pub parent_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A named, reusable attribute definition referencing exactly one field type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Field {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub field_type_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A concrete value-type definition: discriminator + properties document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FieldType {
    pub id: Uuid,
    pub name: String,
    pub type_discriminator_id: Uuid,
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub properties: JsonMap,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A field-type kind plus the schema its properties are expected to follow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FieldTypeDiscriminator {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub validation_schema: JsonMap,
    pub created_at: DateTime<Utc>,
}

/// Category-to-field assignment with presentation metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CategoryField {
    pub category_id: Uuid,
    pub field_id: Uuid,
    pub is_required: bool,
    pub display_order: i32,
}

/// Joined record returned when listing a category's fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CategoryFieldEntry {
    pub field: Field,
    pub is_required: bool,
    pub display_order: i32,
}

// =============================================================================
// Operation parameters
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct CreateCategoryParams {
    pub name: String,
    pub description: Option<String>,
    pub parent_id: Option<Uuid>,
}

/// Full-replace update: an absent `description`/`parent_id` clears the field.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateCategoryParams {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub parent_id: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateFieldParams {
    pub name: String,
    pub description: Option<String>,
    pub field_type_id: Uuid,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateFieldParams {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub field_type_id: Uuid,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateFieldTypeParams {
    pub name: String,
    pub type_discriminator_id: Uuid,
    pub properties: JsonMap,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateFieldTypeParams {
    pub id: Uuid,
    pub name: String,
    pub type_discriminator_id: Uuid,
    pub properties: JsonMap,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateDiscriminatorParams {
    pub name: String,
    pub description: Option<String>,
    pub validation_schema: JsonMap,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateDiscriminatorParams {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub validation_schema: JsonMap,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignFieldParams {
    pub category_id: Uuid,
    pub field_id: Uuid,
    pub is_required: bool,
    /// 1-based position within the category; must be positive.
    pub display_order: i32,
}

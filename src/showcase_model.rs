//! Data model definitions for the showcase catalog.
//!
//! This module defines the records held by the catalog store. The primary
//! model is [`ModelRecord`], one showcased 3D model, identified by a
//! [`ModelId`] assigned when the record is created. [`ModelDraft`] holds the
//! not-yet-committed form fields the presentation layer collects before
//! calling [`CatalogState::add_record`](crate::catalog_state::CatalogState::add_record).

use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::category::ModelCategory;

/// Unique identifier of a catalog record.
///
/// Generated as a random v4 UUID when the record is created and serialized as
/// its hyphenated string form.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelId(pub Uuid);

impl ModelId {
    pub fn generate() -> Self {
        ModelId(Uuid::new_v4())
    }

    /// Parses the string form produced by [`Display`].
    ///
    /// Returns `None` for anything that is not a UUID; such an id can never
    /// match a stored record.
    pub fn parse(value: &str) -> Option<Self> {
        Uuid::parse_str(value.trim()).ok().map(ModelId)
    }
}

impl Display for ModelId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One showcased 3D model.
///
/// Records are immutable once created: the store appends them and removes
/// them, but never edits one in place.
///
/// # Examples
///
/// ```rust
/// use showcase_catalog_core::category::ModelCategory;
/// use showcase_catalog_core::showcase_model::{ModelId, ModelRecord};
///
/// let record = ModelRecord {
///     id: ModelId::generate(),
///     name: "Laser Gun".to_string(),
///     category: ModelCategory::Guns,
///     description: None,
///     image_ref: "/placeholder.svg?height=200&width=200".to_string(),
///     date_added: chrono::Utc::now(),
/// };
///
/// let json = serde_json::to_value(&record)?;
/// assert_eq!(json["category"], "guns");
/// # Ok::<(), serde_json::Error>(())
/// ```
///
/// # Field Constraints
///
/// ## Name
/// - Never blank: drafts with a blank name are not committed
/// - Stored without surrounding whitespace
///
/// ## Image Reference
/// - Opaque URL string, never fetched or validated
/// - Defaults to the configured placeholder when the draft has none
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ModelRecord {
    pub id: ModelId,
    pub name: String,
    pub category: ModelCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub image_ref: String,
    pub date_added: DateTime<Utc>,
}

/// An unselected category dropdown arrives as `""`; treat it like a missing
/// field. Unknown non-blank tags are still rejected.
fn blank_category_as_none<'de, D>(deserializer: D) -> Result<Option<ModelCategory>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    match value {
        Some(tag) if !tag.trim().is_empty() => ModelCategory::parse(&tag)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("unknown category: {tag}"))),
        _ => Ok(None),
    }
}

/// Form fields for a record that has not been added yet.
///
/// Every field is optional on the wire so a half-filled form deserializes;
/// the store decides whether the draft is complete enough to commit.
/// `ModelDraft::default()` is the cleared form.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ModelDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "blank_category_as_none")]
    pub category: Option<ModelCategory>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_ref: Option<String>,
}

impl ModelDraft {
    pub fn new(name: impl Into<String>, category: ModelCategory) -> Self {
        ModelDraft {
            name: name.into(),
            category: Some(category),
            ..ModelDraft::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_image_ref(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = Some(image_ref.into());
        self
    }

    /// A draft is committable once it has a non-blank name and a category.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && self.category.is_some()
    }

    /// Resets every field, as the form does after a successful submit.
    pub fn clear(&mut self) {
        *self = ModelDraft::default();
    }
}

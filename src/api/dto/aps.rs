//! APS document DTOs.
//!
//! These structs fix the external contract of the APS programme document:
//! field names, nesting, key order and which keys may be omitted. Three
//! kinds of optional field appear:
//!
//! - `Option<T>` without `skip_serializing_if` - always present, may be `null`
//! - `Option<T>` with `skip_serializing_if` - omitted entirely when `None`
//! - `Option<Option<T>>` with `skip_serializing_if` - omitted for some
//!   programme types, present but possibly `null` for others

use serde::Serialize;
use serde_json::Value;

/// `type` of a programme document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApsProgrammeType {
    Brand,
    Series,
    Episode,
    Clip,
}

/// `type` of a category document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApsCategoryType {
    Genre,
    Format,
}

/// Top-level programme document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApsProgramme {
    #[serde(rename = "type")]
    pub programme_type: ApsProgrammeType,
    pub pid: String,
    /// Omitted for episodes and clips.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_child_count: Option<Option<i32>>,
    pub position: Option<i32>,
    pub image: ApsImage,
    pub media_type: Option<String>,
    pub title: String,
    pub short_synopsis: String,
    pub medium_synopsis: String,
    pub long_synopsis: String,
    pub first_broadcast_date: Option<String>,
    pub display_title: ApsDisplayTitle,
    pub links: Vec<Value>,
    pub supporting_content_items: Vec<Value>,
    pub categories: Vec<ApsCategory>,
    /// Only present for episodes and clips.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub versions: Option<Vec<ApsVersion>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ownership: Option<ApsOwnership>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<ApsParent>,
}

/// Reduced programme document used for ancestors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApsParentProgramme {
    #[serde(rename = "type")]
    pub programme_type: ApsProgrammeType,
    pub pid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_child_count: Option<Option<i32>>,
    pub position: Option<i32>,
    pub image: ApsImage,
    pub title: String,
    pub short_synopsis: String,
    pub first_broadcast_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ownership: Option<ApsOwnership>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<ApsParent>,
}

/// `{ "programme": ... }` wrapper around an ancestor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApsParent {
    pub programme: Box<ApsParentProgramme>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApsImage {
    pub pid: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApsDisplayTitle {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApsVersion {
    pub pid: String,
    pub duration: Option<i32>,
}

/// Category (genre or format) document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApsCategory {
    #[serde(rename = "type")]
    pub category_type: ApsCategoryType,
    pub id: String,
    pub key: String,
    pub title: String,
    pub narrower: Vec<ApsCategory>,
    /// Never present on formats.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broader: Option<ApsBroader>,
    pub has_topic_page: bool,
    #[serde(rename = "sameAs")]
    pub same_as: Option<String>,
}

/// Broader-genre link. Serializes to `{}` when the genre has no broader
/// genre, which is distinct from the key being absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ApsBroader {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Box<ApsCategory>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApsOwnership {
    pub service: ApsService,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApsService {
    #[serde(rename = "type")]
    pub service_type: String,
    pub id: String,
    pub key: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outlet: Option<ApsOutlet>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApsOutlet {
    pub key: Option<String>,
    pub title: String,
    pub id: String,
}

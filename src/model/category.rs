use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::api::{deserialize_id, deserialize_optional_id};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create-or-update payload. Leaving `id` empty creates a new category.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateUpdateCategoryDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub parent_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum CategoryRemoval {
    /// Hide the category while keeping its rows.
    SoftDelete,
    /// Unlink a sub-category from its parent.
    Detach,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SoftDeleteOrDetachDto {
    pub category_id: i64,
    pub action: CategoryRemoval,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CategoryResponseDto {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub category: Option<CategoryDto>,
}

/// Category listing; accepts both `{ "categories": [...] }` and a bare array.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(from = "CategoriesPayload")]
pub struct CategoriesResponseDto {
    pub categories: Vec<CategoryDto>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CategoriesPayload {
    Wrapped {
        #[serde(default)]
        categories: Vec<CategoryDto>,
    },
    Bare(Vec<CategoryDto>),
}

impl From<CategoriesPayload> for CategoriesResponseDto {
    fn from(payload: CategoriesPayload) -> Self {
        match payload {
            CategoriesPayload::Wrapped { categories } | CategoriesPayload::Bare(categories) => {
                Self { categories }
            }
        }
    }
}

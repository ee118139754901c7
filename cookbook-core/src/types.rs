use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted recipe as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    /// Minutes
    pub cooking_time: u32,
    pub servings: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of a create request. Identifier and timestamps are assigned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RecipeCreate {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub cooking_time: u32,
    pub servings: u32,
}

/// Body of an update request. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RecipeUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooking_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
}

impl Recipe {
    /// Build a freshly persisted recipe from a create payload.
    pub fn from_create(id: String, data: RecipeCreate, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: data.title,
            description: data.description,
            ingredients: data.ingredients,
            instructions: data.instructions,
            cooking_time: data.cooking_time,
            servings: data.servings,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge an update onto this recipe. `created_at` is kept, `updated_at` becomes `now`.
    pub fn apply_update(&mut self, update: RecipeUpdate, now: DateTime<Utc>) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(ingredients) = update.ingredients {
            self.ingredients = ingredients;
        }
        if let Some(instructions) = update.instructions {
            self.instructions = instructions;
        }
        if let Some(cooking_time) = update.cooking_time {
            self.cooking_time = cooking_time;
        }
        if let Some(servings) = update.servings {
            self.servings = servings;
        }
        self.updated_at = now;
    }
}

impl From<RecipeCreate> for RecipeUpdate {
    fn from(data: RecipeCreate) -> Self {
        Self {
            title: Some(data.title),
            description: Some(data.description),
            ingredients: Some(data.ingredients),
            instructions: Some(data.instructions),
            cooking_time: Some(data.cooking_time),
            servings: Some(data.servings),
        }
    }
}

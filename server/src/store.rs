//! In-memory recipe storage. Lives as long as the process.

use chrono::Utc;
use cookbook_core::{Recipe, RecipeCreate, RecipeUpdate};
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Recipe with ID '{0}' not found")]
    NotFound(String),
}

/// Recipes in insertion order.
#[derive(Default)]
pub struct RecipeStore {
    recipes: RwLock<Vec<Recipe>>,
}

impl RecipeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn list(&self) -> Vec<Recipe> {
        self.recipes.read().await.clone()
    }

    pub async fn get(&self, id: &str) -> Result<Recipe, StoreError> {
        self.recipes
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Assigns a fresh UUID and identical creation/update timestamps.
    pub async fn create(&self, data: RecipeCreate) -> Recipe {
        let recipe = Recipe::from_create(Uuid::new_v4().to_string(), data, Utc::now());
        self.recipes.write().await.push(recipe.clone());
        recipe
    }

    /// Merge provided fields onto the stored recipe and refresh `updated_at`.
    pub async fn update(&self, id: &str, update: RecipeUpdate) -> Result<Recipe, StoreError> {
        let mut recipes = self.recipes.write().await;
        let existing = recipes
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        existing.apply_update(update, Utc::now());
        Ok(existing.clone())
    }

    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut recipes = self.recipes.write().await;
        let position = recipes
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        recipes.remove(position);
        Ok(())
    }

    pub async fn len(&self) -> usize {
        self.recipes.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.recipes.read().await.is_empty()
    }
}

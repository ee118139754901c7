//! In-memory stand-in for the backend, used to exercise views without a server.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

use super::client::{check_id, RecipeApi};
use crate::error::ApiError;
use crate::types::{Recipe, RecipeCreate, RecipeUpdate};

/// One of the five client operations, for failure injection and call accounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

#[derive(Default)]
struct MockState {
    recipes: Vec<Recipe>,
    next_id: u64,
    failing: HashSet<Operation>,
    calls: Vec<Operation>,
}

/// Fake backend with the same semantics as the real one: ids and timestamps
/// are assigned on create, updates merge, unknown ids are not found.
pub struct MockRecipeApi {
    state: Mutex<MockState>,
}

impl MockRecipeApi {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MockState {
                next_id: 1,
                ..Default::default()
            }),
        }
    }

    /// Seed the store with already-persisted recipes.
    pub fn with_recipes(self, recipes: Vec<Recipe>) -> Self {
        self.lock().recipes = recipes;
        self
    }

    /// Make the given operation fail with a 500 until cleared.
    pub fn with_failure(self, op: Operation) -> Self {
        self.set_failing(op, true);
        self
    }

    /// Identifier handed to the next created recipe; later ones count up from it.
    pub fn with_next_id(self, next_id: u64) -> Self {
        self.lock().next_id = next_id;
        self
    }

    pub fn set_failing(&self, op: Operation, failing: bool) {
        let mut state = self.lock();
        if failing {
            state.failing.insert(op);
        } else {
            state.failing.remove(&op);
        }
    }

    /// Every operation attempted so far, including failed ones.
    pub fn calls(&self) -> Vec<Operation> {
        self.lock().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.lock().calls.len()
    }

    /// Snapshot of the stored recipes.
    pub fn recipes(&self) -> Vec<Recipe> {
        self.lock().recipes.clone()
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Record the call and return the guard, or the injected failure.
    fn begin(&self, op: Operation) -> Result<MutexGuard<'_, MockState>, ApiError> {
        let mut state = self.lock();
        state.calls.push(op);
        if state.failing.contains(&op) {
            return Err(ApiError::Status { status: 500 });
        }
        Ok(state)
    }
}

impl Default for MockRecipeApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecipeApi for MockRecipeApi {
    async fn list(&self) -> Result<Vec<Recipe>, ApiError> {
        let state = self.begin(Operation::List)?;
        Ok(state.recipes.clone())
    }

    async fn get(&self, id: &str) -> Result<Recipe, ApiError> {
        let state = self.begin(Operation::Get)?;
        check_id(id)?;
        state
            .recipes
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(ApiError::NotFound)
    }

    async fn create(&self, recipe: &RecipeCreate) -> Result<Recipe, ApiError> {
        let mut state = self.begin(Operation::Create)?;
        let id = state.next_id.to_string();
        state.next_id += 1;
        let created = Recipe::from_create(id, recipe.clone(), Utc::now());
        state.recipes.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &str, recipe: &RecipeUpdate) -> Result<Recipe, ApiError> {
        let mut state = self.begin(Operation::Update)?;
        check_id(id)?;
        let existing = state
            .recipes
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(ApiError::NotFound)?;
        existing.apply_update(recipe.clone(), Utc::now());
        Ok(existing.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let mut state = self.begin(Operation::Delete)?;
        check_id(id)?;
        let before = state.recipes.len();
        state.recipes.retain(|r| r.id != id);
        if state.recipes.len() == before {
            return Err(ApiError::NotFound);
        }
        Ok(())
    }
}

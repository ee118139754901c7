//! Create and edit form.
//!
//! One view serves both `/recipes/new` and `/recipes/:id/edit`; the
//! [`FormMode`] is fixed when the view is built from the route. The working
//! copy lives in a [`RecipeDraft`], which keeps at least one ingredient row
//! and only accepts positive whole numbers for the numeric fields.

use super::LoadState;
use crate::error::ValidationError;
use crate::http::RecipeApi;
use crate::routes::Route;
use crate::types::{Recipe, RecipeCreate};
use crate::validation;

pub const LOAD_FAILED: &str = "Failed to load recipe.";
pub const DEFAULT_COOKING_TIME: u32 = 30;
pub const DEFAULT_SERVINGS: u32 = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(String),
}

impl FormMode {
    pub fn from_route(route: &Route) -> Option<Self> {
        match route {
            Route::New => Some(FormMode::Create),
            Route::Edit(id) => Some(FormMode::Edit(id.clone())),
            _ => None,
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            FormMode::Create => "Create New Recipe",
            FormMode::Edit(_) => "Edit Recipe",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Create => "Create Recipe",
            FormMode::Edit(_) => "Update Recipe",
        }
    }

    fn save_failed(&self) -> &'static str {
        match self {
            FormMode::Create => "Failed to create recipe. Please try again.",
            FormMode::Edit(_) => "Failed to update recipe. Please try again.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    /// Fetching the recipe being edited.
    Loading,
    Editing,
    /// A create or update is in flight; submit is disabled.
    Saving,
    /// The recipe to edit could not be fetched.
    LoadFailed,
}

/// Editable recipe fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    pub instructions: String,
    ingredients: Vec<String>,
    cooking_time: u32,
    servings: u32,
}

impl Default for RecipeDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            instructions: String::new(),
            ingredients: vec![String::new()],
            cooking_time: DEFAULT_COOKING_TIME,
            servings: DEFAULT_SERVINGS,
        }
    }
}

impl RecipeDraft {
    pub fn from_recipe(recipe: &Recipe) -> Self {
        let mut ingredients = recipe.ingredients.clone();
        if ingredients.is_empty() {
            ingredients.push(String::new());
        }
        Self {
            title: recipe.title.clone(),
            description: recipe.description.clone(),
            instructions: recipe.instructions.clone(),
            ingredients,
            cooking_time: recipe.cooking_time.max(1),
            servings: recipe.servings.max(1),
        }
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn add_ingredient(&mut self) {
        self.ingredients.push(String::new());
    }

    /// Returns false when `index` is out of range.
    pub fn set_ingredient(&mut self, index: usize, value: impl Into<String>) -> bool {
        match self.ingredients.get_mut(index) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Returns false, leaving the rows untouched, when only one row is left
    /// or `index` is out of range.
    pub fn remove_ingredient(&mut self, index: usize) -> bool {
        if self.ingredients.len() <= 1 || index >= self.ingredients.len() {
            return false;
        }
        self.ingredients.remove(index);
        true
    }

    pub fn can_remove_ingredient(&self) -> bool {
        self.ingredients.len() > 1
    }

    pub fn cooking_time(&self) -> u32 {
        self.cooking_time
    }

    pub fn servings(&self) -> u32 {
        self.servings
    }

    /// Set from raw input. The stored value is unchanged on error.
    pub fn set_cooking_time(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.cooking_time = validation::parse_positive("Cooking time", raw)?;
        Ok(())
    }

    pub fn set_servings(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.servings = validation::parse_positive("Servings", raw)?;
        Ok(())
    }

    /// Build the request body. Blank ingredient rows are dropped first; if
    /// none remain that is reported before any other problem.
    pub fn to_payload(&self) -> Result<RecipeCreate, ValidationError> {
        let ingredients = validation::clean_ingredients(&self.ingredients);
        if ingredients.is_empty() {
            return Err(ValidationError::NoIngredients);
        }

        validation::check_title(&self.title)?;
        if self.description.trim().is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        validation::check_description(&self.description)?;
        validation::check_instructions(&self.instructions)?;

        Ok(RecipeCreate {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            ingredients,
            instructions: self.instructions.clone(),
            cooking_time: self.cooking_time,
            servings: self.servings,
        })
    }
}

#[derive(Debug)]
pub struct FormView {
    mode: FormMode,
    status: FormStatus,
    draft: RecipeDraft,
    error: Option<String>,
}

impl FormView {
    pub fn new(mode: FormMode) -> Self {
        let status = match mode {
            FormMode::Create => FormStatus::Editing,
            FormMode::Edit(_) => FormStatus::Loading,
        };
        Self {
            mode,
            status,
            draft: RecipeDraft::default(),
            error: None,
        }
    }

    pub fn from_route(route: &Route) -> Option<Self> {
        FormMode::from_route(route).map(Self::new)
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn draft(&self) -> &RecipeDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut RecipeDraft {
        &mut self.draft
    }

    /// The prefill fetch, shaped like the other views' loads.
    pub fn load_state(&self) -> LoadState<&RecipeDraft> {
        match self.status {
            FormStatus::Loading => LoadState::Loading,
            FormStatus::LoadFailed => LoadState::Failed(LOAD_FAILED.to_string()),
            FormStatus::Editing | FormStatus::Saving => LoadState::Loaded(&self.draft),
        }
    }

    pub fn can_submit(&self) -> bool {
        self.status == FormStatus::Editing
    }

    /// Prefill from the backend in edit mode. Does nothing when creating.
    pub async fn load(&mut self, api: &dyn RecipeApi) {
        let FormMode::Edit(id) = &self.mode else {
            return;
        };

        self.status = FormStatus::Loading;
        self.error = None;
        match api.get(id).await {
            Ok(recipe) => {
                self.draft = RecipeDraft::from_recipe(&recipe);
                self.status = FormStatus::Editing;
            }
            Err(e) => {
                tracing::error!(id = %id, error = %e, "Error loading recipe for editing");
                self.error = Some(LOAD_FAILED.to_string());
                self.status = FormStatus::LoadFailed;
            }
        }
    }

    /// Validate and save. On success returns the detail route of the saved
    /// recipe; on failure the draft is kept and an error is shown.
    pub async fn submit(&mut self, api: &dyn RecipeApi) -> Option<Route> {
        if !self.can_submit() {
            return None;
        }

        let payload = match self.draft.to_payload() {
            Ok(payload) => payload,
            Err(e) => {
                tracing::debug!(error = %e, "form rejected locally");
                self.error = Some(e.to_string());
                return None;
            }
        };

        self.status = FormStatus::Saving;
        self.error = None;

        let result = match &self.mode {
            FormMode::Create => api.create(&payload).await.map(|recipe| recipe.id),
            FormMode::Edit(id) => api
                .update(id, &payload.into())
                .await
                .map(|_| id.clone()),
        };

        self.status = FormStatus::Editing;
        match result {
            Ok(id) => Some(Route::Detail(id)),
            Err(e) => {
                tracing::error!(error = %e, "Error saving recipe");
                self.error = Some(self.mode.save_failed().to_string());
                None
            }
        }
    }

    /// Leave without saving.
    pub fn cancel(&self) -> Route {
        match &self.mode {
            FormMode::Create => Route::List,
            FormMode::Edit(id) => Route::Detail(id.clone()),
        }
    }

    pub fn render(&self) -> String {
        match self.status {
            FormStatus::Loading => return "Loading recipe...\n".to_string(),
            FormStatus::LoadFailed => {
                return format!("! {}\n  [Cancel]\n", LOAD_FAILED);
            }
            FormStatus::Editing | FormStatus::Saving => {}
        }

        let draft = &self.draft;
        let mut out = format!("{}\n\n", self.mode.heading());
        if let Some(error) = &self.error {
            out.push_str(&format!("! {}\n\n", error));
        }
        out.push_str(&format!("Title *: {}\n", draft.title));
        out.push_str(&format!("Description *: {}\n", draft.description));
        out.push_str(&format!("Cooking Time (minutes) *: {}\n", draft.cooking_time));
        out.push_str(&format!("Servings *: {}\n", draft.servings));
        out.push_str("Ingredients *:\n");
        for (i, ingredient) in draft.ingredients.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", i + 1, ingredient));
        }
        out.push_str(&format!("Instructions *:\n{}\n\n", draft.instructions));

        let submit = if self.status == FormStatus::Saving {
            "Saving..."
        } else {
            self.mode.submit_label()
        };
        out.push_str(&format!("[{}] [Cancel]\n", submit));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{MockRecipeApi, Operation};
    use chrono::Utc;

    fn stored(id: &str) -> Recipe {
        Recipe {
            id: id.to_string(),
            title: "Chicken Stir Fry".to_string(),
            description: "Quick and healthy".to_string(),
            ingredients: vec!["chicken".to_string(), "soy sauce".to_string()],
            instructions: "Stir fry.".to_string(),
            cooking_time: 15,
            servings: 4,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn fill(draft: &mut RecipeDraft) {
        draft.title = "Omelette".to_string();
        draft.description = "Breakfast".to_string();
        draft.instructions = "Whisk and cook".to_string();
        draft.set_ingredient(0, "2 eggs");
    }

    #[test]
    fn test_mode_from_route() {
        assert_eq!(FormMode::from_route(&Route::New), Some(FormMode::Create));
        assert_eq!(
            FormMode::from_route(&Route::Edit("3".to_string())),
            Some(FormMode::Edit("3".to_string()))
        );
        assert_eq!(FormMode::from_route(&Route::Detail("3".to_string())), None);
    }

    #[test]
    fn test_draft_defaults() {
        let draft = RecipeDraft::default();
        assert_eq!(draft.ingredients(), &[String::new()]);
        assert_eq!(draft.cooking_time(), 30);
        assert_eq!(draft.servings(), 4);
    }

    #[test]
    fn test_ingredient_rows() {
        let mut draft = RecipeDraft::default();
        draft.add_ingredient();
        draft.add_ingredient();
        assert!(draft.set_ingredient(0, "a"));
        assert!(draft.set_ingredient(1, "b"));
        assert!(draft.set_ingredient(2, "c"));
        assert!(!draft.set_ingredient(3, "d"));

        assert!(draft.remove_ingredient(1));
        assert_eq!(draft.ingredients(), &["a".to_string(), "c".to_string()]);
        assert!(!draft.remove_ingredient(5));
    }

    #[test]
    fn test_removing_last_row_is_noop() {
        let mut draft = RecipeDraft::default();
        draft.set_ingredient(0, "salt");
        assert!(!draft.can_remove_ingredient());
        assert!(!draft.remove_ingredient(0));
        assert_eq!(draft.ingredients().len(), 1);
        assert_eq!(draft.ingredients()[0], "salt");
    }

    #[test]
    fn test_numeric_input_parsed_at_boundary() {
        let mut draft = RecipeDraft::default();
        draft.set_cooking_time("45").unwrap();
        assert_eq!(draft.cooking_time(), 45);

        assert!(draft.set_cooking_time("0").is_err());
        assert!(draft.set_servings("lots").is_err());
        assert_eq!(draft.cooking_time(), 45);
        assert_eq!(draft.servings(), 4);
    }

    #[test]
    fn test_payload_filters_blank_ingredients() {
        let mut draft = RecipeDraft::default();
        fill(&mut draft);
        draft.add_ingredient();
        draft.add_ingredient();
        draft.set_ingredient(2, " milk ");

        let payload = draft.to_payload().unwrap();
        assert_eq!(payload.ingredients, vec!["2 eggs", "milk"]);
    }

    #[tokio::test]
    async fn test_all_blank_ingredients_never_hit_network() {
        let api = MockRecipeApi::new();
        let mut view = FormView::new(FormMode::Create);
        fill(view.draft_mut());
        view.draft_mut().set_ingredient(0, "   ");
        view.draft_mut().add_ingredient();

        let nav = view.submit(&api).await;

        assert_eq!(nav, None);
        assert_eq!(api.call_count(), 0);
        assert_eq!(view.error(), Some("Please add at least one ingredient"));
        assert_eq!(view.status(), FormStatus::Editing);
        assert!(view.render().contains("Please add at least one ingredient"));
    }

    #[tokio::test]
    async fn test_create_navigates_to_new_recipe() {
        let api = MockRecipeApi::new().with_next_id(42);
        let mut view = FormView::from_route(&Route::New).unwrap();
        fill(view.draft_mut());

        let nav = view.submit(&api).await;

        assert_eq!(nav, Some(Route::Detail("42".to_string())));
        assert_eq!(nav.unwrap().path(), "/recipes/42");
        let saved = &api.recipes()[0];
        assert_eq!(saved.title, "Omelette");
        assert_eq!(saved.ingredients, vec!["2 eggs"]);
    }

    #[tokio::test]
    async fn test_failed_create_keeps_draft() {
        let api = MockRecipeApi::new().with_failure(Operation::Create);
        let mut view = FormView::new(FormMode::Create);
        fill(view.draft_mut());
        let before = view.draft().clone();

        let nav = view.submit(&api).await;

        assert_eq!(nav, None);
        assert_eq!(
            view.error(),
            Some("Failed to create recipe. Please try again.")
        );
        assert_eq!(view.status(), FormStatus::Editing);
        assert!(view.can_submit());
        assert_eq!(view.draft(), &before);
    }

    #[tokio::test]
    async fn test_edit_prefills_and_updates() {
        let api = MockRecipeApi::new().with_recipes(vec![stored("5")]);
        let mut view = FormView::from_route(&Route::Edit("5".to_string())).unwrap();
        assert_eq!(view.status(), FormStatus::Loading);
        assert!(!view.can_submit());

        view.load(&api).await;
        assert_eq!(view.status(), FormStatus::Editing);
        assert_eq!(view.draft().title, "Chicken Stir Fry");
        assert_eq!(view.draft().ingredients().len(), 2);
        assert!(view.render().contains("Update Recipe"));

        view.draft_mut().set_servings("6").unwrap();
        let nav = view.submit(&api).await;

        assert_eq!(nav, Some(Route::Detail("5".to_string())));
        assert_eq!(api.recipes()[0].servings, 6);
        assert_eq!(
            api.calls(),
            vec![Operation::Get, Operation::Update]
        );
    }

    #[tokio::test]
    async fn test_edit_load_failure() {
        let api = MockRecipeApi::new();
        let mut view = FormView::new(FormMode::Edit("nope".to_string()));
        view.load(&api).await;

        assert_eq!(view.status(), FormStatus::LoadFailed);
        assert_eq!(view.load_state().error(), Some(LOAD_FAILED));
        assert_eq!(view.submit(&api).await, None);
        assert_eq!(view.cancel(), Route::Detail("nope".to_string()));
    }

    #[tokio::test]
    async fn test_failed_update_message() {
        let api = MockRecipeApi::new()
            .with_recipes(vec![stored("5")])
            .with_failure(Operation::Update);
        let mut view = FormView::new(FormMode::Edit("5".to_string()));
        view.load(&api).await;

        assert_eq!(view.submit(&api).await, None);
        assert_eq!(
            view.error(),
            Some("Failed to update recipe. Please try again.")
        );
    }

    #[tokio::test]
    async fn test_edit_then_cancel_leaves_backend_untouched() {
        let original = stored("5");
        let api = MockRecipeApi::new().with_recipes(vec![original.clone()]);
        let mut view = FormView::new(FormMode::Edit("5".to_string()));
        view.load(&api).await;

        view.draft_mut().title = "Something else".to_string();
        view.draft_mut().add_ingredient();
        let nav = view.cancel();

        assert_eq!(nav, Route::Detail("5".to_string()));
        assert_eq!(api.recipes(), vec![original]);
        assert_eq!(api.calls(), vec![Operation::Get]);
    }

    #[test]
    fn test_create_cancel_goes_home() {
        assert_eq!(FormView::new(FormMode::Create).cancel(), Route::List);
    }

    #[tokio::test]
    async fn test_load_is_noop_when_creating() {
        let api = MockRecipeApi::new();
        let mut view = FormView::new(FormMode::Create);
        view.load(&api).await;
        assert_eq!(api.call_count(), 0);
        assert_eq!(view.status(), FormStatus::Editing);
    }
}

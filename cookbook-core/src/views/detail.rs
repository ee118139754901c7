use super::{Confirm, LoadState, DELETE_FAILED, DELETE_PROMPT};
use crate::http::RecipeApi;
use crate::routes::Route;
use crate::types::Recipe;

pub const LOAD_FAILED: &str = "Failed to load recipe. It may have been deleted.";
pub const BACK_LABEL: &str = "Go back to recipes";

/// A single recipe, keyed by the identifier in the route.
#[derive(Debug)]
pub struct DetailView {
    id: String,
    state: LoadState<Recipe>,
    notice: Option<String>,
}

impl DetailView {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            state: LoadState::Loading,
            notice: None,
        }
    }

    /// Only `/recipes/:id` maps to a detail view.
    pub fn from_route(route: &Route) -> Option<Self> {
        match route {
            Route::Detail(id) => Some(Self::new(id.clone())),
            _ => None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> &LoadState<Recipe> {
        &self.state
    }

    pub fn recipe(&self) -> Option<&Recipe> {
        self.state.loaded()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub async fn load(&mut self, api: &dyn RecipeApi) {
        self.state = LoadState::Loading;
        self.notice = None;
        match api.get(&self.id).await {
            Ok(recipe) => self.state = LoadState::Loaded(recipe),
            Err(e) => {
                tracing::error!(id = %self.id, error = %e, "Error loading recipe");
                self.state = LoadState::Failed(LOAD_FAILED.to_string());
            }
        }
    }

    /// Back to the list. Also the only way out of the error panel.
    pub fn back(&self) -> Route {
        Route::List
    }

    pub fn edit(&self) -> Route {
        Route::Edit(self.id.clone())
    }

    /// Delete after confirmation. Navigates to the list on success.
    pub async fn delete(&mut self, api: &dyn RecipeApi, confirm: &mut impl Confirm) -> Option<Route> {
        if self.recipe().is_none() || !confirm.confirm(DELETE_PROMPT) {
            return None;
        }

        match api.delete(&self.id).await {
            Ok(()) => Some(Route::List),
            Err(e) => {
                tracing::error!(id = %self.id, error = %e, "Error deleting recipe");
                self.notice = Some(DELETE_FAILED.to_string());
                None
            }
        }
    }

    pub fn render(&self) -> String {
        let recipe = match &self.state {
            LoadState::Loading => return "Loading recipe...\n".to_string(),
            LoadState::Failed(message) => {
                return format!("! {}\n  [{}]\n", message, BACK_LABEL);
            }
            LoadState::Loaded(recipe) => recipe,
        };

        let mut out = String::from("[Back to Recipes]\n\n");
        if let Some(notice) = &self.notice {
            out.push_str(&format!("! {}\n\n", notice));
        }
        out.push_str(&format!("{}  [Edit] [Delete]\n", recipe.title));
        out.push_str(&format!("{}\n\n", recipe.description));
        out.push_str(&format!(
            "{} minutes | {} servings\n\n",
            recipe.cooking_time, recipe.servings
        ));

        out.push_str("Ingredients\n");
        for ingredient in &recipe.ingredients {
            out.push_str(&format!("  - {}\n", ingredient));
        }

        out.push_str("\nInstructions\n");
        for line in recipe.instructions.lines() {
            out.push_str(&format!("  {}\n", line));
        }

        out.push_str(&format!(
            "\nCreated: {}\nLast updated: {}\n",
            recipe.created_at.format("%Y-%m-%d"),
            recipe.updated_at.format("%Y-%m-%d")
        ));
        out
    }
}

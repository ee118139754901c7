use super::card::{Card, CardIntent};
use super::{Confirm, LoadState, DELETE_FAILED, DELETE_PROMPT};
use crate::http::RecipeApi;
use crate::routes::Route;
use crate::types::Recipe;

pub const LOAD_FAILED: &str = "Failed to load recipes. Please try again later.";
pub const EMPTY_HEADING: &str = "No recipes found";
pub const EMPTY_HINT: &str = "Start by adding your first recipe!";
pub const EMPTY_ACTION: &str = "Add Your First Recipe";

/// All recipes, one card each.
#[derive(Debug)]
pub struct ListView {
    state: LoadState<Vec<Recipe>>,
    /// Banner for a failed delete; the list itself stays as it was.
    notice: Option<String>,
}

impl Default for ListView {
    fn default() -> Self {
        Self::new()
    }
}

impl ListView {
    pub fn new() -> Self {
        Self {
            state: LoadState::Loading,
            notice: None,
        }
    }

    pub fn state(&self) -> &LoadState<Vec<Recipe>> {
        &self.state
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Recipes currently shown; empty unless loaded.
    pub fn recipes(&self) -> &[Recipe] {
        self.state.loaded().map(Vec::as_slice).unwrap_or_default()
    }

    /// Loaded successfully with nothing to show.
    pub fn is_empty(&self) -> bool {
        matches!(&self.state, LoadState::Loaded(recipes) if recipes.is_empty())
    }

    pub fn cards(&self) -> Vec<Card<'_>> {
        self.recipes().iter().map(Card::new).collect()
    }

    /// Header button, and the call-to-action of the empty state.
    pub fn add_recipe(&self) -> Route {
        Route::New
    }

    pub async fn load(&mut self, api: &dyn RecipeApi) {
        self.state = LoadState::Loading;
        self.notice = None;
        match api.list().await {
            Ok(recipes) => {
                tracing::debug!(count = recipes.len(), "loaded recipes");
                self.state = LoadState::Loaded(recipes);
            }
            Err(e) => {
                tracing::error!(error = %e, "Error loading recipes");
                self.state = LoadState::Failed(LOAD_FAILED.to_string());
            }
        }
    }

    /// The error panel's "Try again".
    pub async fn retry(&mut self, api: &dyn RecipeApi) {
        self.load(api).await;
    }

    /// Act on a card. Returns the route to navigate to, if any.
    pub async fn handle(
        &mut self,
        intent: CardIntent,
        api: &dyn RecipeApi,
        confirm: &mut impl Confirm,
    ) -> Option<Route> {
        match intent {
            CardIntent::View(_) | CardIntent::Edit(_) => intent.route(),
            CardIntent::Delete(id) => {
                self.delete(&id, api, confirm).await;
                None
            }
        }
    }

    async fn delete(&mut self, id: &str, api: &dyn RecipeApi, confirm: &mut impl Confirm) {
        if !confirm.confirm(DELETE_PROMPT) {
            return;
        }

        match api.delete(id).await {
            Ok(()) => {
                self.notice = None;
                if let LoadState::Loaded(recipes) = &mut self.state {
                    recipes.retain(|r| r.id != id);
                }
            }
            Err(e) => {
                tracing::error!(id, error = %e, "Error deleting recipe");
                self.notice = Some(DELETE_FAILED.to_string());
            }
        }
    }

    pub fn render(&self) -> String {
        match &self.state {
            LoadState::Loading => "Loading recipes...\n".to_string(),
            LoadState::Failed(message) => format!("! {}\n  [Try again]\n", message),
            LoadState::Loaded(recipes) if recipes.is_empty() => format!(
                "{}\n{}\n  [{}]\n",
                EMPTY_HEADING, EMPTY_HINT, EMPTY_ACTION
            ),
            LoadState::Loaded(_) => {
                let mut out = String::new();
                if let Some(notice) = &self.notice {
                    out.push_str(&format!("! {}\n\n", notice));
                }
                out.push_str("All Recipes  [Add Recipe]\n\n");
                for card in self.cards() {
                    out.push_str(&card.render());
                    out.push('\n');
                }
                out
            }
        }
    }
}

use crate::AppState;
use axum::{extract::State, Json};
use cookbook_core::Recipe;

#[utoipa::path(
    get,
    path = "/api/recipes",
    tag = "recipes",
    responses(
        (status = 200, description = "All recipes, oldest first", body = [Recipe])
    )
)]
pub async fn list_recipes(State(store): State<AppState>) -> Json<Vec<Recipe>> {
    Json(store.list().await)
}

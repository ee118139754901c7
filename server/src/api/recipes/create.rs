use crate::api::ErrorResponse;
use crate::error::AppError;
use crate::AppState;
use axum::{extract::State, http::StatusCode, Json};
use cookbook_core::validation::validate_create;
use cookbook_core::{Recipe, RecipeCreate};

#[utoipa::path(
    post,
    path = "/api/recipes",
    tag = "recipes",
    request_body = RecipeCreate,
    responses(
        (status = 201, description = "Recipe created successfully", body = Recipe),
        (status = 422, description = "Invalid recipe", body = ErrorResponse)
    )
)]
pub async fn create_recipe(
    State(store): State<AppState>,
    Json(request): Json<RecipeCreate>,
) -> Result<(StatusCode, Json<Recipe>), AppError> {
    if let Err(e) = validate_create(&request) {
        tracing::info!(error = %e, "rejected recipe");
        return Err(e.into());
    }

    let recipe = store.create(request).await;
    tracing::info!(id = %recipe.id, title = %recipe.title, "created recipe");

    Ok((StatusCode::CREATED, Json(recipe)))
}

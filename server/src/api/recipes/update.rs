use crate::api::ErrorResponse;
use crate::error::AppError;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use cookbook_core::validation::validate_update;
use cookbook_core::{Recipe, RecipeUpdate};

/// Fields present in the body replace the stored ones; absent fields are kept.
#[utoipa::path(
    put,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = String, Path, description = "Recipe ID")
    ),
    request_body = RecipeUpdate,
    responses(
        (status = 200, description = "Recipe updated successfully", body = Recipe),
        (status = 404, description = "Recipe not found", body = ErrorResponse),
        (status = 422, description = "Invalid recipe", body = ErrorResponse)
    )
)]
pub async fn update_recipe(
    State(store): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<RecipeUpdate>,
) -> Result<Json<Recipe>, AppError> {
    if let Err(e) = validate_update(&request) {
        tracing::info!(id = %id, error = %e, "rejected recipe update");
        return Err(e.into());
    }

    let recipe = store.update(&id, request).await?;
    tracing::info!(id = %recipe.id, "updated recipe");

    Ok(Json(recipe))
}

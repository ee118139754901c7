use crate::api::ErrorResponse;
use crate::error::AppError;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use cookbook_core::Recipe;

#[utoipa::path(
    get,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = String, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Recipe details", body = Recipe),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn get_recipe(
    State(store): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Recipe>, AppError> {
    Ok(Json(store.get(&id).await?))
}

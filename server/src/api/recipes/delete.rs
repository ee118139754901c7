use crate::api::ErrorResponse;
use crate::error::AppError;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
};

#[utoipa::path(
    delete,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = String, Path, description = "Recipe ID")
    ),
    responses(
        (status = 204, description = "Recipe deleted successfully"),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn delete_recipe(
    State(store): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    store.delete(&id).await?;
    tracing::info!(id = %id, "deleted recipe");

    Ok(StatusCode::NO_CONTENT)
}

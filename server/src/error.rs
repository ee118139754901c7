use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cookbook_core::ValidationError;
use thiserror::Error;

use crate::api::ErrorResponse;
use crate::store::StoreError;

/// Handler failure, rendered as `{"error": "..."}` with a matching status.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    NotFound(#[from] StoreError),

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

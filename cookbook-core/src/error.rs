use thiserror::Error;

/// Failure of a call through the recipe client.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Invalid recipe ID: {0:?}")]
    InvalidId(String),

    #[error("Recipe not found")]
    NotFound,

    #[error("Backend returned HTTP {status}")]
    Status { status: u16 },

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid response body: {0}")]
    Decode(String),
}

/// A recipe field that violates its constraints.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Title must be at most {max} characters")]
    TitleTooLong { max: usize },

    #[error("Description cannot be empty")]
    EmptyDescription,

    #[error("Description must be at most {max} characters")]
    DescriptionTooLong { max: usize },

    #[error("Please add at least one ingredient")]
    NoIngredients,

    #[error("Ingredients cannot be blank")]
    BlankIngredient,

    #[error("Instructions cannot be empty")]
    EmptyInstructions,

    #[error("{field} must be a whole number of at least 1")]
    NotPositive { field: &'static str },
}

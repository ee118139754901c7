pub mod error;
pub mod http;
pub mod routes;
pub mod types;
pub mod validation;
pub mod views;

pub use error::{ApiError, ValidationError};
pub use http::{
    MockRecipeApi, Operation, RecipeApi, RecipeClient, RecipeClientBuilder, DEFAULT_BASE_URL,
};
pub use routes::Route;
pub use types::{Recipe, RecipeCreate, RecipeUpdate};
pub use views::{
    Card, CardIntent, Confirm, DetailView, FormMode, FormStatus, FormView, ListView, LoadState,
    RecipeDraft, Screen, Shell,
};

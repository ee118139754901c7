//! HTTP access to the recipe backend.
//!
//! All backend calls from the front end go through [`RecipeApi`]. Production
//! code uses [`RecipeClient`]; tests use [`MockRecipeApi`].

mod client;
mod mock;

pub use client::{RecipeApi, RecipeClient, RecipeClientBuilder, DEFAULT_BASE_URL};
pub use mock::{MockRecipeApi, Operation};

//! Field constraints for recipe payloads.
//!
//! The backend applies [`validate_create`] and [`validate_update`] to incoming
//! bodies; the form view applies the same checks before it submits.

use crate::error::ValidationError;
use crate::types::{RecipeCreate, RecipeUpdate};

pub const TITLE_MAX_CHARS: usize = 200;
pub const DESCRIPTION_MAX_CHARS: usize = 1000;

pub fn validate_create(data: &RecipeCreate) -> Result<(), ValidationError> {
    check_title(&data.title)?;
    check_description(&data.description)?;
    check_ingredients(&data.ingredients)?;
    check_instructions(&data.instructions)?;
    check_positive("cooking_time", data.cooking_time)?;
    check_positive("servings", data.servings)?;
    Ok(())
}

/// Only fields present in the update are checked.
pub fn validate_update(data: &RecipeUpdate) -> Result<(), ValidationError> {
    if let Some(title) = &data.title {
        check_title(title)?;
    }
    if let Some(description) = &data.description {
        check_description(description)?;
    }
    if let Some(ingredients) = &data.ingredients {
        check_ingredients(ingredients)?;
    }
    if let Some(instructions) = &data.instructions {
        check_instructions(instructions)?;
    }
    if let Some(cooking_time) = data.cooking_time {
        check_positive("cooking_time", cooking_time)?;
    }
    if let Some(servings) = data.servings {
        check_positive("servings", servings)?;
    }
    Ok(())
}

pub fn check_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    if title.chars().count() > TITLE_MAX_CHARS {
        return Err(ValidationError::TitleTooLong {
            max: TITLE_MAX_CHARS,
        });
    }
    Ok(())
}

/// The backend accepts an empty description; the form does not.
pub fn check_description(description: &str) -> Result<(), ValidationError> {
    if description.chars().count() > DESCRIPTION_MAX_CHARS {
        return Err(ValidationError::DescriptionTooLong {
            max: DESCRIPTION_MAX_CHARS,
        });
    }
    Ok(())
}

pub fn check_ingredients(ingredients: &[String]) -> Result<(), ValidationError> {
    if ingredients.is_empty() {
        return Err(ValidationError::NoIngredients);
    }
    if ingredients.iter().any(|i| i.trim().is_empty()) {
        return Err(ValidationError::BlankIngredient);
    }
    Ok(())
}

pub fn check_instructions(instructions: &str) -> Result<(), ValidationError> {
    if instructions.trim().is_empty() {
        return Err(ValidationError::EmptyInstructions);
    }
    Ok(())
}

pub fn check_positive(field: &'static str, value: u32) -> Result<(), ValidationError> {
    if value == 0 {
        return Err(ValidationError::NotPositive { field });
    }
    Ok(())
}

/// Parse raw form input into a positive integer.
pub fn parse_positive(field: &'static str, raw: &str) -> Result<u32, ValidationError> {
    let value: u32 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::NotPositive { field })?;
    check_positive(field, value)?;
    Ok(value)
}

/// Drop blank entries, trimming the rest. Order is preserved.
pub fn clean_ingredients(ingredients: &[String]) -> Vec<String> {
    ingredients
        .iter()
        .map(|i| i.trim())
        .filter(|i| !i.is_empty())
        .map(str::to_string)
        .collect()
}

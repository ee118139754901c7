use cookbook_core::RecipeCreate;

use crate::store::RecipeStore;

struct SeedRecipe {
    title: &'static str,
    description: &'static str,
    ingredients: &'static [&'static str],
    instructions: &'static str,
    cooking_time: u32,
    servings: u32,
}

const SAMPLE_RECIPES: &[SeedRecipe] = &[
    SeedRecipe {
        title: "Classic Margherita Pizza",
        description: "A simple and delicious Italian pizza with fresh tomatoes, mozzarella, and basil",
        ingredients: &[
            "500g pizza dough",
            "200g tomato sauce",
            "250g fresh mozzarella",
            "Fresh basil leaves",
            "2 tbsp olive oil",
            "Salt to taste",
        ],
        instructions: "1. Preheat oven to 250°C (480°F).
2. Roll out the dough on a floured surface.
3. Spread tomato sauce evenly.
4. Add torn mozzarella pieces.
5. Bake for 10-12 minutes until crust is golden.
6. Top with fresh basil and drizzle with olive oil.",
        cooking_time: 20,
        servings: 4,
    },
    SeedRecipe {
        title: "Chicken Stir Fry",
        description: "Quick and healthy Asian-inspired chicken stir fry with vegetables",
        ingredients: &[
            "500g chicken breast, sliced",
            "2 cups mixed vegetables (bell peppers, broccoli, carrots)",
            "3 tbsp soy sauce",
            "1 tbsp sesame oil",
            "2 cloves garlic, minced",
            "1 tbsp ginger, grated",
            "2 tbsp vegetable oil",
        ],
        instructions: "1. Heat vegetable oil in a wok over high heat.
2. Add chicken and cook until golden.
3. Add garlic and ginger, stir for 30 seconds.
4. Add vegetables and stir fry for 3-4 minutes.
5. Add soy sauce and sesame oil.
6. Serve hot over rice.",
        cooking_time: 15,
        servings: 4,
    },
    SeedRecipe {
        title: "Chocolate Chip Cookies",
        description: "Soft and chewy homemade chocolate chip cookies",
        ingredients: &[
            "2 1/4 cups all-purpose flour",
            "1 cup butter, softened",
            "3/4 cup sugar",
            "3/4 cup brown sugar",
            "2 eggs",
            "1 tsp vanilla extract",
            "1 tsp baking soda",
            "1/2 tsp salt",
            "2 cups chocolate chips",
        ],
        instructions: "1. Preheat oven to 375°F (190°C).
2. Mix flour, baking soda, and salt.
3. Beat butter and sugars until creamy.
4. Add eggs and vanilla to butter mixture.
5. Gradually blend in flour mixture.
6. Stir in chocolate chips.
7. Drop rounded tablespoons onto baking sheets.
8. Bake 9-11 minutes until golden brown.",
        cooking_time: 25,
        servings: 24,
    },
];

/// Populate the store with the sample recipes.
pub async fn seed(store: &RecipeStore) {
    for sample in SAMPLE_RECIPES {
        let recipe = store
            .create(RecipeCreate {
                title: sample.title.to_string(),
                description: sample.description.to_string(),
                ingredients: sample.ingredients.iter().map(|i| i.to_string()).collect(),
                instructions: sample.instructions.to_string(),
                cooking_time: sample.cooking_time,
                servings: sample.servings,
            })
            .await;
        tracing::debug!(id = %recipe.id, title = %recipe.title, "seeded recipe");
    }
    tracing::info!("Seeded {} sample recipes", SAMPLE_RECIPES.len());
}

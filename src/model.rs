use serde::{Deserialize, Serialize};

use crate::builder::RecipeBuilder;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub cuisine: String,
    pub ingredients: Vec<String>,
    /// Cooking time in minutes
    pub cooking_time: u32,
    pub instructions: String,
}

impl Recipe {
    pub fn new(
        name: impl Into<String>,
        cuisine: impl Into<String>,
        ingredients: Vec<String>,
        cooking_time: u32,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            cuisine: cuisine.into(),
            ingredients,
            cooking_time,
            instructions: instructions.into(),
        }
    }

    /// Create a builder for assembling a recipe field by field
    pub fn builder() -> RecipeBuilder {
        RecipeBuilder::default()
    }

    /// Exact, case-sensitive membership test on the ingredient list
    pub fn has_ingredient(&self, ingredient: &str) -> bool {
        self.ingredients.iter().any(|i| i == ingredient)
    }
}

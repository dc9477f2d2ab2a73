use crate::{CatalogError, Recipe};

/// Builder for assembling a [`Recipe`] field by field
///
/// Only field presence is checked: every field except the ingredient list
/// must be set before [`RecipeBuilder::build`] succeeds.
#[derive(Debug, Default, Clone)]
pub struct RecipeBuilder {
    name: Option<String>,
    cuisine: Option<String>,
    ingredients: Vec<String>,
    cooking_time: Option<u32>,
    instructions: Option<String>,
}

impl RecipeBuilder {
    /// Set the recipe name
    ///
    /// # Example
    /// ```
    /// use recipe_catalog::Recipe;
    ///
    /// let builder = Recipe::builder().name("Lasagna");
    /// ```
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the cuisine label
    pub fn cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }

    /// Append a single ingredient, keeping insertion order
    ///
    /// # Example
    /// ```
    /// use recipe_catalog::Recipe;
    ///
    /// let builder = Recipe::builder()
    ///     .ingredient("pasta")
    ///     .ingredient("cheese");
    /// ```
    pub fn ingredient(mut self, ingredient: impl Into<String>) -> Self {
        self.ingredients.push(ingredient.into());
        self
    }

    /// Replace the whole ingredient list
    pub fn ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    /// Set the cooking time in minutes
    pub fn cooking_time(mut self, minutes: u32) -> Self {
        self.cooking_time = Some(minutes);
        self
    }

    /// Set the free-text instructions
    pub fn instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// Assemble the recipe
    ///
    /// # Errors
    /// Returns [`CatalogError::MissingField`] naming the first unset field.
    ///
    /// # Example
    /// ```
    /// use recipe_catalog::Recipe;
    ///
    /// let recipe = Recipe::builder()
    ///     .name("Lasagna")
    ///     .cuisine("Italian")
    ///     .ingredients(["pasta", "cheese"])
    ///     .cooking_time(60)
    ///     .instructions("Bake.")
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(recipe.ingredients, vec!["pasta", "cheese"]);
    /// ```
    pub fn build(self) -> Result<Recipe, CatalogError> {
        let name = self.name.ok_or(CatalogError::MissingField("name"))?;
        let cuisine = self.cuisine.ok_or(CatalogError::MissingField("cuisine"))?;
        let cooking_time = self
            .cooking_time
            .ok_or(CatalogError::MissingField("cooking_time"))?;
        let instructions = self
            .instructions
            .ok_or(CatalogError::MissingField("instructions"))?;

        Ok(Recipe {
            name,
            cuisine,
            ingredients: self.ingredients,
            cooking_time,
            instructions,
        })
    }
}

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::{debug, info};

use crate::codec::{decode_line, encode_line};
use crate::report::{generate_report, ReportDestination, ReportOutcome};
use crate::{CatalogError, Recipe};

/// Result of [`RecipeCatalog::update`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The first recipe with the given name was replaced at `position`
    Replaced { position: usize },
    /// No recipe has the given name; the catalog is unchanged
    NotFound,
}

/// In-memory, insertion-ordered collection of recipes
///
/// Names are used as lookup keys but are not required to be unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
}

impl RecipeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Append a recipe to the end of the catalog
    pub fn add(&mut self, recipe: Recipe) {
        debug!("Adding recipe '{}'", recipe.name);
        self.recipes.push(recipe);
    }

    /// Remove every recipe whose name equals `name`, returning how many were removed
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.recipes.len();
        self.recipes.retain(|r| r.name != name);
        let removed = before - self.recipes.len();
        debug!("Removed {} recipe(s) named '{}'", removed, name);
        removed
    }

    /// Replace the first recipe named `name` in place
    pub fn update(&mut self, name: &str, recipe: Recipe) -> UpdateOutcome {
        match self.recipes.iter().position(|r| r.name == name) {
            Some(position) => {
                self.recipes[position] = recipe;
                debug!("Updated recipe '{}' at position {}", name, position);
                UpdateOutcome::Replaced { position }
            }
            None => {
                debug!("No recipe named '{}' to update", name);
                UpdateOutcome::NotFound
            }
        }
    }

    fn filter<P>(&self, predicate: P) -> Vec<&Recipe>
    where
        P: Fn(&Recipe) -> bool,
    {
        self.recipes.iter().filter(|&r| predicate(r)).collect()
    }

    pub fn search_by_cuisine(&self, cuisine: &str) -> Vec<&Recipe> {
        self.filter(|r| r.cuisine == cuisine)
    }

    pub fn search_by_ingredient(&self, ingredient: &str) -> Vec<&Recipe> {
        self.filter(|r| r.has_ingredient(ingredient))
    }

    /// Recipes that take at most `max_time` minutes
    pub fn search_by_cooking_time(&self, max_time: u32) -> Vec<&Recipe> {
        self.filter(|r| r.cooking_time <= max_time)
    }

    pub fn search_by_name(&self, name: &str) -> Vec<&Recipe> {
        self.filter(|r| r.name == name)
    }

    /// Write every recipe, in order, to `path`, truncating any existing file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), CatalogError> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        for recipe in &self.recipes {
            writeln!(writer, "{}", encode_line(recipe))?;
        }
        writer.flush()?;
        info!("Saved {} recipe(s) to {}", self.recipes.len(), path.display());
        Ok(())
    }

    /// Replace the catalog contents with the recipes stored in `path`
    ///
    /// The catalog is cleared before the file is opened. A malformed line
    /// aborts the load; recipes parsed from earlier lines stay in the catalog.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<usize, CatalogError> {
        let path = path.as_ref();
        self.recipes.clear();
        let reader = BufReader::new(File::open(path)?);

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let recipe = decode_line(&line, index + 1)?;
            self.recipes.push(recipe);
        }

        info!("Loaded {} recipe(s) from {}", self.recipes.len(), path.display());
        Ok(self.recipes.len())
    }

    /// Render `recipes` to `destination`
    pub fn generate_report(
        &self,
        recipes: &[&Recipe],
        destination: &ReportDestination,
    ) -> Result<ReportOutcome, CatalogError> {
        generate_report(recipes, destination)
    }

    pub fn generate_report_by_cuisine(
        &self,
        cuisine: &str,
        destination: &ReportDestination,
    ) -> Result<ReportOutcome, CatalogError> {
        generate_report(&self.search_by_cuisine(cuisine), destination)
    }

    pub fn generate_report_by_ingredient(
        &self,
        ingredient: &str,
        destination: &ReportDestination,
    ) -> Result<ReportOutcome, CatalogError> {
        generate_report(&self.search_by_ingredient(ingredient), destination)
    }

    pub fn generate_report_by_cooking_time(
        &self,
        max_time: u32,
        destination: &ReportDestination,
    ) -> Result<ReportOutcome, CatalogError> {
        generate_report(&self.search_by_cooking_time(max_time), destination)
    }

    pub fn generate_report_by_name(
        &self,
        name: &str,
        destination: &ReportDestination,
    ) -> Result<ReportOutcome, CatalogError> {
        generate_report(&self.search_by_name(name), destination)
    }
}

impl FromIterator<Recipe> for RecipeCatalog {
    fn from_iter<I: IntoIterator<Item = Recipe>>(iter: I) -> Self {
        Self {
            recipes: iter.into_iter().collect(),
        }
    }
}

impl Extend<Recipe> for RecipeCatalog {
    fn extend<I: IntoIterator<Item = Recipe>>(&mut self, iter: I) {
        self.recipes.extend(iter);
    }
}

impl<'a> IntoIterator for &'a RecipeCatalog {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.iter()
    }
}

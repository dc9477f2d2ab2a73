//! Line format used by the persistence file.
//!
//! One recipe per line: `name,cuisine,ingredients,cookingTime,instructions`,
//! with the ingredients joined by `|`. Nothing is escaped, so a delimiter
//! embedded in `name`, `cuisine` or an ingredient corrupts the record on reload.

use crate::{CatalogError, Recipe};

pub const FIELD_DELIMITER: char = ',';
pub const INGREDIENT_DELIMITER: char = '|';

const FIELD_COUNT: usize = 5;

/// Encode a recipe as a single persistence line (without the line terminator)
pub fn encode_line(recipe: &Recipe) -> String {
    let ingredients = recipe
        .ingredients
        .join(&INGREDIENT_DELIMITER.to_string());

    format!(
        "{name}{d}{cuisine}{d}{ingredients}{d}{time}{d}{instructions}",
        name = recipe.name,
        cuisine = recipe.cuisine,
        ingredients = ingredients,
        time = recipe.cooking_time,
        instructions = recipe.instructions,
        d = FIELD_DELIMITER,
    )
}

/// Decode one persistence line; `line_number` is 1-based and only used in errors
///
/// The line is split into at most five fields, so `instructions` keeps any
/// commas it contains.
pub fn decode_line(line: &str, line_number: usize) -> Result<Recipe, CatalogError> {
    let parts: Vec<&str> = line.splitn(FIELD_COUNT, FIELD_DELIMITER).collect();
    if parts.len() < FIELD_COUNT {
        return Err(CatalogError::MissingFields {
            line: line_number,
            found: parts.len(),
        });
    }

    let time_field = parts[3].trim();
    let cooking_time =
        time_field
            .parse::<u32>()
            .map_err(|source| CatalogError::InvalidCookingTime {
                line: line_number,
                value: time_field.to_string(),
                source,
            })?;

    let ingredients = if parts[2].is_empty() {
        Vec::new()
    } else {
        parts[2]
            .split(INGREDIENT_DELIMITER)
            .map(str::to_string)
            .collect()
    };

    Ok(Recipe {
        name: parts[0].to_string(),
        cuisine: parts[1].to_string(),
        ingredients,
        cooking_time,
        instructions: parts[4].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lasagna() -> Recipe {
        Recipe::new(
            "Lasagna",
            "Italian",
            vec!["pasta".to_string(), "tomato sauce".to_string()],
            60,
            "1. Cook pasta. 2. Bake.",
        )
    }

    #[test]
    fn test_encode_line_layout() {
        assert_eq!(
            encode_line(&lasagna()),
            "Lasagna,Italian,pasta|tomato sauce,60,1. Cook pasta. 2. Bake."
        );
    }

    #[test]
    fn test_decode_line() {
        let recipe = decode_line("Lasagna,Italian,pasta|tomato sauce,60,1. Cook pasta. 2. Bake.", 1)
            .unwrap();
        assert_eq!(recipe, lasagna());
    }

    #[test]
    fn test_instructions_keep_commas() {
        let recipe = decode_line("Soup,French,onion,45,Slice, fry, then simmer.", 1).unwrap();
        assert_eq!(recipe.instructions, "Slice, fry, then simmer.");
    }

    #[test]
    fn test_empty_ingredients_field() {
        let recipe = decode_line("Tea,English,,3,Steep.", 1).unwrap();
        assert!(recipe.ingredients.is_empty());
        assert_eq!(encode_line(&recipe), "Tea,English,,3,Steep.");
    }

    #[test]
    fn test_single_empty_ingredient_reloads_as_empty_list() {
        let recipe = Recipe::new("Tea", "English", vec![String::new()], 3, "Steep.");
        let line = encode_line(&recipe);
        assert_eq!(line, "Tea,English,,3,Steep.");

        let reloaded = decode_line(&line, 1).unwrap();
        assert!(reloaded.ingredients.is_empty());
        assert_ne!(reloaded, recipe);
    }

    #[test]
    fn test_duplicate_ingredients_preserved() {
        let recipe = decode_line("Omelette,French,egg|egg|butter,5,Whisk.", 1).unwrap();
        assert_eq!(recipe.ingredients, vec!["egg", "egg", "butter"]);
    }

    #[test]
    fn test_too_few_fields() {
        match decode_line("Lasagna,Italian,pasta", 7) {
            Err(CatalogError::MissingFields { line, found }) => {
                assert_eq!(line, 7);
                assert_eq!(found, 3);
            }
            other => panic!("Expected MissingFields, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_line_is_malformed() {
        assert!(matches!(
            decode_line("", 2),
            Err(CatalogError::MissingFields { line: 2, found: 1 })
        ));
    }

    #[test]
    fn test_invalid_cooking_time() {
        for bad in ["sixty", "-5", "1.5", ""] {
            let line = format!("Lasagna,Italian,pasta,{},Bake.", bad);
            match decode_line(&line, 3) {
                Err(CatalogError::InvalidCookingTime { line, value, .. }) => {
                    assert_eq!(line, 3);
                    assert_eq!(value, bad);
                }
                other => panic!("Expected InvalidCookingTime for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_cooking_time_whitespace_is_trimmed() {
        let recipe = decode_line("Rice,Japanese,rice, 20 ,Boil.", 1).unwrap();
        assert_eq!(recipe.cooking_time, 20);
    }
}

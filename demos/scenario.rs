//! Walk through the whole catalog API with a single recipe
//!
//! Files are written to the current directory: `recipes.txt` plus the
//! `italian_recipes.txt`, `cheese_recipes.txt`, `quick_recipes.txt` and
//! `Lasagna.txt` reports.

use recipe_catalog::{Recipe, RecipeCatalog, ReportDestination, UpdateOutcome};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut catalog = RecipeCatalog::new();

    catalog.add(
        Recipe::builder()
            .name("Lasagna")
            .cuisine("Italian")
            .ingredients(["pasta", "tomato sauce", "cheese", "ground beef"])
            .cooking_time(60)
            .instructions("1. Cook pasta. 2. Brown beef. 3. Layer pasta, sauce, beef, and cheese. 4. Bake at 350°F for 30 minutes.")
            .build()?,
    );

    println!("=== Search ===");
    println!("Italian: {}", catalog.search_by_cuisine("Italian").len());
    println!("With pasta: {}", catalog.search_by_ingredient("pasta").len());
    println!("Under 30 minutes: {}", catalog.search_by_cooking_time(30).len());

    println!("\n=== Update ===");
    let updated = Recipe::builder()
        .name("Lasagna")
        .cuisine("Italian")
        .ingredients(["pasta", "tomato sauce", "cheese", "ground beef", "spinach"])
        .cooking_time(70)
        .instructions("1. Cook pasta. 2. Brown beef. 3. Layer pasta, sauce, beef, spinach, and cheese. 4. Bake at 350°F for 40 minutes.")
        .build()?;
    if catalog.update("Lasagna", updated) == UpdateOutcome::NotFound {
        println!("Recipe not found!");
    }

    println!("\n=== Save and load ===");
    catalog.save("recipes.txt")?;
    let loaded = catalog.load("recipes.txt")?;
    println!("Loaded {} recipe(s)", loaded);

    println!("\n=== Reports ===");
    catalog.generate_report_by_cuisine("Italian", &ReportDestination::file("italian_recipes.txt"))?;
    catalog.generate_report_by_ingredient("cheese", &ReportDestination::file("cheese_recipes.txt"))?;
    catalog.generate_report_by_cooking_time(70, &ReportDestination::file("quick_recipes.txt"))?;
    catalog.generate_report_by_name("Lasagna", &ReportDestination::file("Lasagna.txt"))?;

    catalog.remove("Lasagna");
    println!("\nRecipes left: {}", catalog.len());

    Ok(())
}

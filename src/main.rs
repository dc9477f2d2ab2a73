use std::error::Error;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use log::debug;

use recipe_catalog::report::generate_report_with;
use recipe_catalog::{CatalogConfig, Recipe, RecipeCatalog, ReportDestination, UpdateOutcome};

const NOT_FOUND_NOTICE: &str = "Recipe not found!";

#[derive(Parser, Debug)]
#[command(name = "recipe-catalog", version, about = "Manage a flat-file recipe catalog")]
struct Cli {
    /// Persistence file to use instead of the configured one
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every recipe in catalog order
    List {
        #[arg(long)]
        json: bool,
    },
    /// Append a recipe
    Add(RecipeArgs),
    /// Replace the first recipe with the given name
    Update {
        /// Name of the recipe to replace
        #[arg(id = "target", value_name = "NAME")]
        target: String,
        #[command(flatten)]
        recipe: RecipeArgs,
    },
    /// Remove every recipe with the given name
    Remove { name: String },
    /// Search the catalog
    Search {
        #[arg(long)]
        json: bool,
        #[command(subcommand)]
        by: Criterion,
    },
    /// Write a report of matching recipes to stdout or a file
    Report {
        /// Report file name, resolved against the configured report directory
        #[arg(short, long, global = true)]
        output: Option<PathBuf>,
        #[command(subcommand)]
        by: Criterion,
    },
}

#[derive(Subcommand, Debug)]
enum Criterion {
    Cuisine { cuisine: String },
    Ingredient { ingredient: String },
    /// Maximum cooking time in minutes
    Time { max_time: u32 },
    Name { name: String },
}

#[derive(Args, Debug)]
struct RecipeArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    cuisine: String,
    /// Repeat once per ingredient, in order
    #[arg(long = "ingredient")]
    ingredients: Vec<String>,
    /// Cooking time in minutes
    #[arg(long)]
    time: u32,
    #[arg(long)]
    instructions: String,
}

impl RecipeArgs {
    fn into_recipe(self) -> Result<Recipe, recipe_catalog::CatalogError> {
        Recipe::builder()
            .name(self.name)
            .cuisine(self.cuisine)
            .ingredients(self.ingredients)
            .cooking_time(self.time)
            .instructions(self.instructions)
            .build()
    }
}

fn open_catalog(path: &Path) -> Result<RecipeCatalog, recipe_catalog::CatalogError> {
    let mut catalog = RecipeCatalog::new();
    if path.exists() {
        catalog.load(path)?;
    } else {
        debug!("{} does not exist yet, starting empty", path.display());
    }
    Ok(catalog)
}

fn print_recipes<W: Write>(
    out: &mut W,
    recipes: &[&Recipe],
    json: bool,
) -> Result<(), Box<dyn Error>> {
    if json {
        serde_json::to_writer_pretty(&mut *out, recipes)?;
        writeln!(out)?;
    } else {
        for recipe in recipes {
            writeln!(
                out,
                "{} ({}, {} mins): {}",
                recipe.name,
                recipe.cuisine,
                recipe.cooking_time,
                recipe.ingredients.join(", ")
            )?;
        }
    }
    Ok(())
}

fn select<'a>(catalog: &'a RecipeCatalog, by: &Criterion) -> Vec<&'a Recipe> {
    match by {
        Criterion::Cuisine { cuisine } => catalog.search_by_cuisine(cuisine),
        Criterion::Ingredient { ingredient } => catalog.search_by_ingredient(ingredient),
        Criterion::Time { max_time } => catalog.search_by_cooking_time(*max_time),
        Criterion::Name { name } => catalog.search_by_name(name),
    }
}

/// Execute one command, writing console output to `out`
fn run<W: Write>(cli: Cli, config: &CatalogConfig, out: &mut W) -> Result<(), Box<dyn Error>> {
    let data_file = cli.data_file.unwrap_or_else(|| config.data_file.clone());
    debug!("Using data file {}", data_file.display());

    let mut catalog = open_catalog(&data_file)?;

    match cli.command {
        Command::List { json } => {
            let all: Vec<&Recipe> = catalog.iter().collect();
            print_recipes(out, &all, json)?;
        }
        Command::Add(args) => {
            catalog.add(args.into_recipe()?);
            catalog.save(&data_file)?;
        }
        Command::Update { target, recipe } => match catalog.update(&target, recipe.into_recipe()?) {
            UpdateOutcome::Replaced { .. } => catalog.save(&data_file)?,
            UpdateOutcome::NotFound => writeln!(out, "{}", NOT_FOUND_NOTICE)?,
        },
        Command::Remove { name } => {
            catalog.remove(&name);
            catalog.save(&data_file)?;
        }
        Command::Search { json, by } => {
            print_recipes(out, &select(&catalog, &by), json)?;
        }
        Command::Report { output, by } => {
            let destination = ReportDestination::from(output.map(|o| config.report_path(o)));
            generate_report_with(&select(&catalog, &by), &destination, out)?;
        }
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = CatalogConfig::load()?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    run(cli, &config, &mut handle)
}

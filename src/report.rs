use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use log::{debug, info};

use crate::{CatalogError, Recipe};

pub const NO_RESULTS_NOTICE: &str = "No recipes found for the given criteria.";

/// Where a report is written
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ReportDestination {
    /// Standard output of the process
    #[default]
    Stdout,
    /// A file, truncated and replaced on every write
    File(PathBuf),
}

impl ReportDestination {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        ReportDestination::File(path.into())
    }
}

impl From<Option<PathBuf>> for ReportDestination {
    fn from(path: Option<PathBuf>) -> Self {
        path.map_or(ReportDestination::Stdout, ReportDestination::File)
    }
}

/// What a report generation call ended up doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    /// Nothing matched; only the notice was emitted
    NoResults,
    /// The report went to standard output
    Printed { count: usize },
    /// The report was saved to a file
    Saved { path: PathBuf, count: usize },
}

/// Render the report for `recipes` into `writer`
pub fn write_report<W: Write>(writer: &mut W, recipes: &[&Recipe]) -> io::Result<()> {
    for recipe in recipes {
        writeln!(
            writer,
            "Recipe: {}, Cuisine: {}, Cooking Time: {} mins",
            recipe.name, recipe.cuisine, recipe.cooking_time
        )?;
        writeln!(writer, "Ingredients:")?;
        for ingredient in &recipe.ingredients {
            writeln!(writer, "- {}", ingredient)?;
        }
        writeln!(writer, "Instructions:")?;
        writeln!(writer, "{}", recipe.instructions)?;
        writeln!(writer)?;
    }
    Ok(())
}

/// Generate a report, sending notices and console output to the process stdout
pub fn generate_report(
    recipes: &[&Recipe],
    destination: &ReportDestination,
) -> Result<ReportOutcome, CatalogError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    generate_report_with(recipes, destination, &mut handle)
}

/// Generate a report using `console` as the standard output stream
///
/// The "no results" notice and the "Report saved" confirmation always go to
/// `console`. A file destination is only opened when there is something to write.
pub fn generate_report_with<W: Write>(
    recipes: &[&Recipe],
    destination: &ReportDestination,
    console: &mut W,
) -> Result<ReportOutcome, CatalogError> {
    if recipes.is_empty() {
        debug!("Report requested for an empty result set");
        writeln!(console, "{}", NO_RESULTS_NOTICE)?;
        return Ok(ReportOutcome::NoResults);
    }

    match destination {
        ReportDestination::Stdout => {
            write_report(console, recipes)?;
            Ok(ReportOutcome::Printed {
                count: recipes.len(),
            })
        }
        ReportDestination::File(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_report(&mut writer, recipes)?;
            writer.flush()?;
            info!("Wrote {} recipe(s) to {}", recipes.len(), path.display());
            writeln!(console, "Report saved to {}", path.display())?;
            Ok(ReportOutcome::Saved {
                path: path.clone(),
                count: recipes.len(),
            })
        }
    }
}

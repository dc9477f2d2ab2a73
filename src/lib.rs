pub mod builder;
pub mod catalog;
pub mod codec;
pub mod config;
pub mod error;
pub mod model;
pub mod report;

pub use builder::RecipeBuilder;
pub use catalog::{RecipeCatalog, UpdateOutcome};
pub use crate::config::CatalogConfig;
pub use error::CatalogError;
pub use model::Recipe;
pub use report::{ReportDestination, ReportOutcome};

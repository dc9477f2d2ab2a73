use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Settings for the command-line front end
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Persistence file read and written by mutating commands
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
    /// Directory that relative report file names are resolved against
    #[serde(default = "default_report_dir")]
    pub report_dir: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            report_dir: default_report_dir(),
        }
    }
}

fn default_data_file() -> PathBuf {
    PathBuf::from("recipes.txt")
}

fn default_report_dir() -> PathBuf {
    PathBuf::from(".")
}

impl CatalogConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_CATALOG__ prefix
    /// 2. recipe-catalog.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_CATALOG__DATA_FILE
    pub fn load() -> Result<Self, ConfigError> {
        load_config("recipe-catalog")
    }

    /// Resolve a report file name against `report_dir`; absolute paths are kept as-is
    pub fn report_path(&self, file_name: impl AsRef<Path>) -> PathBuf {
        self.report_dir.join(file_name)
    }
}

/// Load configuration from the optional file `name` (extension inferred) and the environment
pub fn load_config(name: &str) -> Result<CatalogConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name(name).required(false))
        // Use double underscore for nested: RECIPE_CATALOG__DATA_FILE
        .add_source(
            Environment::with_prefix("RECIPE_CATALOG")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_values() {
        let config = CatalogConfig::default();
        assert_eq!(config.data_file, PathBuf::from("recipes.txt"));
        assert_eq!(config.report_dir, PathBuf::from("."));
    }

    #[test]
    fn test_load_config_without_file() {
        let config = load_config("definitely-not-a-config-file").unwrap();
        assert_eq!(config.data_file, default_data_file());
    }

    #[test]
    fn test_load_config_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        fs::write(
            &path,
            "data_file = \"kitchen.txt\"\nreport_dir = \"reports\"\n",
        )
        .unwrap();

        let config = load_config(path.to_str().unwrap()).unwrap();
        assert_eq!(config.data_file, PathBuf::from("kitchen.txt"));
        assert_eq!(config.report_dir, PathBuf::from("reports"));
    }

    #[test]
    fn test_report_path() {
        let config = CatalogConfig {
            data_file: default_data_file(),
            report_dir: PathBuf::from("reports"),
        };
        assert_eq!(
            config.report_path("Lasagna.txt"),
            PathBuf::from("reports").join("Lasagna.txt")
        );
    }
}

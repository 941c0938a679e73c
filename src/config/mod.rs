//! Application configuration module
//!
//! Configuration is layered: built-in defaults, then an optional YAML file,
//! then environment variables with the `MCDM_RANKER` prefix. Nested values
//! use a double underscore as separator.
//!
//! # Example
//!
//! ```no_run
//! use mcdm_ranker::config::AppConfig;
//!
//! let config = AppConfig::load(None).expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Sorting by {}", config.ranking.sort_by);
//! ```

mod error;
mod logging;
mod ranking;
mod table;

pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use ranking::RankingConfig;
pub use table::{OutputFormat, TableConfig};

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Criteria, judgments and run policies
    #[serde(default)]
    pub ranking: RankingConfig,

    /// Column bindings and output settings
    #[serde(default)]
    pub table: TableConfig,

    /// Log level and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from an optional YAML file and the environment
    ///
    /// This function:
    /// 1. Loads `.env` file if present
    /// 2. Reads the YAML file, if one is given
    /// 3. Reads environment variables with `MCDM_RANKER` prefix
    /// 4. Deserializes into typed configuration structs, defaulting
    ///    every missing section
    ///
    /// # Environment Variable Format
    ///
    /// - `MCDM_RANKER__RANKING__SORT_BY=saw` -> `ranking.sort_by = saw`
    /// - `MCDM_RANKER__TABLE__DISPLAY_LIMIT=10` -> `table.display_limit = 10`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or values cannot be
    /// parsed into expected types.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        if let Some(path) = config_file {
            builder = builder.add_source(config::File::from(path).format(config::FileFormat::Yaml));
        }

        let config = builder
            .add_source(
                config::Environment::default()
                    .prefix("MCDM_RANKER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load configuration from YAML text, without consulting the environment
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(yaml, config::FileFormat::Yaml))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.ranking.validate()?;
        self.table.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Render the effective configuration as YAML
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{ConsistencyPolicy, ScoringMethod};
    use std::env;
    use std::io::Write;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("MCDM_RANKER__RANKING__SORT_BY");
        env::remove_var("MCDM_RANKER__RANKING__CONSISTENCY_POLICY");
        env::remove_var("MCDM_RANKER__TABLE__DISPLAY_LIMIT");
        env::remove_var("MCDM_RANKER__LOGGING__LEVEL");
    }

    #[test]
    fn test_load_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load(None);

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("MCDM_RANKER__RANKING__SORT_BY", "wp");
        env::set_var("MCDM_RANKER__RANKING__CONSISTENCY_POLICY", "abort");
        env::set_var("MCDM_RANKER__TABLE__DISPLAY_LIMIT", "7");
        let result = AppConfig::load(None);
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.ranking.sort_by, ScoringMethod::Wp);
        assert_eq!(config.ranking.consistency_policy, ConsistencyPolicy::Abort);
        assert_eq!(config.table.display_limit, 7);
    }

    #[test]
    fn test_environment_overrides_file() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "ranking:\n  sort_by: saw\nlogging:\n  level: warn").unwrap();

        env::set_var("MCDM_RANKER__LOGGING__LEVEL", "debug");
        let result = AppConfig::load(Some(file.path()));
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.ranking.sort_by, ScoringMethod::Saw);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_missing_file_is_error() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let result = AppConfig::load(Some(Path::new("/nonexistent/mcdm-ranker.yaml")));
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_from_yaml_str() {
        let yaml = r#"
ranking:
  criteria:
    - name: Cost
      type: cost
    - name: Reach
      type: benefit
  comparison_matrix:
    - [1, 2]
    - [0.5, 1]
table:
  id_column: Site
  output_format: json
"#;
        let config = AppConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.ranking.criteria.len(), 2);
        assert_eq!(config.table.id_column, "Site");
        assert_eq!(config.table.output_format, OutputFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_mismatched_matrix() {
        let yaml = r#"
ranking:
  comparison_matrix:
    - [1, 2]
    - [0.5, 1]
"#;
        let config = AppConfig::from_yaml_str(yaml).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MatrixSizeMismatch { .. })
        ));
    }

    #[test]
    fn test_to_yaml_round_trips_defaults() {
        let rendered = AppConfig::default().to_yaml().unwrap();
        assert!(rendered.contains("sort_by: topsis"));
        let reparsed: AppConfig = serde_yaml::from_str(&rendered).unwrap();
        assert_eq!(reparsed, AppConfig::default());
    }
}

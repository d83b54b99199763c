//! Runtime configuration
//!
//! Environment-only configuration: an optional catalog file and an optional
//! log filter directive.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

use crate::models::{FoodCatalog, ModelError};

/// Env var naming a JSON catalog file
pub const CATALOG_PATH_VAR: &str = "MACRO_TRACKER_CATALOG";
/// Env var with an extra tracing filter directive layered over the default
/// (e.g. "macro_tracker::session=debug")
pub const LOG_FILTER_VAR: &str = "MACRO_TRACKER_LOG";
/// Directive applied when no override is given
pub const DEFAULT_LOG_DIRECTIVE: &str = "macro_tracker=info";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read catalog file {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog file {}: {}", .path.display(), .source)]
    Catalog {
        path: PathBuf,
        #[source]
        source: ModelError,
    },

    #[error("Invalid log directive '{directive}': {source}")]
    LogDirective {
        directive: String,
        #[source]
        source: ParseError,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Where the food catalog comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Builtin,
    File(PathBuf),
}

impl CatalogSource {
    pub fn describe(&self) -> String {
        match self {
            CatalogSource::Builtin => "builtin".to_string(),
            CatalogSource::File(path) => path.display().to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub catalog_source: CatalogSource,
    /// Extra directive added after the default one
    pub log_override: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_source: CatalogSource::Builtin,
            log_override: None,
        }
    }
}

impl Config {
    /// Read configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var(CATALOG_PATH_VAR).ok(),
            std::env::var(LOG_FILTER_VAR).ok(),
        )
    }

    /// Build configuration from raw variable values; blank values are ignored
    pub fn from_vars(catalog_path: Option<String>, log_override: Option<String>) -> Self {
        let catalog_source = catalog_path
            .filter(|p| !p.trim().is_empty())
            .map(|p| CatalogSource::File(PathBuf::from(p.trim())))
            .unwrap_or(CatalogSource::Builtin);

        let log_override = log_override
            .filter(|d| !d.trim().is_empty())
            .map(|d| d.trim().to_string());

        Self { catalog_source, log_override }
    }

    /// Tracing filter: `RUST_LOG`, then the default directive, then the override
    pub fn log_filter(&self) -> ConfigResult<EnvFilter> {
        let filter = default_log_filter()?;
        match &self.log_override {
            Some(directive) => Ok(filter.add_directive(parse_directive(directive)?)),
            None => Ok(filter),
        }
    }

    /// Load the configured catalog
    pub fn load_catalog(&self) -> ConfigResult<FoodCatalog> {
        match &self.catalog_source {
            CatalogSource::Builtin => Ok(FoodCatalog::builtin()),
            CatalogSource::File(path) => load_catalog_file(path),
        }
    }
}

/// Tracing filter without any override
pub fn default_log_filter() -> ConfigResult<EnvFilter> {
    Ok(EnvFilter::from_default_env().add_directive(parse_directive(DEFAULT_LOG_DIRECTIVE)?))
}

fn parse_directive(directive: &str) -> ConfigResult<tracing_subscriber::filter::Directive> {
    directive.parse().map_err(|source| ConfigError::LogDirective {
        directive: directive.to_string(),
        source,
    })
}

/// Read and validate a JSON catalog file
pub fn load_catalog_file(path: &Path) -> ConfigResult<FoodCatalog> {
    let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = FoodCatalog::from_json(&json).map_err(|source| ConfigError::Catalog {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!("Loaded {} foods from {}", catalog.len(), path.display());
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::from_vars(None, None);
        assert_eq!(config.catalog_source, CatalogSource::Builtin);
        assert_eq!(config.log_override, None);
        assert_eq!(config.load_catalog().unwrap().len(), 5);
    }

    #[test]
    fn test_blank_values_ignored() {
        let config = Config::from_vars(Some("  ".to_string()), Some(String::new()));
        assert_eq!(config.catalog_source, CatalogSource::Builtin);
        assert_eq!(config.log_override, None);
    }

    #[test]
    fn test_catalog_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "Tofu (100g)": {{ "protein": 8, "carbs": 1.9, "fat": 4.8, "calories": 76 }} }}"#).unwrap();

        let config = Config::from_vars(Some(file.path().display().to_string()), None);

        let catalog = config.load_catalog().unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("Tofu (100g)").unwrap().calories, 76.0);
    }

    #[test]
    fn test_log_override_keeps_default_directive() {
        let config = Config::from_vars(None, Some(" macro_tracker::session=debug ".to_string()));
        assert_eq!(config.log_override.as_deref(), Some("macro_tracker::session=debug"));

        let filter = config.log_filter().unwrap().to_string().to_lowercase();
        assert!(filter.contains("macro_tracker=info"), "{}", filter);
        assert!(filter.contains("macro_tracker::session=debug"), "{}", filter);
    }

    #[test]
    fn test_default_log_filter() {
        let filter = Config::from_vars(None, None).log_filter().unwrap().to_string().to_lowercase();
        assert!(filter.contains("macro_tracker=info"), "{}", filter);
    }

    #[test]
    fn test_invalid_log_override_rejected() {
        let config = Config::from_vars(None, Some("macro_tracker=loud".to_string()));
        match config.log_filter() {
            Err(ConfigError::LogDirective { directive, .. }) => assert_eq!(directive, "macro_tracker=loud"),
            other => panic!("unexpected result: {:?}", other.map(|f| f.to_string())),
        }

        // The fallback used at startup still builds
        assert!(default_log_filter().is_ok());
    }

    #[test]
    fn test_missing_catalog_file() {
        let config = Config::from_vars(Some("/nonexistent/catalog.json".to_string()), None);
        assert!(matches!(config.load_catalog(), Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_invalid_catalog_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[1, 2, 3]").unwrap();

        let err = load_catalog_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Catalog { .. }));
    }
}

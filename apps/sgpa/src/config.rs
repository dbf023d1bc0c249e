//! # Configuration
//!
//! Layered configuration, later layers win:
//! 1. built-in defaults
//! 2. `sgpa.toml` in the working directory, or the file given by `--config`
//! 3. `SGPA_*` environment variables (`SGPA_LOG_LEVEL`, `SGPA_CATALOG`,
//!    `SGPA_ARREAR_POLICY`)
//!
//! Command-line flags are applied on top by the binary.

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use sgpa_core::{ArrearPolicy, CatalogSource, CurriculumCatalog};
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "sgpa.toml";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "SGPA_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default tracing level for the sgpa crates (`RUST_LOG` still wins).
    pub log_level: String,
    /// JSON catalog replacing the bundled curriculum.
    pub catalog: Option<PathBuf>,
    /// How repeated arrear codes are handled.
    pub arrear_policy: ArrearPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            catalog: None,
            arrear_policy: ArrearPolicy::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration.
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, figment::Error> {
        let file = match path {
            Some(path) if !path.exists() => {
                return Err(figment::Error::from(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            Some(path) => Toml::file(path),
            None => Toml::file(DEFAULT_CONFIG_FILE),
        };

        Figment::from(Serialized::defaults(Self::default()))
            .merge(file)
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
    }

    /// Build the catalog this configuration points at.
    pub fn load_catalog(&self) -> Result<CurriculumCatalog, Box<dyn std::error::Error>> {
        match &self.catalog {
            Some(path) => load_catalog_file(path),
            None => Ok(CurriculumCatalog::builtin()),
        }
    }
}

/// Read and validate a JSON catalog file.
pub fn load_catalog_file(path: &Path) -> Result<CurriculumCatalog, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read catalog {}: {e}", path.display()))?;
    let source: CatalogSource = serde_json::from_str(&content)
        .map_err(|e| format!("invalid catalog {}: {e}", path.display()))?;
    Ok(CurriculumCatalog::from_source(source)?)
}

// =============================================================================
// TESTS
// =============================================================================

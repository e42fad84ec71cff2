use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Result, ScoutError};
use crate::geo::DEFAULT_RADIUS_KM;
use crate::search::types::DEFAULT_MAX_PRICE;

/// Where listings come from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CatalogSource {
    #[default]
    Mock,
    File,
    Http,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CatalogConfig {
    pub source: CatalogSource,
    pub path: Option<PathBuf>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub default_max_price: f64,
    pub only_available: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_max_price: DEFAULT_MAX_PRICE,
            only_available: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoConfig {
    pub radius_km: f64,
    pub fallback_regions: Vec<String>,
}

impl Default for GeoConfig {
    fn default() -> Self {
        Self {
            radius_km: DEFAULT_RADIUS_KM,
            fallback_regions: vec!["Tunis".to_string(), "Ariana".to_string()],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub favorites_path: PathBuf,
    pub contracts_path: PathBuf,
    pub notifications_path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            favorites_path: PathBuf::from("favorites.json"),
            contracts_path: PathBuf::from("contracts.json"),
            notifications_path: PathBuf::from("notifications.json"),
        }
    }
}

/// Settings for the rental-scout binary. Every field has a default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub search: SearchConfig,
    pub geo: GeoConfig,
    pub store: StoreConfig,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            search: SearchConfig::default(),
            geo: GeoConfig::default(),
            store: StoreConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Read a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ScoutError::config(path, format!("cannot read file: {}", e)))?;
        let config = Self::from_toml(&content).map_err(|reason| ScoutError::config(path, reason))?;
        debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// `load` when a path is given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn from_toml(content: &str) -> std::result::Result<Self, String> {
        let config: Self = toml::from_str(content).map_err(|e| e.to_string())?;
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> std::result::Result<(), String> {
        match self.catalog.source {
            CatalogSource::File if self.catalog.path.is_none() => {
                return Err("catalog.source = \"file\" needs catalog.path".to_string())
            }
            CatalogSource::Http if self.catalog.url.is_none() => {
                return Err("catalog.source = \"http\" needs catalog.url".to_string())
            }
            _ => {}
        }
        if !(self.geo.radius_km.is_finite() && self.geo.radius_km > 0.0) {
            return Err(format!("geo.radius_km must be positive, got {}", self.geo.radius_km));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.catalog.source, CatalogSource::Mock);
        assert_eq!(config.search.default_max_price, 2000.0);
        assert_eq!(config.geo.radius_km, 5.0);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_partial_sections() {
        let config = Config::from_toml(
            r#"
            log_level = "debug"

            [catalog]
            source = "file"
            path = "listings.json"

            [geo]
            radius_km = 2.5
            "#,
        )
        .unwrap();

        assert_eq!(config.catalog.source, CatalogSource::File);
        assert_eq!(config.catalog.path, Some(PathBuf::from("listings.json")));
        assert_eq!(config.geo.radius_km, 2.5);
        assert_eq!(config.geo.fallback_regions, vec!["Tunis", "Ariana"]);
        assert_eq!(config.store.favorites_path, PathBuf::from("favorites.json"));
        assert_eq!(config.store.contracts_path, PathBuf::from("contracts.json"));
    }

    #[test]
    fn test_store_paths_override() {
        let config = Config::from_toml(
            "[store]\ncontracts_path = \"data/leases.json\"\nnotifications_path = \"data/feed.json\"",
        )
        .unwrap();
        assert_eq!(config.store.contracts_path, PathBuf::from("data/leases.json"));
        assert_eq!(config.store.notifications_path, PathBuf::from("data/feed.json"));
        assert_eq!(config.store.favorites_path, PathBuf::from("favorites.json"));
    }

    #[test]
    fn test_http_source_needs_url() {
        let err = Config::from_toml("[catalog]\nsource = \"http\"").unwrap_err();
        assert!(err.contains("catalog.url"));
    }

    #[test]
    fn test_load_reports_path() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[geo]\nradius_km = -1.0").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ScoutError::Config { .. }));
        assert!(err.to_string().contains("radius_km"));
    }
}

//! Furniture configuration loader.

use std::path::Path;

use furniture_core::FurnitureConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for furniture configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys missing from the file keep their built-in defaults.
    pub fn load(path: &Path) -> LoadResult<FurnitureConfig> {
        let content = read_file(path)?;
        let config = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))?;

        tracing::info!("loaded furniture config from {}", path.display());
        Ok(config)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<FurnitureConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }

    /// The configuration shipped with this crate.
    pub fn embedded() -> LoadResult<FurnitureConfig> {
        Self::parse(crate::CONFIG_TOML)
    }
}

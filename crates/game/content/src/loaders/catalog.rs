//! Furniture catalog loader.

use std::path::Path;

use furniture_core::{Catalog, TypeTemplate};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};

/// Catalog structure for RON files.
///
/// Types are a list rather than a map so duplicate keys are reported instead
/// of silently overwritten.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogRon {
    pub types: Vec<(String, TypeTemplate)>,
}

/// Loader for furniture catalogs from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load and validate a catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Catalog> {
        let content = read_file(path)?;
        let catalog = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))?;

        tracing::info!(
            "loaded {} furniture types from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Parse and validate a catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<Catalog> {
        let data: CatalogRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse furniture catalog RON: {}", e))?;

        Catalog::from_entries(data.types)
            .map_err(|e| anyhow::anyhow!("Invalid furniture catalog: {}", e))
    }

    /// The catalog shipped with this crate.
    pub fn embedded() -> LoadResult<Catalog> {
        Self::parse(crate::FURNITURE_RON)
    }
}

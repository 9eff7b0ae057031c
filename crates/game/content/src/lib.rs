//! Data-driven furniture content and loaders.
//!
//! This crate ships the default furniture catalog and configuration as data
//! files and provides loaders for RON/TOML content:
//! - Furniture type catalogs (data-driven via RON)
//! - Furniture configuration (data-driven via TOML)
//!
//! All loaders use furniture-core types directly with serde for deserialization.

/// Default furniture catalog (RON).
pub const FURNITURE_RON: &str = include_str!("../data/furniture.ron");

/// Default furniture configuration (TOML).
pub const CONFIG_TOML: &str = include_str!("../data/config.toml");

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, ConfigLoader, ContentFactory, LoadResult};

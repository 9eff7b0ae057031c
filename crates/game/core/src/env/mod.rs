//! Read-only data the furniture core depends on.
//!
//! Oracles expose the furniture type catalog and the owning world's movement
//! rules. Both are shared, immutable views: nothing here is mutated once the
//! catalog has been built.
mod builtin;
mod catalog;
mod color;
mod error;
mod template;
mod world;

pub use catalog::{Catalog, CatalogBuilder, CatalogOracle};
pub use color::{Color, ColorParseError, palette};
pub use error::CatalogError;
pub use template::{TypeTemplate, TypeTemplateBuilder};
pub use world::WorldOracle;

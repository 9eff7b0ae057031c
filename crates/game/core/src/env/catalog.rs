//! Furniture type catalog and oracle interface.
//!
//! The [`CatalogOracle`] trait lets the factory look up templates by type key
//! without depending on where they came from. [`Catalog`] is the in-memory
//! implementation used by both the built-in data and the content loaders.

use std::collections::BTreeMap;

use crate::env::{CatalogError, TypeTemplate, builtin};

/// Oracle providing furniture templates by type key.
pub trait CatalogOracle: Send + Sync {
    /// Returns the template for a type key (e.g. "door", "work_bench").
    fn template(&self, type_key: &str) -> Option<&TypeTemplate>;

    /// Returns every type key known to this oracle, in sorted order.
    fn type_keys(&self) -> Vec<&str>;

    fn contains(&self, type_key: &str) -> bool {
        self.template(type_key).is_some()
    }
}

/// Validated, read-only mapping from type key to template.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    templates: BTreeMap<String, TypeTemplate>,
}

impl Catalog {
    /// The catalog of furniture shipped with the game.
    pub fn builtin() -> Self {
        Self {
            templates: builtin::templates()
                .into_iter()
                .map(|(key, template)| (key.to_owned(), template))
                .collect(),
        }
    }

    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Builds a catalog from `(type_key, template)` pairs.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] for duplicate or empty keys and empty names.
    pub fn from_entries<K>(
        entries: impl IntoIterator<Item = (K, TypeTemplate)>,
    ) -> Result<Self, CatalogError>
    where
        K: Into<String>,
    {
        entries
            .into_iter()
            .fold(Self::builder(), |builder, (key, template)| {
                builder.with(key, template)
            })
            .build()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypeTemplate)> {
        self.templates
            .iter()
            .map(|(key, template)| (key.as_str(), template))
    }
}

impl CatalogOracle for Catalog {
    fn template(&self, type_key: &str) -> Option<&TypeTemplate> {
        self.templates.get(type_key)
    }

    fn type_keys(&self) -> Vec<&str> {
        self.templates.keys().map(String::as_str).collect()
    }
}

/// Accumulates templates and validates them once in [`CatalogBuilder::build`].
#[derive(Default)]
pub struct CatalogBuilder {
    entries: Vec<(String, TypeTemplate)>,
}

impl CatalogBuilder {
    pub fn with(mut self, type_key: impl Into<String>, template: TypeTemplate) -> Self {
        self.entries.push((type_key.into(), template));
        self
    }

    pub fn build(self) -> Result<Catalog, CatalogError> {
        let mut templates = BTreeMap::new();
        for (key, template) in self.entries {
            if key.trim().is_empty() {
                return Err(CatalogError::EmptyTypeKey);
            }
            if template.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(key));
            }
            if templates.contains_key(&key) {
                return Err(CatalogError::DuplicateType(key));
            }
            templates.insert(key, template);
        }
        Ok(Catalog { templates })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> TypeTemplate {
        TypeTemplate::builder(name).build()
    }

    #[test]
    fn builtin_passes_validation() {
        let builtin = Catalog::builtin();
        let rebuilt = Catalog::from_entries(
            builtin
                .iter()
                .map(|(key, template)| (key.to_owned(), template.clone())),
        );
        assert_eq!(rebuilt, Ok(builtin));
    }

    #[test]
    fn rejects_duplicate_keys() {
        let result = Catalog::builder()
            .with("desk", named("Desk"))
            .with("desk", named("Other Desk"))
            .build();
        assert_eq!(result, Err(CatalogError::DuplicateType("desk".into())));
    }

    #[test]
    fn rejects_empty_key_and_name() {
        assert_eq!(
            Catalog::builder().with("  ", named("Desk")).build(),
            Err(CatalogError::EmptyTypeKey)
        );
        assert_eq!(
            Catalog::builder().with("desk", named("")).build(),
            Err(CatalogError::EmptyName("desk".into()))
        );
    }

    #[test]
    fn type_keys_are_sorted() {
        let catalog = Catalog::builder()
            .with("table", named("Table"))
            .with("chair", named("Chair"))
            .build()
            .unwrap();

        assert_eq!(catalog.type_keys(), vec!["chair", "table"]);
        assert!(catalog.contains("chair"));
        assert!(!catalog.contains("sofa"));
        assert_eq!(catalog.len(), 2);
    }
}

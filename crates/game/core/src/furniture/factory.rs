use crate::capability::{Capability, CapabilitySet};
use crate::config::FurnitureConfig;
use crate::env::CatalogOracle;
use crate::error::{ErrorSeverity, GameError};
use crate::furniture::{Durability, Furniture};
use crate::state::{EntityId, Position};

/// Errors raised while building furniture.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FurnitureError {
    /// The type key is not in the catalog. No instance is produced.
    #[error("unknown furniture type '{0}'")]
    UnknownType(String),
}

impl GameError for FurnitureError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            FurnitureError::UnknownType(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            FurnitureError::UnknownType(_) => "FURNITURE_UNKNOWN_TYPE",
        }
    }
}

/// Builds furniture instances from catalog templates.
#[derive(Clone, Copy)]
pub struct FurnitureFactory<'a> {
    catalog: &'a dyn CatalogOracle,
    config: &'a FurnitureConfig,
}

impl<'a> FurnitureFactory<'a> {
    pub fn new(catalog: &'a dyn CatalogOracle, config: &'a FurnitureConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &'a dyn CatalogOracle {
        self.catalog
    }

    /// Creates a piece of furniture of type `type_key` at `position`.
    ///
    /// The template is overlaid on the built-in defaults, the baseline
    /// [`Capability::MeleeAttack`] is registered, and then the template's
    /// initializer (if any) runs once. The returned capability set is final.
    ///
    /// # Errors
    ///
    /// Returns [`FurnitureError::UnknownType`] if the catalog has no such type.
    pub fn create(
        &self,
        id: EntityId,
        type_key: &str,
        position: Position,
    ) -> Result<Furniture, FurnitureError> {
        let template = self
            .catalog
            .template(type_key)
            .ok_or_else(|| FurnitureError::UnknownType(type_key.to_owned()))?;

        let mut furniture = Furniture {
            id,
            type_key: type_key.to_owned(),
            position,
            name: template.name.clone(),
            glyph: template.glyph,
            color: template.color,
            bg_color: template.bg_color,
            console_color: template.console_color,
            passable: template.passable,
            blocks_los: template.blocks_los,
            is_wall: template.is_wall,
            durability: Durability::new(
                template
                    .hit_points
                    .unwrap_or(self.config.default_hit_points),
            ),
            capabilities: CapabilitySet::empty(),
        };

        // All furniture must be destroyable, whatever the template says.
        furniture.register_capability(Capability::BASELINE);

        if let Some(initializer) = &template.initializer {
            for rule in initializer.rules() {
                if let Some(capability) = rule.resolve(&furniture) {
                    furniture.register_capability(capability);
                }
            }
        }

        tracing::debug!(
            "created furniture {} ({}) at {} with {:?}",
            furniture.id,
            furniture.type_key,
            furniture.position,
            furniture.capabilities
        );

        Ok(furniture)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{CapabilityRule, Condition, ResolvableActions};
    use crate::env::{Catalog, TypeTemplate};
    use crate::furniture::Destructible;

    fn rule_catalog() -> Catalog {
        Catalog::builder()
            .with(
                "bench",
                TypeTemplate::builder("Bench")
                    .passable(true)
                    .rule(CapabilityRule::GrantIf {
                        capability: Capability::Push,
                        when: Condition::Impassable,
                    })
                    .rule(CapabilityRule::GrantIf {
                        capability: Capability::Grab,
                        when: Condition::Passable,
                    })
                    .build(),
            )
            .with(
                "pillar",
                TypeTemplate::builder("Pillar")
                    .wall()
                    .rule(CapabilityRule::GrantIf {
                        capability: Capability::RangedAttack,
                        when: Condition::Wall,
                    })
                    .rule(CapabilityRule::GrantIf {
                        capability: Capability::Open,
                        when: Condition::BlocksLos,
                    })
                    .build(),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn conditional_rules_see_overlaid_attributes() {
        let catalog = rule_catalog();
        let config = FurnitureConfig::default();
        let factory = FurnitureFactory::new(&catalog, &config);

        let bench = factory
            .create(EntityId(1), "bench", Position::ORIGIN)
            .unwrap();
        assert!(bench.supports_capability(Capability::Grab));
        assert!(!bench.supports_capability(Capability::Push));

        let pillar = factory
            .create(EntityId(2), "pillar", Position::ORIGIN)
            .unwrap();
        assert!(pillar.supports_capability(Capability::RangedAttack));
        assert!(!pillar.supports_capability(Capability::Open));
    }

    #[test]
    fn missing_hit_points_use_configured_default() {
        let catalog = Catalog::builtin();
        let config = FurnitureConfig::with_default_hit_points(3);
        let factory = FurnitureFactory::new(&catalog, &config);

        let microscope = factory
            .create(EntityId(1), "microscope", Position::ORIGIN)
            .unwrap();
        assert_eq!(microscope.hit_points(), 3);

        // Declared hit points win over the default.
        let door = factory
            .create(EntityId(2), "door", Position::ORIGIN)
            .unwrap();
        assert_eq!(door.hit_points(), 5);
    }

    #[test]
    fn unknown_type_is_a_validation_error() {
        let catalog = Catalog::builtin();
        let config = FurnitureConfig::default();
        let err = FurnitureFactory::new(&catalog, &config)
            .create(EntityId(1), "sofa", Position::ORIGIN)
            .unwrap_err();

        assert_eq!(err, FurnitureError::UnknownType("sofa".into()));
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(err.error_code(), "FURNITURE_UNKNOWN_TYPE");
        assert_eq!(err.to_string(), "unknown furniture type 'sofa'");
    }
}
